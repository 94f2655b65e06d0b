//! Job supervision.
//!
//! Each job runs as its own tokio task with no shared mutable state;
//! jobs never observe each other's failures. The supervisor awaits
//! all tasks (one-shot job lists exit normally) or an external ctrl-c,
//! which stops outstanding jobs at their next await point.

use crate::runner::JobRunner;
use anyhow::{Context, Result};
use backhaul_core::JobConfig;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Spawn one task per job and wait for completion or shutdown.
pub async fn run_jobs(jobs: Vec<JobConfig>) -> Result<()> {
    let mut tasks = JoinSet::new();

    for job in jobs {
        let label = job.label();
        let runner = JobRunner::new(job)
            .with_context(|| format!("Failed to initialize job {label}"))?;
        tasks.spawn(runner.run());
    }

    tokio::select! {
        _ = join_all(&mut tasks) => {
            info!("all jobs finished");
        }
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!("cannot listen for shutdown signal: {e}");
            }
            info!("shutdown requested, stopping jobs");
            tasks.shutdown().await;
        }
    }

    Ok(())
}

async fn join_all(tasks: &mut JoinSet<()>) {
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            // A panicking job must not take down its siblings.
            warn!("job task ended abnormally: {e}");
        }
    }
}
