//! Per-job poll loop.
//!
//! One runner owns one job configuration for its entire lifetime and
//! drives the cycle: list local and remote, diff, plan retention,
//! transfer, evict, then sleep out the poll interval (or terminate for
//! a one-shot job).
//!
//! Steady-state errors are contained inside the cycle: a failed
//! listing degrades to an empty one, a failed download is logged and
//! skipped, and a cycle with any download failure keeps every existing
//! local file by suppressing eviction. The job itself never aborts;
//! the poll interval doubles as its retry backoff.

use backhaul_core::{diff, retention, JobConfig, Result};
use backhaul_transfer::{list_local, remove_file, RemoteSource};
use tracing::{debug, info, warn};

/// Drives one job's cycles until the job terminates (one-shot) or the
/// process is stopped.
pub struct JobRunner {
    config: JobConfig,
    source: RemoteSource,
}

impl JobRunner {
    /// Build a runner and its remote endpoint from a validated job.
    pub fn new(config: JobConfig) -> Result<Self> {
        let source = RemoteSource::new(
            &config.source_addr,
            &config.suffix,
            config.credentials(),
        )?;
        Ok(Self { config, source })
    }

    /// Run the poll loop. Returns only when the job is one-shot and
    /// its single cycle has completed.
    pub async fn run(self) {
        let label = self.config.label();
        info!("job started: {label}");

        loop {
            self.cycle().await;

            match self.config.interval() {
                None => {
                    info!("one-shot job finished: {label}");
                    return;
                }
                Some(interval) => {
                    debug!("job sleeping {}s: {label}", interval.as_secs());
                    tokio::time::sleep(interval).await;
                }
            }
        }
    }

    /// One full list -> diff -> plan -> transfer -> evict pass.
    pub async fn cycle(&self) {
        let target = &self.config.target_path;

        let local_files = match list_local(target, &self.config.suffix) {
            Ok(names) => names,
            Err(e) => {
                warn!("local listing failed, treating as empty: {e}");
                Vec::new()
            }
        };

        let remote_files = match self.source.list().await {
            Ok(names) => names,
            Err(e) => {
                warn!("remote listing failed, treating as empty: {e}");
                Vec::new()
            }
        };

        let incoming = diff::incremental(&local_files, &remote_files);
        let plan = retention::plan(&local_files, &incoming, self.config.storage);

        if plan.is_empty() {
            debug!("nothing new ({} local, {} remote)", local_files.len(), remote_files.len());
            return;
        }

        info!(
            "cycle plan: fetch {} file(s), evict {} file(s)",
            plan.fetch.len(),
            plan.evict.len()
        );

        match self.source.download_all(&plan.fetch, target).await {
            Ok(()) => {
                for name in &plan.evict {
                    match remove_file(target, name) {
                        Ok(()) => info!("evicted {name}"),
                        Err(e) => warn!("eviction of {name} failed: {e}"),
                    }
                }
            }
            Err(e) => {
                // Keep existing files when replacement failed; the
                // next cycle re-plans from ground truth.
                if !plan.evict.is_empty() {
                    warn!("eviction skipped this cycle after download failure: {e}");
                }
            }
        }
    }
}
