//! Retention planning.
//!
//! Given the current local listing, the incremental candidates, and
//! the configured storage cap, decide which candidates to actually
//! fetch and which oldest local files to evict so that the target
//! directory never exceeds the cap while always preferring the newest
//! files.
//!
//! The plan is derived fresh every cycle and never persisted. The job
//! runner applies the eviction half only after a fetch phase that
//! reported no error, so a failed replacement never costs existing
//! data.

/// What one cycle should fetch and evict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPlan {
    /// Incremental filenames to download, ascending. Always a suffix
    /// (the newest names) of the incremental candidates.
    pub fetch: Vec<String>,

    /// Existing local filenames to delete after a clean fetch phase,
    /// ascending (oldest first).
    pub evict: Vec<String>,
}

impl RetentionPlan {
    /// A plan that fetches and evicts nothing.
    pub fn empty() -> Self {
        Self {
            fetch: Vec::new(),
            evict: Vec::new(),
        }
    }

    /// True when the cycle has nothing to do.
    pub fn is_empty(&self) -> bool {
        self.fetch.is_empty() && self.evict.is_empty()
    }
}

/// Compute the retention plan for one cycle.
///
/// `cap <= 0` means unlimited: fetch every candidate, evict nothing.
///
/// With a positive cap, `cutoff = local + incremental - cap` is the
/// number of files that must disappear from the combined set:
///
/// - `cutoff <= local`: everything incoming fits once the `cutoff`
///   oldest local files go; fetch all candidates, evict that prefix.
/// - `cutoff > local`: even an empty directory cannot hold every
///   candidate; evict all local files and fetch only the newest
///   `cap` candidates. The skipped oldest candidates are dropped for
///   good — the next cycle's boundary already sorts above them.
pub fn plan(local: &[String], incremental: &[String], cap: i64) -> RetentionPlan {
    if cap <= 0 {
        return RetentionPlan {
            fetch: incremental.to_vec(),
            evict: Vec::new(),
        };
    }

    let cutoff = local.len() as i64 + incremental.len() as i64 - cap;

    if cutoff <= local.len() as i64 {
        let evicted = cutoff.max(0) as usize;
        RetentionPlan {
            fetch: incremental.to_vec(),
            evict: local[..evicted].to_vec(),
        }
    } else {
        let skipped = (cutoff - local.len() as i64) as usize;
        RetentionPlan {
            fetch: incremental[skipped..].to_vec(),
            evict: local.to_vec(),
        }
    }
}
