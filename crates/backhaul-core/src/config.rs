//! Job configuration loading and validation.
//!
//! A configuration file is a JSON array of job objects:
//!
//! ```json
//! [
//!   {
//!     "source_addr": "https://mirror.example.com/backups",
//!     "target_path": "/var/backups/db",
//!     "suffix": "tgz",
//!     "internal": 24,
//!     "storage": 14,
//!     "username": "mirror",
//!     "password": "secret"
//!   }
//! ]
//! ```
//!
//! Every job is validated at load time; a malformed entry fails the
//! whole startup rather than running as a half-empty job.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One mirroring job. Immutable after loading; owned by exactly one
/// job runner for its entire lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Remote base URL serving an HTML directory index.
    pub source_addr: String,

    /// Local target directory; must exist and be writable.
    pub target_path: PathBuf,

    /// Filename suffix filter, without the leading dot ("tgz", not ".tgz").
    pub suffix: String,

    /// Hours between poll cycles; 0 runs the job exactly once.
    #[serde(default)]
    pub internal: u64,

    /// Cap on retained files; zero or negative means unlimited.
    #[serde(default)]
    pub storage: i64,

    /// Basic-auth username; only honored together with `password`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Basic-auth password; only honored together with `username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl JobConfig {
    /// Poll interval, or None for a one-shot job.
    pub fn interval(&self) -> Option<Duration> {
        if self.internal == 0 {
            None
        } else {
            Some(Duration::from_secs(self.internal * 3600))
        }
    }

    /// Basic-auth credentials when both halves are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }

    /// Short label for log lines.
    pub fn label(&self) -> String {
        format!("{} -> {}", self.source_addr, self.target_path.display())
    }

    /// Reject entries that would misbehave as zero-value jobs.
    pub fn validate(&self) -> Result<()> {
        if self.source_addr.trim().is_empty() {
            return Err(Error::invalid_config("source_addr must not be empty"));
        }
        if self.target_path.as_os_str().is_empty() {
            return Err(Error::invalid_config("target_path must not be empty"));
        }
        if self.suffix.trim().is_empty() {
            return Err(Error::invalid_config("suffix must not be empty"));
        }
        if self.suffix.starts_with('.') {
            return Err(Error::invalid_config(format!(
                "suffix must not start with a dot: {:?}",
                self.suffix
            )));
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(Error::invalid_config(
                "username and password must be provided together",
            ));
        }
        Ok(())
    }
}

/// Load and validate the job list from a JSON configuration file.
pub fn load_jobs(path: &Path) -> Result<Vec<JobConfig>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let jobs: Vec<JobConfig> = serde_json::from_str(&content)?;

    for (index, job) in jobs.iter().enumerate() {
        job.validate().map_err(|e| {
            Error::invalid_config(format!("job #{index} ({}): {e}", job.source_addr))
        })?;
    }

    Ok(jobs)
}
