//! Per-file download execution.
//!
//! Downloads are streamed straight into the target directory. A
//! failure at any stage removes the partial artifact and is reported,
//! but never stops the rest of the batch: every requested file is
//! attempted exactly once per cycle. The batch returns only the first
//! error, which the job runner uses to suppress eviction for the
//! cycle.

use crate::index::RemoteSource;
use crate::local;
use backhaul_core::{Error, Result};
use futures_util::StreamExt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Byte interval between streamed progress events.
const PROGRESS_INTERVAL_BYTES: u64 = 8 * 1024 * 1024;

impl RemoteSource {
    /// Download one remote file into `target_dir`, streaming the body.
    ///
    /// On failure the partially written file is removed (best effort)
    /// before the error is returned.
    pub async fn download(&self, name: &str, target_dir: &Path) -> Result<()> {
        match self.fetch_to_file(name, target_dir).await {
            Ok(bytes) => {
                info!("fetched {name} ({bytes} bytes)");
                Ok(())
            }
            Err(e) => {
                local::remove_partial(target_dir, name);
                Err(e)
            }
        }
    }

    async fn fetch_to_file(&self, name: &str, target_dir: &Path) -> Result<u64> {
        let url = self.file_url(name);
        let response = self
            .authorize(self.client().get(&url))
            .send()
            .await
            .map_err(|e| Error::download(name, format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::download(name, format!("GET {url} returned {status}")));
        }

        let dest = target_dir.join(name);
        let mut file = fs::File::create(&dest)
            .map_err(|e| Error::download(name, format!("cannot create {}: {e}", dest.display())))?;

        let mut written: u64 = 0;
        let mut next_report = PROGRESS_INTERVAL_BYTES;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes = chunk
                .map_err(|e| Error::download(name, format!("stream interrupted: {e}")))?;
            file.write_all(&chunk)
                .map_err(|e| Error::download(name, format!("write failed: {e}")))?;

            written += chunk.len() as u64;
            if written >= next_report {
                debug!("transferring {name}: {written} bytes");
                next_report += PROGRESS_INTERVAL_BYTES;
            }
        }

        file.flush()
            .map_err(|e| Error::download(name, format!("flush failed: {e}")))?;
        Ok(written)
    }

    /// Download a batch of files in order, tolerating per-file
    /// failure. Returns `Ok(())` only when every file succeeded,
    /// otherwise the first error encountered; later files are still
    /// attempted either way.
    pub async fn download_all(&self, names: &[String], target_dir: &Path) -> Result<()> {
        let mut first_error = None;

        for name in names {
            info!("start fetching {name}");
            if let Err(e) = self.download(name, target_dir).await {
                warn!("failed to fetch {name}: {e}");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}
