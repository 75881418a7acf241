//! Concurrent application bundle scanner.
//!
//! Enumerates an applications directory and queries the bundle identifier
//! of every entry in parallel through the [`MetadataProbe`] port, then
//! aggregates the successful probes into an [`AppIndex`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::{AppIndex, AppRecord};
use crate::ports::{MetadataProbe, ProbeError};

/// Metadata attribute holding a bundle's stable identifier.
pub const BUNDLE_ID_ATTRIBUTE: &str = "kMDItemCFBundleIdentifier";

/// Errors that abort an entire scan.
///
/// A single bundle whose query fails does *not* abort the scan; the
/// entry is skipped. Only an unreadable directory or a missing metadata
/// tool (which would fail every remaining probe identically) is fatal.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The applications directory itself could not be listed.
    #[error("failed to read applications directory {}: {source}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata tool is missing from the search path.
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Tuning knobs for the scan fan-out.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Upper bound on concurrently running probes.
    pub max_concurrent: usize,
    /// Per-probe timeout; a probe that exceeds it is skipped so one hung
    /// external process cannot wedge the whole index build.
    pub probe_timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_concurrent: 16,
            probe_timeout: Duration::from_secs(10),
        }
    }
}

/// Result of one probe task, reported to the fan-in aggregator.
enum ProbeOutcome {
    Found(AppRecord),
    Absent,
    Skipped { name: String, detail: String },
    ToolMissing(ProbeError),
}

/// Scans application directories into an [`AppIndex`].
pub struct BundleScanner {
    probe: Arc<dyn MetadataProbe>,
    options: ScanOptions,
}

impl BundleScanner {
    /// Create a scanner with default options.
    pub fn new(probe: Arc<dyn MetadataProbe>) -> Self {
        Self::with_options(probe, ScanOptions::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(probe: Arc<dyn MetadataProbe>, options: ScanOptions) -> Self {
        Self { probe, options }
    }

    /// Scan one directory, non-recursively.
    ///
    /// Every visible entry is assumed to be an application bundle and gets
    /// exactly one concurrent probe for [`BUNDLE_ID_ATTRIBUTE`]. Entries
    /// whose probe yields no value are dropped silently; entries whose
    /// query fails are skipped with a warning. The aggregation waits for
    /// every dispatched probe to settle before returning.
    pub async fn scan(&self, dir: &Path) -> Result<AppIndex, ScanError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
            dir: dir.to_path_buf(),
            source,
        })?;

        let limit = self.options.max_concurrent.max(1);
        let semaphore = Arc::new(Semaphore::new(limit));
        let mut tasks: JoinSet<ProbeOutcome> = JoinSet::new();

        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            let probe = Arc::clone(&self.probe);
            let semaphore = Arc::clone(&semaphore);
            let probe_timeout = self.options.probe_timeout;

            tasks.spawn(async move {
                // The semaphore is never closed while probe tasks are alive.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return ProbeOutcome::Skipped {
                        name,
                        detail: "scan was torn down".to_string(),
                    };
                };
                match timeout(probe_timeout, probe.probe(&path, BUNDLE_ID_ATTRIBUTE)).await {
                    Ok(Ok(Some(bundle_id))) if !bundle_id.is_empty() => {
                        ProbeOutcome::Found(AppRecord::new(name, path, bundle_id))
                    }
                    Ok(Ok(_)) => ProbeOutcome::Absent,
                    Ok(Err(err @ ProbeError::ToolMissing { .. })) => ProbeOutcome::ToolMissing(err),
                    Ok(Err(ProbeError::QueryFailed { detail, .. })) => {
                        ProbeOutcome::Skipped { name, detail }
                    }
                    Err(_) => ProbeOutcome::Skipped {
                        name,
                        detail: format!("metadata query timed out after {probe_timeout:?}"),
                    },
                }
            });
        }

        // Fan-in: the index is mutated only here, and only after every
        // dispatched probe has settled does the scan return.
        let mut index = AppIndex::default();
        let mut tool_missing: Option<ProbeError> = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(ProbeOutcome::Found(record)) => {
                    index.insert(record);
                }
                Ok(ProbeOutcome::Absent) => {}
                Ok(ProbeOutcome::Skipped { name, detail }) => {
                    warn!(entry = %name, "skipping bundle: {detail}");
                }
                Ok(ProbeOutcome::ToolMissing(err)) => {
                    tool_missing.get_or_insert(err);
                }
                Err(join_err) => warn!("probe task did not complete: {join_err}"),
            }
        }

        if let Some(err) = tool_missing {
            return Err(err.into());
        }
        debug!(dir = %dir.display(), indexed = index.len(), "scan finished");
        Ok(index)
    }

    /// Scan several directories and merge the results.
    ///
    /// Directories that do not exist are skipped; later directories win
    /// display-name collisions.
    pub async fn scan_all(&self, dirs: &[PathBuf]) -> Result<AppIndex, ScanError> {
        let mut merged = AppIndex::default();
        for dir in dirs {
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "skipping absent applications directory");
                continue;
            }
            merged.merge(self.scan(dir).await?);
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockMetadataProbe;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").expect("create test entry");
    }

    #[tokio::test]
    async fn collects_only_entries_with_an_identifier() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "Safari.app");
        touch(dir.path(), "Notes.app");
        touch(dir.path(), "README.txt");

        let mut probe = MockMetadataProbe::new();
        probe.expect_probe().times(3).returning(|path, attribute| {
            assert_eq!(attribute, BUNDLE_ID_ATTRIBUTE);
            match path.file_name().and_then(|n| n.to_str()) {
                Some("Safari.app") => Ok(Some("com.apple.Safari".to_string())),
                Some("Notes.app") => Ok(Some("com.apple.Notes".to_string())),
                _ => Ok(None),
            }
        });

        let scanner = BundleScanner::new(Arc::new(probe));
        let index = scanner.scan(dir.path()).await.expect("scan");
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("Safari.app").map(|r| r.bundle_id.as_str()),
            Some("com.apple.Safari")
        );
        assert!(index.get("README.txt").is_none());
    }

    #[tokio::test]
    async fn empty_directory_dispatches_no_probes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut probe = MockMetadataProbe::new();
        probe.expect_probe().times(0);

        let scanner = BundleScanner::new(Arc::new(probe));
        let index = scanner.scan(dir.path()).await.expect("scan");
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn hidden_entries_are_not_probed() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), ".DS_Store");
        touch(dir.path(), "Mail.app");

        let mut probe = MockMetadataProbe::new();
        probe
            .expect_probe()
            .times(1)
            .returning(|_, _| Ok(Some("com.apple.mail".to_string())));

        let scanner = BundleScanner::new(Arc::new(probe));
        let index = scanner.scan(dir.path()).await.expect("scan");
        assert_eq!(index.len(), 1);
    }

    #[tokio::test]
    async fn one_failing_query_does_not_abort_the_scan() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "Broken.app");
        touch(dir.path(), "Safari.app");

        let mut probe = MockMetadataProbe::new();
        probe.expect_probe().times(2).returning(|path, _| {
            if path.file_name().and_then(|n| n.to_str()) == Some("Broken.app") {
                Err(ProbeError::QueryFailed {
                    path: path.to_path_buf(),
                    detail: "corrupt bundle".to_string(),
                })
            } else {
                Ok(Some("com.apple.Safari".to_string()))
            }
        });

        let scanner = BundleScanner::new(Arc::new(probe));
        let index = scanner.scan(dir.path()).await.expect("scan");
        assert_eq!(index.len(), 1);
        assert!(index.get("Broken.app").is_none());
    }

    #[tokio::test]
    async fn missing_tool_fails_the_whole_scan() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "Safari.app");

        let mut probe = MockMetadataProbe::new();
        probe.expect_probe().returning(|_, _| {
            Err(ProbeError::ToolMissing {
                tool: "mdls".to_string(),
            })
        });

        let scanner = BundleScanner::new(Arc::new(probe));
        let err = scanner.scan(dir.path()).await.expect_err("must fail");
        assert!(matches!(
            err,
            ScanError::Probe(ProbeError::ToolMissing { .. })
        ));
    }

    #[tokio::test]
    async fn unreadable_directory_is_fatal() {
        let probe = MockMetadataProbe::new();
        let scanner = BundleScanner::new(Arc::new(probe));
        let err = scanner
            .scan(Path::new("/nonexistent/openwith-test"))
            .await
            .expect_err("must fail");
        assert!(matches!(err, ScanError::ReadDir { .. }));
    }
}
