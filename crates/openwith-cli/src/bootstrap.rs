//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where adapters are wired into the core
//! services. Command handlers receive the composed `CliContext` and
//! never touch `openwith-runtime` directly.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use openwith_core::{
    BundleScanner, ContentTypeResolver, DefaultHandlerService, MetadataProbe, ScanOptions,
};
use openwith_runtime::{DutiAssigner, MdlsProbe, SwiftRoleHandlerQuery};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directories scanned for application bundles, in precedence order
    /// (later directories win display-name collisions).
    pub apps_dirs: Vec<PathBuf>,
    /// Upper bound on concurrently running metadata probes.
    pub max_concurrent_probes: usize,
    /// Per-probe timeout during the scan.
    pub probe_timeout: Duration,
}

impl CliConfig {
    /// Config with the platform's standard application directories.
    pub fn with_defaults() -> Self {
        let mut apps_dirs = vec![
            PathBuf::from("/Applications"),
            PathBuf::from("/System/Applications"),
        ];
        if let Some(home) = dirs::home_dir() {
            apps_dirs.push(home.join("Applications"));
        }
        Self {
            apps_dirs,
            max_concurrent_probes: 16,
            probe_timeout: Duration::from_secs(10),
        }
    }

    /// Replace the scan directories when the user passed any.
    #[must_use]
    pub fn with_apps_dirs(mut self, apps_dirs: Vec<PathBuf>) -> Self {
        if !apps_dirs.is_empty() {
            self.apps_dirs = apps_dirs;
        }
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Builds the application index.
    pub scanner: BundleScanner,
    /// Recommends handlers for a suffix.
    pub resolver: ContentTypeResolver,
    /// Writes default-handler assignments.
    pub assigner: DefaultHandlerService,
    /// The resolved configuration.
    pub config: CliConfig,
}

/// Wire the production adapters into the core services.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(dirs = ?config.apps_dirs, "bootstrapping CLI context");
    let probe: Arc<dyn MetadataProbe> = Arc::new(MdlsProbe::new());
    let scanner = BundleScanner::with_options(
        Arc::clone(&probe),
        ScanOptions {
            max_concurrent: config.max_concurrent_probes,
            probe_timeout: config.probe_timeout,
        },
    );
    let resolver = ContentTypeResolver::new(Arc::clone(&probe), Arc::new(SwiftRoleHandlerQuery::new()));
    let assigner = DefaultHandlerService::new(Arc::new(DutiAssigner::new()));
    CliContext {
        scanner,
        resolver,
        assigner,
        config,
    }
}
