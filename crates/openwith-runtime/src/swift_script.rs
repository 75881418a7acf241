//! Role-handler registry adapter backed by an embedded Swift script.
//!
//! LaunchServices has no command-line front end for enumerating role
//! handlers, so the query runs as a short Swift program materialized
//! into a temp file and executed by the `swift` runtime. All failure
//! modes degrade to an empty result per the port contract.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use openwith_core::RoleHandlerQuery;

const ROLE_HANDLER_SCRIPT: &str = r#"
import CoreServices
import Foundation

let args = CommandLine.arguments
guard args.count > 1 else {
    print("missing content type argument")
    exit(1)
}

let contentType = args[1]

guard let handlers = LSCopyAllRoleHandlersForContentType(contentType as CFString, LSRolesMask.all) else {
    exit(1)
}

(handlers.takeRetainedValue() as NSArray)
    .compactMap { bundleId -> NSArray? in
        guard let urls = LSCopyApplicationURLsForBundleIdentifier(bundleId as! CFString, nil) else { return nil }
        return urls.takeRetainedValue() as NSArray
    }
    .flatMap { $0 }
    .forEach { print($0) }
"#;

/// Runs the registry query script through the `swift` runtime.
pub struct SwiftRoleHandlerQuery {
    runtime: PathBuf,
}

impl SwiftRoleHandlerQuery {
    /// Query using `swift` from the search path.
    pub fn new() -> Self {
        Self::with_runtime("swift")
    }

    /// Query using an explicit runtime path (used by tests).
    pub fn with_runtime(runtime: impl Into<PathBuf>) -> Self {
        Self {
            runtime: runtime.into(),
        }
    }
}

impl Default for SwiftRoleHandlerQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleHandlerQuery for SwiftRoleHandlerQuery {
    async fn handlers_for(&self, content_type: &str) -> Vec<String> {
        // The script file is dropped (and deleted) on every return path.
        let script = match materialize_script() {
            Ok(script) => script,
            Err(err) => {
                debug!("could not materialize registry script: {err}");
                return Vec::new();
            }
        };

        let output = Command::new(&self.runtime)
            .arg(script.path())
            .arg(content_type)
            .kill_on_drop(true)
            .output()
            .await;

        match output {
            Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
                .lines()
                .map(str::to_string)
                .collect(),
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                debug!(
                    content_type,
                    "registry script exited with {}: {}",
                    out.status,
                    stderr.trim()
                );
                Vec::new()
            }
            Err(err) => {
                debug!("scripting runtime unavailable: {err}");
                Vec::new()
            }
        }
    }
}

fn materialize_script() -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("openwith-roles.")
        .suffix(".swift")
        .tempfile()?;
    file.write_all(ROLE_HANDLER_SCRIPT.as_bytes())?;
    file.flush()?;
    Ok(file)
}
