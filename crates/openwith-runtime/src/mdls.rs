//! `mdls`-backed metadata probe.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use regex::Regex;
use tokio::process::Command;
use tracing::trace;

use openwith_core::{MetadataProbe, ProbeError};

/// Queries Spotlight metadata through `mdls -name <attribute> <path>`.
pub struct MdlsProbe {
    tool: PathBuf,
}

impl MdlsProbe {
    /// Probe using `mdls` from the search path.
    pub fn new() -> Self {
        Self::with_tool("mdls")
    }

    /// Probe using an explicit tool path (used by tests).
    pub fn with_tool(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Default for MdlsProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataProbe for MdlsProbe {
    async fn probe(
        &self,
        target: &Path,
        attribute: &str,
    ) -> Result<Option<String>, ProbeError> {
        let output = Command::new(&self.tool)
            .arg("-name")
            .arg(attribute)
            .arg(target)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => ProbeError::ToolMissing {
                    tool: self.tool.display().to_string(),
                },
                _ => ProbeError::QueryFailed {
                    path: target.to_path_buf(),
                    detail: err.to_string(),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProbeError::QueryFailed {
                path: target.to_path_buf(),
                detail: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        trace!(path = %target.display(), attribute, "mdls replied");
        Ok(extract_attribute(&stdout, attribute))
    }
}

/// Extract `attribute = "value"` from tool output.
///
/// Whitespace around `=` is tolerated; unquoted replies such as
/// `attribute = (null)` yield `None`.
fn extract_attribute(output: &str, attribute: &str) -> Option<String> {
    let pattern = format!(r#"{}\s*=\s*"(.+)""#, regex::escape(attribute));
    let re = Regex::new(&pattern).ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_value() {
        let out = "kMDItemCFBundleIdentifier = \"com.apple.Safari\"\n";
        assert_eq!(
            extract_attribute(out, "kMDItemCFBundleIdentifier"),
            Some("com.apple.Safari".to_string())
        );
    }

    #[test]
    fn tolerates_whitespace_around_equals() {
        let out = "kMDItemContentType=\"public.plain-text\"";
        assert_eq!(
            extract_attribute(out, "kMDItemContentType"),
            Some("public.plain-text".to_string())
        );
        let out = "kMDItemContentType   =   \"public.plain-text\"";
        assert_eq!(
            extract_attribute(out, "kMDItemContentType"),
            Some("public.plain-text".to_string())
        );
    }

    #[test]
    fn captures_values_containing_spaces() {
        let out = "kMDItemDisplayName = \"Visual Studio Code\"";
        assert_eq!(
            extract_attribute(out, "kMDItemDisplayName"),
            Some("Visual Studio Code".to_string())
        );
    }

    #[test]
    fn null_reply_yields_none() {
        let out = "kMDItemCFBundleIdentifier = (null)\n";
        assert_eq!(extract_attribute(out, "kMDItemCFBundleIdentifier"), None);
    }

    #[test]
    fn other_attributes_do_not_match() {
        let out = "kMDItemContentType = \"public.data\"\n";
        assert_eq!(extract_attribute(out, "kMDItemCFBundleIdentifier"), None);
    }

    #[tokio::test]
    async fn missing_tool_maps_to_tool_missing() {
        let probe = MdlsProbe::with_tool("/nonexistent/openwith-mdls");
        let err = probe
            .probe(Path::new("/tmp/whatever.txt"), "kMDItemContentType")
            .await
            .expect_err("must fail");
        assert!(matches!(err, ProbeError::ToolMissing { .. }));
    }
}
