//! Content-type resolution and handler recommendation.
//!
//! Resolving a suffix works by materializing an empty temp file whose
//! name carries the suffix and asking the metadata probe what content
//! type the OS infers for it. The role-handler registry is then queried
//! for that content type. The whole pipeline is best-effort: any failure
//! along the way yields an empty recommendation, never an error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::{MetadataProbe, RoleHandlerQuery};

/// Metadata attribute holding a file's platform content type.
pub const CONTENT_TYPE_ATTRIBUTE: &str = "kMDItemContentType";

/// URL prefix of the local applications directory, stripped for display.
const APPLICATIONS_URL_PREFIX: &str = "file:///Applications/";

/// Normalize a user-supplied suffix to its dotted form.
///
/// Returns `None` for empty or whitespace-bearing input. The result is
/// lowercased, matching how the platform treats extension tags.
pub fn normalize_suffix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Some(format!(".{}", trimmed.to_ascii_lowercase()))
}

/// Recommends candidate applications for a file suffix.
pub struct ContentTypeResolver {
    probe: Arc<dyn MetadataProbe>,
    role_handlers: Arc<dyn RoleHandlerQuery>,
}

impl ContentTypeResolver {
    /// Create a resolver over the given ports.
    pub fn new(probe: Arc<dyn MetadataProbe>, role_handlers: Arc<dyn RoleHandlerQuery>) -> Self {
        Self {
            probe,
            role_handlers,
        }
    }

    /// Resolve the platform content type for a suffix.
    ///
    /// The temp file exists only so the OS can infer a type from the
    /// suffix alone; it is deleted before this method returns, on every
    /// path.
    pub async fn resolve_content_type(&self, suffix: &str) -> Option<String> {
        let suffix = normalize_suffix(suffix)?;
        let file = match tempfile::Builder::new()
            .prefix("openwith-content.")
            .suffix(&suffix)
            .tempfile()
        {
            Ok(file) => file,
            Err(err) => {
                warn!("could not create content-type probe file: {err}");
                return None;
            }
        };
        match self.probe.probe(file.path(), CONTENT_TYPE_ATTRIBUTE).await {
            Ok(content_type) => content_type,
            Err(err) => {
                warn!("content-type probe for `{suffix}` failed: {err}");
                None
            }
        }
    }

    /// Candidate applications for an already-resolved content type,
    /// post-processed into short display paths, registry order, deduped.
    pub async fn handlers_for_content_type(&self, content_type: &str) -> Vec<String> {
        let lines = self.role_handlers.handlers_for(content_type).await;
        let mut seen = std::collections::HashSet::new();
        lines
            .iter()
            .filter_map(|line| clean_handler_line(line))
            .filter(|entry| seen.insert(entry.clone()))
            .collect()
    }

    /// Candidate applications for a suffix. Always succeeds; an
    /// unresolvable content type or an empty registry yields an empty
    /// list.
    pub async fn recommend(&self, suffix: &str) -> Vec<String> {
        let Some(content_type) = self.resolve_content_type(suffix).await else {
            debug!("no content type resolved for `{suffix}`");
            return Vec::new();
        };
        self.handlers_for_content_type(&content_type).await
    }
}

/// Turn one raw registry line into a short display path.
///
/// Strips the local applications URL prefix, trims the trailing slash,
/// and decodes the space escape; blank lines yield `None`.
fn clean_handler_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let stripped = line
        .strip_prefix(APPLICATIONS_URL_PREFIX)
        .or_else(|| line.strip_prefix("file://"))
        .unwrap_or(line);
    let cleaned = stripped.trim_end_matches('/').replace("%20", " ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
