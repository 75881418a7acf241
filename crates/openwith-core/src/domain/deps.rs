//! External tool dependency report types.

use std::path::PathBuf;

/// Represents the status of an external tool dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Tool is installed and on the search path.
    Present { path: PathBuf },
    /// Tool is missing.
    Missing,
}

/// Information about one external tool this system shells out to.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Name of the tool (e.g. "duti").
    pub name: String,
    /// Current status of the tool.
    pub status: DependencyStatus,
    /// Description of what this tool is used for.
    pub description: String,
    /// Whether the tool is required or only degrades functionality.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required dependency, initially missing.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional dependency, initially missing.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: false,
            install_hint: None,
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the tool was found.
    pub fn is_present(&self) -> bool {
        matches!(self.status, DependencyStatus::Present { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_expected_fields() {
        let dep = Dependency::required("duti", "assigns default handlers")
            .with_hint("brew install duti")
            .with_status(DependencyStatus::Present {
                path: "/opt/homebrew/bin/duti".into(),
            });
        assert!(dep.required);
        assert!(dep.is_present());
        assert_eq!(dep.install_hint.as_deref(), Some("brew install duti"));

        let dep = Dependency::optional("swift", "runs the registry query script");
        assert!(!dep.required);
        assert!(!dep.is_present());
    }
}
