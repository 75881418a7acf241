//! External tool detection.
//!
//! These checks only report; installation stays with the user.

use openwith_core::{Dependency, DependencyStatus};

/// Check every external tool the adapters shell out to.
pub fn check_all_dependencies() -> Vec<Dependency> {
    vec![
        locate(Dependency::required(
            "mdls",
            "Queries Spotlight metadata (bundle identifiers, content types)",
        )
        .with_hint("ships with macOS; no install needed")),
        locate(Dependency::required(
            "duti",
            "Writes default-handler assignments to the registry",
        )
        .with_hint("brew install duti")),
        locate(Dependency::optional(
            "swift",
            "Runs the role-handler registry query (recommendations)",
        )
        .with_hint("xcode-select --install")),
    ]
}

/// Resolve a dependency's status from the search path.
fn locate(dep: Dependency) -> Dependency {
    match which::which(&dep.name) {
        Ok(path) => {
            let status = DependencyStatus::Present { path };
            dep.with_status(status)
        }
        Err(_) => dep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_tool_stays_missing() {
        let dep = locate(Dependency::required("nonexistent-tool-12345", "nothing"));
        assert!(!dep.is_present());
    }

    #[test]
    fn report_covers_every_adapter_tool() {
        let names: Vec<String> = check_all_dependencies()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["mdls", "duti", "swift"]);
    }
}
