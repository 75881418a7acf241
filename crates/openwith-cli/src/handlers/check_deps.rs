//! Check external tools handler.
//!
//! Reports the tools the adapters shell out to. Installation stays with
//! the user; this command never installs anything.

use openwith_core::{Dependency, DependencyStatus};

use crate::error::CliError;
use crate::presentation::print_separator;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check-deps command over an already-collected report.
///
/// Returns an error when any required tool is missing so the process
/// exits non-zero.
pub fn execute(dependencies: Vec<Dependency>) -> Result<(), CliError> {
    println!("{BOLD}Checking external tools...{RESET}\n");
    println!("{BOLD}{:<8} {:<44} STATUS{RESET}", "TOOL", "PURPOSE");
    print_separator(80);

    for dep in &dependencies {
        let status = match &dep.status {
            DependencyStatus::Present { path } => {
                format!("{GREEN}ok{RESET} ({})", path.display())
            }
            DependencyStatus::Missing if dep.required => format!("{RED}missing{RESET}"),
            DependencyStatus::Missing => "missing (optional)".to_string(),
        };
        println!("{:<8} {:<44} {status}", dep.name, dep.description);
    }
    println!();

    let missing_required: Vec<&Dependency> = dependencies
        .iter()
        .filter(|d| d.required && !d.is_present())
        .collect();

    if missing_required.is_empty() {
        println!("{GREEN}All required tools are installed.{RESET}");
        return Ok(());
    }

    println!("{RED}{} required tool(s) missing:{RESET}", missing_required.len());
    for dep in missing_required {
        match &dep.install_hint {
            Some(hint) => println!("  {} - install with: {hint}", dep.name),
            None => println!("  {}", dep.name),
        }
    }
    Err(CliError::MissingDependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn all_present_succeeds() {
        let deps = vec![
            Dependency::required("mdls", "metadata").with_status(DependencyStatus::Present {
                path: PathBuf::from("/usr/bin/mdls"),
            }),
        ];
        assert!(execute(deps).is_ok());
    }

    #[test]
    fn missing_required_tool_fails() {
        let deps = vec![Dependency::required("duti", "assignments")];
        let err = execute(deps).expect_err("must fail");
        assert!(matches!(err, CliError::MissingDependencies));
    }

    #[test]
    fn missing_optional_tool_is_tolerated() {
        let deps = vec![Dependency::optional("swift", "recommendations")];
        assert!(execute(deps).is_ok());
    }
}
