//! Groups command handler: list the named suffix groups.

use openwith_core::suffix_groups;

use crate::error::CliError;
use crate::presentation::print_separator;

/// Execute the groups command.
pub fn execute() -> Result<(), CliError> {
    println!("{:<10} {:<36} Suffixes", "GROUP", "DESCRIPTION");
    print_separator(80);
    for group in suffix_groups() {
        println!(
            "{:<10} {:<36} {}",
            group.name,
            group.description,
            group.suffixes.join(" ")
        );
    }
    Ok(())
}
