//! Command handlers.
//!
//! One module per subcommand; each exposes an `execute` function that
//! receives the composed [`CliContext`](crate::bootstrap::CliContext)
//! where it needs one.

pub mod apps;
pub mod check_deps;
pub mod group;
pub mod groups;
pub mod recommend;
pub mod set;

use openwith_core::{AppIndex, AppRecord};

use crate::error::CliError;
use crate::utils::input;

/// Resolve the application to assign, prompting when none was preselected.
///
/// A preselected name that is not in the index is reported as
/// [`CliError::NameNotFound`] before any assignment happens.
pub(crate) fn choose_record<'a>(
    index: &'a AppIndex,
    preselected: Option<&str>,
) -> Result<&'a AppRecord, CliError> {
    match preselected {
        Some(name) => index
            .get(name)
            .ok_or_else(|| CliError::NameNotFound(name.to_string())),
        None => {
            let sorted = index.sorted_by_name();
            let labels: Vec<String> = sorted
                .iter()
                .map(|r| format!("{} ({})", r.name, r.bundle_id))
                .collect();
            let choice = input::prompt_select("Choose the default application", &labels)?;
            Ok(sorted[choice])
        }
    }
}
