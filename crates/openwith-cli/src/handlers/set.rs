//! Set command handler: assign a default application for one suffix.

use openwith_core::{friendly_name, normalize_suffix};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::choose_record;
use crate::presentation::print_recommendations;

/// Execute the set command.
///
/// Builds the application index, optionally prints recommendations for
/// the suffix, resolves the chosen application (via `--app` or an
/// interactive prompt), and assigns it across all roles.
pub async fn execute(
    ctx: &CliContext,
    suffix_raw: &str,
    app: Option<String>,
    no_recommend: bool,
) -> Result<(), CliError> {
    let suffix = normalize_suffix(suffix_raw)
        .ok_or_else(|| CliError::Arguments(format!("`{suffix_raw}` is not a usable suffix")))?;

    println!("Scanning applications...");
    let index = ctx.scanner.scan_all(&ctx.config.apps_dirs).await?;
    if index.is_empty() {
        return Err(CliError::NoApplications);
    }
    println!("Indexed {} application(s)\n", index.len());

    if !no_recommend {
        match ctx.resolver.resolve_content_type(&suffix).await {
            Some(content_type) => {
                match friendly_name(&content_type) {
                    Some(label) => println!("Content type for {suffix}: {content_type} ({label})"),
                    None => println!("Content type for {suffix}: {content_type}"),
                }
                let recommendations = ctx.resolver.handlers_for_content_type(&content_type).await;
                print_recommendations(&recommendations);
            }
            None => println!("No content type known for {suffix}; skipping recommendations"),
        }
        println!();
    }

    let record = choose_record(&index, app.as_deref())?;
    ctx.assigner.assign(&record.bundle_id, &suffix).await?;
    println!(
        "Set default application for {suffix} to {} ({})",
        record.name, record.bundle_id
    );
    Ok(())
}
