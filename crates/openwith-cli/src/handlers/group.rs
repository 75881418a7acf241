//! Group command handler: assign one application to a suffix family.

use openwith_core::{SuffixGroup, suffix_group, suffix_groups};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::choose_record;

/// Execute the group command.
///
/// Individual suffix failures are reported but do not stop the rest of
/// the group; the command only fails as a whole when every assignment
/// failed.
pub async fn execute(ctx: &CliContext, name: &str, app: Option<String>) -> Result<(), CliError> {
    let group = suffix_group(name).ok_or_else(|| {
        let available: Vec<&str> = suffix_groups().iter().map(|g| g.name).collect();
        CliError::Arguments(format!(
            "unknown group `{name}` (available: {})",
            available.join(", ")
        ))
    })?;

    println!("Scanning applications...");
    let index = ctx.scanner.scan_all(&ctx.config.apps_dirs).await?;
    if index.is_empty() {
        return Err(CliError::NoApplications);
    }
    println!("Indexed {} application(s)\n", index.len());

    let common = common_recommendations(ctx, group).await;
    if !common.is_empty() {
        println!("Applications registered for every `{}` suffix:", group.name);
        for entry in &common {
            println!("  {entry}");
        }
        println!();
    }

    let record = choose_record(&index, app.as_deref())?;
    println!(
        "Assigning {} ({}) to {} suffix(es)...",
        record.name,
        record.bundle_id,
        group.suffixes.len()
    );

    let outcomes = ctx.assigner.assign_group(&record.bundle_id, group).await;
    let mut first_error = None;
    let mut failed = 0usize;
    for outcome in outcomes {
        match outcome.result {
            Ok(()) => println!("  ok {}", outcome.suffix),
            Err(err) => {
                failed += 1;
                eprintln!("  failed {}: {err}", outcome.suffix);
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) if failed == group.suffixes.len() => Err(err.into()),
        _ => Ok(()),
    }
}

/// Applications recommended for every suffix of the group, intersected
/// in the order reported for the first suffix. Empty as soon as any
/// suffix has no candidates.
async fn common_recommendations(ctx: &CliContext, group: &SuffixGroup) -> Vec<String> {
    let mut common: Option<Vec<String>> = None;
    for suffix in group.suffixes {
        let recommendations = ctx.resolver.recommend(suffix).await;
        if recommendations.is_empty() {
            return Vec::new();
        }
        match &mut common {
            None => common = Some(recommendations),
            Some(current) => {
                current.retain(|entry| recommendations.contains(entry));
                if current.is_empty() {
                    return Vec::new();
                }
            }
        }
    }
    common.unwrap_or_default()
}
