//! Apps command handler: list the discovered application index.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Execute the apps command.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let index = ctx.scanner.scan_all(&ctx.config.apps_dirs).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&index.sorted_by_name())?);
        return Ok(());
    }

    if index.is_empty() {
        println!("No applications discovered.");
        println!("Use --apps-dir to point at a different directory.");
        return Ok(());
    }

    println!("Found {} application(s):\n", index.len());
    println!("{:<32} {:<40} Path", "NAME", "BUNDLE ID");
    print_separator(110);
    for record in index.sorted_by_name() {
        println!(
            "{:<32} {:<40} {}",
            truncate_string(&record.name, 31),
            truncate_string(&record.bundle_id, 39),
            record.path.display()
        );
    }
    Ok(())
}
