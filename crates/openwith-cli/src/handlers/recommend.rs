//! Recommend command handler: show candidates without assigning.

use serde::Serialize;

use openwith_core::{friendly_name, normalize_suffix};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_recommendations;

#[derive(Serialize)]
struct Report<'a> {
    suffix: &'a str,
    content_type: Option<&'a str>,
    recommendations: &'a [String],
}

/// Execute the recommend command.
pub async fn execute(ctx: &CliContext, suffix_raw: &str, json: bool) -> Result<(), CliError> {
    let suffix = normalize_suffix(suffix_raw)
        .ok_or_else(|| CliError::Arguments(format!("`{suffix_raw}` is not a usable suffix")))?;

    let content_type = ctx.resolver.resolve_content_type(&suffix).await;
    let recommendations = match &content_type {
        Some(content_type) => ctx.resolver.handlers_for_content_type(content_type).await,
        None => Vec::new(),
    };

    if json {
        let report = Report {
            suffix: &suffix,
            content_type: content_type.as_deref(),
            recommendations: &recommendations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &content_type {
        Some(content_type) => match friendly_name(content_type) {
            Some(label) => println!("Content type for {suffix}: {content_type} ({label})"),
            None => println!("Content type for {suffix}: {content_type}"),
        },
        None => println!("No content type known for {suffix}"),
    }
    print_recommendations(&recommendations);
    Ok(())
}
