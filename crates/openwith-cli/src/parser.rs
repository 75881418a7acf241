//! Main CLI parser and top-level argument handling.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition.
///
/// This is the top-level parser that handles global options and
/// dispatches to subcommands.
#[derive(Parser)]
#[command(name = "openwith")]
#[command(about = "Inspect installed applications and set default handlers for file suffixes")]
#[command(version)]
pub struct Cli {
    /// Applications directory to scan (repeatable; replaces the defaults)
    #[arg(long = "apps-dir", global = true)]
    pub apps_dir: Vec<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from([
            "openwith",
            "--verbose",
            "--apps-dir",
            "/tmp/Apps",
            "apps",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.apps_dir, [PathBuf::from("/tmp/Apps")]);
        assert!(matches!(cli.command, Some(Commands::Apps { .. })));
    }

    #[test]
    fn set_takes_a_suffix_and_optional_app() {
        let cli = Cli::parse_from(["openwith", "set", ".md", "--app", "Typora.app"]);
        match cli.command {
            Some(Commands::Set { suffix, app, no_recommend }) => {
                assert_eq!(suffix, ".md");
                assert_eq!(app.as_deref(), Some("Typora.app"));
                assert!(!no_recommend);
            }
            other => panic!("unexpected command: {:?}", other.is_some()),
        }
    }
}
