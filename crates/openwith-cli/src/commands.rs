//! Main commands enum.

use clap::Subcommand;

/// Available commands for the default-handler management tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Choose a default application for a file suffix
    Set {
        /// File suffix to reassign (e.g. ".md" or "md")
        suffix: String,
        /// Application display name to assign without prompting
        #[arg(long)]
        app: Option<String>,
        /// Skip the recommendation listing
        #[arg(long)]
        no_recommend: bool,
    },

    /// Assign one application to every suffix in a named group
    Group {
        /// Group name (see `openwith groups`)
        name: String,
        /// Application display name to assign without prompting
        #[arg(long)]
        app: Option<String>,
    },

    /// List the named suffix groups
    Groups,

    /// List installed applications and their bundle identifiers
    Apps {
        /// Emit the index as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show candidate applications for a suffix without assigning
    Recommend {
        /// File suffix to look up (e.g. ".md" or "md")
        suffix: String,
        /// Emit the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the external tools this command relies on
    CheckDeps,
}
