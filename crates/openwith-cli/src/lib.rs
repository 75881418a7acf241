//! CLI adapter: argument parsing, command handlers, and presentation.
//!
//! The binary in `main.rs` is the composition root; everything here is
//! reusable and testable without spawning external tools.

#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary target
use anyhow as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
