//! Ports: traits that abstract the external tools the services rely on.
//!
//! Core owns the traits and their typed errors; concrete adapters that
//! spawn processes live in `openwith-runtime`. Every port is narrow
//! enough to be faked in tests.

mod assign;
mod probe;
mod role_handlers;

pub use assign::{AssignError, HandlerAssigner};
pub use probe::{MetadataProbe, ProbeError};
pub use role_handlers::RoleHandlerQuery;

#[cfg(test)]
pub(crate) use assign::MockHandlerAssigner;
#[cfg(test)]
pub(crate) use probe::MockMetadataProbe;
