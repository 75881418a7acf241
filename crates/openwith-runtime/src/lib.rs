//! Process-spawning adapters for the `openwith-core` ports.
//!
//! Every adapter shells out to one external tool per call: `mdls` for
//! metadata queries, `swift` for the role-handler registry script, and
//! `duti` for handler assignment. Core services depend only on the
//! ports; this crate is wired in by the CLI's composition root.

#![deny(unused_crate_dependencies)]

mod deps;
mod duti;
mod mdls;
mod swift_script;

pub use deps::check_all_dependencies;
pub use duti::DutiAssigner;
pub use mdls::MdlsProbe;
pub use swift_script::SwiftRoleHandlerQuery;
