//! Core domain for inspecting installed applications and assigning
//! default handlers for file suffixes.
//!
//! This crate is pure: it owns the domain types, the ports (traits) that
//! abstract the external metadata and registry tools, and the services
//! that orchestrate them. Concrete adapters that spawn processes live in
//! `openwith-runtime`; presentation lives in `openwith-cli`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AppIndex, AppRecord, Dependency, DependencyStatus, SuffixGroup, friendly_name, suffix_group,
    suffix_groups,
};
pub use ports::{AssignError, HandlerAssigner, MetadataProbe, ProbeError, RoleHandlerQuery};
pub use services::{
    BUNDLE_ID_ATTRIBUTE, BundleScanner, CONTENT_TYPE_ATTRIBUTE, ContentTypeResolver,
    DefaultHandlerService, GroupAssignment, ScanError, ScanOptions, normalize_suffix,
};

// Silence unused dev-dependency warnings: mockall is pulled in through
// `#[cfg_attr(test, automock)]` on the ports
#[cfg(test)]
use mockall as _;
