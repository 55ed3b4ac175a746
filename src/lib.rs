//! navtools - external tool links for a site navigation header
//!
//! Fetches the integrations installed for an account from a registry, pulls
//! out their global-navigation entries and normalizes them for display.

pub mod config;
pub mod error;
pub mod registry;
pub mod tools;

pub use error::{NavError, Result};
pub use registry::{HttpRegistryClient, MockRegistryClient, RegistryClient, get_external_apps, load_header_tools};
pub use tools::{ExternalTool, ProcessedTool, filter_and_process_tools};
