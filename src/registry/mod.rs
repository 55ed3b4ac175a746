//! Integration registry access
//!
//! This module provides:
//! - RegistryClient trait for registry abstraction
//! - HttpRegistryClient implementation
//! - MockRegistryClient for tests
//! - Wire records and the fetcher that turns them into navigation entries

pub mod client;
pub mod fetch;
pub mod http;
pub mod wire;

pub use client::{MockRegistryClient, MockResponse, RegistryClient};
pub use fetch::{extract_navigation_entry, get_external_apps, load_header_tools};
pub use http::HttpRegistryClient;
pub use wire::{AppConfiguration, CustomFields, GlobalNavigation, Installation};
