//! Navigation tool entries and their normalization
//!
//! This module provides:
//! - `ExternalTool`, the raw entry produced by the fetcher
//! - `ProcessedTool`, the header-ready entry with a derived id
//! - `filter_and_process_tools` to go from one to the other

pub mod normalize;
pub mod types;

pub use normalize::{derive_tool_id, filter_and_process_tools};
pub use types::{ExternalTool, ProcessedTool};

/// Treat an empty string the same as a missing value
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
