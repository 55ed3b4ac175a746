//! Fetching navigation entries from the registry

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::tools::{ExternalTool, ProcessedTool, filter_and_process_tools, non_empty};

use super::client::RegistryClient;
use super::wire::{AppConfiguration, Installation};

/// Extract the header entry from one configuration document.
///
/// Returns `None` when the document has no usable `global_navigation` block
/// or the block is disabled. The custom-field URL wins over the navigation
/// URL.
pub fn extract_navigation_entry(detail: Value) -> Option<ExternalTool> {
    let config: AppConfiguration = match serde_json::from_value(detail) {
        Ok(config) => config,
        Err(e) => {
            debug!("Skipping malformed app configuration: {}", e);
            return None;
        }
    };

    let nav = config.global_navigation?;
    if !nav.is_enabled() {
        debug!("Skipping disabled navigation entry {:?}", nav.label);
        return None;
    }

    let custom_url = config.custom_fields.and_then(|fields| non_empty(fields.url));
    let href = custom_url.or_else(|| non_empty(nav.url));

    Some(ExternalTool {
        href,
        label: nav.label.unwrap_or_default(),
        svg_path: non_empty(nav.icon_svg_path_64),
        img_src: non_empty(nav.icon_url),
    })
}

/// Fetch the global-navigation entries of every installed integration.
///
/// Calls are made one after another: the list first, then one detail call
/// per installation. Malformed data is skipped silently. Only a failure of
/// the list call is returned as an error; a failed detail call drops that
/// entry.
pub async fn get_external_apps<C>(client: &C) -> Result<Vec<ExternalTool>>
where
    C: RegistryClient + ?Sized,
{
    let listing = client.list_installations().await?;
    let Some(entries) = listing.as_array() else {
        debug!("Installation list is not an array, returning no tools");
        return Ok(Vec::new());
    };

    let mut tools = Vec::with_capacity(entries.len());
    for entry in entries {
        let installation = match Installation::deserialize(entry) {
            Ok(installation) => installation,
            Err(e) => {
                debug!("Skipping malformed installation {}: {}", entry, e);
                continue;
            }
        };

        let detail = match client.app_configuration(&installation.app_id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Failed to fetch configuration for app {}: {}", installation.app_id, e);
                continue;
            }
        };

        match extract_navigation_entry(detail) {
            Some(tool) => tools.push(tool),
            None => debug!("App {} has no navigation entry", installation.app_id),
        }
    }

    info!("Fetched {} navigation entries from {} installations", tools.len(), entries.len());
    Ok(tools)
}

/// Fetch and normalize in one step, producing what the header renders
pub async fn load_header_tools<C>(client: &C) -> Result<Vec<ProcessedTool>>
where
    C: RegistryClient + ?Sized,
{
    let tools = get_external_apps(client).await?;
    Ok(filter_and_process_tools(Some(tools.as_slice())))
}
