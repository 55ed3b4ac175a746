//! Wire records for registry responses
//!
//! Every field the registry may omit is optional here. Anything that does not
//! fit these shapes is rejected at decode time and skipped by the fetcher.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ids arrive as either JSON strings or numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(text) => text,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|id| id.map(String::from))
}

/// Malformed custom fields are treated as absent rather than failing the whole document
fn lenient_custom_fields<'de, D>(deserializer: D) -> Result<Option<CustomFields>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// One entry of the installation list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Installation {
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "optional_id_string")]
    pub context_id: Option<String>,
    #[serde(deserialize_with = "id_string")]
    pub app_id: String,
}

/// An integration's configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfiguration {
    #[serde(default)]
    pub global_navigation: Option<GlobalNavigation>,
    #[serde(default, deserialize_with = "lenient_custom_fields")]
    pub custom_fields: Option<CustomFields>,
}

/// The header link block of a configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobalNavigation {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon_svg_path_64: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl GlobalNavigation {
    /// Absent `enabled` counts as enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Per-installation overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomFields {
    #[serde(default)]
    pub url: Option<String>,
}
