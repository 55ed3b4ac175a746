//! Navigation entry types shared by the fetcher and the normalizer

use serde::{Deserialize, Deserializer, Serialize};

/// A `null` label decodes the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A raw navigation entry extracted from an integration's configuration.
///
/// Every field is optional on the wire; an object with no fields at all
/// deserializes to an entry the normalizer will drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalTool {
    pub href: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub label: String,
    pub svg_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
}

impl ExternalTool {
    pub fn new(href: Option<&str>, label: impl Into<String>) -> Self {
        Self {
            href: href.map(str::to_string),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_svg_path(mut self, svg_path: impl Into<String>) -> Self {
        self.svg_path = Some(svg_path.into());
        self
    }

    pub fn with_img_src(mut self, img_src: impl Into<String>) -> Self {
        self.img_src = Some(img_src.into());
        self
    }
}

/// A navigation entry ready for the header, keyed by a derived `tool_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedTool {
    pub href: Option<String>,
    pub label: String,
    pub svg_path: Option<String>,
    pub tool_id: String,
    pub tool_img: Option<String>,
}
