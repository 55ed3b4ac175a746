//! Normalization of raw navigation entries into header-ready tools

use log::debug;

use super::non_empty;
use super::types::{ExternalTool, ProcessedTool};

/// Derive the stable identifier for a tool from its label.
///
/// Lowercases the label and replaces each run of whitespace with a single
/// hyphen. Leading and trailing runs become hyphens too, so only an empty
/// label yields an empty id.
///
/// Examples:
/// - "Studio IAD" -> "studio-iad"
/// - "LocalStudio" -> "localstudio"
/// - " Studio " -> "-studio-"
pub fn derive_tool_id(label: &str) -> String {
    let mut id = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
        } else {
            id.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    id
}

/// Filter out malformed entries and attach a derived `tool_id` to the rest.
///
/// `None` is treated as an empty list. An entry is dropped when it has
/// neither an href nor a label, or when its label yields an empty id.
/// Order is preserved and duplicate ids are kept.
pub fn filter_and_process_tools(tools: Option<&[ExternalTool]>) -> Vec<ProcessedTool> {
    let Some(tools) = tools else {
        return Vec::new();
    };

    tools
        .iter()
        .filter_map(|tool| {
            let href = non_empty(tool.href.clone());
            if href.is_none() && tool.label.is_empty() {
                debug!("Dropping tool with no href and no label");
                return None;
            }

            let tool_id = derive_tool_id(&tool.label);
            if tool_id.is_empty() {
                debug!("Dropping tool {:?}: label yields an empty id", href);
                return None;
            }

            Some(ProcessedTool {
                href,
                label: tool.label.clone(),
                svg_path: non_empty(tool.svg_path.clone()),
                tool_id,
                tool_img: non_empty(tool.img_src.clone()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processed(href: &str, label: &str, tool_id: &str) -> ProcessedTool {
        ProcessedTool {
            href: Some(href.to_string()),
            label: label.to_string(),
            svg_path: None,
            tool_id: tool_id.to_string(),
            tool_img: None,
        }
    }

    #[test]
    fn test_derive_tool_id() {
        assert_eq!(derive_tool_id("Studio IAD"), "studio-iad");
        assert_eq!(derive_tool_id("LocalStudio"), "localstudio");
        assert_eq!(derive_tool_id("Studio \t Testing"), "studio-testing");
        assert_eq!(derive_tool_id(""), "");
        assert_eq!(derive_tool_id(" Studio "), "-studio-");
        assert_eq!(derive_tool_id("   "), "-");
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_and_process_tools(Some(&[][..])).is_empty());
    }

    #[test]
    fn test_missing_input() {
        assert!(filter_and_process_tools(None).is_empty());
    }

    #[test]
    fn test_incomplete_entries_are_dropped() {
        let tools = vec![
            ExternalTool::default(),
            ExternalTool::new(Some("http://example.com"), "LocalStudio").with_svg_path(""),
            ExternalTool::default(),
            ExternalTool::new(Some("https://example.com"), "Studio").with_svg_path(""),
            ExternalTool::new(Some("https://example-dev.com"), "Dev").with_svg_path(""),
            ExternalTool::new(Some("https://example-studio.com"), "Studio").with_svg_path(""),
            ExternalTool::new(Some("https://example-iad.com"), "Studio IAD").with_svg_path(""),
            ExternalTool::new(Some("https://example-pdx.com"), "Studio PDX").with_svg_path(""),
            ExternalTool::new(Some("https://example-studio.com"), "Studio").with_svg_path(""),
            ExternalTool::new(Some("https://example-testing.com"), "Studio Testing").with_svg_path(""),
            ExternalTool::default(),
        ];

        let expected = vec![
            processed("http://example.com", "LocalStudio", "localstudio"),
            processed("https://example.com", "Studio", "studio"),
            processed("https://example-dev.com", "Dev", "dev"),
            processed("https://example-studio.com", "Studio", "studio"),
            processed("https://example-iad.com", "Studio IAD", "studio-iad"),
            processed("https://example-pdx.com", "Studio PDX", "studio-pdx"),
            processed("https://example-studio.com", "Studio", "studio"),
            processed("https://example-testing.com", "Studio Testing", "studio-testing"),
        ];

        assert_eq!(filter_and_process_tools(Some(tools.as_slice())), expected);
    }

    #[test]
    fn test_empty_label_is_dropped_even_with_href() {
        let tools = vec![
            ExternalTool::new(Some("http://tool1.com"), "Valid Tool")
                .with_svg_path("path1")
                .with_img_src("img1.png"),
            ExternalTool::new(Some("http://tool2.com"), "")
                .with_svg_path("path2")
                .with_img_src("img2.png"),
        ];

        let result = filter_and_process_tools(Some(tools.as_slice()));
        assert_eq!(
            result,
            vec![ProcessedTool {
                href: Some("http://tool1.com".to_string()),
                label: "Valid Tool".to_string(),
                svg_path: Some("path1".to_string()),
                tool_id: "valid-tool".to_string(),
                tool_img: Some("img1.png".to_string()),
            }]
        );
    }

    #[test]
    fn test_label_without_href_is_kept() {
        let tools = vec![ExternalTool::new(None, "Local Studio")];
        let result = filter_and_process_tools(Some(tools.as_slice()));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].href, None);
        assert_eq!(result[0].tool_id, "local-studio");
    }

    #[test]
    fn test_blank_label_with_href_is_kept() {
        let tools = vec![ExternalTool::new(Some("https://x.com"), "   ")];
        let result = filter_and_process_tools(Some(tools.as_slice()));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].tool_id, "-");
        assert_eq!(result[0].label, "   ");
    }

    #[test]
    fn test_null_label_entry_is_dropped() {
        let tools: Vec<ExternalTool> = serde_json::from_str(
            r#"[{"href":"https://x.com","label":null},{"href":"https://y.com","label":"Y"}]"#,
        )
        .unwrap();
        let result = filter_and_process_tools(Some(tools.as_slice()));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].tool_id, "y");
    }
}
