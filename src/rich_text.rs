//! Rich Text Blocks
//!
//! Body content arrives as an ordered list of typed blocks. Paragraphs and
//! headings are rendered natively; every other block type is preserved
//! verbatim so the view can show it as raw JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Inline child of a text block. Children with no or null `text` (links etc.)
/// contribute nothing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Inline {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { children: Vec<Inline> },
    Heading { children: Vec<Inline> },
    /// Unrecognised or malformed block, kept as received
    Unknown(Value),
}

#[derive(Deserialize)]
struct TextBlock {
    children: Vec<Inline>,
}

impl Block {
    pub fn from_value(value: Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
        let text_block = || TextBlock::deserialize(&value).ok();

        match kind.as_deref() {
            Some("paragraph") => match text_block() {
                Some(b) => Block::Paragraph { children: b.children },
                None => Block::Unknown(value),
            },
            Some("heading") => match text_block() {
                Some(b) => Block::Heading { children: b.children },
                None => Block::Unknown(value),
            },
            _ => Block::Unknown(value),
        }
    }

    /// Concatenated text of the block's children (empty for unknown blocks)
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { children } | Block::Heading { children } => {
                children.iter().filter_map(|c| c.text.as_deref()).collect()
            }
            Block::Unknown(_) => String::new(),
        }
    }

    /// Raw JSON shown for blocks the renderer does not know
    pub fn raw_json(&self) -> Option<String> {
        match self {
            Block::Unknown(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Block::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_concatenates_children() {
        let block: Block = serde_json::from_value(json!({
            "type": "paragraph",
            "children": [{"text": "A"}, {"text": "B"}]
        }))
        .unwrap();
        assert!(matches!(block, Block::Paragraph { .. }));
        assert_eq!(block.plain_text(), "AB");
        assert_eq!(block.raw_json(), None);
    }

    #[test]
    fn test_null_text_child_is_empty() {
        let block: Block = serde_json::from_value(json!({
            "type": "paragraph",
            "children": [{"text": "A"}, {"text": null}, {"text": "B"}]
        }))
        .unwrap();
        assert!(matches!(block, Block::Paragraph { .. }));
        assert_eq!(block.plain_text(), "AB");
    }

    #[test]
    fn test_heading_ignores_textless_children() {
        let block: Block = serde_json::from_value(json!({
            "type": "heading",
            "level": 2,
            "children": [
                {"type": "text", "text": "Best "},
                {"type": "link", "url": "https://example.com", "children": [{"text": "ignored"}]},
                {"type": "text", "text": "of 2024"}
            ]
        }))
        .unwrap();
        assert!(matches!(block, Block::Heading { .. }));
        assert_eq!(block.plain_text(), "Best of 2024");
    }

    #[test]
    fn test_unknown_type_keeps_full_structure() {
        let raw = json!({
            "type": "list",
            "format": "unordered",
            "children": [{"type": "list-item", "children": [{"text": "one"}]}]
        });
        let block: Block = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(block, Block::Unknown(raw.clone()));

        let shown = block.raw_json().unwrap();
        assert!(!shown.is_empty());
        let reparsed: Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(reparsed, raw);
    }

    #[test]
    fn test_malformed_known_type_falls_back() {
        let raw = json!({"type": "paragraph", "text": "no children"});
        let block: Block = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(block, Block::Unknown(raw));
    }

    #[test]
    fn test_missing_type_falls_back() {
        let block: Block = serde_json::from_value(json!({"children": []})).unwrap();
        assert!(block.raw_json().is_some());
    }
}
