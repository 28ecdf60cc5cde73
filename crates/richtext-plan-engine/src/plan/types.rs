use serde::{Deserialize, Serialize};

use super::{context::FormattingContext, marks::MarkFlags};

/// List flavour inherited by segments inside a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Unordered,
    Ordered,
}

/// A run of text with one uniform set of attributes.
///
/// Serializes with camelCase keys; every field is always present, with
/// `false`/`0`/`null` where it doesn't apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
    /// 0 outside headings, else 1–6.
    pub heading_level: u8,
    pub list_type: Option<ListType>,
    /// List nesting depth; 0 outside lists.
    pub list_indent: u32,
    pub hyperlink: Option<String>,
}

impl Segment {
    /// A segment with the given flags, inheriting heading and list state from
    /// `ctx`. No hyperlink.
    pub fn styled(text: impl Into<String>, flags: MarkFlags, ctx: FormattingContext) -> Self {
        Self {
            text: text.into(),
            bold: flags.bold,
            italic: flags.italic,
            underline: flags.underline,
            code: flags.code,
            heading_level: ctx.heading_level,
            list_type: ctx.list_type,
            list_indent: ctx.list_indent,
            hyperlink: None,
        }
    }

    /// Unformatted text in the root context.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, MarkFlags::default(), FormattingContext::root())
    }

    /// True when every attribute except `text` matches.
    pub fn same_format(&self, other: &Segment) -> bool {
        self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.code == other.code
            && self.heading_level == other.heading_level
            && self.list_type == other.list_type
            && self.list_indent == other.list_indent
            && self.hyperlink == other.hyperlink
    }
}

/// One row of a table block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Each cell is its own merged segment sequence.
    pub cells: Vec<Vec<Segment>>,
    /// True if the row has at least one header cell.
    pub is_header: bool,
}

/// A top-level unit of the render plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderBlock {
    Text { segments: Vec<Segment> },
    Image { url: String, title: String },
    Hr,
    Table { rows: Vec<TableRow> },
}

/// Ordered render blocks for one document. Serializes as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderPlan {
    pub blocks: Vec<RenderBlock>,
}

impl RenderPlan {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderBlock> {
        self.blocks.iter()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a RenderBlock;
    type IntoIter = std::slice::Iter<'a, RenderBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for RenderPlan {
    type Item = RenderBlock;
    type IntoIter = std::vec::IntoIter<RenderBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn segment_serializes_all_nine_fields() {
        let value = serde_json::to_value(Segment::plain("Hello")).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Hello",
                "bold": false,
                "italic": false,
                "underline": false,
                "code": false,
                "headingLevel": 0,
                "listType": null,
                "listIndent": 0,
                "hyperlink": null
            })
        );
    }

    #[test]
    fn render_blocks_are_type_tagged() {
        let plan = RenderPlan {
            blocks: vec![
                RenderBlock::Hr,
                RenderBlock::Image {
                    url: "https://cdn/x.png".into(),
                    title: "x".into(),
                },
                RenderBlock::Table {
                    rows: vec![TableRow {
                        cells: vec![vec![]],
                        is_header: true,
                    }],
                },
            ],
        };
        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            json!([
                {"type": "hr"},
                {"type": "image", "url": "https://cdn/x.png", "title": "x"},
                {"type": "table", "rows": [{"cells": [[]], "isHeader": true}]}
            ])
        );
    }

    #[test]
    fn list_type_serializes_lowercase() {
        let ctx = FormattingContext::root().entering_list(ListType::Ordered);
        let value = serde_json::to_value(Segment::styled("x", MarkFlags::default(), ctx)).unwrap();
        assert_eq!(value["listType"], json!("ordered"));
        assert_eq!(value["listIndent"], json!(1));
    }

    #[test]
    fn same_format_ignores_text() {
        let a = Segment::plain("a");
        let mut b = Segment::plain("b");
        assert!(a.same_format(&b));
        b.hyperlink = Some("https://example.com".into());
        assert!(!a.same_format(&b));
    }
}
