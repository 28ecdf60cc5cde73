use serde::Deserialize;

/// The kind of a block node, parsed from its `nodeType` tag.
///
/// Tag strings live here and nowhere else; the walker matches on variants.
/// Any tag that isn't recognized is kept verbatim in [`BlockKind::Other`] so
/// unknown structure can still be walked for reachable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Root document node, only seen when a document is nested in another.
    Document,
    Paragraph,
    /// `heading-1` through `heading-6`.
    Heading(u8),
    Blockquote,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableRow,
    TableCell,
    TableHeaderCell,
    /// Horizontal rule.
    Hr,
    /// Block-level reference to a media asset.
    EmbeddedAsset,
    /// Block-level reference to another content entry.
    EmbeddedEntry,
    /// Unrecognized tag.
    Other(String),
}

impl BlockKind {
    pub const HEADING_PREFIX: &'static str = "heading-";

    /// Parses a `nodeType` tag. Never fails; unknown tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "document" => Self::Document,
            "paragraph" => Self::Paragraph,
            "blockquote" => Self::Blockquote,
            "unordered-list" => Self::UnorderedList,
            "ordered-list" => Self::OrderedList,
            "list-item" => Self::ListItem,
            "table" => Self::Table,
            "table-row" => Self::TableRow,
            "table-cell" => Self::TableCell,
            "table-header-cell" => Self::TableHeaderCell,
            "hr" => Self::Hr,
            "embedded-asset-block" => Self::EmbeddedAsset,
            "embedded-entry-block" => Self::EmbeddedEntry,
            other => match parse_heading_level(other) {
                Some(level) => Self::Heading(level),
                None => Self::Other(other.to_string()),
            },
        }
    }

    /// Returns true for `table-cell` and `table-header-cell`.
    pub fn is_table_cell(&self) -> bool {
        matches!(self, Self::TableCell | Self::TableHeaderCell)
    }
}

/// `heading-N` with a single digit N in 1..=6.
fn parse_heading_level(tag: &str) -> Option<u8> {
    let digits = tag.strip_prefix(BlockKind::HEADING_PREFIX)?;
    if digits.len() != 1 {
        return None;
    }
    digits
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

/// The kind of an inline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// Link with a direct `uri`.
    Hyperlink,
    /// Link to another entry.
    EntryHyperlink,
    /// Link to an asset; resolves through the asset's file URL.
    AssetHyperlink,
    /// Link to an external resource.
    ResourceHyperlink,
    /// Inline reference to another entry; has no text children.
    EmbeddedEntry,
}

impl InlineKind {
    /// Returns the inline kind for `tag`, or `None` when the tag names a
    /// block (or nothing known at all).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hyperlink" => Some(Self::Hyperlink),
            "entry-hyperlink" => Some(Self::EntryHyperlink),
            "asset-hyperlink" => Some(Self::AssetHyperlink),
            "resource-hyperlink" => Some(Self::ResourceHyperlink),
            "embedded-entry-inline" => Some(Self::EmbeddedEntry),
            _ => None,
        }
    }

    pub fn is_hyperlink(self) -> bool {
        !matches!(self, Self::EmbeddedEntry)
    }
}

/// A named inline style tag on a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Code,
    /// Marks this converter doesn't style (superscript, strikethrough, ...).
    Other(String),
}

impl From<String> for MarkKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "code" => Self::Code,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for MarkKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}
