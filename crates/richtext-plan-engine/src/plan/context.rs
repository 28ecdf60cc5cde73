use super::types::ListType;

/// Formatting state inherited while descending the tree.
///
/// A `Copy` value: each recursive call gets its own, so heading and list
/// state set in one subtree never reaches its siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingContext {
    /// 0 outside headings, else 1–6.
    pub heading_level: u8,
    pub list_type: Option<ListType>,
    /// Number of enclosing list items.
    pub list_indent: u32,
    /// Propagated into quoted subtrees; no segment attribute reads it yet.
    pub is_blockquote: bool,
}

impl FormattingContext {
    /// No heading, no list, indent 0, not quoted.
    pub const fn root() -> Self {
        Self {
            heading_level: 0,
            list_type: None,
            list_indent: 0,
            is_blockquote: false,
        }
    }

    pub fn with_heading(self, level: u8) -> Self {
        Self {
            heading_level: level,
            ..self
        }
    }

    pub fn in_blockquote(self) -> Self {
        Self {
            is_blockquote: true,
            ..self
        }
    }

    /// Context for the items of a list nested one level deeper.
    pub fn entering_list(self, list_type: ListType) -> Self {
        Self {
            list_type: Some(list_type),
            list_indent: self.list_indent + 1,
            ..self
        }
    }
}
