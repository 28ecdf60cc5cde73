use serde::Deserialize;

use super::{
    data::{NodeData, lenient},
    kinds::{BlockKind, InlineKind, MarkKind},
};

/// The root of a rich-text document.
///
/// Deserializes from `{"nodeType": "document", "content": [...]}`; the
/// `nodeType` of the root is not checked and a missing `content` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    Block(Block),
    Inline(Inline),
    Text(Text),
}

/// A structural node: paragraph, heading, list, table, embed, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: Vec<Node>,
    pub data: NodeData,
}

/// A hyperlink or embedded inline entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub kind: InlineKind,
    pub content: Vec<Node>,
    pub data: NodeData,
}

/// A literal string with its marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
}

impl Mark {
    pub fn new(kind: impl Into<MarkKind>) -> Self {
        Self { kind: kind.into() }
    }
}

impl Block {
    pub fn new(kind: BlockKind, content: Vec<Node>) -> Self {
        Self {
            kind,
            content,
            data: NodeData::default(),
        }
    }

    pub fn with_data(kind: BlockKind, content: Vec<Node>, data: NodeData) -> Self {
        Self {
            kind,
            content,
            data,
        }
    }

    /// Direct children that are blocks, in order.
    pub fn child_blocks(&self) -> impl Iterator<Item = &Block> {
        self.content.iter().filter_map(Node::as_block)
    }

    /// Direct block children of the given kind.
    pub fn children_of_kind<'a>(&'a self, kind: &'a BlockKind) -> impl Iterator<Item = &'a Block> {
        self.child_blocks().filter(move |c| &c.kind == kind)
    }
}

impl Inline {
    pub fn new(kind: InlineKind, content: Vec<Node>, data: NodeData) -> Self {
        Self {
            kind,
            content,
            data,
        }
    }

    /// Direct text children, in order. Other children are skipped.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.content.iter().filter_map(|node| match node {
            Node::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl Text {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    pub fn with_marks<M: Into<MarkKind>>(
        value: impl Into<String>,
        marks: impl IntoIterator<Item = M>,
    ) -> Self {
        Self {
            value: value.into(),
            marks: marks.into_iter().map(Mark::new).collect(),
        }
    }
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text::plain(value))
    }

    pub fn block(kind: BlockKind, content: Vec<Node>) -> Self {
        Self::Block(Block::new(kind, content))
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(block) => Some(block),
            _ => None,
        }
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<Inline> for Node {
    fn from(inline: Inline) -> Self {
        Self::Inline(inline)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// Wire shape shared by every node type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    node_type: String,
    #[serde(default)]
    content: Vec<Node>,
    #[serde(default, deserialize_with = "lenient")]
    data: Option<NodeData>,
    #[serde(default)]
    marks: Vec<Mark>,
    #[serde(default, deserialize_with = "lenient")]
    value: Option<String>,
}

impl RawNode {
    const TEXT_TAG: &'static str = "text";
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        if raw.node_type == RawNode::TEXT_TAG {
            return Node::Text(Text {
                value: raw.value.unwrap_or_default(),
                marks: raw.marks,
            });
        }
        let data = raw.data.unwrap_or_default();
        match InlineKind::from_tag(&raw.node_type) {
            Some(kind) => Node::Inline(Inline::new(kind, raw.content, data)),
            None => Node::Block(Block::with_data(
                BlockKind::from_tag(&raw.node_type),
                raw.content,
                data,
            )),
        }
    }
}
