//! Shared builders for unit tests.

use crate::model::{Block, BlockKind, Inline, InlineKind, Node, NodeData, Target, Text};

pub fn text(value: &str) -> Node {
    Node::text(value)
}

pub fn marked(value: &str, marks: &[&str]) -> Node {
    Text::with_marks(value, marks.iter().copied()).into()
}

pub fn block(kind: BlockKind, content: Vec<Node>) -> Block {
    Block::new(kind, content)
}

fn nodes(blocks: Vec<Block>) -> Vec<Node> {
    blocks.into_iter().map(Node::from).collect()
}

pub fn paragraph(content: Vec<Node>) -> Block {
    block(BlockKind::Paragraph, content)
}

pub fn heading(level: u8, content: Vec<Node>) -> Block {
    block(BlockKind::Heading(level), content)
}

pub fn list(kind: BlockKind, items: Vec<Block>) -> Block {
    block(kind, nodes(items))
}

pub fn item(content: Vec<Block>) -> Block {
    block(BlockKind::ListItem, nodes(content))
}

pub fn table(rows: Vec<Block>) -> Block {
    block(BlockKind::Table, nodes(rows))
}

pub fn row(cells: Vec<Block>) -> Block {
    block(BlockKind::TableRow, nodes(cells))
}

pub fn cell(value: &str) -> Block {
    let content = paragraph(vec![text(value)]);
    block(BlockKind::TableCell, nodes(vec![content]))
}

pub fn header_cell(value: &str) -> Block {
    let content = paragraph(vec![text(value)]);
    block(BlockKind::TableHeaderCell, nodes(vec![content]))
}

pub fn hyperlink(uri: &str, texts: Vec<&str>) -> Inline {
    let content = texts.into_iter().map(text).collect();
    Inline::new(InlineKind::Hyperlink, content, NodeData::with_uri(uri))
}

pub fn asset_block(url: &str, title: Option<&str>) -> Block {
    let data = NodeData::with_target(Target::asset(url, title));
    Block::with_data(BlockKind::EmbeddedAsset, vec![], data)
}

pub fn entry_block(id: &str) -> Block {
    let data = NodeData::with_target(Target::entry(id));
    Block::with_data(BlockKind::EmbeddedEntry, vec![], data)
}
