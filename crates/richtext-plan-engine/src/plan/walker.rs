use crate::model::{Block, BlockKind, Node, Text};

use super::{
    context::FormattingContext,
    inline::resolve_inline,
    marks::{MarkFlags, resolve_marks},
    options::PlanOptions,
    types::{ListType, Segment},
};

/// Walks a block subtree into a flat, unmerged segment sequence.
///
/// Heading, list and blockquote nodes derive a new context for their
/// children; everything else passes `ctx` through. Unrecognized blocks are
/// walked like paragraphs so any reachable text is still collected.
pub fn process_block(
    block: &Block,
    ctx: FormattingContext,
    options: &PlanOptions,
) -> Vec<Segment> {
    match &block.kind {
        BlockKind::Heading(level) => {
            walk_children(&block.content, ctx.with_heading(*level), options)
        }
        BlockKind::Paragraph | BlockKind::TableCell | BlockKind::TableHeaderCell => {
            walk_children(&block.content, ctx, options)
        }
        BlockKind::Blockquote => walk_children(&block.content, ctx.in_blockquote(), options),
        BlockKind::UnorderedList => walk_list(block, ListType::Unordered, ctx, options),
        BlockKind::OrderedList => walk_list(block, ListType::Ordered, ctx, options),
        BlockKind::Table => flatten_table(block, ctx, options),
        BlockKind::Other(tag) => {
            log::debug!("unrecognized block `{tag}`; collecting reachable text");
            walk_children(&block.content, ctx, options)
        }
        BlockKind::Document
        | BlockKind::ListItem
        | BlockKind::TableRow
        | BlockKind::Hr
        | BlockKind::EmbeddedAsset
        | BlockKind::EmbeddedEntry => walk_children(&block.content, ctx, options),
    }
}

/// Walks any node: text leaves, inline nodes and blocks.
pub fn process_node(node: &Node, ctx: FormattingContext, options: &PlanOptions) -> Vec<Segment> {
    match node {
        Node::Text(text) => vec![text_segment(text, ctx)],
        Node::Inline(inline) => resolve_inline(inline, ctx, options),
        Node::Block(block) => process_block(block, ctx, options),
    }
}

/// Concatenated text of a segment sequence.
pub fn concat_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

fn text_segment(text: &Text, ctx: FormattingContext) -> Segment {
    Segment::styled(text.value.as_str(), resolve_marks(text), ctx)
}

fn walk_children(nodes: &[Node], ctx: FormattingContext, options: &PlanOptions) -> Vec<Segment> {
    nodes
        .iter()
        .flat_map(|child| process_node(child, ctx, options))
        .collect()
}

/// Every list item shares one derived context; non-item children are dropped.
fn walk_list(
    list: &Block,
    list_type: ListType,
    ctx: FormattingContext,
    options: &PlanOptions,
) -> Vec<Segment> {
    let item_ctx = ctx.entering_list(list_type);
    list.children_of_kind(&BlockKind::ListItem)
        .flat_map(|item| walk_children(&item.content, item_ctx, options))
        .collect()
}

/// Text fallback for tables: one unformatted segment with a line per row and
/// tab-separated cells.
fn flatten_table(table: &Block, ctx: FormattingContext, options: &PlanOptions) -> Vec<Segment> {
    let rows: Vec<String> = table
        .children_of_kind(&BlockKind::TableRow)
        .map(|row| {
            let cells: Vec<String> = row
                .child_blocks()
                .filter(|cell| cell.kind.is_table_cell())
                .map(|cell| concat_text(&process_block(cell, ctx, options)))
                .collect();
            cells.join("\t")
        })
        .collect();

    let text = rows.join("\n");
    if text.is_empty() {
        return Vec::new();
    }
    vec![Segment::styled(text, MarkFlags::default(), ctx)]
}
