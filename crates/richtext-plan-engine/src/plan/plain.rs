use crate::model::{BlockKind, Document, Node};

use super::{
    assemble::embedded_entry_label,
    context::FormattingContext,
    options::PlanOptions,
    walker::{concat_text, process_block, process_node},
};

/// Line emitted for a horizontal rule.
pub const HR_LINE: &str = "---";

/// Flattens a document into plain text with default options.
pub fn rich_text_to_plain_string(document: Option<&Document>) -> String {
    rich_text_to_plain_string_with_options(document, &PlanOptions::default())
}

/// Flattens a document into plain text: one line per top-level node that has
/// any text, joined with `\n` and no trailing newline.
///
/// A table gives one line per row, with tab-separated cells.
pub fn rich_text_to_plain_string_with_options(
    document: Option<&Document>,
    options: &PlanOptions,
) -> String {
    let Some(document) = document else {
        return String::new();
    };

    document
        .content
        .iter()
        .map(|node| plain_line(node, options))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn plain_line(node: &Node, options: &PlanOptions) -> String {
    let root = FormattingContext::root();
    let Node::Block(block) = node else {
        return concat_text(&process_node(node, root, options));
    };

    match &block.kind {
        BlockKind::Hr => HR_LINE.to_string(),
        BlockKind::EmbeddedAsset => format!("[{}]", block.data.asset_title(&options.locale)),
        BlockKind::EmbeddedEntry => embedded_entry_label(&block.data, options),
        _ => concat_text(&process_block(block, root, options)),
    }
}
