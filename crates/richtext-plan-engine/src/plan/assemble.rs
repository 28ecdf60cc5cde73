use crate::model::{Block, BlockKind, Document, Node, NodeData};

use super::{
    context::FormattingContext,
    marks::MarkFlags,
    merge::merge_segments,
    options::PlanOptions,
    table::extract_table_rows,
    types::{RenderBlock, RenderPlan, Segment},
    walker::{process_block, process_node},
};

/// Converts a document into a render plan with default options.
pub fn document_to_render_plan(document: &Document) -> RenderPlan {
    document_to_render_plan_with_options(document, &PlanOptions::default())
}

/// Converts a document into a render plan.
///
/// One render block per top-level node, in document order. Nodes that
/// resolve to nothing (empty paragraphs, empty tables, assets without a URL)
/// are dropped; horizontal rules are always kept.
pub fn document_to_render_plan_with_options(
    document: &Document,
    options: &PlanOptions,
) -> RenderPlan {
    let blocks = document
        .content
        .iter()
        .filter_map(|node| render_top_level(node, options))
        .collect();
    RenderPlan { blocks }
}

fn render_top_level(node: &Node, options: &PlanOptions) -> Option<RenderBlock> {
    let Node::Block(block) = node else {
        log::trace!("top-level inline or text node; walking as text");
        return text_block(process_node(node, FormattingContext::root(), options));
    };

    log::trace!("render block for {:?}", block.kind);
    match &block.kind {
        BlockKind::Table => {
            let rows = extract_table_rows(block, options);
            (!rows.is_empty()).then_some(RenderBlock::Table { rows })
        }
        BlockKind::EmbeddedAsset => image_block(block, options),
        BlockKind::EmbeddedEntry => Some(RenderBlock::Text {
            segments: vec![embedded_entry_segment(&block.data, options)],
        }),
        BlockKind::Hr => Some(RenderBlock::Hr),
        _ => text_block(process_block(block, FormattingContext::root(), options)),
    }
}

fn text_block(segments: Vec<Segment>) -> Option<RenderBlock> {
    let segments = merge_segments(segments);
    (!segments.is_empty()).then_some(RenderBlock::Text { segments })
}

fn image_block(block: &Block, options: &PlanOptions) -> Option<RenderBlock> {
    let Some(url) = block.data.file_url(&options.locale) else {
        log::debug!("embedded asset has no file URL; dropping it");
        return None;
    };
    Some(RenderBlock::Image {
        url: options.absolute_url(url),
        title: block.data.asset_title(&options.locale).to_string(),
    })
}

/// `[Embedded: <title>]`, shared with the plain-text output.
pub(crate) fn embedded_entry_label(data: &NodeData, options: &PlanOptions) -> String {
    format!("[Embedded: {}]", data.entry_title(&options.locale))
}

fn embedded_entry_segment(data: &NodeData, options: &PlanOptions) -> Segment {
    Segment::styled(
        embedded_entry_label(data, options),
        MarkFlags::italic(),
        FormattingContext::root(),
    )
}
