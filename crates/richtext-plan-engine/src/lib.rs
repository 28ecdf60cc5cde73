pub mod io;
pub mod model;
pub mod plan;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use model::{Block, BlockKind, Document, Inline, InlineKind, Node, Text};
pub use plan::{
    ListType, PlanOptions, RenderBlock, RenderPlan, Segment, TableRow, document_to_render_plan,
    document_to_render_plan_with_options, rich_text_to_plain_string,
    rich_text_to_plain_string_with_options,
};
