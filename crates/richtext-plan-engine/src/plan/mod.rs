//! # Render Planning
//!
//! Converts a [`Document`](crate::model::Document) into a [`RenderPlan`]: a
//! flat list of text, image, rule and table blocks whose text is already
//! split into uniformly formatted [`Segment`]s. Also flattens documents to
//! plain text.
//!
//! ## Modules
//!
//! - **`types`**: output types (`RenderPlan`, `RenderBlock`, `Segment`, `TableRow`)
//! - **`context`**: `FormattingContext` inherited down the tree
//! - **`marks`**: text marks to bold/italic/underline/code flags
//! - **`inline`**: hyperlinks and embedded inline entries
//! - **`walker`**: block subtree to an unmerged segment sequence
//! - **`merge`**: coalescing adjacent segments with identical formatting
//! - **`table`**: structured table rows
//! - **`assemble`**: top-level render plan assembly
//! - **`plain`**: plain-text flattening
//! - **`options`**: locale and URL-scheme settings
//!
//! ## Pipeline
//!
//! ```text
//! Document ─► assemble ─┬─► walker ─► merge ─► RenderBlock::Text
//!                       ├─► table (walker + merge per cell) ─► RenderBlock::Table
//!                       ├─► embedded asset ─► RenderBlock::Image
//!                       └─► hr ─► RenderBlock::Hr
//! ```
//!
//! Conversion is total: malformed or unknown nodes degrade to whatever text
//! is reachable, and nothing here returns an error.

pub mod assemble;
pub mod context;
pub mod inline;
pub mod marks;
pub mod merge;
pub mod options;
pub mod plain;
pub mod table;
pub mod types;
pub mod walker;

pub use assemble::{document_to_render_plan, document_to_render_plan_with_options};
pub use context::FormattingContext;
pub use marks::{MarkFlags, resolve_marks};
pub use merge::merge_segments;
pub use options::PlanOptions;
pub use plain::{rich_text_to_plain_string, rich_text_to_plain_string_with_options};
pub use table::extract_table_rows;
pub use types::{ListType, RenderBlock, RenderPlan, Segment, TableRow};
pub use walker::{concat_text, process_block, process_node};
