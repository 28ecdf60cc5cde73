//! # Document Model
//!
//! The input tree: a [`Document`] of [`Node`]s, each a [`Block`], [`Inline`]
//! or [`Text`] leaf. The model mirrors the JSON node shape
//! (`nodeType`/`content`/`data`/`marks`/`value`) and is never mutated by the
//! converters.
//!
//! ## Modules
//!
//! - **`kinds`**: `BlockKind`, `InlineKind`, `MarkKind` and the tag strings they parse
//! - **`data`**: the `data` payload (`uri`, referenced target) and `Localized` fields
//! - **`node`**: the tree types and their deserialization

pub mod data;
pub mod kinds;
pub mod node;

pub use data::{AssetFile, Fields, Localized, NodeData, Sys, Target};
pub use kinds::{BlockKind, InlineKind, MarkKind};
pub use node::{Block, Document, Inline, Mark, Node, Text};
