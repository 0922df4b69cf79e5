//! # The document model
//!
//! This module holds the schema-generic tree types: a document is a [`Node`]
//! whose children are also nodes, grouped in a [`Fragment`]. The concrete
//! node and mark types are supplied by a [`Schema`] implementation.
mod fragment;
mod marks;
mod node;
mod schema;

pub use fragment::Fragment;
pub use marks::{Mark, MarkList};
pub use node::Node;
pub use schema::{AttrNode, Block, Leaf, Schema, TextNode};
