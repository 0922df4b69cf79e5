#![warn(missing_docs)]
//! # The Docs document core
//!
//! This crate is the document model behind the Docs editor. It holds the
//! typed tree of nodes that the editing surface produces, a Markdown
//! exporter for that tree, and the local store that keeps documents between
//! sessions. The editing surface itself (input, selection, undo) lives in
//! the editor framework and hands trees over as JSON.

#[macro_use]
extern crate derive_new;

pub mod docs;
pub mod model;
pub mod storage;
