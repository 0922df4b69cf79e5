//! # The Docs schema
//!
//! This module is derived from the document schema of the Docs editor: the
//! node and mark vocabulary the editing surface produces, its JSON
//! interchange shape, and the Markdown export of a document tree.
mod attrs;
mod de;
pub mod helper;
mod schema;
mod to_markdown;

use crate::model::{AttrNode, Block, Fragment, Leaf, Mark, MarkList, Node, TextNode};
pub use attrs::{CodeBlockAttrs, HeadingAttrs, ImageAttrs, MathAttrs};
pub use schema::{DocNodeType, Docs};
pub use to_markdown::to_markdown;

use self::de::NodeData;
use serde::{Deserialize, Serialize};

/// The node type for the Docs schema
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "NodeData", into = "NodeData")]
pub enum DocNode {
    /// The document root
    Doc(Block<Docs>),
    /// A paragraph
    Paragraph(Block<Docs>),
    /// A text node
    Text(TextNode<Docs>),
    /// A heading, e.g. `<h1>`
    Heading(AttrNode<Docs, HeadingAttrs>),
    /// A bullet list
    BulletList(Block<Docs>),
    /// An ordered list
    OrderedList(Block<Docs>),
    /// A list item
    ListItem(Block<Docs>),
    /// A code block
    CodeBlock(AttrNode<Docs, CodeBlockAttrs>),
    /// A blockquote
    Blockquote(Block<Docs>),
    /// A horizontal line `<hr>`
    HorizontalRule,
    /// An image `<img>`
    Image(Leaf<ImageAttrs>),
    /// An inline math formula
    Math(Leaf<MathAttrs>),
    /// A manual page break
    PageBreak,
    /// A table
    Table(Block<Docs>),
    /// A table row
    TableRow(Block<Docs>),
    /// A header cell
    TableHeader(Block<Docs>),
    /// A table cell
    TableCell(Block<Docs>),
    /// A node of a kind this schema does not know
    Unknown(UnknownNode),
}

/// A node whose kind this schema does not know.
///
/// The editor may emit kinds that are newer than this crate. The children
/// are kept, so an export can still render the parts it understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNode {
    /// The kind tag the editor reported
    pub kind: String,
    /// The children of the node
    pub content: Fragment<Docs>,
}

impl DocNode {
    /// The schema-level kind of this node
    pub fn kind(&self) -> DocNodeType {
        match self {
            Self::Doc(_) => DocNodeType::Doc,
            Self::Paragraph(_) => DocNodeType::Paragraph,
            Self::Text(_) => DocNodeType::Text,
            Self::Heading(_) => DocNodeType::Heading,
            Self::BulletList(_) => DocNodeType::BulletList,
            Self::OrderedList(_) => DocNodeType::OrderedList,
            Self::ListItem(_) => DocNodeType::ListItem,
            Self::CodeBlock(_) => DocNodeType::CodeBlock,
            Self::Blockquote(_) => DocNodeType::Blockquote,
            Self::HorizontalRule => DocNodeType::HorizontalRule,
            Self::Image(_) => DocNodeType::Image,
            Self::Math(_) => DocNodeType::Math,
            Self::PageBreak => DocNodeType::PageBreak,
            Self::Table(_) => DocNodeType::Table,
            Self::TableRow(_) => DocNodeType::TableRow,
            Self::TableHeader(_) => DocNodeType::TableHeader,
            Self::TableCell(_) => DocNodeType::TableCell,
            Self::Unknown(_) => DocNodeType::Unknown,
        }
    }
}

impl From<TextNode<Docs>> for DocNode {
    fn from(text_node: TextNode<Docs>) -> Self {
        Self::Text(text_node)
    }
}

impl From<&str> for DocNode {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl Node<Docs> for DocNode {
    fn text_node(&self) -> Option<&TextNode<Docs>> {
        if let Self::Text(node) = self {
            Some(node)
        } else {
            None
        }
    }

    fn text<A: Into<String>>(text: A) -> Self {
        Self::Text(TextNode {
            text: text.into(),
            marks: MarkList::<Docs>::default(),
        })
    }

    fn content(&self) -> Option<&Fragment<Docs>> {
        match self {
            Self::Doc(Block { content }) => Some(content),
            Self::Paragraph(Block { content }) => Some(content),
            Self::Text(_) => None,
            Self::Heading(AttrNode { content, .. }) => Some(content),
            Self::BulletList(Block { content }) => Some(content),
            Self::OrderedList(Block { content }) => Some(content),
            Self::ListItem(Block { content }) => Some(content),
            Self::CodeBlock(AttrNode { content, .. }) => Some(content),
            Self::Blockquote(Block { content }) => Some(content),
            Self::HorizontalRule => None,
            Self::Image(_) => None,
            Self::Math(_) => None,
            Self::PageBreak => None,
            Self::Table(Block { content }) => Some(content),
            Self::TableRow(Block { content }) => Some(content),
            Self::TableHeader(Block { content }) => Some(content),
            Self::TableCell(Block { content }) => Some(content),
            Self::Unknown(node) => Some(&node.content),
        }
    }

    fn is_block(&self) -> bool {
        self.kind().is_block()
    }
}

/// The marks that can be on some text span
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocMark {
    /// bold
    Bold,
    /// italics
    Italic,
    /// struck through
    Strike,
    /// monospace
    Code,
    /// underlined
    Underline,
    /// raised above the baseline
    Superscript,
    /// lowered below the baseline
    Subscript,
    /// A mark this schema does not know; it renders as plain text
    #[serde(other)]
    Unknown,
}

impl Mark for DocMark {}
