use super::{DocMark, DocNode};
use crate::model::Schema;

/// The Docs schema type
pub struct Docs;

impl Schema for Docs {
    type Node = DocNode;
    type Mark = DocMark;
}

/// The node-spec type for the Docs schema
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DocNodeType {
    /// The document root
    Doc,
    /// A paragraph
    Paragraph,
    /// A text node
    Text,
    /// A heading, e.g. `<h1>`
    Heading,
    /// A bullet list
    BulletList,
    /// An ordered list
    OrderedList,
    /// A list item
    ListItem,
    /// A code block
    CodeBlock,
    /// A blockquote
    Blockquote,
    /// A horizontal line `<hr>`
    HorizontalRule,
    /// An image `<img>`
    Image,
    /// An inline math formula
    Math,
    /// A manual page break
    PageBreak,
    /// A table
    Table,
    /// A table row
    TableRow,
    /// A header cell
    TableHeader,
    /// A table cell
    TableCell,
    /// A kind this schema does not know
    Unknown,
}

impl DocNodeType {
    /// The kind tag used in the editor's JSON interchange format.
    ///
    /// `Unknown` has no fixed tag; a node of that kind carries the tag the
    /// editor reported.
    pub fn name(self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Paragraph => "paragraph",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::BulletList => "bulletList",
            Self::OrderedList => "orderedList",
            Self::ListItem => "listItem",
            Self::CodeBlock => "codeBlock",
            Self::Blockquote => "blockquote",
            Self::HorizontalRule => "horizontalRule",
            Self::Image => "image",
            Self::Math => "math",
            Self::PageBreak => "pageBreak",
            Self::Table => "table",
            Self::TableRow => "tableRow",
            Self::TableHeader => "tableHeader",
            Self::TableCell => "tableCell",
            Self::Unknown => "unknown",
        }
    }

    /// Whether nodes of this kind organize block-level content.
    pub fn is_block(self) -> bool {
        !matches!(self, Self::Text | Self::Image | Self::Math | Self::Unknown)
    }

    /// Whether nodes of this kind participate in inline content.
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Text | Self::Image | Self::Math)
    }
}
