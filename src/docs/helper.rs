//! # Helpers
//!
//! This module contains some functions to create nodes programmatically.
use super::{
    CodeBlockAttrs, DocMark, DocNode, Docs, HeadingAttrs, ImageAttrs, MathAttrs, UnknownNode,
};
use crate::model::{self, AttrNode, Block, Leaf, TextNode};

type Fragment = model::Fragment<Docs>;

impl From<&str> for Fragment {
    fn from(s: &str) -> Fragment {
        Fragment::from(vec![DocNode::from(s)])
    }
}

impl From<DocNode> for Fragment {
    fn from(node: DocNode) -> Fragment {
        Fragment::from(vec![node])
    }
}

/// Create a document node.
pub fn doc<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::Doc(Block {
        content: content.into(),
    })
}

/// Create a paragraph node.
pub fn p<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::Paragraph(Block {
        content: content.into(),
    })
}

/// Create a heading node.
pub fn h<A: Into<Fragment>>(level: u8, content: A) -> DocNode {
    DocNode::Heading(AttrNode {
        attrs: HeadingAttrs { level },
        content: content.into(),
    })
}

/// Create a heading (level 1) node.
pub fn h1<A: Into<Fragment>>(content: A) -> DocNode {
    h(1, content)
}

/// Create a heading (level 2) node.
pub fn h2<A: Into<Fragment>>(content: A) -> DocNode {
    h(2, content)
}

/// Create a node.
pub fn node<A: Into<DocNode>>(src: A) -> DocNode {
    src.into()
}

/// Create a text node with the given marks, in application order.
pub fn marked(content: &str, marks: Vec<DocMark>) -> DocNode {
    DocNode::Text(TextNode {
        text: content.to_owned(),
        marks,
    })
}

/// Create an emphasized text node.
pub fn em(content: &str) -> DocNode {
    marked(content, vec![DocMark::Italic])
}

/// Create a bold text node.
pub fn strong(content: &str) -> DocNode {
    marked(content, vec![DocMark::Bold])
}

/// Create a bullet list node.
pub fn ul<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::BulletList(Block {
        content: content.into(),
    })
}

/// Create an ordered list node.
pub fn ol<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::OrderedList(Block {
        content: content.into(),
    })
}

/// Create a list item node.
pub fn li<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::ListItem(Block {
        content: content.into(),
    })
}

/// Create a code block node.
pub fn code_block<A: Into<Fragment>>(language: &str, content: A) -> DocNode {
    DocNode::CodeBlock(AttrNode {
        attrs: CodeBlockAttrs {
            language: language.to_owned(),
        },
        content: content.into(),
    })
}

/// Create a blockquote node.
pub fn blockquote<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::Blockquote(Block {
        content: content.into(),
    })
}

/// Create a horizontal rule node.
pub fn hr() -> DocNode {
    DocNode::HorizontalRule
}

/// Create an image node.
pub fn img(src: &str, alt: &str) -> DocNode {
    DocNode::Image(Leaf {
        attrs: ImageAttrs {
            src: src.to_owned(),
            alt: alt.to_owned(),
            title: String::new(),
        },
    })
}

/// Create an inline math node.
pub fn math(latex: &str) -> DocNode {
    DocNode::Math(Leaf {
        attrs: MathAttrs {
            latex: latex.to_owned(),
        },
    })
}

/// Create a page break node.
pub fn page_break() -> DocNode {
    DocNode::PageBreak
}

/// Create a table node.
pub fn table<A: Into<Fragment>>(rows: A) -> DocNode {
    DocNode::Table(Block {
        content: rows.into(),
    })
}

/// Create a table row node.
pub fn tr<A: Into<Fragment>>(cells: A) -> DocNode {
    DocNode::TableRow(Block {
        content: cells.into(),
    })
}

/// Create a header cell node.
pub fn th<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::TableHeader(Block {
        content: content.into(),
    })
}

/// Create a table cell node.
pub fn td<A: Into<Fragment>>(content: A) -> DocNode {
    DocNode::TableCell(Block {
        content: content.into(),
    })
}

/// Create a node of a kind the schema does not know.
pub fn unknown<A: Into<Fragment>>(kind: &str, content: A) -> DocNode {
    DocNode::Unknown(UnknownNode {
        kind: kind.to_owned(),
        content: content.into(),
    })
}
