use super::{Fragment, Schema, TextNode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// This trait represents a node in the tree that makes up a document. So a
/// document is an instance of Node, with children that are also instances
/// of Node.
pub trait Node<S: Schema<Node = Self> + 'static>:
    Serialize + for<'de> Deserialize<'de> + Clone + Debug + PartialEq + Eq
{
    /// Get the text node, if this is one
    fn text_node(&self) -> Option<&TextNode<S>>;

    /// Creates a text node without marks
    fn text<A: Into<String>>(text: A) -> Self;

    /// A container holding the node's children.
    fn content(&self) -> Option<&Fragment<S>>;

    /// Get the child node at the given index, if it exists.
    fn child(&self, index: usize) -> Option<&Self> {
        self.content().and_then(|c| c.maybe_child(index))
    }

    /// The number of children that the node has.
    fn child_count(&self) -> usize {
        self.content().map_or(0, Fragment::child_count)
    }

    /// True when this is a leaf node.
    fn is_leaf(&self) -> bool {
        self.content().is_none()
    }

    /// True when this is a block (non-inline) node
    fn is_block(&self) -> bool;

    /// True when this is a text node.
    fn is_text(&self) -> bool {
        self.text_node().is_some()
    }

    /// Concatenates all the text nodes found in this node and its children.
    fn text_content(&self) -> String {
        if let Some(node) = self.text_node() {
            node.text.clone()
        } else {
            self.content()
                .map(|c| {
                    c.children()
                        .iter()
                        .map(Self::text_content)
                        .collect::<String>()
                })
                .unwrap_or_default()
        }
    }
}
