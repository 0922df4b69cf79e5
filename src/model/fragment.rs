use super::{Node, Schema};
use derivative::Derivative;
use serde::{Deserialize, Serialize, Serializer};

/// A fragment represents a node's collection of child nodes.
///
/// The order of the children is the reading order of the document and is
/// preserved through (de)serialization and export.
#[derive(Derivative, Deserialize)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
#[serde(from = "Vec<S::Node>")]
pub struct Fragment<S: Schema> {
    inner: Vec<S::Node>,
}

impl<S: Schema> Fragment<S> {
    /// Create a new empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this fragment has no children
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get a slice of all child nodes
    pub fn children(&self) -> &[S::Node] {
        &self.inner[..]
    }

    /// The first child of the fragment wrapped in `Some`, or `None` if it is empty.
    pub fn first_child(&self) -> Option<&S::Node> {
        self.inner.first()
    }

    /// The last child of the fragment wrapped in `Some`, or `None` if it is empty.
    pub fn last_child(&self) -> Option<&S::Node> {
        self.inner.last()
    }

    /// The number of child nodes in this fragment.
    pub fn child_count(&self) -> usize {
        self.inner.len()
    }

    /// Get the child node at the given index, if it exists.
    pub fn maybe_child(&self, index: usize) -> Option<&S::Node> {
        self.inner.get(index)
    }
}

impl<S: Schema> Default for Fragment<S> {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl<S: Schema> Serialize for Fragment<S> {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<S: Schema> From<Vec<S::Node>> for Fragment<S> {
    fn from(src: Vec<S::Node>) -> Fragment<S> {
        Fragment { inner: src }
    }
}

impl<S: Schema> From<Fragment<S>> for Vec<S::Node> {
    fn from(src: Fragment<S>) -> Vec<S::Node> {
        src.inner
    }
}

impl<N, S: 'static, A> From<(A,)> for Fragment<S>
where
    N: Node<S>,
    S: Schema<Node = N>,
    A: Into<N>,
{
    fn from((a,): (A,)) -> Self {
        Self::from(vec![a.into()])
    }
}

impl<S, A, B> From<(A, B)> for Fragment<S>
where
    S: Schema,
    A: Into<S::Node>,
    B: Into<S::Node>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::from(vec![a.into(), b.into()])
    }
}

impl<S, A, B, C> From<(A, B, C)> for Fragment<S>
where
    S: Schema,
    A: Into<S::Node>,
    B: Into<S::Node>,
    C: Into<S::Node>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::from(vec![a.into(), b.into(), c.into()])
    }
}
