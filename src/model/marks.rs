use super::Schema;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The ordered marks applied to one text span.
///
/// The order is the order the marks were applied in by the editor. It is
/// kept as a list rather than a set because exports nest their wrappers in
/// exactly this order.
#[allow(type_alias_bounds)]
pub type MarkList<S: Schema> = Vec<S::Mark>;

/// The methods that a mark type needs to implement.
pub trait Mark: Serialize + for<'de> Deserialize<'de> + Debug + Clone + PartialEq + Eq {}
