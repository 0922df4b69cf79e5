use super::de;
use serde::{Deserialize, Serialize};

/// Attributes for a heading (i.e. `<h1>`, `<h2>`, ...)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HeadingAttrs {
    /// The depth of the heading (i.e. `1` for `<h1>`)
    #[serde(default = "level_one")]
    pub level: u8,
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        HeadingAttrs { level: level_one() }
    }
}

fn level_one() -> u8 {
    1
}

/// Attributes for a code block
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CodeBlockAttrs {
    /// The language the block is highlighted as; empty for plain code
    #[serde(default, deserialize_with = "de::deserialize_or_default")]
    pub language: String,
}

/// Attributes for an image
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImageAttrs {
    /// Source URL
    #[serde(default, deserialize_with = "de::deserialize_or_default")]
    pub src: String,
    /// Alternative Text (Accessibility)
    #[serde(default, deserialize_with = "de::deserialize_or_default")]
    pub alt: String,
    /// Title (Tooltip)
    #[serde(default, deserialize_with = "de::deserialize_or_default")]
    pub title: String,
}

/// Attributes for an inline math formula
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MathAttrs {
    /// The LaTeX source of the formula
    #[serde(default = "default_latex")]
    pub latex: String,
}

impl Default for MathAttrs {
    fn default() -> Self {
        MathAttrs {
            latex: default_latex(),
        }
    }
}

// The placeholder formula the editor's math extension inserts.
fn default_latex() -> String {
    "E=mc^2".to_owned()
}
