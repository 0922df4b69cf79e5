//! JSON interchange with the editor.
//!
//! The editor hands documents over in a generic JSON shape: a `type` tag
//! plus optional `attrs`, `content`, `text` and `marks`. Decoding is total:
//! unknown kinds keep their children, partial or malformed attribute
//! objects fall back to their defaults.
use super::{DocMark, DocNode, Docs, UnknownNode};
use crate::model::{AttrNode, Block, Fragment, Leaf, TextNode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub(crate) fn deserialize_or_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// The raw shape of a node as the editor emits it.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct NodeData {
    #[serde(rename = "type")]
    kind: String,
    #[serde(
        default,
        deserialize_with = "deserialize_or_default",
        skip_serializing_if = "Map::is_empty"
    )]
    attrs: Map<String, Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_or_default",
        skip_serializing_if = "Fragment::is_empty"
    )]
    content: Fragment<Docs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    marks: Vec<DocMark>,
}

impl NodeData {
    fn new(kind: &str) -> Self {
        NodeData {
            kind: kind.to_owned(),
            attrs: Map::new(),
            content: Fragment::new(),
            text: None,
            marks: Vec::new(),
        }
    }
}

/// Decode an attribute object, falling back to the defaults when the editor
/// sent something this schema cannot read.
fn unpack_attrs<A: DeserializeOwned + Default>(attrs: Map<String, Value>) -> A {
    serde_json::from_value(Value::Object(attrs)).unwrap_or_default()
}

fn pack_attrs<A: Serialize>(attrs: &A) -> Map<String, Value> {
    match serde_json::to_value(attrs) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

impl From<NodeData> for DocNode {
    fn from(data: NodeData) -> Self {
        let NodeData {
            kind,
            attrs,
            content,
            text,
            marks,
        } = data;
        match kind.as_str() {
            "doc" => DocNode::Doc(Block { content }),
            "paragraph" => DocNode::Paragraph(Block { content }),
            "text" => DocNode::Text(TextNode {
                marks,
                text: text.unwrap_or_default(),
            }),
            "heading" => DocNode::Heading(AttrNode {
                attrs: unpack_attrs(attrs),
                content,
            }),
            "bulletList" => DocNode::BulletList(Block { content }),
            "orderedList" => DocNode::OrderedList(Block { content }),
            "listItem" => DocNode::ListItem(Block { content }),
            "codeBlock" => DocNode::CodeBlock(AttrNode {
                attrs: unpack_attrs(attrs),
                content,
            }),
            "blockquote" => DocNode::Blockquote(Block { content }),
            "horizontalRule" => DocNode::HorizontalRule,
            "image" => DocNode::Image(Leaf {
                attrs: unpack_attrs(attrs),
            }),
            "math" => DocNode::Math(Leaf {
                attrs: unpack_attrs(attrs),
            }),
            "pageBreak" => DocNode::PageBreak,
            "table" => DocNode::Table(Block { content }),
            "tableRow" => DocNode::TableRow(Block { content }),
            "tableHeader" => DocNode::TableHeader(Block { content }),
            "tableCell" => DocNode::TableCell(Block { content }),
            _ => DocNode::Unknown(UnknownNode { kind, content }),
        }
    }
}

impl From<DocNode> for NodeData {
    fn from(node: DocNode) -> Self {
        let kind = node.kind().name();
        match node {
            DocNode::Doc(block)
            | DocNode::Paragraph(block)
            | DocNode::BulletList(block)
            | DocNode::OrderedList(block)
            | DocNode::ListItem(block)
            | DocNode::Blockquote(block)
            | DocNode::Table(block)
            | DocNode::TableRow(block)
            | DocNode::TableHeader(block)
            | DocNode::TableCell(block) => NodeData {
                content: block.content,
                ..NodeData::new(kind)
            },
            DocNode::Text(text_node) => NodeData {
                text: Some(text_node.text),
                marks: text_node.marks,
                ..NodeData::new(kind)
            },
            DocNode::Heading(heading) => NodeData {
                attrs: pack_attrs(&heading.attrs),
                content: heading.content,
                ..NodeData::new(kind)
            },
            DocNode::CodeBlock(code) => NodeData {
                attrs: pack_attrs(&code.attrs),
                content: code.content,
                ..NodeData::new(kind)
            },
            DocNode::HorizontalRule | DocNode::PageBreak => NodeData::new(kind),
            DocNode::Image(leaf) => NodeData {
                attrs: pack_attrs(&leaf.attrs),
                ..NodeData::new(kind)
            },
            DocNode::Math(leaf) => NodeData {
                attrs: pack_attrs(&leaf.attrs),
                ..NodeData::new(kind)
            },
            DocNode::Unknown(unknown) => NodeData {
                content: unknown.content,
                ..NodeData::new(&unknown.kind)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::docs::helper::{h, math, node, p, unknown};
    use crate::docs::DocNode;
    use serde_json::json;

    #[test]
    fn test_heading_level_defaults_to_one() {
        let json = r#"{"type": "heading", "content": [{"type": "text", "text": "Title"}]}"#;
        let decoded: DocNode = serde_json::from_str(json).unwrap();
        assert_eq!(decoded, h(1, ("Title",)));
    }

    #[test]
    fn test_null_attrs_are_tolerated() {
        let json = r#"{"type": "codeBlock", "attrs": null, "content": [{"type": "text", "text": "x"}]}"#;
        let decoded: DocNode = serde_json::from_str(json).unwrap();
        assert!(matches!(decoded, DocNode::CodeBlock(_)));
    }

    #[test]
    fn test_malformed_attrs_fall_back_to_defaults() {
        let json = r#"{"type": "math", "attrs": {"latex": 42}}"#;
        let decoded: DocNode = serde_json::from_str(json).unwrap();
        assert_eq!(decoded, math("E=mc^2"));
    }

    #[test]
    fn test_unknown_marks_are_kept_as_fallback() {
        let json = r#"{"type": "text", "text": "x", "marks": [{"type": "textStyle", "attrs": {"color": "red"}}]}"#;
        let decoded: DocNode = serde_json::from_str(json).unwrap();
        match &decoded {
            DocNode::Text(text_node) => {
                assert_eq!(text_node.marks, vec![crate::docs::DocMark::Unknown])
            }
            other => panic!("expected a text node, got {:?}", other),
        }
    }

    #[test]
    fn test_serialize_heading() {
        assert_eq!(
            serde_json::to_value(h(2, ("Title",))).unwrap(),
            json!({
                "type": "heading",
                "attrs": {"level": 2},
                "content": [{"type": "text", "text": "Title"}]
            })
        );
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        assert_eq!(
            serde_json::to_value(p(vec![])).unwrap(),
            json!({"type": "paragraph"})
        );
    }

    #[test]
    fn test_unknown_node_round_trip_keeps_the_tag() {
        let value = serde_json::to_value(unknown("futureNode", (node("x"),))).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "futureNode",
                "content": [{"type": "text", "text": "x"}]
            })
        );
    }

    #[test]
    fn test_document_round_trip() {
        let original = json!({
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Notes"}]},
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "bold", "marks": [{"type": "bold"}]}
                ]}
            ]
        });
        let decoded: DocNode = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(decoded).unwrap(), original);
    }
}
