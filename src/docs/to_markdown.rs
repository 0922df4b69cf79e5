//! Markdown export of document trees.
use super::{DocMark, DocNode, Docs};
use crate::model::{AttrNode, Block, Fragment, Leaf, Node, TextNode};

/// Serialize a document to a Markdown string.
///
/// This is total: a missing document serializes to the empty string, a node
/// of an unknown kind degrades to the concatenation of its children, and
/// missing attributes fall back to their defaults. The output is the same
/// for the same tree on every call.
pub fn to_markdown(doc: Option<&DocNode>) -> String {
    match doc {
        Some(node) => serialize_node(node),
        None => String::new(),
    }
}

fn serialize_node(node: &DocNode) -> String {
    match node {
        DocNode::Doc(Block { content }) => join_children(content, "\n\n"),
        DocNode::Paragraph(Block { content }) => join_children(content, ""),
        DocNode::Text(text_node) => render_marks(text_node),
        DocNode::Heading(AttrNode { attrs, content }) => format!(
            "{} {}",
            "#".repeat(usize::from(attrs.level)),
            join_children(content, "")
        ),
        DocNode::BulletList(Block { content }) => {
            let items: Vec<String> = content
                .children()
                .iter()
                .map(|item| render_list_item(item, None))
                .collect();
            items.join("\n")
        }
        DocNode::OrderedList(Block { content }) => {
            let items: Vec<String> = content
                .children()
                .iter()
                .enumerate()
                .map(|(index, item)| render_list_item(item, Some(index + 1)))
                .collect();
            items.join("\n")
        }
        // A list item outside a list renders as a bullet.
        DocNode::ListItem(Block { content }) => format!("- {}", join_children(content, "")),
        DocNode::CodeBlock(AttrNode { attrs, content }) => {
            // Only the text payloads count; marks inside a code block are
            // not rendered.
            let code: String = content
                .children()
                .iter()
                .filter_map(Node::text_node)
                .map(|text_node| text_node.text.as_str())
                .collect();
            format!("```{}\n{}\n```", attrs.language, code)
        }
        DocNode::Blockquote(Block { content }) => {
            let body = join_children(content, "\n");
            let lines: Vec<String> = body.split('\n').map(|line| format!("> {}", line)).collect();
            lines.join("\n")
        }
        DocNode::HorizontalRule => "---".to_owned(),
        DocNode::Image(Leaf { attrs }) => format!("![{}]({})", attrs.alt, attrs.src),
        DocNode::Math(Leaf { attrs }) => format!("${}$", attrs.latex),
        // Page breaks have no Markdown equivalent.
        DocNode::PageBreak => String::new(),
        DocNode::Table(table) => serialize_table(table),
        DocNode::TableRow(Block { content }) => row_line(content.children()),
        DocNode::TableHeader(Block { content }) | DocNode::TableCell(Block { content }) => {
            escape_pipes(&join_children(content, ""))
        }
        DocNode::Unknown(unknown) => join_children(&unknown.content, ""),
    }
}

fn join_children(content: &Fragment<Docs>, separator: &str) -> String {
    let rendered: Vec<String> = content.children().iter().map(serialize_node).collect();
    rendered.join(separator)
}

/// Apply the marks of a text node around its payload, innermost first, in
/// the order the editor applied them.
fn render_marks(node: &TextNode<Docs>) -> String {
    node.marks
        .iter()
        .fold(node.text.clone(), |text, mark| match mark {
            DocMark::Bold => format!("**{}**", text),
            DocMark::Italic => format!("*{}*", text),
            DocMark::Strike => format!("~~{}~~", text),
            DocMark::Code => format!("`{}`", text),
            DocMark::Underline => format!("<u>{}</u>", text),
            DocMark::Superscript => format!("<sup>{}</sup>", text),
            DocMark::Subscript => format!("<sub>{}</sub>", text),
            DocMark::Unknown => text,
        })
}

fn render_list_item(item: &DocNode, ordinal: Option<usize>) -> String {
    match item {
        DocNode::ListItem(Block { content }) => {
            let prefix = match ordinal {
                Some(position) => format!("{}. ", position),
                None => "- ".to_owned(),
            };
            format!("{}{}", prefix, join_children(content, ""))
        }
        // A list child that is not a list item renders by its own rule.
        other => serialize_node(other),
    }
}

/// Render a table as a GFM pipe table.
///
/// Rows cannot be rendered one by one because the separator row after the
/// header does not exist in the tree; it is synthesized from the header
/// row's cell count.
fn serialize_table(table: &Block<Docs>) -> String {
    let mut markdown = String::new();
    for (index, row) in table.content.children().iter().enumerate() {
        let cells = row.content().map(Fragment::children).unwrap_or(&[]);
        let rendered: Vec<String> = cells.iter().map(table_cell).collect();
        markdown.push_str(&format!("| {} |\n", rendered.join(" | ")));
        if index == 0 {
            let dashes = vec!["---"; cells.len()];
            markdown.push_str(&format!("| {} |\n", dashes.join(" | ")));
        }
    }
    markdown
}

fn table_cell(cell: &DocNode) -> String {
    let text = cell
        .content()
        .map(|content| join_children(content, ""))
        .unwrap_or_default();
    if text.trim().is_empty() {
        // An empty cell still needs a space to hold its column open.
        " ".to_owned()
    } else {
        escape_pipes(&text).replace('\n', "<br>")
    }
}

fn row_line(cells: &[DocNode]) -> String {
    let rendered: Vec<String> = cells.iter().map(serialize_node).collect();
    format!("| {} |", rendered.join(" | "))
}

fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::to_markdown;
    use crate::docs::helper::{
        blockquote, code_block, doc, em, h, h1, hr, img, li, marked, math, node, ol, p, page_break,
        strong, table, td, th, tr, ul, unknown,
    };
    use crate::docs::{DocMark, DocNode};

    fn md(node: &DocNode) -> String {
        to_markdown(Some(node))
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let test_doc = doc((p(("hello",)),));
        assert_eq!(md(&test_doc), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_markdown(None), "");
        assert_eq!(md(&doc(Vec::new())), "");
    }

    #[test]
    fn test_document_joins_blocks_with_a_blank_line() {
        let test_doc = doc((h1(("Title",)), p(("Body",))));
        assert_eq!(md(&test_doc), "# Title\n\nBody");
    }

    #[test]
    fn test_mark_order_is_nesting_order() {
        assert_eq!(md(&marked("hi", vec![DocMark::Bold])), "**hi**");
        // bold is applied first, so the italic stars end up outermost
        assert_eq!(
            md(&marked("hi", vec![DocMark::Bold, DocMark::Italic])),
            "***hi***"
        );
        assert_eq!(
            md(&marked("hi", vec![DocMark::Code, DocMark::Bold])),
            "**`hi`**"
        );
    }

    #[test]
    fn test_mark_rendering_is_stable_across_calls() {
        let text = marked("hi", vec![DocMark::Bold, DocMark::Italic]);
        assert_eq!(md(&text), md(&text));
    }

    #[test]
    fn test_html_fallback_marks() {
        assert_eq!(md(&em("x")), "*x*");
        assert_eq!(md(&marked("x", vec![DocMark::Strike])), "~~x~~");
        assert_eq!(md(&marked("x", vec![DocMark::Underline])), "<u>x</u>");
        assert_eq!(md(&marked("x", vec![DocMark::Superscript])), "<sup>x</sup>");
        assert_eq!(md(&marked("x", vec![DocMark::Subscript])), "<sub>x</sub>");
        assert_eq!(md(&marked("x", vec![DocMark::Unknown])), "x");
    }

    #[test]
    fn test_marked_runs_inside_a_paragraph() {
        let paragraph = p((node("Hello "), strong("World")));
        assert_eq!(md(&paragraph), "Hello **World**");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(md(&h1(("Title",))), "# Title");
        assert_eq!(md(&h(2, ("Title",))), "## Title");
        assert_eq!(md(&h(5, ("Title",))), "##### Title");
    }

    #[test]
    fn test_heading_level_defaults_to_one() {
        let json = r#"{"type": "heading", "content": [{"type": "text", "text": "Title"}]}"#;
        let heading: DocNode = serde_json::from_str(json).unwrap();
        assert_eq!(md(&heading), "# Title");
    }

    #[test]
    fn test_bullet_list() {
        let list = ul((li(("a",)), li(("b",))));
        assert_eq!(md(&list), "- a\n- b");
    }

    #[test]
    fn test_ordered_list_numbering() {
        let list = ol((li(("a",)), li(("b",)), li(("c",))));
        assert_eq!(md(&list), "1. a\n2. b\n3. c");
    }

    #[test]
    fn test_list_item_outside_a_list() {
        assert_eq!(md(&li(("a",))), "- a");
    }

    #[test]
    fn test_list_with_a_foreign_child() {
        let list = ul((li(("a",)), p(("b",))));
        assert_eq!(md(&list), "- a\nb");
    }

    #[test]
    fn test_code_block() {
        let block = code_block("rust", ("fn main() {}",));
        assert_eq!(md(&block), "```rust\nfn main() {}\n```");
        assert_eq!(md(&code_block("", ("x",))), "```\nx\n```");
    }

    #[test]
    fn test_code_block_ignores_marks() {
        let block = code_block("", (marked("x", vec![DocMark::Bold]),));
        assert_eq!(md(&block), "```\nx\n```");
    }

    #[test]
    fn test_blockquote_prefixes_every_line() {
        let quote = blockquote((p(("a",)), p(("b",))));
        assert_eq!(md(&quote), "> a\n> b");
    }

    #[test]
    fn test_empty_blockquote_keeps_its_marker() {
        assert_eq!(md(&blockquote(Vec::new())), "> ");
    }

    #[test]
    fn test_leaves() {
        assert_eq!(md(&hr()), "---");
        assert_eq!(md(&img("a.png", "alt text")), "![alt text](a.png)");
        assert_eq!(md(&math("a^2+b^2=c^2")), "$a^2+b^2=c^2$");
        assert_eq!(md(&page_break()), "");
    }

    #[test]
    fn test_table_shape() {
        let test_table = table((tr((td(("A",)), td(("B",)))), tr((td(("1",)), td(("2",))))));
        assert_eq!(md(&test_table), "| A | B |\n| --- | --- |\n| 1 | 2 |\n");
    }

    #[test]
    fn test_table_header_cells_render_like_cells() {
        let test_table = table((tr((th(("A",)), th(("B",)))), tr((td(("1",)), td(("2",))))));
        assert_eq!(md(&test_table), "| A | B |\n| --- | --- |\n| 1 | 2 |\n");
    }

    #[test]
    fn test_table_escapes_pipes_and_newlines() {
        let test_table = table((tr((td(("a|b",)), td(("x\ny",)))),));
        assert_eq!(md(&test_table), "| a\\|b | x<br>y |\n| --- | --- |\n");
    }

    #[test]
    fn test_table_renders_empty_cells_as_a_space() {
        let test_table = table((tr((td(("  ",)), td(Vec::new()))),));
        assert_eq!(md(&test_table), "|   |   |\n| --- | --- |\n");
    }

    #[test]
    fn test_zero_row_table() {
        assert_eq!(md(&table(Vec::new())), "");
    }

    #[test]
    fn test_separator_width_follows_the_header_row() {
        let test_table = table((tr((th(("A",)), th(("B",)), th(("C",)))), tr((td(("1",)),))));
        assert_eq!(
            md(&test_table),
            "| A | B | C |\n| --- | --- | --- |\n| 1 |\n"
        );
    }

    #[test]
    fn test_standalone_row_and_cell() {
        assert_eq!(md(&tr((td(("a",)), td(("b",))))), "| a | b |");
        assert_eq!(md(&td(("a|b",))), "a\\|b");
    }

    #[test]
    fn test_unknown_kind_concatenates_children() {
        let future = unknown("futureNode", ("x", "y"));
        assert_eq!(md(&future), "xy");
    }

    #[test]
    fn test_export_from_editor_json() {
        let json = r#"{
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Notes"}]},
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "plain "},
                    {"type": "text", "text": "bold", "marks": [{"type": "bold"}]}
                ]},
                {"type": "math", "attrs": {"latex": "a^2+b^2=c^2"}},
                {"type": "pageBreak"},
                {"type": "horizontalRule"}
            ]
        }"#;
        let test_doc: DocNode = serde_json::from_str(json).unwrap();
        assert_eq!(
            to_markdown(Some(&test_doc)),
            "# Notes\n\nplain **bold**\n\n$a^2+b^2=c^2$\n\n\n\n---"
        );
    }
}
