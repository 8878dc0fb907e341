//! # WordPress Block Formatter
//!
//! Converts raw generated text into WordPress block markup. The bullet
//! detection is a literal prefix match on three glyphs; it is isolated in
//! [`bullet_item`] because that heuristic is the one genuinely ambiguous
//! part of the pipeline.

/// The heading level used for section titles.
const HEADING_LEVEL: u8 = 2;

/// A self-contained markup unit in the published document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    List(Vec<String>),
}

/// Classifies a line as a list item.
///
/// A trimmed line is a list item when it starts with one of the literal
/// bullet glyphs `•`, `-` or `*`. Returns the item text: the remainder after
/// stripping exactly the first character and leading whitespace. Numbered
/// lists, indented bullets, and other Unicode bullet variants are not
/// recognized.
pub fn bullet_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    for glyph in ['•', '-', '*'] {
        if let Some(rest) = trimmed.strip_prefix(glyph) {
            return Some(rest.trim_start());
        }
    }
    None
}

/// Splits raw content into an ordered sequence of paragraph and list blocks.
///
/// Consecutive bullet lines accumulate into a single list block. A non-empty
/// line that is not a bullet flushes any pending list and becomes its own
/// paragraph. An empty line flushes a pending list but emits nothing, so
/// adjacent blank lines never produce duplicate blocks.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending_items: Vec<String> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if let Some(item) = bullet_item(line) {
            pending_items.push(item.to_string());
            continue;
        }
        if !pending_items.is_empty() {
            blocks.push(Block::List(std::mem::take(&mut pending_items)));
        }
        if !line.is_empty() {
            blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    if !pending_items.is_empty() {
        blocks.push(Block::List(pending_items));
    }

    blocks
}

/// Formats a heading in WordPress block markup.
pub fn format_heading(text: &str, level: u8) -> String {
    format!(
        "<!-- wp:heading -->\n<h{level} class=\"wp-block-heading\">{text}</h{level}>\n<!-- /wp:heading -->"
    )
}

/// Formats a paragraph in WordPress block markup.
pub fn format_paragraph(text: &str) -> String {
    format!("<!-- wp:paragraph -->\n<p>{text}</p>\n<!-- /wp:paragraph -->")
}

/// Formats a bulleted list in WordPress block markup.
pub fn format_list(items: &[String]) -> String {
    let mut list_items = String::new();
    for item in items {
        list_items.push_str(&format!(
            "<!-- wp:list-item -->\n<li>{item}</li>\n<!-- /wp:list-item -->\n\n"
        ));
    }
    format!("<!-- wp:list -->\n<ul>{list_items}</ul>\n<!-- /wp:list -->")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(text) => format_heading(text, HEADING_LEVEL),
        Block::Paragraph(text) => format_paragraph(text),
        Block::List(items) => format_list(items),
    }
}

/// Formats a complete section: a heading block followed by the content's
/// paragraph and list blocks, joined with blank lines.
pub fn format_section(title: &str, content: &str) -> String {
    let rendered: Vec<String> = parse_blocks(content).iter().map(render_block).collect();
    format!(
        "{}\n\n{}",
        format_heading(title, HEADING_LEVEL),
        rendered.join("\n\n")
    )
}
