//! Block-to-tree compilation.
//!
//! Maps each classified block, via the inline span parser, into an
//! [`HtmlNode`] fragment and gathers the fragments under a root `div`.
//! Compilation either fully succeeds or fails before producing output;
//! there are no partial documents.

use pageup_core::HtmlNode;

use crate::block::{classify, split_blocks, BlockType};
use crate::inline::parse_inline;
use crate::Result;

/// Compile a Markdown document into an HTML node tree.
///
/// The root is a `div` parent with one child per block, in document
/// order.
pub fn compile_document(document: &str) -> Result<HtmlNode> {
    let mut children = Vec::new();
    for block in split_blocks(document) {
        children.push(compile_block(block, classify(block))?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Compile a Markdown document straight to an HTML string.
///
/// The output is body markup only; wrapping it in a page shell is the
/// caller's concern.
pub fn markdown_to_html(document: &str) -> Result<String> {
    Ok(compile_document(document)?.to_html()?)
}

fn compile_block(block: &str, kind: BlockType) -> Result<HtmlNode> {
    match kind {
        BlockType::Paragraph => compile_paragraph(block),
        BlockType::Heading(level) => compile_heading(block, level),
        BlockType::Code => Ok(compile_code(block)),
        BlockType::Quote => compile_quote(block),
        BlockType::UnorderedList => compile_unordered_list(block),
        BlockType::OrderedList => compile_ordered_list(block),
    }
}

/// Parse inline markup and convert each span to a leaf node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(parse_inline(text)?
        .into_iter()
        .map(|span| span.into_html_node())
        .collect())
}

fn compile_paragraph(block: &str) -> Result<HtmlNode> {
    let joined = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", inline_children(&joined)?))
}

fn compile_heading(block: &str, level: u8) -> Result<HtmlNode> {
    let rest = &block[level as usize..];
    let text = rest.strip_prefix(' ').unwrap_or(rest);
    Ok(HtmlNode::parent(
        &format!("h{level}"),
        inline_children(text)?,
    ))
}

/// Code content is literal: no inline parsing. The interior loses its
/// surrounding newlines and gains exactly one trailing newline, so the
/// closing `</code>` always lands on its own line.
fn compile_code(block: &str) -> HtmlNode {
    let inner = block
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or("");
    let mut content = inner.trim_matches('\n').to_string();
    content.push('\n');
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", &content)])
}

fn compile_quote(block: &str) -> Result<HtmlNode> {
    let joined = block
        .lines()
        .map(|line| line.trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", inline_children(&joined)?))
}

fn compile_unordered_list(block: &str) -> Result<HtmlNode> {
    let mut items = Vec::new();
    for line in block.lines() {
        let text = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
            .unwrap_or(line);
        items.push(HtmlNode::parent("li", inline_children(text)?));
    }
    Ok(HtmlNode::parent("ul", items))
}

fn compile_ordered_list(block: &str) -> Result<HtmlNode> {
    let mut items = Vec::new();
    for (i, line) in block.lines().enumerate() {
        let prefix = format!("{}. ", i + 1);
        let text = line.strip_prefix(&prefix).unwrap_or(line);
        items.push(HtmlNode::parent("li", inline_children(text)?));
    }
    Ok(HtmlNode::parent("ol", items))
}
