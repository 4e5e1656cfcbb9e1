//! HTML node tree rendering
//!
//! Converts an HtmlNode tree into HTML text.

use crate::node::{Attributes, HtmlNode};
use crate::{Result, StructuralError};

impl HtmlNode {
    /// Render this node and its descendants to an HTML string.
    ///
    /// A tagless leaf returns its value verbatim; neither text nor
    /// attribute values are entity-escaped, matching the literal
    /// markup-safe text the Markdown compiler produces.
    pub fn to_html(&self) -> Result<String> {
        let mut output = String::with_capacity(256);
        render_node(self, &mut output)?;
        Ok(output)
    }
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => match tag {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(tag, attrs, out);
                out.push_str(value);
                close_tag(tag, out);
            }
        },

        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            if tag.is_empty() {
                return Err(StructuralError::MissingTag);
            }
            open_tag(tag, attrs, out);
            for child in children {
                render_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
