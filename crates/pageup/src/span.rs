//! Typed inline text spans.
//!
//! A [`TextSpan`] is a flat, classified fragment of inline content, the
//! intermediate form between raw Markdown text and HTML leaf nodes.

use pageup_core::HtmlNode;

/// The kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unstyled text
    Plain,
    /// Bold text (`**`)
    Bold,
    /// Italic text (`_`)
    Italic,
    /// Inline code (backticks)
    Code,
    /// Hyperlink with label and URL
    Link,
    /// Image with alt text and URL
    Image,
}

/// A classified fragment of inline text.
///
/// `target` is present exactly for `Link` and `Image` spans; the
/// constructors maintain that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    /// Create a plain text span
    pub fn plain(content: &str) -> Self {
        Self::styled(content, SpanKind::Plain)
    }

    /// Create a styled span without a target (plain, bold, italic, code)
    pub fn styled(content: &str, kind: SpanKind) -> Self {
        debug_assert!(!matches!(kind, SpanKind::Link | SpanKind::Image));
        Self {
            content: content.to_string(),
            kind,
            target: None,
        }
    }

    /// Create a link span
    pub fn link(label: &str, url: &str) -> Self {
        Self {
            content: label.to_string(),
            kind: SpanKind::Link,
            target: Some(url.to_string()),
        }
    }

    /// Create an image span
    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            content: alt.to_string(),
            kind: SpanKind::Image,
            target: Some(url.to_string()),
        }
    }

    /// Check if this span is plain text
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert this span into an HTML leaf node.
    ///
    /// Images render with an empty value so the content lives entirely
    /// in the `src`/`alt` attributes.
    pub fn into_html_node(self) -> HtmlNode {
        let target = self.target.as_deref().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::raw_text(&self.content),
            SpanKind::Bold => HtmlNode::leaf("b", &self.content),
            SpanKind::Italic => HtmlNode::leaf("i", &self.content),
            SpanKind::Code => HtmlNode::leaf("code", &self.content),
            SpanKind::Link => {
                HtmlNode::leaf_with_attrs("a", &self.content, vec![("href", target)])
            }
            SpanKind::Image => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src", target), ("alt", &self.content)],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq() {
        let node = TextSpan::styled("This is a text node", SpanKind::Bold);
        let node2 = TextSpan::styled("This is a text node", SpanKind::Bold);
        assert_eq!(node, node2);
    }

    #[test]
    fn test_eq_false() {
        let node = TextSpan::plain("This is a text node");
        let node2 = TextSpan::styled("This is a text node", SpanKind::Bold);
        assert_ne!(node, node2);
    }

    #[test]
    fn test_eq_url() {
        let node = TextSpan::link("This is a text node", "https://www.boot.dev");
        let node2 = TextSpan::link("This is a text node", "https://www.boot.dev");
        assert_eq!(node, node2);
    }

    #[test]
    fn test_plain_to_node() {
        let html_node = TextSpan::plain("This is a text node").into_html_node();
        assert_eq!(html_node.tag(), None);
        assert_eq!(html_node.text_content(), "This is a text node");
    }

    #[test]
    fn test_bold_to_node() {
        let html_node = TextSpan::styled("bold", SpanKind::Bold).into_html_node();
        assert_eq!(html_node.to_html().unwrap(), "<b>bold</b>");
    }

    #[test]
    fn test_link_to_node() {
        let html_node = TextSpan::link("Boot.dev", "https://www.boot.dev").into_html_node();
        assert_eq!(
            html_node.to_html().unwrap(),
            "<a href=\"https://www.boot.dev\">Boot.dev</a>"
        );
    }

    #[test]
    fn test_image_to_node() {
        let html_node = TextSpan::image("alt text", "image.png").into_html_node();
        assert_eq!(
            html_node.to_html().unwrap(),
            "<img src=\"image.png\" alt=\"alt text\"></img>"
        );
    }
}
