//! Inline span parsing.
//!
//! Raw text becomes a flat sequence of [`TextSpan`]s through a fixed
//! pipeline: delimiter splitting (code, then bold, then italic), link
//! extraction, then image extraction. Each stage rewrites only plain
//! spans and passes styled spans through untouched, so an earlier stage
//! can never corrupt a later one. Links and images run last so that
//! delimiter characters inside a label stay literal.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::{SpanKind, TextSpan};
use crate::{ConvertError, Result};

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// Parse inline Markdown into a sequence of typed spans.
///
/// Returns [`ConvertError::MalformedInline`] if a code, bold or italic
/// delimiter is opened but never closed. Empty spans are never emitted.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_delimiter(spans, "`", SpanKind::Code)?;
    spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    spans = split_links(spans);
    spans = split_images(spans);
    Ok(spans)
}

/// Split every plain span on paired occurrences of `delimiter`.
///
/// Text between a matched pair becomes a span of `kind` with the
/// delimiters stripped; text outside stays plain. An odd number of
/// delimiters within one span means an unterminated pair.
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        // An odd number of delimiters means one was never closed.
        if span.content.matches(delimiter).count() % 2 == 1 {
            return Err(ConvertError::MalformedInline {
                delimiter,
                text: span.content,
            });
        }

        for (i, part) in span.content.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::plain(part));
            } else {
                result.push(TextSpan::styled(part, kind));
            }
        }
    }

    Ok(result)
}

/// Extract `[label](url)` links from every plain span.
fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &LINK_RE, SpanKind::Link)
}

/// Extract `![alt](url)` images from every plain span. Runs after link
/// extraction, which skips `!`-prefixed matches and leaves them here.
fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &IMAGE_RE, SpanKind::Image)
}

fn split_pattern(spans: Vec<TextSpan>, re: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut pieces = Vec::new();
        let mut last = 0;

        for caps in re.captures_iter(text) {
            let m = caps.get(0).expect("match group 0 always present");

            // A `[label](url)` directly after `!` is image syntax; the
            // link pass leaves it in place for the image pass.
            if kind == SpanKind::Link && text[..m.start()].ends_with('!') {
                continue;
            }

            if m.start() > last {
                pieces.push(TextSpan::plain(&text[last..m.start()]));
            }

            let label = caps.get(1).map_or("", |g| g.as_str());
            let url = caps.get(2).map_or("", |g| g.as_str());
            pieces.push(match kind {
                SpanKind::Image => TextSpan::image(label, url),
                _ => TextSpan::link(label, url),
            });

            last = m.end();
        }

        if pieces.is_empty() {
            result.push(span);
            continue;
        }
        if last < text.len() {
            pieces.push(TextSpan::plain(&text[last..]));
        }
        result.append(&mut pieces);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delim_bold() {
        let spans = parse_inline("This is **bold** text").unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1], TextSpan::styled("bold", SpanKind::Bold));
    }

    #[test]
    fn test_delim_code() {
        let spans = parse_inline("This is `code` text").unwrap();
        assert_eq!(spans[1], TextSpan::styled("code", SpanKind::Code));
    }

    #[test]
    fn test_delim_italic() {
        let spans = parse_inline("This is _italic_ text").unwrap();
        assert_eq!(spans[1], TextSpan::styled("italic", SpanKind::Italic));
    }

    #[test]
    fn test_mixed_delimiters() {
        let spans = parse_inline("This is **bold** and _italic_ and `code`.").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                TextSpan::styled("bold", SpanKind::Bold),
                TextSpan::plain(" and "),
                TextSpan::styled("italic", SpanKind::Italic),
                TextSpan::plain(" and "),
                TextSpan::styled("code", SpanKind::Code),
                TextSpan::plain("."),
            ]
        );
    }

    #[test]
    fn test_unterminated_bold() {
        let err = parse_inline("**oops").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MalformedInline {
                delimiter: "**",
                text: "**oops".to_string(),
            }
        );
    }

    #[test]
    fn test_unterminated_code() {
        assert!(parse_inline("some `code").is_err());
    }

    #[test]
    fn test_no_markup_is_identity() {
        let spans = parse_inline("just ordinary text").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("just ordinary text")]);
    }

    #[test]
    fn test_delimiter_at_start() {
        let spans = parse_inline("**bold** at start").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::styled("bold", SpanKind::Bold),
                TextSpan::plain(" at start"),
            ]
        );
    }

    #[test]
    fn test_split_link() {
        let spans = parse_inline("Visit [Boot.dev](https://www.boot.dev) now").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("Visit "),
                TextSpan::link("Boot.dev", "https://www.boot.dev"),
                TextSpan::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_split_image() {
        let spans =
            parse_inline("This is an ![image](https://i.imgur.com/zjjcJKZ.png)").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
            ]
        );
    }

    #[test]
    fn test_image_not_matched_as_link() {
        let spans = parse_inline("![alt](img.png)").unwrap();
        assert_eq!(spans, vec![TextSpan::image("alt", "img.png")]);
    }

    #[test]
    fn test_everything_at_once() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a \
                    [link](https://boot.dev)";
        let spans = parse_inline(text).unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                TextSpan::styled("text", SpanKind::Bold),
                TextSpan::plain(" with an "),
                TextSpan::styled("italic", SpanKind::Italic),
                TextSpan::plain(" word and a "),
                TextSpan::styled("code block", SpanKind::Code),
                TextSpan::plain(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        // The seed span is empty and the first stage filters it out.
        let spans = parse_inline("").unwrap();
        assert_eq!(spans, vec![]);
    }
}
