//! Block-level parsing.
//!
//! A block is a maximal chunk of the document separated by blank lines,
//! trimmed and non-empty. Classification is a priority-ordered list of
//! predicates; a block whose structural markers are inconsistent (say a
//! quote where a later line drops its `>`) falls through to
//! [`BlockType::Paragraph`] rather than failing.

/// The structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Plain prose, possibly spanning several lines
    Paragraph,
    /// ATX heading with level 1-6
    Heading(u8),
    /// Fenced code block
    Code,
    /// Block quote, every line prefixed with `>`
    Quote,
    /// List with `-` or `*` markers
    UnorderedList,
    /// List numbered 1., 2., 3. with no gaps
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks at blank lines.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single block. First match wins.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.lines().collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if lines
        .iter()
        .all(|line| line.starts_with("- ") || line.starts_with("* "))
    {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// The heading level of a block, if it starts with 1-6 `#` characters
/// followed by a space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Strict ordered-list check: line i (1-indexed) must start with
/// exactly `"{i}. "`. Any gap, wrong start, or stray line disqualifies
/// the whole block.
fn is_ordered_list(lines: &[&str]) -> bool {
    !lines.is_empty()
        && lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_blocks() {
        let md = "\nThis is **bolded** paragraph\n\nThis is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line\n\n- This is a list\n- with items\n";
        let blocks = split_blocks(md);
        assert_eq!(
            blocks,
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_split_blocks_collapses_extra_blank_lines() {
        let blocks = split_blocks("one\n\n\n\ntwo");
        assert_eq!(blocks, vec!["one", "two"]);
    }

    #[test]
    fn test_split_blocks_empty_document() {
        assert_eq!(split_blocks(""), Vec::<&str>::new());
        assert_eq!(split_blocks("\n\n  \n\n"), Vec::<&str>::new());
    }

    #[test]
    fn test_headings() {
        assert_eq!(classify("# heading"), BlockType::Heading(1));
        assert_eq!(classify("### heading"), BlockType::Heading(3));
        assert_eq!(classify("###### heading"), BlockType::Heading(6));
        // No space after the hashes
        assert_eq!(classify("#heading"), BlockType::Paragraph);
        // Seven hashes is not a heading
        assert_eq!(classify("####### too deep"), BlockType::Paragraph);
    }

    #[test]
    fn test_code() {
        assert_eq!(classify("```\nthis is code\n```"), BlockType::Code);
        // No closing fence
        assert_eq!(classify("```\ncode"), BlockType::Paragraph);
        // A lone fence opens and closes in one: an empty code block
        assert_eq!(classify("```"), BlockType::Code);
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            classify("> this is a quote\n> second line"),
            BlockType::Quote
        );
        // Middle line missing '>'
        assert_eq!(classify("> line 1\nline 2"), BlockType::Paragraph);
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(classify("- item 1\n- item 2"), BlockType::UnorderedList);
        assert_eq!(classify("* item 1\n* item 2"), BlockType::UnorderedList);
        // Markers may be mixed across lines
        assert_eq!(classify("- item 1\n* item 2"), BlockType::UnorderedList);
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            classify("1. first\n2. second\n3. third"),
            BlockType::OrderedList
        );
        // Sequence gap
        assert_eq!(classify("1. first\n3. second"), BlockType::Paragraph);
        // Starts at 2
        assert_eq!(classify("2. first\n3. second"), BlockType::Paragraph);
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(classify("Just a normal paragraph."), BlockType::Paragraph);
    }
}
