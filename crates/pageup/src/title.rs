//! Page title extraction.

use crate::block::{classify, split_blocks, BlockType};
use crate::{ConvertError, Result};

/// Extract the page title from a Markdown document.
///
/// The title is the text of the first level-one heading block. Returns
/// [`ConvertError::NoTitle`] if the document has none.
pub fn extract_title(document: &str) -> Result<String> {
    for block in split_blocks(document) {
        if classify(block) == BlockType::Heading(1) {
            return Ok(block[1..].trim().to_string());
        }
    }
    Err(ConvertError::NoTitle)
}
