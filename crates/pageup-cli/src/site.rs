//! Page generation.
//!
//! Walks a content tree of Markdown files, compiles each page to HTML
//! and substitutes it into a shared template.

use std::fs;
use std::path::Path;

use pageup::{extract_title, markdown_to_html};

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Convert {
        path: String,
        #[source]
        source: pageup::ConvertError,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Generate one HTML page from a Markdown source file.
///
/// The template's `{{ Title }}` and `{{ Content }}` placeholders are
/// replaced, and root-relative `href`/`src` attributes are rewritten
/// against `basepath` so the site works when hosted under a subpath.
pub fn generate_page(source: &Path, template: &Path, dest: &Path, basepath: &str) -> Result<()> {
    println!(
        "Generating page {} to {}",
        source.display(),
        dest.display()
    );

    let markdown = read(source)?;
    let template = read(template)?;

    let body = convert(&markdown, source, markdown_to_html)?;
    let title = convert(&markdown, source, extract_title)?;

    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &body)
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"));

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| io_error(dest, e))
}

/// Recursively generate pages for every `.md` file under `content_dir`,
/// mirroring the directory layout into `dest_dir`.
pub fn generate_pages(
    content_dir: &Path,
    template: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<()> {
    for entry in fs::read_dir(content_dir).map_err(|e| io_error(content_dir, e))? {
        let entry = entry.map_err(|e| io_error(content_dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            generate_pages(&path, template, &dest_dir.join(entry.file_name()), basepath)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest, basepath)?;
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn convert<T>(
    markdown: &str,
    source: &Path,
    f: impl Fn(&str) -> pageup::Result<T>,
) -> Result<T> {
    f(markdown).map_err(|e| SiteError::Convert {
        path: source.display().to_string(),
        source: e,
    })
}

fn io_error(path: &Path, source: std::io::Error) -> SiteError {
    SiteError::Io {
        path: path.display().to_string(),
        source,
    }
}
