use thiserror::Error;

use crate::backend::{BackendError, Page, PdfBackend};
use crate::range::PageRange;

/// Every page's text is preceded by a blank line; the final trim drops the
/// leading one.
const PAGE_SEPARATOR: &str = "\n\n";

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid max page value")]
    InvalidMaxPage,
    #[error("Invalid min page value")]
    InvalidMinPage,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Extract the text of the pages in `range`.
///
/// Parsing stops at `range.max()`. A document with fewer pages just ends
/// early; pages numbered below `range.min()` contribute nothing and are
/// never laid out by the backend.
pub fn extract_range(
    backend: &dyn PdfBackend,
    bytes: &[u8],
    range: PageRange,
) -> Result<String, ExtractError> {
    let pages = backend.pages(bytes, Some(range))?;
    tracing::debug!(
        parsed = pages.len(),
        min = range.min(),
        max = range.max(),
        "parsed document for ranged extraction"
    );
    Ok(assemble(pages.iter().filter(|p| range.contains(p.number))))
}

/// Extract the text of every page in the document.
pub fn extract_all(backend: &dyn PdfBackend, bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = backend.pages(bytes, None)?;
    tracing::debug!(parsed = pages.len(), "parsed document for full extraction");
    Ok(assemble(pages.iter()))
}

fn assemble<'a>(pages: impl Iterator<Item = &'a Page>) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(PAGE_SEPARATOR);
        text.push_str(&page.text());
    }
    text.trim().to_string()
}
