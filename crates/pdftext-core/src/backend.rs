use thiserror::Error;

use crate::range::PageRange;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

/// One parsed page: its 1-based number and the text fragments laid out on it,
/// in the document's structural order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub fragments: Vec<String>,
}

impl Page {
    pub fn new(number: u32, fragments: Vec<String>) -> Self {
        Self { number, fragments }
    }

    /// The page text: fragments joined by a single space.
    pub fn text(&self) -> String {
        self.fragments.join(" ")
    }
}

/// Trait for PDF parsing backends.
///
/// Implementors only need to walk the document and hand back pages with their
/// fragments; text assembly lives in [`crate::extract`].
pub trait PdfBackend: Send + Sync {
    /// Parse an in-memory document and return its pages in order.
    ///
    /// With a `range`, only pages inside it are laid out and returned, and
    /// parsing stops at `range.max()`. A document that ends before
    /// `range.max()` yields what it has. `None` returns every page.
    fn pages(&self, bytes: &[u8], range: Option<PageRange>) -> Result<Vec<Page>, BackendError>;
}
