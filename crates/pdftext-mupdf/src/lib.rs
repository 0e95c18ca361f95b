use mupdf::{Document, TextPageFlags};

use pdftext_core::{BackendError, Page, PageRange, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the HTTP and range-handling code does not
/// transitively depend on it.
///
/// Each text line MuPDF reports becomes one fragment, in block order.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn pages(&self, bytes: &[u8], range: Option<PageRange>) -> Result<Vec<Page>, BackendError> {
        let document = Document::from_bytes(bytes, "application/pdf")
            .map_err(|e| BackendError::Open(e.to_string()))?;

        let page_count = document
            .page_count()
            .map_err(|e| BackendError::Extraction(e.to_string()))?;
        let page_count = u32::try_from(page_count)
            .map_err(|_| BackendError::Extraction(format!("invalid page count {page_count}")))?;

        // Pages outside the range are never loaded or laid out.
        let first = range.map_or(1, |r| r.min());
        let last = range.map_or(page_count, |r| r.max().min(page_count));

        let mut pages = Vec::new();
        for number in first..=last {
            let index = i32::try_from(number - 1)
                .map_err(|_| BackendError::Extraction(format!("page {number} out of range")))?;
            let page = document
                .load_page(index)
                .map_err(|e| BackendError::Extraction(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::Extraction(e.to_string()))?;

            let mut fragments = Vec::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    fragments.push(line_text);
                }
            }
            pages.push(Page::new(number, fragments));
        }

        tracing::trace!(page_count, first, last, parsed = pages.len(), "mupdf parsed pages");
        Ok(pages)
    }
}
