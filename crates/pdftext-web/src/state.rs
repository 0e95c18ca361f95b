use std::sync::Arc;

use pdftext_core::{Fetcher, PdfBackend};

/// Shared application state accessible from all handlers.
///
/// Holds no per-request data; each request fetches and parses its own document.
pub struct AppState {
    pub fetcher: Fetcher,
    pub backend: Arc<dyn PdfBackend>,
}

impl AppState {
    pub fn new(fetcher: Fetcher, backend: Arc<dyn PdfBackend>) -> Self {
        Self { fetcher, backend }
    }
}
