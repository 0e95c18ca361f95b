pub mod backend;
pub mod config_file;
pub mod extract;
pub mod fetch;
pub mod range;

pub use backend::{BackendError, Page, PdfBackend};
pub use extract::{ExtractError, extract_all, extract_range};
pub use fetch::{DEFAULT_USER_AGENT, FetchError, Fetcher};
pub use range::{DEFAULT_MAX_PAGE, DEFAULT_MIN_PAGE, PageRange};
