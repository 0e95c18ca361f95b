use serde::{Deserialize, Serialize};

// ── Query strings ───────────────────────────────────────────────────────

/// Query for `/api/pdf-text`. Bounds stay raw so validation can report
/// non-numeric values itself.
#[derive(Debug, Default, Deserialize)]
pub struct RangedTextQuery {
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Query for `/api/pdf-text-all`.
#[derive(Debug, Default, Deserialize)]
pub struct AllTextQuery {
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<String>,
}

// ── Responses ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// 400 body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 500 body: a generic label plus the underlying failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub error: String,
    pub message: String,
}
