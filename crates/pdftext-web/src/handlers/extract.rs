use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use bytes::Bytes;
use std::sync::Arc;

use pdftext_core::{PageRange, PdfBackend, extract_all, extract_range};

use crate::error::AppError;
use crate::models::{AllTextQuery, RangedTextQuery, TextResponse};
use crate::state::AppState;

pub async fn pdf_text(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RangedTextQuery>, QueryRejection>,
) -> Result<Json<TextResponse>, AppError> {
    let Query(query) = query?;
    let url = require_url(query.pdf_url.as_deref())?;
    let range = PageRange::from_query(query.min.as_deref(), query.max.as_deref())?;

    let bytes = state.fetcher.fetch(url).await?;
    let text = extract_blocking(state.backend.clone(), bytes, Some(range)).await?;

    tracing::info!(
        url,
        min = range.min(),
        max = range.max(),
        chars = text.len(),
        "extracted page range"
    );
    Ok(Json(TextResponse { text }))
}

pub async fn pdf_text_all(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AllTextQuery>, QueryRejection>,
) -> Result<Json<TextResponse>, AppError> {
    let Query(query) = query?;
    let url = require_url(query.pdf_url.as_deref())?;

    let bytes = state.fetcher.fetch(url).await?;
    let text = extract_blocking(state.backend.clone(), bytes, None).await?;

    tracing::info!(url, chars = text.len(), "extracted whole document");
    Ok(Json(TextResponse { text }))
}

fn require_url(url: Option<&str>) -> Result<&str, AppError> {
    match url.map(str::trim) {
        Some(u) if !u.is_empty() => Ok(u),
        _ => Err(AppError::MissingPdfUrl),
    }
}

/// Parse off the async workers (MuPDF is not async).
async fn extract_blocking(
    backend: Arc<dyn PdfBackend>,
    bytes: Bytes,
    range: Option<PageRange>,
) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || match range {
        Some(range) => extract_range(backend.as_ref(), &bytes, range),
        None => extract_all(backend.as_ref(), &bytes),
    })
    .await??;
    Ok(text)
}
