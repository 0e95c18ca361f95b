use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

/// Render the landing page, injecting the crate version.
pub fn render_index() -> Html<String> {
    let html = INDEX_HTML.replace("{{ version }}", env!("CARGO_PKG_VERSION"));
    Html(html)
}
