use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pdftext_core::{
    DEFAULT_USER_AGENT, Fetcher, PageRange, PdfBackend, config_file, extract_all, extract_range,
};
use pdftext_mupdf::MupdfBackend;

/// PDF Text Extractor - Print the plain text of a local or remote PDF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract text from a PDF file or an http(s) URL
    Extract {
        /// Path or URL of the PDF
        source: String,

        /// First page to include (1-based)
        #[arg(long)]
        min: Option<String>,

        /// Last page to parse and include
        #[arg(long)]
        max: Option<String>,

        /// Extract every page, ignoring --min/--max
        #[arg(long, conflicts_with_all = ["min", "max"])]
        all: bool,

        /// User-Agent for URL sources (default: $PDFTEXT_USER_AGENT, then config file)
        #[arg(long)]
        user_agent: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            source,
            min,
            max,
            all,
            user_agent,
        } => {
            let range = if all {
                None
            } else {
                Some(PageRange::from_query(min.as_deref(), max.as_deref())?)
            };
            let text = extract(&source, range, user_agent).await?;
            println!("{text}");
            Ok(())
        }
    }
}

async fn extract(
    source: &str,
    range: Option<PageRange>,
    user_agent: Option<String>,
) -> anyhow::Result<String> {
    tracing::debug!(
        source,
        min = range.map(|r| r.min()),
        max = range.map(|r| r.max()),
        "extracting"
    );
    let bytes = if is_url(source) {
        // Resolve configuration: CLI flags > env vars > config file > default
        let user_agent = user_agent
            .or_else(|| std::env::var("PDFTEXT_USER_AGENT").ok())
            .or_else(|| config_file::load_config().fetch.and_then(|f| f.user_agent))
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        Fetcher::new(user_agent)
            .fetch(source)
            .await
            .with_context(|| format!("failed to fetch {source}"))?
            .to_vec()
    } else {
        let path = PathBuf::from(source);
        std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?
    };

    tracing::debug!(bytes = bytes.len(), "loaded document");

    let backend: Arc<dyn PdfBackend> = Arc::new(MupdfBackend::new());
    let text = tokio::task::spawn_blocking(move || match range {
        Some(range) => extract_range(backend.as_ref(), &bytes, range),
        None => extract_all(backend.as_ref(), &bytes),
    })
    .await??;
    Ok(text)
}

fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_detection() {
        assert!(is_url("https://example.com/a.pdf"));
        assert!(is_url("HTTP://example.com/a.pdf"));
        assert!(!is_url("./papers/a.pdf"));
        assert!(!is_url("/tmp/http.pdf"));
    }

    #[test]
    fn all_conflicts_with_range_flags() {
        let parsed = Cli::try_parse_from(["pdftext", "extract", "a.pdf", "--all", "--min", "2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn range_flags_parse() {
        let cli = Cli::try_parse_from(["pdftext", "extract", "a.pdf", "--min", "2", "--max", "4"])
            .unwrap();
        let Command::Extract { min, max, all, .. } = cli.command;
        assert_eq!(min.as_deref(), Some("2"));
        assert_eq!(max.as_deref(), Some("4"));
        assert!(!all);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = extract("/nonexistent/definitely-missing.pdf", None, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
