pub mod config;
pub mod dom;
pub mod recommend;

use std::sync::Arc;
use tracing::info;

use dom::{Document, Element};
use recommend::{render, HttpSource, RecommendationFetcher};

#[derive(Debug, thiserror::Error)]
pub enum RecsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("No element with id {0}")]
    MissingElement(String),
    #[error("Client error: {0}")]
    Client(String),
}

/// Form input for one invocation, plus how to print the results.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<String>,
    pub base_url: Option<String>,
    pub material_type: String,
    pub recyclable: String,
    pub compostable: String,
    pub html: bool,
}

/// Builds the page, runs one fetch against the backend and returns the
/// rendered results as printable text.
pub async fn run(opts: &RunOptions) -> Result<String, RecsError> {
    let mut config = match opts.config_path {
        Some(ref path) => {
            info!("Using config file: {}", path);
            config::Config::from_file(path)?
        }
        None => config::Config::default(),
    };
    if let Some(ref base_url) = opts.base_url {
        config.backend.base_url = base_url.clone();
    }

    let source = HttpSource::new(config.backend.base_url.clone())
        .map_err(|e| RecsError::Client(format!("Failed to create HTTP client: {}", e)))?;
    info!("Backend: {}", source.base_url());

    let page = &config.page;
    if let Some(id) = page.duplicate_id() {
        return Err(RecsError::Client(format!("Element id {} is configured more than once", id)));
    }
    let doc = Document::new();
    doc.insert(&page.material_type, Element::with_value(&opts.material_type)).await;
    doc.insert(&page.recyclable, Element::with_value(&opts.recyclable)).await;
    doc.insert(&page.compostable, Element::with_value(&opts.compostable)).await;
    doc.insert(&page.results, Element::new()).await;

    let fetcher = RecommendationFetcher::from_document(&doc, page, Arc::new(source)).await?;
    fetcher.get_recommendations().await;

    let entries = fetcher.results().children().await;
    if opts.html {
        return Ok(render::to_html(&page.results, &entries));
    }
    Ok(entries.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::testutil::spawn_backend;
    use axum::{extract::RawQuery, routing::get, Router};

    fn backend() -> Router {
        Router::new().route(
            "/recommend",
            get(|RawQuery(query): RawQuery| async move {
                if query.as_deref() == Some("") || query.is_none() {
                    return axum::Json(Vec::<serde_json::Value>::new());
                }
                axum::Json(vec![
                    serde_json::json!({"Material Type": "Paper", "Recyclable": "Yes", "Compostable": "Yes"}),
                    serde_json::json!({"Material Type": "Glass & Jars", "Recyclable": "Yes", "Compostable": "No"}),
                ])
            }),
        )
    }

    #[tokio::test]
    async fn test_run_prints_entries() {
        let base = spawn_backend(backend()).await;
        let opts = RunOptions {
            base_url: Some(base),
            recyclable: "Yes".to_string(),
            ..Default::default()
        };

        let output = run(&opts).await.unwrap();
        assert_eq!(
            output,
            "Paper - Recyclable: Yes, Compostable: Yes\nGlass & Jars - Recyclable: Yes, Compostable: No"
        );
    }

    #[tokio::test]
    async fn test_run_html_placeholder() {
        let base = spawn_backend(backend()).await;
        let opts = RunOptions {
            base_url: Some(base),
            html: true,
            ..Default::default()
        };

        let output = run(&opts).await.unwrap();
        assert_eq!(
            output,
            "<ul id=\"results\">\n  <li>No recommendations found.</li>\n</ul>"
        );
    }

    #[tokio::test]
    async fn test_run_rejects_duplicate_page_ids() {
        let path = std::env::temp_dir().join(format!("recs-client-dup-{}.yaml", std::process::id()));
        std::fs::write(&path, "page:\n  results: compostable\n").unwrap();
        let opts = RunOptions {
            config_path: Some(path.to_string_lossy().to_string()),
            base_url: Some("http://127.0.0.1:9".to_string()),
            ..Default::default()
        };

        let result = run(&opts).await;
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(RecsError::Client(ref msg)) if msg.contains("compostable")));
    }

    #[tokio::test]
    async fn test_run_missing_config_file() {
        let opts = RunOptions {
            config_path: Some("/nonexistent/recs-client.yaml".to_string()),
            ..Default::default()
        };
        assert!(matches!(run(&opts).await, Err(RecsError::Config(_))));
    }
}
