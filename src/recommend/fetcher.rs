use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::PageConfig;
use crate::dom::{Document, Element};
use crate::RecsError;

use super::filter::Filter;
use super::render::render_into;
use super::source::{FetchError, RecommendationSource};

/// The three form controls the filter is read from.
#[derive(Debug, Clone, Default)]
pub struct FormElements {
    pub material_type: Element,
    pub recyclable: Element,
    pub compostable: Element,
}

pub struct RecommendationFetcher {
    form: FormElements,
    results: Element,
    source: Arc<dyn RecommendationSource>,
}

impl RecommendationFetcher {
    pub fn new(form: FormElements, results: Element, source: Arc<dyn RecommendationSource>) -> Self {
        Self {
            form,
            results,
            source,
        }
    }

    /// Looks up the form controls and the results container by their configured ids.
    pub async fn from_document(
        doc: &Document,
        page: &PageConfig,
        source: Arc<dyn RecommendationSource>,
    ) -> Result<Self, RecsError> {
        let form = FormElements {
            material_type: lookup(doc, &page.material_type).await?,
            recyclable: lookup(doc, &page.recyclable).await?,
            compostable: lookup(doc, &page.compostable).await?,
        };
        let results = lookup(doc, &page.results).await?;

        Ok(Self::new(form, results, source))
    }

    pub fn results(&self) -> &Element {
        &self.results
    }

    pub async fn read_filter(&self) -> Filter {
        Filter::from_values(
            self.form.material_type.value().await,
            self.form.recyclable.value().await,
            self.form.compostable.value().await,
        )
    }

    /// Fetches and renders, returning the number of entries shown.
    /// The results container is only touched once the response has parsed.
    pub async fn try_get_recommendations(&self) -> Result<usize, FetchError> {
        let path = self.read_filter().await.request_path();
        debug!(path = %path, "Requesting recommendations");

        let items = self.source.fetch(&path).await?;
        let count = render_into(&self.results, &items).await;

        info!(items = items.len(), entries = count, "Rendered recommendations");
        Ok(count)
    }

    /// Failures are logged and leave the results container as it was.
    pub async fn get_recommendations(&self) {
        if let Err(e) = self.try_get_recommendations().await {
            error!(error = %e, "Error fetching recommendations");
        }
    }
}

async fn lookup(doc: &Document, id: &str) -> Result<Element, RecsError> {
    doc.get_element_by_id(id)
        .await
        .ok_or_else(|| RecsError::MissingElement(id.to_string()))
}
