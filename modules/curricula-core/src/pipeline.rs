use std::sync::Arc;

use tracing::info;

use curricula_common::{ClassifiedItem, CurriculaError};

use crate::classifier::BatchClassifier;
use crate::merger::attach_sources;
use crate::query::build_search_query;
use crate::registry::TopicRegistry;
use crate::resolver::TopicResolver;
use crate::traits::{CategorizationOracle, DisambiguationOracle, SearchGateway, TopicSource};

/// End-to-end curriculum pipeline: resolve → build query → search →
/// classify → merge.
pub struct CurriculumPipeline {
    registry: Arc<TopicRegistry>,
    topic_source: Arc<dyn TopicSource>,
    resolver: TopicResolver,
    gateway: Arc<dyn SearchGateway>,
    classifier: BatchClassifier,
}

impl CurriculumPipeline {
    pub fn new(
        topic_source: Arc<dyn TopicSource>,
        disambiguator: Arc<dyn DisambiguationOracle>,
        gateway: Arc<dyn SearchGateway>,
        categorizer: Arc<dyn CategorizationOracle>,
    ) -> Self {
        let registry = Arc::new(TopicRegistry::new());
        Self {
            resolver: TopicResolver::new(registry.clone(), disambiguator),
            classifier: BatchClassifier::new(categorizer),
            registry,
            topic_source,
            gateway,
        }
    }

    /// Force a full reload of the topic cache. Returns the topic count.
    pub async fn refresh_topics(&self) -> Result<usize, CurriculaError> {
        self.registry.load(self.topic_source.as_ref()).await
    }

    /// Run the pipeline for one raw search string.
    pub async fn run(&self, raw_search: &str) -> Result<Vec<ClassifiedItem>, CurriculaError> {
        if self.registry.is_empty().await {
            self.refresh_topics().await?;
        }

        let resolved = self.resolver.resolve(raw_search).await?;
        let category = resolved
            .topic
            .categories
            .first()
            .map(String::as_str)
            .unwrap_or("");

        let query = build_search_query(&resolved.topic.title, &resolved.aliases, category);
        let documents = self.gateway.search(&query).await?;
        info!(
            topic = %resolved.topic.title,
            hits = documents.len(),
            "Retrieved source documents"
        );

        let classified = self.classifier.classify(&documents).await;
        Ok(attach_sources(classified, &documents))
    }
}
