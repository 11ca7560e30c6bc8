use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use curricula_common::{CurriculaError, Topic};

use crate::traits::TopicSource;

/// Process-wide cache of the canonical topic set.
///
/// The cache lifecycle is empty → loaded → refreshed. A refresh replaces the
/// whole set in one atomic swap so concurrent resolvers never observe a
/// half-populated cache. An empty cache means "not yet loaded", not "no
/// topics exist" — callers trigger `load` before resolving.
pub struct TopicRegistry {
    topics: RwLock<Arc<Vec<Topic>>>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self {
            topics: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.topics.read().await.is_empty()
    }

    /// Fetch the full topic set from the source and replace the cache
    /// entirely. Returns the number of topics loaded.
    pub async fn load(&self, source: &dyn TopicSource) -> Result<usize, CurriculaError> {
        let fetched = source.fetch_topics().await?;
        let count = fetched.len();
        *self.topics.write().await = Arc::new(fetched);
        info!(count, "Topic registry refreshed");
        Ok(count)
    }

    /// Case-sensitive exact match against each topic's title, slug, or
    /// aliases; first match in registry order wins.
    pub async fn resolve(&self, query: &str) -> Option<Topic> {
        let topics = self.topics.read().await.clone();
        topics
            .iter()
            .find(|t| {
                t.title == query || t.slug == query || t.aliases.iter().any(|a| a == query)
            })
            .cloned()
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::new()
    }
}
