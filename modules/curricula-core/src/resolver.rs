use std::sync::Arc;

use tracing::{debug, warn};

use curricula_common::{CurriculaError, ResolvedTopic};

use crate::registry::TopicRegistry;
use crate::traits::DisambiguationOracle;

/// Resolves a raw search string to a canonical topic, optionally assisted by
/// the disambiguation oracle. The oracle is advisory: if it fails or its
/// guess is absent from the registry, resolution falls back to the raw
/// string. A miss on both attempts is a terminal `NotFound`.
pub struct TopicResolver {
    registry: Arc<TopicRegistry>,
    oracle: Arc<dyn DisambiguationOracle>,
}

impl TopicResolver {
    pub fn new(registry: Arc<TopicRegistry>, oracle: Arc<dyn DisambiguationOracle>) -> Self {
        Self { registry, oracle }
    }

    pub async fn resolve(&self, raw_search: &str) -> Result<ResolvedTopic, CurriculaError> {
        let guess = match self.oracle.disambiguate(raw_search).await {
            Ok(g) => {
                debug!(raw = raw_search, guess = %g.topic, "Disambiguation guess");
                Some(g)
            }
            Err(e) => {
                warn!(error = %e, raw = raw_search, "Disambiguation failed, using raw search");
                None
            }
        };

        let topic = match &guess {
            Some(g) => match self.registry.resolve(&g.topic).await {
                Some(t) => Some(t),
                None => self.registry.resolve(raw_search).await,
            },
            None => self.registry.resolve(raw_search).await,
        };

        let Some(topic) = topic else {
            return Err(CurriculaError::NotFound(raw_search.to_string()));
        };

        // Alias priority: the registry's own aliases, else the oracle's
        // suggestions, else nothing.
        let aliases = if !topic.aliases.is_empty() {
            topic.aliases.clone()
        } else {
            guess.map(|g| g.aliases).unwrap_or_default()
        };

        Ok(ResolvedTopic { topic, aliases })
    }
}
