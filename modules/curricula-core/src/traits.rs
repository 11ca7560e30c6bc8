use async_trait::async_trait;
use serde_json::Value;

use curricula_common::{
    ClassificationInput, ClassifiedItem, CurriculaError, SearchDocument, Topic, TopicGuess,
};

/// Feed of canonical curriculum topics, consumed once per cache refresh.
#[async_trait]
pub trait TopicSource: Send + Sync {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, CurriculaError>;
}

/// Black-box document index. Takes a full query body (query + page bounds)
/// and returns ranked hits.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, query: &Value) -> Result<Vec<SearchDocument>, CurriculaError>;
}

/// Expands a raw search string into a structured topic guess with aliases.
/// Advisory only; callers must tolerate failure.
#[async_trait]
pub trait DisambiguationOracle: Send + Sync {
    async fn disambiguate(&self, raw_search: &str) -> Result<TopicGuess, CurriculaError>;
}

/// Assigns a difficulty level and rationale to each document in a batch.
#[async_trait]
pub trait CategorizationOracle: Send + Sync {
    async fn categorize(
        &self,
        batch: &[ClassificationInput],
    ) -> Result<Vec<ClassifiedItem>, CurriculaError>;
}
