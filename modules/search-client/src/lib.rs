//! Wire clients for the two HTTP collaborators: the full-text document index
//! (Elasticsearch-compatible `_search` endpoint) and the topic feed.

pub mod feed;
pub mod types;

pub use feed::TopicFeed;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use curricula_common::{CurriculaError, SearchDocument};
use curricula_core::SearchGateway;

use types::SearchResponse;

/// Fields projected out of each hit's `_source`.
const SOURCE_FIELDS: [&str; 6] = ["title", "summary", "authors", "domain", "tags", "url"];

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    index: String,
    api_key: Option<String>,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            index: index.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url.trim_end_matches('/'), self.index)
    }
}

#[async_trait]
impl SearchGateway for SearchClient {
    async fn search(&self, query: &Value) -> Result<Vec<SearchDocument>, CurriculaError> {
        // The query body arrives complete (query + page bounds); only the
        // projection is added here.
        let mut body = query.clone();
        if let Some(obj) = body.as_object_mut() {
            obj.insert("_source".to_string(), serde_json::json!(SOURCE_FIELDS));
        }

        let mut request = self.http.post(self.search_url()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("ApiKey {key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| CurriculaError::GatewayFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CurriculaError::GatewayFailure(format!("{status}: {text}")));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| CurriculaError::GatewayFailure(e.to_string()))?;

        let documents: Vec<SearchDocument> =
            parsed.hits.hits.into_iter().map(|h| h.source).collect();
        debug!(index = %self.index, hits = documents.len(), "Search complete");
        Ok(documents)
    }
}
