use async_trait::async_trait;
use tracing::debug;

use curricula_common::{CurriculaError, Topic};
use curricula_core::TopicSource;

/// Fetches the canonical topic set: a JSON array of topic records at a
/// fixed URL, consumed once per cache refresh.
pub struct TopicFeed {
    http: reqwest::Client,
    url: String,
}

impl TopicFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl TopicSource for TopicFeed {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, CurriculaError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CurriculaError::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CurriculaError::SourceUnavailable(format!(
                "topic feed returned {status}"
            )));
        }

        let topics: Vec<Topic> = response
            .json()
            .await
            .map_err(|e| CurriculaError::SourceUnavailable(format!("malformed feed: {e}")))?;
        debug!(count = topics.len(), "Fetched topic feed");
        Ok(topics)
    }
}
