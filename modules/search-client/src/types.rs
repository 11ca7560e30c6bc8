use serde::Deserialize;

use curricula_common::SearchDocument;

/// Envelope of an Elasticsearch-style `_search` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Hits,
}

#[derive(Debug, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source")]
    pub source: SearchDocument,
}
