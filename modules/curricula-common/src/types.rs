use serde::{Deserialize, Serialize};

// --- Curriculum topics ---

/// A canonical curriculum topic as published by the topic feed.
/// Immutable once loaded; uniquely identified by title, but lookups
/// also match slug and any alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub excerpt: String,
}

/// The topic chosen for a raw search string, together with the effective
/// alias list used for query expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTopic {
    pub topic: Topic,
    /// Registry aliases if present, else disambiguator suggestions, else empty.
    pub aliases: Vec<String>,
}

/// The disambiguation oracle's structured guess for a raw search string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicGuess {
    pub topic: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub associated_topic: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

// --- Search documents ---

/// A ranked hit from the search gateway. Only documents with a non-empty
/// summary are eligible for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SearchDocument {
    /// Whether this document carries enough content to classify.
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// The title/summary projection sent to the categorization oracle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationInput {
    pub title: String,
    pub summary: String,
}

// --- Classification output ---

/// One classified curriculum entry. `url` is attached post-hoc by matching
/// `title` back against the retrieved document set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    // The oracle sometimes echoes the field back as "topic".
    #[serde(alias = "topic")]
    pub title: String,
    pub category: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
