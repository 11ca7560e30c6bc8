use async_trait::async_trait;
use tracing::debug;

use curricula_common::{ClassificationInput, ClassifiedItem, CurriculaError, TopicGuess};
use curricula_core::{CategorizationOracle, DisambiguationOracle};

use crate::client::ChatClient;
use crate::normalize::parse_model_json;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Expands a raw topic search into a structured guess.
pub struct Disambiguator {
    chat: ChatClient,
}

impl Disambiguator {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    fn prompt(raw_search: &str) -> String {
        format!(
            "A user searched a Bitcoin technical curriculum for \"{raw_search}\". \
             Identify the canonical topic they most likely mean.\n\
             Respond with a single JSON object with the fields: topic (the canonical \
             topic name), description (one sentence), aliases (array of alternative \
             names and abbreviations), associated_topic (a closely related topic, or \
             null), and slug (lowercase-hyphenated identifier). \
             Respond with the JSON object only."
        )
    }
}

#[async_trait]
impl DisambiguationOracle for Disambiguator {
    async fn disambiguate(&self, raw_search: &str) -> Result<TopicGuess, CurriculaError> {
        let reply = self
            .chat
            .complete(SYSTEM_PROMPT, &Self::prompt(raw_search))
            .await
            .map_err(|e| CurriculaError::OracleFailure(e.to_string()))?;

        let guess: TopicGuess = parse_model_json(&reply)
            .map_err(|e| CurriculaError::OracleFailure(format!("unparseable guess: {e}")))?;
        debug!(raw = raw_search, guess = %guess.topic, "Disambiguated search");
        Ok(guess)
    }
}

/// Assigns one of four difficulty levels to each document in a batch.
pub struct Categorizer {
    chat: ChatClient,
}

impl Categorizer {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    fn prompt(batch_json: &str) -> String {
        format!(
            "Using the following JSON data, categorize the topics into four levels of \
             complexity: Introduction, Simple, Medium, and Hard, to create a structured \
             Bitcoin curriculum. Use the summary field in the JSON to understand the \
             content and assign appropriate difficulty levels, loop through each topic \
             and assign a level.\n\
             Here is the JSON data: {batch_json}\n\
             Categorize each topic into one of the four levels:\n\n\
             - Introduction: Foundational topics for beginners.\n\
             - Simple: Straightforward topics that build on basic concepts.\n\
             - Medium: Intermediate topics requiring some prior knowledge.\n\
             - Hard: Advanced and technical topics.\n\n\
             Provide a brief explanation for why each topic belongs to its assigned \
             level. Repeat each title exactly as given. Provide the output in JSON \
             format as an array of objects with the fields: title, category, and reason."
        )
    }
}

#[async_trait]
impl CategorizationOracle for Categorizer {
    async fn categorize(
        &self,
        batch: &[ClassificationInput],
    ) -> Result<Vec<ClassifiedItem>, CurriculaError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let batch_json = serde_json::to_string(batch)
            .map_err(|e| CurriculaError::OracleFailure(e.to_string()))?;
        let reply = self
            .chat
            .complete(SYSTEM_PROMPT, &Self::prompt(&batch_json))
            .await
            .map_err(|e| CurriculaError::OracleFailure(e.to_string()))?;

        parse_model_json(&reply)
            .map_err(|e| CurriculaError::OracleFailure(format!("unparseable categories: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizer_prompt_embeds_batch_and_rubric() {
        let prompt = Categorizer::prompt(r#"[{"title":"t","summary":"s"}]"#);
        assert!(prompt.contains(r#"[{"title":"t","summary":"s"}]"#));
        for level in ["Introduction", "Simple", "Medium", "Hard"] {
            assert!(prompt.contains(level));
        }
    }

    #[test]
    fn fenced_categorizer_reply_parses_into_items() {
        let reply = "```json\n[{\"topic\": \"SegWit upgrade\", \"category\": \"Medium\", \
                     \"reason\": \"needs prior transaction knowledge\"}]\n```";
        let items: Vec<ClassifiedItem> = parse_model_json(reply).unwrap();
        assert_eq!(items[0].title, "SegWit upgrade");
        assert_eq!(items[0].category, "Medium");
    }

    #[test]
    fn disambiguator_prompt_names_all_fields() {
        let prompt = Disambiguator::prompt("lightning channels");
        for field in ["topic", "description", "aliases", "associated_topic", "slug"] {
            assert!(prompt.contains(field));
        }
    }
}
