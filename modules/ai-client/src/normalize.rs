//! Normalization of model replies before JSON parsing.
//!
//! Oracle replies are free text: the JSON payload is often wrapped in
//! markdown code fences and sometimes carries literal escape artifacts
//! (`\n` sequences, escaped quotes) from the model echoing its own
//! serialization. Parsing goes through one named path so the cleanup can be
//! tested without a network.

use serde::de::DeserializeOwned;

/// Strip markdown code fences from a model reply.
pub fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Undo literal escape artifacts: `\n` sequences that were never real
/// newlines and backslash-escaped quotes outside of string context.
pub fn fix_escape_artifacts(text: &str) -> String {
    text.replace("\\n", " ").replace("\\\"", "\"")
}

/// Parse a model reply as JSON, stripping fences first and falling back to
/// escape repair when the cleaned text still does not parse.
pub fn parse_model_json<T: DeserializeOwned>(response: &str) -> Result<T, serde_json::Error> {
    let cleaned = strip_code_fences(response);
    match serde_json::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            serde_json::from_str(&fix_escape_artifacts(cleaned)).map_err(|_| first_err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("{}"), "{}");
    }

    #[test]
    fn parses_fenced_array() {
        let parsed: Value =
            parse_model_json("```json\n[{\"topic\": \"SegWit\"}]\n```").unwrap();
        assert_eq!(parsed[0]["topic"], "SegWit");
    }

    #[test]
    fn repairs_literal_escapes_when_first_parse_fails() {
        // A stray escaped quote outside string context breaks the parse
        // until the artifact repair pass.
        let raw = "[{\"title\": \\\"SegWit\\\", \"category\": \"Simple\"}]";
        let parsed: Value = parse_model_json(raw).unwrap();
        assert_eq!(parsed[0]["title"], "SegWit");
    }

    #[test]
    fn valid_json_is_untouched_by_repair() {
        let raw = "{\"reason\": \"line one\\nline two\"}";
        let parsed: Value = parse_model_json(raw).unwrap();
        assert_eq!(parsed["reason"], "line one\nline two");
    }

    #[test]
    fn garbage_reports_the_original_error() {
        let err = parse_model_json::<Value>("I could not produce JSON, sorry.").unwrap_err();
        assert!(err.is_syntax());
    }
}
