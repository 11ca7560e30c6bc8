use serde_json::{json, Value};

/// Fixed page bounds. The caller gets exactly one bounded page; no
/// pagination surface is exposed.
pub const PAGE_SIZE: u64 = 50;
pub const PAGE_OFFSET: u64 = 0;

/// Fields the title and alias matches run over.
const MATCH_FIELDS: [&str; 3] = ["title", "summary", "body"];

/// Derived/secondary content is never a primary source.
const EXCLUDED_TYPES: [&str; 3] = ["combined-summary", "answer", "reply"];

/// Generic marker terms for the two competing domains. A query scoped to one
/// domain excludes documents matching the other domain's marker, so shared
/// vocabulary does not pull in unrelated results.
const BASE_LAYER_MARKER: &str = "bitcoin";
const LIGHTNING_MARKER: &str = "lightning";

/// Build the full search request body for a resolved topic.
///
/// Pure: every call constructs a fresh value from scratch. Nothing is shared
/// or accumulated between calls, so the exclusion list stays bounded no
/// matter how long the process lives.
pub fn build_search_query(title: &str, aliases: &[String], category: &str) -> Value {
    let mut should: Vec<Value> = Vec::with_capacity(1 + aliases.len());
    should.push(exact_multi_match(title));
    for alias in aliases {
        should.push(exact_multi_match(alias));
    }

    let mut must_not: Vec<Value> = EXCLUDED_TYPES
        .iter()
        .map(|t| json!({ "term": { "type": t } }))
        .collect();

    if let Some(marker) = competing_domain_marker(category) {
        must_not.push(json!({
            "multi_match": {
                "query": marker,
                "fields": ["title", "body", "summary"],
            }
        }));
    }

    json!({
        "query": {
            "bool": {
                "should": should,
                "minimum_should_match": 1,
                "must_not": must_not,
            }
        },
        "size": PAGE_SIZE,
        "from": PAGE_OFFSET,
    })
}

/// Fuzz-free, full-phrase match across title, summary, and body.
fn exact_multi_match(phrase: &str) -> Value {
    json!({
        "multi_match": {
            "query": phrase,
            "fields": MATCH_FIELDS,
            "fuzziness": 0,
            "minimum_should_match": "100%",
        }
    })
}

/// The marker term to exclude for a given domain category, if any.
/// Category matching is case-insensitive; unrecognized categories get no
/// extra exclusion.
fn competing_domain_marker(category: &str) -> Option<&'static str> {
    let category = category.to_ascii_lowercase();
    match category.as_str() {
        "lightning" | "lightning-network" => Some(BASE_LAYER_MARKER),
        "bitcoin" => Some(LIGHTNING_MARKER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must_not_of(query: &Value) -> &Vec<Value> {
        query["query"]["bool"]["must_not"].as_array().unwrap()
    }

    fn should_of(query: &Value) -> &Vec<Value> {
        query["query"]["bool"]["should"].as_array().unwrap()
    }

    fn contains_marker_exclusion(query: &Value, marker: &str) -> bool {
        must_not_of(query).iter().any(|clause| {
            clause["multi_match"]["query"] == json!(marker)
                && clause["multi_match"]["fields"] == json!(["title", "body", "summary"])
        })
    }

    #[test]
    fn title_and_aliases_each_get_an_exact_clause() {
        let aliases = vec!["Segregated Witness".to_string(), "BIP141".to_string()];
        let query = build_search_query("SegWit", &aliases, "bitcoin");

        let should = should_of(&query);
        assert_eq!(should.len(), 3);
        for clause in should {
            assert_eq!(clause["multi_match"]["fuzziness"], json!(0));
            assert_eq!(clause["multi_match"]["minimum_should_match"], json!("100%"));
            assert_eq!(
                clause["multi_match"]["fields"],
                json!(["title", "summary", "body"])
            );
        }
        assert_eq!(should[0]["multi_match"]["query"], json!("SegWit"));
    }

    #[test]
    fn derived_content_is_always_excluded() {
        let query = build_search_query("SegWit", &[], "unrecognized");
        let must_not = must_not_of(&query);
        assert_eq!(must_not.len(), 3);
        for t in ["combined-summary", "answer", "reply"] {
            assert!(must_not.iter().any(|c| c["term"]["type"] == json!(t)));
        }
    }

    #[test]
    fn bitcoin_category_excludes_lightning_marker() {
        let query = build_search_query("SegWit", &[], "bitcoin");
        assert!(contains_marker_exclusion(&query, "lightning"));
        assert!(!contains_marker_exclusion(&query, "bitcoin"));
    }

    #[test]
    fn lightning_category_excludes_bitcoin_marker() {
        for category in ["lightning", "Lightning-Network", "LIGHTNING"] {
            let query = build_search_query("HTLC", &[], category);
            assert!(contains_marker_exclusion(&query, "bitcoin"), "{category}");
            assert!(!contains_marker_exclusion(&query, "lightning"), "{category}");
        }
    }

    #[test]
    fn successive_calls_return_independent_values() {
        let first = build_search_query("SegWit", &[], "bitcoin");
        let second = build_search_query("HTLC", &["Hashed Timelock".to_string()], "lightning");

        // The first query is unaffected by the second call.
        assert_eq!(should_of(&first).len(), 1);
        assert_eq!(must_not_of(&first).len(), 4);
        assert!(contains_marker_exclusion(&first, "lightning"));
        assert!(!contains_marker_exclusion(&first, "bitcoin"));

        assert_eq!(should_of(&second).len(), 2);
        assert!(contains_marker_exclusion(&second, "bitcoin"));
    }

    #[test]
    fn page_bounds_are_fixed() {
        let query = build_search_query("SegWit", &[], "bitcoin");
        assert_eq!(query["size"], json!(PAGE_SIZE));
        assert_eq!(query["from"], json!(PAGE_OFFSET));
    }
}
