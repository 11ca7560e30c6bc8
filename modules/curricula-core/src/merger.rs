use curricula_common::{ClassifiedItem, SearchDocument};

/// Re-attach provenance to classified items by exact title lookup.
///
/// For each item, the first document in original retrieval order whose title
/// equals the item's title (case-sensitive) supplies the url. No match means
/// the url stays `None`; when several documents share a title, the first one
/// wins. Category, reason, and title are never touched.
pub fn attach_sources(
    classified: Vec<ClassifiedItem>,
    documents: &[SearchDocument],
) -> Vec<ClassifiedItem> {
    classified
        .into_iter()
        .map(|mut item| {
            item.url = documents
                .iter()
                .find(|d| d.title == item.title)
                .map(|d| d.url.clone());
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> ClassifiedItem {
        ClassifiedItem {
            title: title.to_string(),
            category: "Simple".into(),
            reason: "r".into(),
            url: None,
        }
    }

    fn doc(title: &str, url: &str) -> SearchDocument {
        SearchDocument {
            title: title.to_string(),
            summary: Some("s".into()),
            url: url.to_string(),
            authors: vec![],
            domain: None,
            tags: vec![],
        }
    }

    #[test]
    fn attaches_url_on_exact_title_match() {
        let docs = vec![doc("SegWit Explained", "https://a.example/segwit")];
        let merged = attach_sources(vec![item("SegWit Explained")], &docs);
        assert_eq!(merged[0].url.as_deref(), Some("https://a.example/segwit"));
    }

    #[test]
    fn no_match_leaves_url_none() {
        let docs = vec![doc("SegWit Explained", "https://a.example/segwit")];
        let merged = attach_sources(vec![item("Segwit explained")], &docs);
        assert_eq!(merged[0].url, None);
    }

    #[test]
    fn duplicate_titles_take_first_document() {
        let docs = vec![
            doc("HTLCs", "https://a.example/first"),
            doc("HTLCs", "https://a.example/second"),
        ];
        let merged = attach_sources(vec![item("HTLCs")], &docs);
        assert_eq!(merged[0].url.as_deref(), Some("https://a.example/first"));
    }

    #[test]
    fn only_url_is_modified() {
        let docs = vec![doc("HTLCs", "https://a.example/htlc")];
        let merged = attach_sources(
            vec![ClassifiedItem {
                title: "HTLCs".into(),
                category: "Hard".into(),
                reason: "payment channel internals".into(),
                url: None,
            }],
            &docs,
        );
        assert_eq!(merged[0].title, "HTLCs");
        assert_eq!(merged[0].category, "Hard");
        assert_eq!(merged[0].reason, "payment channel internals");
    }
}
