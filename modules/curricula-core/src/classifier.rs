use std::sync::Arc;

use tracing::warn;

use curricula_common::{ClassificationInput, ClassifiedItem, SearchDocument};

use crate::traits::CategorizationOracle;

/// Drives summary-bearing documents through the categorization oracle in two
/// halves. The split exists because the oracle has a practical input-size
/// ceiling; two batches keep each request under it.
pub struct BatchClassifier {
    oracle: Arc<dyn CategorizationOracle>,
}

impl BatchClassifier {
    pub fn new(oracle: Arc<dyn CategorizationOracle>) -> Self {
        Self { oracle }
    }

    /// Classify all eligible documents. Batch 1 is the first floor(N/2)
    /// inputs, batch 2 the remainder; both are dispatched concurrently.
    /// A failed batch contributes nothing — the operation itself never
    /// fails. Output is batch 1's items then batch 2's, each in oracle
    /// order, with no re-sorting or deduplication.
    pub async fn classify(&self, documents: &[SearchDocument]) -> Vec<ClassifiedItem> {
        let inputs: Vec<ClassificationInput> = documents
            .iter()
            .filter(|d| d.has_summary())
            .map(|d| ClassificationInput {
                title: d.title.clone(),
                summary: d.summary.clone().unwrap_or_default(),
            })
            .collect();

        let mid = inputs.len() / 2;
        let (first, second) = inputs.split_at(mid);

        let (mut items, mut tail) = tokio::join!(
            self.run_batch(1, first),
            self.run_batch(2, second),
        );
        items.append(&mut tail);
        items
    }

    async fn run_batch(&self, batch: usize, inputs: &[ClassificationInput]) -> Vec<ClassifiedItem> {
        match self.oracle.categorize(inputs).await {
            Ok(items) => {
                if items.len() != inputs.len() {
                    warn!(
                        batch,
                        sent = inputs.len(),
                        received = items.len(),
                        "Oracle returned a different number of items than sent"
                    );
                }
                items
            }
            Err(e) => {
                warn!(batch, error = %e, "Classification batch failed, dropping its documents");
                Vec::new()
            }
        }
    }
}
