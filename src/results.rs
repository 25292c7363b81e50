use serde::Serialize;
use tracing::{error, info, instrument};

use crate::traits::DocumentStore;

/// Saves caller supplied results as new documents in the `results`
/// collection.
///
/// Every failure is logged and reported as `false`; nothing propagates to the
/// caller and no write is retried.
pub struct ResultPersister<S> {
    store: S,
}

impl<S: DocumentStore> ResultPersister<S> {
    pub fn new(store: S) -> Self {
        ResultPersister { store }
    }

    /// Creates one document holding `result` as its full body. Returns true
    /// iff the store acknowledged the creation.
    #[instrument(name = "results::save", level = "trace", skip(self, result))]
    pub async fn save<T>(&self, result: &T) -> bool
    where
        T: Serialize + Send + Sync,
    {
        match self.store.create(RESULTS, result).await {
            Ok(doc_id) => {
                info!("Saved result '{doc_id}' in '/{RESULTS}'");
                true
            }
            Err(status) => {
                error!("Failed to save result in '/{RESULTS}': {status}");
                false
            }
        }
    }
}

pub const RESULTS: &str = "results";
