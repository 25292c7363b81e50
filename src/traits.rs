use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::Status;

/// A remote store that groups documents into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a new document with a store generated id in `collection` and
    /// returns that id.
    async fn create<D>(&self, collection: &str, doc: &D) -> Result<String, Status>
    where
        D: Serialize + Send + Sync;
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for Arc<S> {
    async fn create<D>(&self, collection: &str, doc: &D) -> Result<String, Status>
    where
        D: Serialize + Send + Sync,
    {
        self.as_ref().create(collection, doc).await
    }
}
