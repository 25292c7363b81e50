use std::fmt::Display;

use async_trait::async_trait;
use firestore::{errors::FirestoreError, FirestoreDb, FirestoreDocument};
use serde::Serialize;
use tracing::instrument;

use crate::{log_event, logging::FirestoreEvent, traits::DocumentStore, Status};

pub struct FirestoreApi {
    db: FirestoreDb,
}

impl FirestoreApi {
    pub async fn connect(project_id: &str) -> Result<Self, Status> {
        Ok(FirestoreApi {
            db: FirestoreDb::new(project_id).await?,
        })
    }
}

#[async_trait]
impl DocumentStore for FirestoreApi {
    #[instrument(name = "firestore::create", level = "trace", skip(self, doc))]
    async fn create<D>(&self, collection: &str, doc: &D) -> Result<String, Status>
    where
        D: Serialize + Send + Sync,
    {
        let path = format!("/{collection}");
        let document = match to_document(doc, &path) {
            Ok(document) => document,
            Err(status) => {
                log_event!(FirestoreEvent::create(path, None, Some(status.to_string())));
                return Err(status);
            }
        };

        let result = self
            .db
            .fluent()
            .insert()
            .into(collection)
            .generate_document_id()
            .document(document)
            .execute()
            .await;

        match result {
            Ok(created) => {
                let doc_id = doc_id(&created).to_owned();
                log_event!(FirestoreEvent::create(path, Some(doc_id.clone()), None));
                Ok(doc_id)
            }
            Err(e) => {
                log_event!(FirestoreEvent::create(
                    path.clone(),
                    None,
                    Some(e.to_string()),
                ));
                Err(make_status(e, &path, NEW_DOC))
            }
        }
    }
}

/// Converts `doc` into a Firestore document body. Only values that serialize
/// as maps can become documents.
fn to_document<D: Serialize>(doc: &D, collection: &str) -> Result<FirestoreDocument, Status> {
    FirestoreDb::serialize_to_doc("", doc).map_err(|e| make_status(e, collection, NEW_DOC))
}

/// Last segment of the document's full resource name.
fn doc_id(document: &FirestoreDocument) -> &str {
    document.name.rsplit('/').next().unwrap_or_default()
}

fn make_status<S: Display>(error: FirestoreError, collection: &str, doc_id: S) -> Status {
    match error {
        FirestoreError::SerializeError(e) => Status::invalid_argument(format!(
            "Firestore '{collection}/{doc_id}' document failed to serialize with error '{}'",
            e.message,
        )),
        e => Status::internal(format!("Firestore '{collection}/{doc_id}' error: {e}")),
    }
}

const NEW_DOC: &str = "<new>";
