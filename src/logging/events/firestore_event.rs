use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::warn;
use valuable::Valuable;

#[derive(Serialize, Deserialize, Valuable, Clone, Debug)]
pub struct FirestoreEvent {
    op: Op,
    collection: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    doc: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl FirestoreEvent {
    /// A document was created in `collection`. `doc` is the generated id,
    /// unknown when the create failed.
    pub fn create(collection: String, doc: Option<String>, error: Option<String>) -> Self {
        FirestoreEvent {
            op: Op::Create,
            collection,
            doc,
            errors: match error {
                Some(error) => vec![error],
                None => vec![],
            },
        }
    }

    pub fn encode(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                warn!("{}", e);
                String::default()
            }
        }
    }
}

#[derive(Serialize, Deserialize, Valuable, Clone, Debug)]
enum Op {
    Create,
}
