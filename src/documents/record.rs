use serde_json::{Map, Value};

use crate::Status;

/// An untyped result as supplied by callers. No field is required or
/// validated.
pub type Record = Map<String, Value>;

/// Parses a JSON document holding either a single object or an array of
/// objects into records.
pub fn parse_records(json: &str) -> Result<Vec<Record>, Status> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::Object(record) => Ok(record),
                other => Err(Status::invalid_argument(format!(
                    "entry {i} is not an object: {other}"
                ))),
            })
            .collect(),
        other => Err(Status::invalid_argument(format!(
            "expected an object or an array of objects, got: {other}"
        ))),
    }
}
