use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Status {
    Internal(String),
    InvalidArgument(String),
    NotFound(String),
}

impl Status {
    pub fn new(msg: &str, err: impl Error) -> Self {
        Status::Internal(format!("{msg}: '{err}'"))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Status::Internal(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Status::NotFound(msg.into())
    }
}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        Self::new("IO error", err)
    }
}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Self::new("serde error", err)
    }
}

use firestore::errors::FirestoreError;
impl From<FirestoreError> for Status {
    fn from(err: FirestoreError) -> Self {
        match err {
            FirestoreError::DataNotFoundError(err) => Self::not_found(err.to_string()),
            FirestoreError::InvalidParametersError(err) => Self::invalid_argument(err.to_string()),
            err => Self::new("firestore error", err),
        }
    }
}

impl Error for Status {}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Internal(msg) => write!(f, "Internal error: {msg}"),
            Status::InvalidArgument(msg) => write!(f, "Invalid argument error: {msg}"),
            Status::NotFound(msg) => write!(f, "Not found error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_source_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(
            Status::new("Failed to read", err),
            Status::Internal("Failed to read: 'disk on fire'".to_owned())
        );
    }

    #[test]
    fn from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        match Status::from(err) {
            Status::Internal(msg) => assert!(msg.starts_with("serde error: ")),
            status => panic!("unexpected status {status:?}"),
        }
    }

    #[test]
    fn display_names_category() {
        assert_eq!(
            Status::internal("boom").to_string(),
            "Internal error: boom"
        );
        assert_eq!(
            Status::invalid_argument("bad input").to_string(),
            "Invalid argument error: bad input"
        );
        assert_eq!(
            Status::not_found("results/abc").to_string(),
            "Not found error: results/abc"
        );
    }
}
