use axum::http::{StatusCode, Uri};
use axum::Json;

use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

pub async fn handler404(path: Uri) -> (StatusCode, Json<Error>) {
    (
        StatusCode::NOT_FOUND,
        Json(Error::NotFound {
            message: format!("Invalid path: {}", path),
        }),
    )
}

/// Failures the submission workflow can run into.
///
/// `NotFound` and `LookupFailed` are kept apart: the first means the directory
/// answered and had no such student, the second means it could not answer.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(tag = "error")]
pub enum Error {
    #[error("invalid submission: {message}")]
    Validation { message: String },
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("student lookup failed: {message}")]
    LookupFailed { message: String },
    #[error("sms gateway error: {message}")]
    Gateway { message: String },
    #[error("{kind}: {message}")]
    Storage { kind: &'static str, message: String },
}

impl Error {
    pub fn validation<S: Into<String>>(msg: S) -> Error {
        Error::Validation {
            message: msg.into(),
        }
    }

    pub fn gateway<S: Into<String>>(msg: S) -> Error {
        Error::Gateway {
            message: msg.into(),
        }
    }

    /// Re-labels a storage failure raised while reading the student table.
    pub fn into_lookup(self) -> Error {
        match self {
            Error::Storage { message, .. } => Error::LookupFailed { message },
            other => other,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage {
            kind: "DatabaseError",
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Gateway {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_error_tag() {
        let value = serde_json::to_value(Error::NotFound {
            message: "Invalid path: /nope".into(),
        })
        .unwrap();
        assert_eq!(value["error"], "NotFound");
        assert_eq!(value["message"], "Invalid path: /nope");
    }

    #[test]
    fn storage_errors_become_lookup_failures() {
        let err = Error::Storage {
            kind: "DatabaseError",
            message: "unable to open database file".into(),
        };
        match err.into_lookup() {
            Error::LookupFailed { message } => assert_eq!(message, "unable to open database file"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
