//! Error taxonomy for the recommendation pipeline.
//!
//! Startup failures ([`PantryError::DatasetLoad`], [`PantryError::ModelUnavailable`])
//! are fatal: the process must not serve traffic after either. Per-request
//! failures are limited to query validation and embedding inference.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    /// The recipe dataset is missing or malformed.
    #[error("failed to load dataset {}: {reason}", .path.display())]
    DatasetLoad { path: PathBuf, reason: String },

    /// The embedding model could not be initialized.
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// The query was empty or whitespace-only.
    #[error("query must contain at least one ingredient")]
    EmptyQuery,

    #[error("embedding failed: {0}")]
    Embedding(String),
}

impl PantryError {
    pub(crate) fn dataset(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::DatasetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error should stop the process rather than fail one request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DatasetLoad { .. } | Self::ModelUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_errors_are_fatal() {
        assert!(PantryError::dataset("missing.csv", "not found").is_fatal());
        assert!(PantryError::ModelUnavailable("no weights".into()).is_fatal());
        assert!(!PantryError::EmptyQuery.is_fatal());
        assert!(!PantryError::Embedding("boom".into()).is_fatal());
    }

    #[test]
    fn dataset_error_names_the_file() {
        let err = PantryError::dataset("/tmp/recipes.csv", "no such file");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/recipes.csv"));
        assert!(msg.contains("no such file"));
    }
}
