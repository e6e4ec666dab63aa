//! # Dataset Errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Malformed table {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl DatasetError {
    /// Whether the file was absent rather than unreadable
    pub fn is_missing(&self) -> bool {
        matches!(self, DatasetError::MissingFile(_))
    }

    /// Failure reason without the path prefix
    pub fn reason(&self) -> String {
        match self {
            DatasetError::MissingFile(_) => "file not found".to_string(),
            DatasetError::Malformed { reason, .. } => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let err = DatasetError::MissingFile(PathBuf::from("data/cs_topics.csv"));
        assert!(err.is_missing());
        assert!(err.to_string().contains("data/cs_topics.csv"));
    }

    #[test]
    fn test_malformed_reason() {
        let err = DatasetError::Malformed {
            path: PathBuf::from("data/connections.csv"),
            reason: "invalid utf-8".into(),
        };
        assert!(!err.is_missing());
        assert_eq!(err.reason(), "invalid utf-8");
        assert!(err.to_string().starts_with("Malformed table"));
    }
}
