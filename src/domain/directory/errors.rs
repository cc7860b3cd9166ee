//! Directory source errors.
//!
//! Every variant is recoverable: callers fall back to the demo directory
//! and surface the error text as a warning.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Directory source not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Error reading directory source {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Malformed directory source {}{}: {reason}", path.display(), line_suffix(*line))]
    Malformed {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },
}

fn line_suffix(line: Option<u64>) -> String {
    line.map(|l| format!(" (line {})", l)).unwrap_or_default()
}

impl DirectoryError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        DirectoryError::SourceMissing { path: path.into() }
    }

    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DirectoryError::Unreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, line: Option<u64>, reason: impl Into<String>) -> Self {
        DirectoryError::Malformed {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DirectoryError::SourceMissing { .. } => ErrorCode::DirectorySourceMissing,
            DirectoryError::Unreadable { .. } | DirectoryError::Malformed { .. } => {
                ErrorCode::DirectorySourceMalformed
            }
        }
    }
}

impl From<DirectoryError> for DomainError {
    fn from(err: DirectoryError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
