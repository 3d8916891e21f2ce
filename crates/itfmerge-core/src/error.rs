// error types for the combine pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

/// Which of the two input documents an operation was inspecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// Machine-generated ITF output
    Raw,
    /// Hand-written skeleton file
    Skeleton,
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::Raw => write!(f, "raw"),
            Document::Skeleton => write!(f, "skeleton"),
        }
    }
}

/// Errors raised while combining the two documents
#[derive(Error, Debug)]
pub enum MergeError {
    /// A required structural marker is missing; the merge aborts rather
    /// than emit a partial document
    #[error("marker {marker:?} not found in {document} document")]
    MarkerNotFound {
        marker: &'static str,
        document: Document,
    },
}
