use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a [`Document`](crate::document::Document) host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("node {0} no longer exists")]
    StaleNode(String),

    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),

    #[error("node {0} cannot be inserted into its own subtree")]
    HierarchyRequest(String),
}

/// Failures of a tooltip operation
///
/// Every controller operation returns this so the caller decides whether to
/// log or ignore it. The convenience entry points log and swallow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TooltipError {
    #[error("{op}(): {source}")]
    Operation {
        op: &'static str,
        #[source]
        source: DocumentError,
    },

    #[error("{op}(): content selector {selector:?} matched no fragment")]
    EmptyFragment { op: &'static str, selector: String },

    #[error("{op}(): overlay has not been created")]
    NoOverlay { op: &'static str },
}

impl TooltipError {
    /// Name of the operation that failed
    pub fn op(&self) -> &'static str {
        match self {
            TooltipError::Operation { op, .. }
            | TooltipError::EmptyFragment { op, .. }
            | TooltipError::NoOverlay { op } => op,
        }
    }
}

/// Tags a document failure with the operation it happened in
pub(crate) trait OpContext<T> {
    fn during(self, op: &'static str) -> Result<T, TooltipError>;
}

impl<T> OpContext<T> for Result<T, DocumentError> {
    fn during(self, op: &'static str) -> Result<T, TooltipError> {
        self.map_err(|source| TooltipError::Operation { op, source })
    }
}

/// Failures loading a page description
#[derive(Debug, Error)]
pub enum PageError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
