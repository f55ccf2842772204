//! Error taxonomy for node operations.
//!
//! Every variant carries the path the failing operation was called on. Variants that wrap an
//! OS failure keep the original [`std::io::Error`] as their source.

use thiserror::Error;

use crate::NodeKind;

#[derive(Error, Debug)]
pub enum NodeError {
    /// Generic "nothing at this path" failure (metadata queries, strict child lookups).
    #[error("{path} does not exist")]
    NotFound { path: String },

    #[error("directory {path} does not exist")]
    DirectoryNotFound { path: String },

    #[error("directory {path} is not empty")]
    DirectoryNotEmpty { path: String },

    /// Listing failed for a reason other than absence (permissions, I/O).
    #[error("directory {path} could not be scanned: {source}")]
    DirectoryCouldNotBeScanned {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parent level {levels}: must be at least 1")]
    InvalidParentLevel { levels: usize },

    #[error("file {path} does not exist")]
    FileNotFound { path: String },

    #[error("file {path} could not be read: {source}")]
    UnreadableFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for other file-level OS failures.
    #[error("file operation on {path} failed: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for directory creation/removal OS failures.
    #[error("directory operation on {path} failed: {source}")]
    DirectoryIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("metadata of {path} could not be queried: {source}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a {expected}")]
    KindMismatch { path: String, expected: NodeKind },
}

impl NodeError {
    /// Returns the path the failing operation was called on, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            NodeError::NotFound { path }
            | NodeError::DirectoryNotFound { path }
            | NodeError::DirectoryNotEmpty { path }
            | NodeError::DirectoryCouldNotBeScanned { path, .. }
            | NodeError::FileNotFound { path }
            | NodeError::UnreadableFile { path, .. }
            | NodeError::FileIo { path, .. }
            | NodeError::DirectoryIo { path, .. }
            | NodeError::Metadata { path, .. }
            | NodeError::KindMismatch { path, .. } => Some(path),
            NodeError::InvalidParentLevel { .. } => None,
        }
    }
}
