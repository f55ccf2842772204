use std::fmt;
use std::time::SystemTime;

use crate::core::{FsNode, Result};
use crate::error::NodeError;
use crate::node::Node;

/// A path with nothing usable behind it at resolution time.
///
/// It never turns into a [`crate::File`] or [`crate::Directory`] by itself; use
/// [`UnknownNode::resolve`] after the filesystem changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownNode {
    path: String,
}

impl UnknownNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Re-queries the filesystem at this path.
    pub fn resolve(&self) -> Node {
        Node::resolve(self.path.clone())
    }

    /// Always fails: there is nothing to read.
    pub fn read_contents(&self) -> Result<Vec<u8>> {
        Err(self.not_found())
    }

    fn not_found(&self) -> NodeError {
        NodeError::NotFound {
            path: self.path.clone(),
        }
    }
}

impl FsNode for UnknownNode {
    fn path(&self) -> &str {
        &self.path
    }

    fn exists(&self) -> bool {
        false
    }

    fn modified_at(&self) -> Result<SystemTime> {
        Err(self.not_found())
    }
}

impl fmt::Display for UnknownNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
