use std::time::SystemTime;

use crate::error::NodeError;

pub mod utils;

pub type Result<T> = std::result::Result<T, NodeError>;

/// Common contract of every path-addressable node (file, directory or unknown).
///
/// A node is identified solely by its path string and holds no open handles: every query goes
/// back to the filesystem.
pub trait FsNode {
    /// Returns the path exactly as the node was constructed with (trailing separators included).
    fn path(&self) -> &str;

    /// Returns the final path component, or an empty string for a root.
    fn name(&self) -> String {
        utils::base_name(self.path())
    }

    /// Returns `true` if an entry of this node's kind currently exists at `path()`.
    fn exists(&self) -> bool;

    /// Returns the last modification time of the entry.
    /// Fails with [`NodeError::NotFound`] if [`FsNode::exists`] is `false`.
    fn modified_at(&self) -> Result<SystemTime> {
        if !self.exists() {
            return Err(NodeError::NotFound {
                path: self.path().to_string(),
            });
        }
        utils::modified_at(self.path())
    }
}
