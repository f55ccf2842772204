use std::fmt;
use std::time::SystemTime;

use crate::core::{FsNode, Result};
use crate::{Directory, File, UnknownNode};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
    Unknown,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => f.write_str("file"),
            NodeKind::Directory => f.write_str("directory"),
            NodeKind::Unknown => f.write_str("unknown node"),
        }
    }
}

/// A node whose kind was decided once, at resolution time.
///
/// Resolution follows symlinks: a link to a directory is a [`Node::Directory`], a dangling link
/// is a [`Node::Unknown`]. The kind is never re-checked afterwards; call [`Node::resolve`] again
/// to observe filesystem changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(File),
    Directory(Directory),
    Unknown(UnknownNode),
}

impl Node {
    /// Classifies whatever currently lives at `path`.
    /// Anything that is neither a directory nor a regular file (including nothing) is unknown.
    pub fn resolve(path: impl Into<String>) -> Node {
        let path = path.into();
        match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => Node::Directory(Directory::new(path)),
            Ok(metadata) if metadata.is_file() => Node::File(File::new(path)),
            _ => Node::Unknown(UnknownNode::new(path)),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Directory(_) => NodeKind::Directory,
            Node::Unknown(_) => NodeKind::Unknown,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    pub fn is_unknown(&self) -> bool {
        self.kind() == NodeKind::Unknown
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(directory) => Some(directory),
            _ => None,
        }
    }

    pub fn into_file(self) -> Option<File> {
        match self {
            Node::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn into_directory(self) -> Option<Directory> {
        match self {
            Node::Directory(directory) => Some(directory),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn FsNode {
        match self {
            Node::File(file) => file,
            Node::Directory(directory) => directory,
            Node::Unknown(unknown) => unknown,
        }
    }
}

impl FsNode for Node {
    fn path(&self) -> &str {
        self.inner().path()
    }

    fn exists(&self) -> bool {
        self.inner().exists()
    }

    fn modified_at(&self) -> Result<SystemTime> {
        self.inner().modified_at()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<Directory> for Node {
    fn from(directory: Directory) -> Self {
        Node::Directory(directory)
    }
}

impl From<UnknownNode> for Node {
    fn from(unknown: UnknownNode) -> Self {
        Node::Unknown(unknown)
    }
}
