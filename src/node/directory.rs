//! Directory nodes: child resolution, snapshot enumeration, depth-first traversal, creation and
//! (optionally recursive) deletion.
//!
//! ### Key properties:
//! - **No caching**: a `Directory` owns nothing but its path. Every enumeration lists the
//!   directory again.
//! - **Snapshots**: [`Directory::children`] returns a materialised `Vec` sorted by entry name.
//!   Iterating it twice yields the same nodes; call `children()` again for a fresh view.
//! - **Symlinks**: children are classified by what they point to. Traversal follows links to
//!   directories and does not detect cycles, so a looping link makes
//!   [`Directory::recurse_children`] run forever. Recursive deletion never follows links.
//! - **No atomicity**: a failing [`Directory::delete_recursive`] leaves whatever it already
//!   removed removed.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, trace};

use crate::core::{FsNode, Result, utils};
use crate::error::NodeError;
use crate::node::{File, Node, NodeKind};

/// A directory addressed by path.
///
/// ### Example:
/// ```no_run
/// use fsnode_kit::{Directory, FsNode};
///
/// let docs = Directory::new("/tmp/fsnode/docs");
/// docs.ensure_exists().unwrap();
/// docs.create_file("note.txt", b"Hello").unwrap();
///
/// for node in docs.recurse_children().unwrap() {
///     println!("{}", node.path());
/// }
///
/// docs.delete_recursive().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directory {
    path: String,
}

impl Directory {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// `true` for `/` and drive roots such as `C:\`.
    pub fn is_root(&self) -> bool {
        utils::is_root(&self.path)
    }

    /// Resolves `name` inside this directory.
    /// Returns [`Node::Unknown`] if nothing usable is there.
    pub fn child(&self, name: &str) -> Node {
        Node::resolve(self.child_path(name))
    }

    /// Like [`Directory::child`], but fails with [`NodeError::NotFound`] instead of returning an
    /// unknown node.
    pub fn require_child(&self, name: &str) -> Result<Node> {
        match self.child(name) {
            Node::Unknown(unknown) => Err(NodeError::NotFound {
                path: unknown.path().to_string(),
            }),
            node => Ok(node),
        }
    }

    /// Resolves `name` as a file that must exist.
    pub fn file(&self, name: &str) -> Result<File> {
        let node = self.require_child(name)?;
        let path = node.path().to_string();
        node.into_file().ok_or(NodeError::KindMismatch {
            path,
            expected: NodeKind::File,
        })
    }

    /// Resolves `name` as a directory that must exist.
    pub fn directory(&self, name: &str) -> Result<Directory> {
        let node = self.require_child(name)?;
        let path = node.path().to_string();
        node.into_directory().ok_or(NodeError::KindMismatch {
            path,
            expected: NodeKind::Directory,
        })
    }

    /// Lists the direct entries of this directory, sorted by name.
    ///
    /// Fails with [`NodeError::DirectoryNotFound`] if the directory is absent and with
    /// [`NodeError::DirectoryCouldNotBeScanned`] if listing fails for any other reason.
    pub fn children(&self) -> Result<Vec<Node>> {
        if !self.exists() {
            return Err(self.not_found());
        }
        let scan_error = |source| NodeError::DirectoryCouldNotBeScanned {
            path: self.path.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.path).map_err(scan_error)? {
            let name = entry.map_err(scan_error)?.file_name();
            // paths are strings, so a name that is not UTF-8 cannot be addressed
            let name = name.into_string().map_err(|raw| {
                scan_error(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("entry name {raw:?} is not valid UTF-8"),
                ))
            })?;
            names.push(name);
        }
        names.sort();
        trace!(path = %self.path, count = names.len(), "listed directory");

        Ok(names.iter().map(|name| self.child(name)).collect())
    }

    /// Every descendant, depth-first: each child is followed by all of its own descendants
    /// before the next sibling. The directory itself is not included.
    pub fn recurse_children(&self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        self.collect_descendants(&mut nodes)?;
        Ok(nodes)
    }

    fn collect_descendants(&self, nodes: &mut Vec<Node>) -> Result<()> {
        for child in self.children()? {
            let subdirectory = child.as_directory().cloned();
            nodes.push(child);
            if let Some(subdirectory) = subdirectory {
                subdirectory.collect_descendants(nodes)?;
            }
        }
        Ok(())
    }

    /// Direct children that are regular files.
    pub fn files(&self) -> Result<Vec<File>> {
        Ok(self
            .children()?
            .into_iter()
            .filter_map(Node::into_file)
            .collect())
    }

    /// Direct children that are directories.
    pub fn directories(&self) -> Result<Vec<Directory>> {
        Ok(self
            .children()?
            .into_iter()
            .filter_map(Node::into_directory)
            .collect())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.children()?.is_empty())
    }

    /// The directory one level up, computed from the path alone.
    pub fn parent(&self) -> Directory {
        Directory::new(utils::strip_segments(&self.path, 1))
    }

    /// The directory `levels` path components up, computed from the path alone (the ancestor
    /// need not exist). Absolute paths stop at their root, relative ones at `.`.
    ///
    /// Fails with [`NodeError::InvalidParentLevel`] if `levels` is zero.
    pub fn ancestor(&self, levels: usize) -> Result<Directory> {
        if levels == 0 {
            return Err(NodeError::InvalidParentLevel { levels });
        }
        Ok(Directory::new(utils::strip_segments(&self.path, levels)))
    }

    /// Creates the directory and any missing parents. Does nothing if it already exists.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        debug!(path = %self.path, "creating directory");
        std::fs::create_dir_all(&self.path).map_err(|source| self.io_error(source))
    }

    /// Writes `content` into a child file `name`, creating or truncating it.
    pub fn create_file(&self, name: &str, content: &[u8]) -> Result<File> {
        let file = File::new(self.child_path(name));
        file.write_contents(content)?;
        Ok(file)
    }

    /// Removes this directory, which must be empty.
    ///
    /// Fails with [`NodeError::DirectoryNotEmpty`] and leaves everything in place if it has any
    /// entries.
    pub fn delete(&self) -> Result<()> {
        if !self.is_empty()? {
            return Err(NodeError::DirectoryNotEmpty {
                path: self.path.clone(),
            });
        }
        self.remove_self()
    }

    /// Removes this directory and everything below it, contents before containers.
    ///
    /// Stops at the first failure. Entries removed up to that point stay removed; the rest of
    /// the tree is left as is.
    ///
    /// If this directory's own path is a symlink, only the link is removed.
    pub fn delete_recursive(&self) -> Result<()> {
        if utils::is_symlink(&self.path) {
            debug!(path = %self.path, "unlinking directory symlink");
            return utils::remove_link(&self.path).map_err(|source| self.io_error(source));
        }
        for child in self.children()? {
            // a link is unlinked, never descended into
            if utils::is_symlink(child.path()) {
                trace!(path = %child.path(), "unlinking symlink");
                utils::remove_link(child.path()).map_err(|source| NodeError::FileIo {
                    path: child.path().to_string(),
                    source,
                })?;
                continue;
            }
            match child {
                Node::Directory(directory) => directory.delete_recursive()?,
                Node::File(file) => file.delete()?,
                Node::Unknown(unknown) => Self::remove_special(unknown.path())?,
            }
        }
        self.remove_self()
    }

    /// Sockets, fifos and the like, or an entry that vanished after listing.
    fn remove_special(path: &str) -> Result<()> {
        std::fs::remove_file(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => NodeError::NotFound {
                path: path.to_string(),
            },
            _ => NodeError::FileIo {
                path: path.to_string(),
                source,
            },
        })
    }

    fn remove_self(&self) -> Result<()> {
        debug!(path = %self.path, "deleting directory");
        std::fs::remove_dir(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => self.not_found(),
            _ => self.io_error(source),
        })
    }

    fn child_path(&self, name: &str) -> String {
        utils::join([self.path.as_str(), name])
    }

    fn not_found(&self) -> NodeError {
        NodeError::DirectoryNotFound {
            path: self.path.clone(),
        }
    }

    fn io_error(&self, source: std::io::Error) -> NodeError {
        NodeError::DirectoryIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl FsNode for Directory {
    fn path(&self) -> &str {
        &self.path
    }

    /// Only a directory (or a link to one) counts; a file here yields `false`.
    fn exists(&self) -> bool {
        Path::new(&self.path).is_dir()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
