use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::core::{FsNode, Result, utils};
use crate::error::NodeError;
use crate::node::Directory;

/// A regular file addressed by path.
///
/// No handle is kept between calls; every operation opens, uses and drops its own.
///
/// ### Example:
/// ```no_run
/// use fsnode_kit::{File, FsNode};
///
/// let file = File::new("/tmp/notes/today.txt");
/// file.write_contents(b"Hello").unwrap();
/// assert!(file.exists());
/// assert_eq!(file.read_contents().unwrap(), b"Hello");
/// file.delete().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: String,
}

impl File {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the entire contents of the file.
    ///
    /// Fails with [`NodeError::UnreadableFile`] if the file cannot be opened or read: it is
    /// missing, access is denied, or the path is actually a directory.
    pub fn read_contents(&self) -> Result<Vec<u8>> {
        let unreadable = |source| NodeError::UnreadableFile {
            path: self.path.clone(),
            source,
        };
        let mut content = Vec::new();
        std::fs::File::open(&self.path)
            .map_err(unreadable)?
            .read_to_end(&mut content)
            .map_err(unreadable)?;
        Ok(content)
    }

    /// Replaces the contents of the file, creating it if needed.
    /// The parent directory must already exist.
    pub fn write_contents(&self, content: &[u8]) -> Result<()> {
        debug!(path = %self.path, bytes = content.len(), "writing file");
        std::fs::write(&self.path, content).map_err(|source| self.io_error(source))
    }

    /// Appends bytes to the end of an existing file.
    pub fn append_contents(&self, content: &[u8]) -> Result<()> {
        self.ensure_present()?;
        debug!(path = %self.path, bytes = content.len(), "appending to file");
        std::fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .and_then(|mut fd| fd.write_all(content))
            .map_err(|source| self.io_error(source))
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> Result<u64> {
        self.ensure_present()?;
        std::fs::metadata(&self.path)
            .map(|metadata| metadata.len())
            .map_err(|source| NodeError::Metadata {
                path: self.path.clone(),
                source,
            })
    }

    /// Removes the file. A symlink is removed itself, its target is left alone.
    pub fn delete(&self) -> Result<()> {
        self.ensure_present()?;
        debug!(path = %self.path, "deleting file");
        std::fs::remove_file(&self.path).map_err(|source| self.io_error(source))
    }

    /// The directory this file lives in, derived from the path alone.
    pub fn directory(&self) -> Directory {
        Directory::new(utils::strip_segments(&self.path, 1))
    }

    fn ensure_present(&self) -> Result<()> {
        if !self.exists() {
            return Err(NodeError::FileNotFound {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> NodeError {
        NodeError::FileIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl FsNode for File {
    fn path(&self) -> &str {
        &self.path
    }

    /// Only a regular file (or a link to one) counts; a directory here yields `false`.
    fn exists(&self) -> bool {
        Path::new(&self.path).is_file()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
