//! Object-oriented wrappers over files and directories of the host filesystem.
//!
//! ### Overview
//!
//! `fsnode-kit` models every path as a node: a [`File`], a [`Directory`] or an [`UnknownNode`]
//! (nothing usable at that path). All of them implement the [`FsNode`] contract. A node holds
//! only its path string, so every query goes back to the filesystem.
//!
//! **Key ideas**:
//! - **Classification once**: [`Node::resolve`] and [`Directory::child`] decide the kind of a
//!   path at call time and never re-check it implicitly.
//! - **Snapshot enumeration**: [`Directory::children`] and [`Directory::recurse_children`]
//!   return materialised, name-sorted lists.
//! - **Typed failures**: every operation returns [`NodeError`], telling "not found" apart from
//!   "wrong kind", "not empty" and OS-level failures.
//! - **No magic**: no caching, no locking, no atomicity across calls, no cycle detection.
//!
//! ### Example:
//! ```no_run
//! use fsnode_kit::{Directory, FsNode};
//!
//! let work = Directory::new("/tmp/fsnode_example");
//! work.ensure_exists().unwrap();
//! work.create_file("a.txt", b"A").unwrap();
//!
//! assert!(work.child("a.txt").is_file());
//! assert!(!work.child("missing").exists());
//!
//! work.delete_recursive().unwrap();
//! ```

mod core;
mod error;
mod node;

pub use crate::core::utils::join;
pub use crate::core::{FsNode, Result};
pub use error::NodeError;
pub use node::{Directory, File, Node, NodeKind, UnknownNode};
