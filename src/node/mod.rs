mod directory;
mod entry;
mod file;
mod unknown;

pub use directory::Directory;
pub use entry::{Node, NodeKind};
pub use file::File;
pub use unknown::UnknownNode;
