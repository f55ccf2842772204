use anyhow::Context;
use fsnode_kit::{Directory, FsNode, NodeError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=fsnode_kit=debug shows every mutation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .compact()
        .init();

    let root = match std::env::args().nth(1) {
        Some(path) => path,
        None => std::env::temp_dir()
            .join("fsnode_demo")
            .to_string_lossy()
            .into_owned(),
    };
    println!("Working in: {root}");

    // creates the root and all missing parents; a second call is a no-op
    let work = Directory::new(root);
    work.ensure_exists()?;
    work.ensure_exists()?;

    // purely syntactic, the filesystem is not consulted
    let grandparent = work.ancestor(2)?;
    println!("Two levels up: {}", grandparent.path());

    let docs = Directory::new(fsnode_kit::join([work.path(), "docs"]));
    docs.ensure_exists()?;
    docs.create_file("first.txt", b"Hello")?;
    work.create_file("second.txt", b"World")?;

    // a missing child is an unknown node, not an error
    let missing = work.child("missing.txt");
    println!("{} exists: {}", missing.path(), missing.exists());

    let first = docs.file("first.txt")?.read_contents()?;
    let second = work.file("second.txt")?.read_contents()?;
    println!(
        "{}, {}!",
        String::from_utf8(first).context("first.txt is not UTF-8")?,
        String::from_utf8(second).context("second.txt is not UTF-8")?
    );

    // depth-first: docs, docs/first.txt, second.txt
    for node in work.recurse_children()? {
        println!("{:>9}  {}", node.kind().to_string(), node.path());
    }

    match work.delete() {
        Err(NodeError::DirectoryNotEmpty { path }) => println!("{path} is not empty, as expected"),
        other => other?,
    }

    work.delete_recursive()?;
    println!("{} exists after recursive delete: {}", work.path(), work.exists());

    Ok(())
}
