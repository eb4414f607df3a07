//! Property-based tests for tree building guarantees

use project_summary::ignore::IgnorePatterns;
use project_summary::tree::builder::TreeBuilder;
use project_summary::tree::fs::MemoryFileSystem;
use project_summary::tree::node::{DirectoryEntry, Node};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn name_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,6}", prop::option::of(prop_oneof!["txt", "rs", "metadata"]))
        .prop_map(|(stem, ext)| match ext {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem,
        })
}

fn paths_strategy() -> impl Strategy<Value = Vec<(Vec<String>, String)>> {
    prop::collection::vec(
        (prop::collection::vec("d[a-c]", 0..3), name_strategy()),
        1..20,
    )
}

fn populate(paths: &[(Vec<String>, String)]) -> MemoryFileSystem {
    let fs = MemoryFileSystem::new();
    fs.add_dir("/p");
    for (dirs, file) in paths {
        let mut path = std::path::PathBuf::from("/p");
        for dir in dirs {
            path.push(dir);
        }
        // Directory names and file names never collide: directories are d?, files have no d prefix.
        path.push(format!("f{}", file));
        fs.add_file(&path, "");
    }
    fs
}

fn collect_names(dir: &DirectoryEntry, prefix: &str, out: &mut BTreeSet<String>) {
    for (name, node) in dir.iter() {
        let path = format!("{}{}", prefix, name);
        match node {
            Node::Directory(child) => collect_names(child, &format!("{}/", path), out),
            Node::File { .. } => {
                out.insert(path);
            }
        }
    }
}

proptest! {
    /// Building the same tree twice yields the same structure
    #[test]
    fn test_build_is_repeatable(paths in paths_strategy()) {
        let fs = populate(&paths);
        let patterns = IgnorePatterns::empty();
        let builder = TreeBuilder::new(&fs, "/p", &patterns);

        let first = serde_json::to_string(&builder.build().unwrap()).unwrap();
        let second = serde_json::to_string(&builder.build().unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every file except sidecars appears exactly once
    #[test]
    fn test_only_sidecars_are_dropped(paths in paths_strategy()) {
        let fs = populate(&paths);
        let patterns = IgnorePatterns::empty();
        let tree = TreeBuilder::new(&fs, "/p", &patterns).build().unwrap();

        let mut listed = BTreeSet::new();
        collect_names(&tree, "", &mut listed);

        let expected: BTreeSet<String> = paths
            .iter()
            .map(|(dirs, file)| {
                let mut parts = dirs.clone();
                parts.push(format!("f{}", file));
                parts.join("/")
            })
            .filter(|path| !path.ends_with(".metadata"))
            .collect();

        prop_assert_eq!(listed, expected);
    }
}
