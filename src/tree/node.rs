//! Summary tree nodes
//!
//! A tree is a [`DirectoryEntry`]: an ordered list of named children, each
//! either a file or a nested directory. Serialization follows the output
//! format:
//!
//! - a file without a sidecar is the bare name string (`"foo"`)
//! - a file with a sidecar is `{"name": "foo", "summary": "..."}`
//! - a directory is an object keyed by child name, in insertion order

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// A single entry in the summary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A file, named without its extension, with optional sidecar text
    File {
        name: String,
        summary: Option<String>,
    },
    /// A directory and everything kept beneath it
    Directory(DirectoryEntry),
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            summary: None,
        }
    }

    pub fn described_file(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            summary: Some(summary.into()),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::File {
                name,
                summary: None,
            } => serializer.serialize_str(name),
            Node::File {
                name,
                summary: Some(summary),
            } => {
                let mut state = serializer.serialize_struct("File", 2)?;
                state.serialize_field("name", name)?;
                state.serialize_field("summary", summary)?;
                state.end()
            }
            Node::Directory(dir) => dir.serialize(serializer),
        }
    }
}

/// Children of one directory, keyed by full entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    children: Vec<(String, Node)>,
}

impl DirectoryEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child. Names are unique within a directory listing, so a
    /// repeated name replaces the earlier node in place.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) {
        let name = name.into();
        match self.children.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = node,
            None => self.children.push((name, node)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes beneath this directory, nested ones included.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .map(|(_, node)| match node {
                Node::File { .. } => 1,
                Node::Directory(dir) => 1 + dir.node_count(),
            })
            .sum()
    }
}

impl Serialize for DirectoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (name, node) in &self.children {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}
