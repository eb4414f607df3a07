//! Filtered project tree
//!
//! Depth-first traversal of the project root that prunes ignored entries and
//! attaches sidecar descriptions to files.

pub mod builder;
pub mod filter;
pub mod fs;
pub mod metadata;
pub mod node;
pub mod path;
