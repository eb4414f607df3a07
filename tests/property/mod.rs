//! Property-based tests for tree building

mod determinism;
