//! Integration tests for project summary generation

mod cli_behaviour;
mod summary_output;
mod tree_determinism;
