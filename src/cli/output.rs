//! CLI output: error mapping to the text shown on stderr.

/// Render a fatal error with its full cause chain.
pub fn map_error(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}
