//! CLI domain: parse, route and output only.
//! The route resolves the project root once and hands an explicit config to the library.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
