pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::wiki_page::*;
pub use parsing::{Metadata, ParsedPage, Rule, RuleOutput, ZimParser, parse};
