// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod linker;
pub mod logging;
pub mod models;

// Re-export commonly used items
pub use client::{GitHubClient, LinearClient};
pub use config::LinkConfig;
pub use error::{ErrorContext, LinkError, LinkResult};
pub use extract::{extract_identifiers, format_comment, has_existing_comment};
pub use linker::IssueLinker;
pub use models::*;

#[cfg(test)]
mod tests;
