pub mod github;
pub mod graphql;
pub mod issue;
pub mod team;

// Re-export commonly used types
pub use github::{IssueComment, PullRequest};
pub use graphql::{GraphQLError, GraphQLResponse};
pub use issue::{IssueState, LinearIssue};
pub use team::Team;

// Connection type used by GraphQL pagination
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}
