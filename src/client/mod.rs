pub mod github;
pub mod linear;

pub use github::GitHubClient;
pub use linear::LinearClient;
