use serde::{Deserialize, Serialize};

/// Snapshot of the pull request fields the linker reads. Fetched once per run.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PullRequest {
    pub body: Option<String>,
    pub head: BranchRef,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub branch: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueComment {
    #[serde(default)]
    pub body: String,
}
