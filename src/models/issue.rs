use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LinearIssue {
    pub id: String,
    pub title: String,
    pub url: String,
    pub state: IssueState,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueState {
    pub name: String,
}
