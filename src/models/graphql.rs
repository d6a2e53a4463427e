use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

// Team data structures
#[derive(Debug, Deserialize)]
pub struct TeamsData {
    pub teams: super::Connection<super::Team>,
}

// Issue data structures
#[derive(Debug, Deserialize)]
pub struct IssueData {
    pub issue: super::LinearIssue,
}
