use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{ISSUE_FIELDS, TEAM_FIELDS};
use crate::error::{LinkError, LinkResult};
use crate::models::graphql::{IssueData, TeamsData};
use crate::models::{GraphQLResponse, LinearIssue, Team};

/// Client for Linear's GraphQL API. Linear expects the raw API key in the
/// Authorization header, without a "Bearer" prefix.
pub struct LinearClient {
    client: reqwest::Client,
    api_url: String,
}

impl LinearClient {
    pub fn new(api_key: &str, api_url: &str) -> LinkResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(api_key)
                .map_err(|_| LinkError::InvalidInput("Linear API key is not a valid header value".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    async fn execute_query<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> LinkResult<T> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(LinkError::ApiError(format!(
                "Linear API returned HTTP {}",
                response.status()
            )));
        }

        let graphql_response: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = graphql_response.errors {
            // The envelope treats any errors entry as a failed request;
            // surface the first message.
            let message = errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "unknown GraphQL error".to_string());
            return Err(LinkError::GraphQLError(message));
        }

        graphql_response
            .data
            .ok_or_else(|| LinkError::GraphQLError("no data returned from query".to_string()))
    }

    /// Fetch every team in the workspace. Team keys define which identifier
    /// prefixes are worth matching, so the run cannot proceed without them.
    pub async fn get_teams(&self) -> LinkResult<Vec<Team>> {
        let query = format!(
            r#"
            query Teams {{
                teams {{
                    nodes {{{}}}
                }}
            }}
        "#,
            TEAM_FIELDS
        );

        let data: TeamsData = self.execute_query(&query, None).await?;
        Ok(data.teams.nodes)
    }

    /// Fetch a single issue by its human-readable identifier, e.g. "ENG-1234".
    pub async fn get_issue(&self, identifier: &str) -> LinkResult<LinearIssue> {
        let query = format!(
            r#"
            query Issue($identifier: String!) {{
                issue(id: $identifier) {{{}}}
            }}
        "#,
            ISSUE_FIELDS
        );

        let variables = json!({ "identifier": identifier });

        let data: IssueData = self.execute_query(&query, Some(variables)).await?;
        Ok(data.issue)
    }
}
