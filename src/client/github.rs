use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::json;

use crate::constants;
use crate::error::{LinkError, LinkResult};
use crate::models::{IssueComment, PullRequest};

/// Client for the GitHub REST API, scoped to the three calls the linker
/// needs: read one pull request, list its comments, post a comment.
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(token: &str, api_url: &str) -> LinkResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| LinkError::InvalidInput("GitHub token is not a valid header value".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> LinkResult<PullRequest> {
        let url = format!("{}/repos/{}/{}/pulls/{}", self.api_url, owner, repo, number);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LinkError::ApiError(format!(
                "failed to fetch PR #{}: HTTP {}",
                number,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// List existing comments on the pull request. PR comments live on the
    /// issues endpoint in GitHub's API.
    pub async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> LinkResult<Vec<IssueComment>> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, owner, repo, number
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LinkError::ApiError(format!(
                "failed to list comments on PR #{}: HTTP {}",
                number,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> LinkResult<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, owner, repo, number
        );
        let response = self
            .client
            .post(&url)
            .json(&json!({ "body": body }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LinkError::ApiError(format!(
                "failed to create comment on PR #{}: HTTP {}",
                number,
                response.status()
            )));
        }

        Ok(())
    }
}
