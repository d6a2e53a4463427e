use colored::*;

use crate::client::{GitHubClient, LinearClient};
use crate::config::LinkConfig;
use crate::error::LinkResult;
use crate::extract::{extract_identifiers, format_comment, has_existing_comment};
use crate::logging::{log_debug, log_error, log_info};

/// Orchestrates one linking run: fetch the PR and team set, extract
/// identifiers, and post a comment for every identifier not yet referenced.
pub struct IssueLinker {
    github: GitHubClient,
    linear: LinearClient,
}

impl IssueLinker {
    pub fn new(config: &LinkConfig) -> LinkResult<Self> {
        Ok(Self {
            github: GitHubClient::new(&config.github_token, &config.github_api_url)?,
            linear: LinearClient::new(&config.linear_api_key, &config.linear_api_url)?,
        })
    }

    /// Run the pipeline against one pull request.
    ///
    /// Prerequisite failures (PR fetch, team fetch, comment listing) abort
    /// the run; per-identifier failures are logged and skipped so one
    /// unreachable issue cannot block the rest.
    pub async fn run(&self, owner: &str, repo: &str, pr_number: u64) -> LinkResult<()> {
        log_info(&format!(
            "Linking Linear issues for {}/{}#{}",
            owner, repo, pr_number
        ));

        let pull = self.github.get_pull_request(owner, repo, pr_number).await?;
        let teams = self.linear.get_teams().await?;
        log_debug(&format!("Fetched {} teams from Linear", teams.len()));

        let body = pull.body.as_deref().unwrap_or("");
        let branch = pull.head.branch.as_deref().unwrap_or("");
        let identifiers = extract_identifiers(&[body, branch], &teams);

        if identifiers.is_empty() {
            log_info("No Linear issue identifiers found in PR body or branch name");
            return Ok(());
        }
        log_info(&format!(
            "Found {} identifier(s): {}",
            identifiers.len(),
            identifiers.join(", ")
        ));

        let comments = self.github.list_comments(owner, repo, pr_number).await?;

        let mut posted = 0;
        let mut skipped = 0;
        for identifier in &identifiers {
            if has_existing_comment(&comments, identifier) {
                println!("  {} {} already linked", "-".dimmed(), identifier);
                skipped += 1;
                continue;
            }

            let issue = match self.linear.get_issue(identifier).await {
                Ok(issue) => issue,
                Err(e) => {
                    log_error(&format!("Failed to fetch issue {}: {}", identifier, e));
                    println!("  {} {} fetch failed", "✗".red(), identifier);
                    continue;
                }
            };
            log_debug(&format!(
                "Issue {}: {} ({})",
                identifier, issue.title, issue.state.name
            ));

            let comment = format_comment(identifier, &issue);
            match self
                .github
                .create_comment(owner, repo, pr_number, &comment)
                .await
            {
                Ok(()) => {
                    println!("  {} Linked {}", "✓".green(), identifier);
                    posted += 1;
                }
                Err(e) => {
                    log_error(&format!("Failed to comment for {}: {}", identifier, e));
                    println!("  {} {} comment failed", "✗".red(), identifier);
                }
            }
        }

        println!(
            "Done: {} comment(s) posted, {} already linked.",
            posted, skipped
        );
        Ok(())
    }
}
