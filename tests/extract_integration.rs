use linear_pr_link::extract::{extract_identifiers, has_existing_comment};
use linear_pr_link::models::graphql::TeamsData;
use linear_pr_link::models::{GraphQLResponse, IssueComment, PullRequest, Team};

fn team(key: &str) -> Team {
    Team {
        id: key.to_lowercase(),
        name: key.to_string(),
        key: key.to_string(),
    }
}

#[test]
fn test_end_to_end_extraction_and_dedup() {
    let teams = vec![team("ENG"), team("DOC")];
    let body = "Fixes ENG-1234 and doc-99, also mentions ENG-1234 twice";
    let branch = "bugfix/eng-1234-login";

    let ids = extract_identifiers(&[body, branch], &teams);
    assert_eq!(ids, vec!["ENG-1234", "DOC-99"]);
}

#[test]
fn test_extraction_feeds_existence_check() {
    let teams = vec![team("ENG")];
    let ids = extract_identifiers(&["ENG-7 is done", ""], &teams);
    assert_eq!(ids, vec!["ENG-7"]);

    let comments = vec![IssueComment {
        body: "[ENG-7: Ship it](https://linear.app/acme/issue/ENG-7)".to_string(),
    }];
    assert!(has_existing_comment(&comments, &ids[0]));
}

#[test]
fn test_pull_request_deserializes_github_payload() {
    let payload = r#"{
        "number": 42,
        "body": "Fixes ENG-1",
        "head": { "ref": "feature/eng-1", "sha": "abc123" },
        "state": "open"
    }"#;

    let pull: PullRequest = serde_json::from_str(payload).expect("failed to parse PR payload");
    assert_eq!(pull.body.as_deref(), Some("Fixes ENG-1"));
    assert_eq!(pull.head.branch.as_deref(), Some("feature/eng-1"));
}

#[test]
fn test_pull_request_tolerates_null_body_and_branch() {
    let payload = r#"{ "body": null, "head": { "ref": null } }"#;

    let pull: PullRequest = serde_json::from_str(payload).expect("failed to parse PR payload");
    assert!(pull.body.is_none());
    assert!(pull.head.branch.is_none());
}

#[test]
fn test_graphql_envelope_carries_team_nodes() {
    let payload = r#"{
        "data": {
            "teams": {
                "nodes": [
                    { "id": "t1", "name": "Engineering", "key": "ENG" },
                    { "id": "t2", "name": "Docs", "key": "DOC" }
                ]
            }
        }
    }"#;

    let response: GraphQLResponse<TeamsData> =
        serde_json::from_str(payload).expect("failed to parse teams response");
    let teams = response.data.expect("expected data").teams.nodes;
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].key, "ENG");
}

#[test]
fn test_graphql_envelope_surfaces_errors() {
    let payload = r#"{
        "data": null,
        "errors": [ { "message": "Entity not found" }, { "message": "second" } ]
    }"#;

    let response: GraphQLResponse<TeamsData> =
        serde_json::from_str(payload).expect("failed to parse error response");
    assert!(response.data.is_none());
    let errors = response.errors.expect("expected errors");
    assert_eq!(errors[0].message, "Entity not found");
}
