pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";
pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const CONFIG_FILE: &str = ".linear-pr-link.json";

pub const USER_AGENT: &str = concat!("linear-pr-link/", env!("CARGO_PKG_VERSION"));

// Cap applied to each text source before regex matching so a pathological
// PR body cannot blow up scan cost.
pub const MAX_SCAN_LEN: usize = 64 * 1024;

// Prefix that must never be treated as a team key. Guards against CVE-XXXX
// security identifiers colliding with a workspace key.
pub const RESERVED_PREFIX: &str = "CVE";

// Common GraphQL field selections
pub const ISSUE_FIELDS: &str = r#"
    id
    title
    url
    state {
        name
    }
"#;

pub const TEAM_FIELDS: &str = r#"
    id
    name
    key
"#;
