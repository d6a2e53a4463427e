use std::collections::HashSet;

use regex::Regex;

use crate::constants::{MAX_SCAN_LEN, RESERVED_PREFIX};
use crate::logging::log_error;
use crate::models::{IssueComment, LinearIssue, Team};

/// Scan text sources for issue identifiers, in source order.
///
/// The pattern is an alternation over the literal-escaped team keys followed
/// by a hyphen and digits, matched case-insensitively. Matching against an
/// unbounded key pattern would over-match arbitrary numeric suffixes, so an
/// empty key set yields an empty result. Output identifiers are normalized
/// to an uppercase key and deduplicated in first-seen order.
pub fn extract_identifiers(sources: &[&str], teams: &[Team]) -> Vec<String> {
    let keys: Vec<&str> = teams
        .iter()
        .map(|t| t.key.as_str())
        .filter(|k| !k.is_empty())
        .collect();

    if keys.is_empty() {
        return Vec::new();
    }

    let valid_keys: HashSet<String> = keys.iter().map(|k| k.to_uppercase()).collect();

    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)({})-(\d+)", alternation);

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            log_error(&format!("Failed to compile identifier pattern: {}", e));
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut identifiers = Vec::new();

    for source in sources {
        for caps in re.captures_iter(truncate_for_scan(source)) {
            let (key, number) = match (caps.get(1), caps.get(2)) {
                (Some(key), Some(number)) => (key.as_str().to_uppercase(), number.as_str()),
                _ => continue,
            };

            // CVE-XXXX security identifiers must never resolve to a team.
            if key.starts_with(RESERVED_PREFIX) {
                continue;
            }

            // The alternation already bounds the match; re-checking the set
            // guards against case artifacts in the capture.
            if !valid_keys.contains(&key) {
                continue;
            }

            let identifier = format!("{}-{}", key, number);
            if seen.insert(identifier.clone()) {
                identifiers.push(identifier);
            }
        }
    }

    identifiers
}

/// Check whether any existing comment already references the identifier,
/// in either the current `[ENG-1234: ...]` format or the legacy
/// `Linear issue: [ENG-1234]` format.
pub fn has_existing_comment(comments: &[IssueComment], identifier: &str) -> bool {
    let current_marker = format!("[{}:", identifier);
    let legacy_marker = format!("Linear issue: [{}]", identifier);

    comments
        .iter()
        .any(|c| c.body.contains(&current_marker) || c.body.contains(&legacy_marker))
}

/// Render the comment body posted back to the pull request.
pub fn format_comment(identifier: &str, issue: &LinearIssue) -> String {
    format!("[{}: {}]({})", identifier, issue.title, issue.url)
}

// Pathologically long PR bodies are capped before matching; identifiers past
// the cap are dropped rather than risking quadratic scan time.
fn truncate_for_scan(text: &str) -> &str {
    if text.len() <= MAX_SCAN_LEN {
        return text;
    }
    let mut end = MAX_SCAN_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
