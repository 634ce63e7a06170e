//! Response builders for the note extraction BDD tests.

use serde_json::{Value, json};
use std::str::FromStr;

/// Path the mock GraphQL endpoint is served on.
pub(crate) const GRAPHQL_PATH: &str = "/api/graphql";

/// Number of output lines expected by a step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineCount(usize);

impl LineCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for LineCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Splits a quoted, separator-delimited step argument.
pub(crate) fn split_list(text: &str, separator: char) -> Vec<String> {
    text.trim_matches('"')
        .split(separator)
        .map(ToOwned::to_owned)
        .collect()
}

/// Builds a `ListMergeRequests` response body.
pub(crate) fn merge_request_page(ids: &[&str], end_cursor: &str, has_next: bool) -> Value {
    let edges: Vec<Value> = ids.iter().map(|id| json!({ "node": { "id": id } })).collect();
    json!({
        "data": {
            "project": {
                "mergeRequests": {
                    "edges": edges,
                    "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next }
                }
            }
        }
    })
}

/// Builds a note node.
pub(crate) fn note(id: &str, system: bool) -> Value {
    json!({
        "id": id,
        "author": { "name": "Reviewer" },
        "body": format!("comment {id}"),
        "url": format!("https://gitlab.com/group/project/-/merge_requests/1#{id}"),
        "system": system
    })
}

/// Builds a `ListMergeRequestNotes` response body with one discussion.
pub(crate) fn discussion_page(
    approvers: &[&str],
    notes: Vec<Value>,
    end_cursor: &str,
    has_next: bool,
) -> Value {
    let approver_edges: Vec<Value> = approvers
        .iter()
        .map(|name| json!({ "node": { "name": name } }))
        .collect();
    json!({
        "data": {
            "mergeRequest": {
                "title": "Improve caching",
                "createdAt": "2024-01-10T09:00:00Z",
                "mergedAt": "2024-01-12T09:00:00Z",
                "approvedBy": { "edges": approver_edges },
                "discussions": {
                    "edges": [ { "node": { "notes": { "nodes": notes } } } ],
                    "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next }
                }
            }
        }
    })
}
