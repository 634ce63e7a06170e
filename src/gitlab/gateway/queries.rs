//! GraphQL documents and variables for the two queries the extractor issues.

use serde::Serialize;

/// Operation name of the merge request listing query.
pub(super) const LIST_MERGE_REQUESTS: &str = "ListMergeRequests";

/// Operation name of the per-merge-request discussion query.
pub(super) const LIST_MERGE_REQUEST_NOTES: &str = "ListMergeRequestNotes";

pub(super) const LIST_MERGE_REQUESTS_QUERY: &str = r"
query ListMergeRequests($fullPath: ID!, $targetBranches: [String!], $after: String, $first: Int) {
  project(fullPath: $fullPath) {
    mergeRequests(targetBranches: $targetBranches, after: $after, first: $first) {
      edges {
        node {
          id
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
";

pub(super) const LIST_MERGE_REQUEST_NOTES_QUERY: &str = r"
query ListMergeRequestNotes($mergeRequestId: MergeRequestID!, $after: String, $first: Int) {
  mergeRequest(id: $mergeRequestId) {
    title
    createdAt
    mergedAt
    approvedBy {
      edges {
        node {
          name
        }
      }
    }
    discussions(after: $after, first: $first) {
      edges {
        node {
          notes {
            nodes {
              id
              author {
                name
              }
              body
              url
              system
            }
          }
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListMergeRequestsVariables<'a> {
    pub(super) full_path: &'a str,
    pub(super) target_branches: &'a [String],
    pub(super) after: Option<&'a str>,
    pub(super) first: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListMergeRequestNotesVariables<'a> {
    pub(super) merge_request_id: &'a str,
    pub(super) after: Option<&'a str>,
    pub(super) first: Option<u8>,
}
