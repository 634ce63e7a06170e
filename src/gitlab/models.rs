//! Data models for GitLab GraphQL responses and the pages built from them.
//!
//! The `Api*` structs mirror the response JSON with every nullable field
//! kept optional. Conversions into [`Page`] values keep absent entries as
//! `None` so that the traversal handlers decide what to filter.

use serde::Deserialize;

use super::locator::MergeRequestId;
use super::pagination::{Cursor, Page, PageInfo};

/// Fields of a merge request that are constant across its discussion pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeRequestSummary {
    /// Merge request title.
    pub title: Option<String>,
    /// Creation timestamp as reported by GitLab.
    pub created_at: Option<String>,
    /// Merge timestamp, absent for unmerged merge requests.
    pub merged_at: Option<String>,
}

/// A single comment inside a discussion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    /// Note identifier.
    pub id: Option<String>,
    /// Display name of the author.
    pub author: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Web URL of the note.
    pub url: Option<String>,
    /// Whether GitLab generated the note (e.g. "added 1 commit").
    pub system: bool,
}

/// A discussion thread and its notes in thread order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discussion {
    /// Notes in the thread.
    pub notes: Vec<Note>,
}

/// Payload of one page of a merge request's discussions.
///
/// Approvers are fetched with every page, so each page carries its own view
/// of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscussionPage {
    /// Static merge request fields.
    pub merge_request: MergeRequestSummary,
    /// Approver names as reported on this page; `None` where GitLab sent no
    /// name.
    pub approvers: Vec<Option<String>>,
    /// Discussions on this page.
    pub discussions: Vec<Discussion>,
}

/// `data` of the `ListMergeRequests` query.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ListMergeRequestsData {
    pub(super) project: Option<ApiProject>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiProject {
    pub(super) merge_requests: Option<ApiConnection<ApiMergeRequestNode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiMergeRequestNode {
    pub(super) id: Option<String>,
}

/// `data` of the `ListMergeRequestNotes` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListMergeRequestNotesData {
    pub(super) merge_request: Option<ApiMergeRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiMergeRequest {
    pub(super) title: Option<String>,
    pub(super) created_at: Option<String>,
    pub(super) merged_at: Option<String>,
    pub(super) approved_by: Option<ApiConnection<ApiUser>>,
    pub(super) discussions: Option<ApiConnection<ApiDiscussion>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiDiscussion {
    pub(super) notes: Option<ApiNoteConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiNoteConnection {
    pub(super) nodes: Option<Vec<Option<ApiNote>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiNote {
    pub(super) id: Option<String>,
    pub(super) author: Option<ApiUser>,
    pub(super) body: Option<String>,
    pub(super) url: Option<String>,
    pub(super) system: Option<bool>,
}

/// Relay connection: `edges { node }` plus `pageInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiConnection<T> {
    pub(super) edges: Option<Vec<Option<ApiEdge<T>>>>,
    pub(super) page_info: Option<ApiPageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiEdge<T> {
    pub(super) node: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiPageInfo {
    pub(super) end_cursor: Option<String>,
    pub(super) has_next_page: Option<bool>,
}

impl<T> ApiConnection<T> {
    /// Yields one entry per edge, `None` where the edge or node is null.
    fn into_nodes(self) -> impl Iterator<Item = Option<T>> {
        self.edges
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.and_then(|value| value.node))
    }

    fn take_page_info(&mut self) -> PageInfo {
        self.page_info.take().map(PageInfo::from).unwrap_or_default()
    }
}

impl From<ApiPageInfo> for PageInfo {
    fn from(value: ApiPageInfo) -> Self {
        Self::new(
            value.end_cursor.map(Cursor::new),
            value.has_next_page.unwrap_or(false),
        )
    }
}

impl From<ApiNote> for Note {
    fn from(value: ApiNote) -> Self {
        Self {
            id: value.id,
            author: value.author.and_then(|user| user.name),
            body: value.body,
            url: value.url,
            system: value.system.unwrap_or(false),
        }
    }
}

impl From<ApiDiscussion> for Discussion {
    fn from(value: ApiDiscussion) -> Self {
        let notes = value
            .notes
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(Note::from)
            .collect();
        Self { notes }
    }
}

impl ListMergeRequestsData {
    /// Returns `None` when the project itself is missing from the response.
    pub(super) fn into_page(self) -> Option<Page<Vec<Option<MergeRequestId>>>> {
        let mut connection = self.project?.merge_requests?;
        let page_info = connection.take_page_info();
        let ids = connection
            .into_nodes()
            .map(|node| node.and_then(|value| value.id).map(MergeRequestId::new))
            .collect();
        Some(Page::new(ids, page_info))
    }
}

impl ListMergeRequestNotesData {
    /// Returns `None` when the merge request is missing from the response.
    pub(super) fn into_page(self) -> Option<Page<DiscussionPage>> {
        let merge_request = self.merge_request?;
        let approvers = merge_request
            .approved_by
            .map(|connection| {
                connection
                    .into_nodes()
                    .map(|user| user.and_then(|value| value.name))
                    .collect()
            })
            .unwrap_or_default();

        let (discussions, page_info) = match merge_request.discussions {
            Some(mut connection) => {
                let page_info = connection.take_page_info();
                let discussions = connection
                    .into_nodes()
                    .flatten()
                    .map(Discussion::from)
                    .collect();
                (discussions, page_info)
            }
            None => (Vec::new(), PageInfo::last()),
        };

        let payload = DiscussionPage {
            merge_request: MergeRequestSummary {
                title: merge_request.title,
                created_at: merge_request.created_at,
                merged_at: merge_request.merged_at,
            },
            approvers,
            discussions,
        };
        Some(Page::new(payload, page_info))
    }
}
