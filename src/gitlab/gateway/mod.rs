//! Gateways for loading merge request data from the GitLab GraphQL API.
//!
//! [`MergeRequestGateway`] is the seam between the traversal logic and the
//! network: each method fetches exactly one page. [`GraphQlGateway`] is the
//! real implementation, built on a [`GraphQlClient`] that is constructed once
//! and owned by the gateway.

mod client;
mod error_mapping;
mod queries;

pub use client::{DEFAULT_GRAPHQL_URL, GraphQlClient};

use async_trait::async_trait;
use tracing::warn;

use super::error::ExtractionError;
use super::locator::{BranchFilter, MergeRequestId, ProjectPath};
use super::models::{DiscussionPage, ListMergeRequestNotesData, ListMergeRequestsData};
use super::pagination::{Cursor, Page, PageInfo, PageSize};
use queries::{
    LIST_MERGE_REQUEST_NOTES, LIST_MERGE_REQUEST_NOTES_QUERY, LIST_MERGE_REQUESTS,
    LIST_MERGE_REQUESTS_QUERY, ListMergeRequestNotesVariables, ListMergeRequestsVariables,
};

/// Gateway that fetches single pages of merge request data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MergeRequestGateway: Send + Sync {
    /// Fetch one page of merge request identifiers targeting any of
    /// `branches`. Entries are `None` where GitLab returned no identifier.
    async fn merge_request_ids(
        &self,
        project: &ProjectPath,
        branches: &BranchFilter,
        after: Option<Cursor>,
    ) -> Result<Page<Vec<Option<MergeRequestId>>>, ExtractionError>;

    /// Fetch one page of discussions for a merge request, together with the
    /// merge request's static fields and approvers.
    async fn merge_request_discussions(
        &self,
        merge_request: &MergeRequestId,
        after: Option<Cursor>,
    ) -> Result<Page<DiscussionPage>, ExtractionError>;
}

/// Gateway issuing GraphQL queries through a [`GraphQlClient`].
#[derive(Debug, Clone)]
pub struct GraphQlGateway {
    client: GraphQlClient,
    page_size: Option<PageSize>,
}

impl GraphQlGateway {
    /// Creates a gateway using GitLab's default page size.
    #[must_use]
    pub const fn new(client: GraphQlClient) -> Self {
        Self {
            client,
            page_size: None,
        }
    }

    /// Requests `page_size` items per page instead of the server default.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: Option<PageSize>) -> Self {
        self.page_size = page_size;
        self
    }

    fn first(&self) -> Option<u8> {
        self.page_size.map(PageSize::get)
    }
}

#[async_trait]
impl MergeRequestGateway for GraphQlGateway {
    async fn merge_request_ids(
        &self,
        project: &ProjectPath,
        branches: &BranchFilter,
        after: Option<Cursor>,
    ) -> Result<Page<Vec<Option<MergeRequestId>>>, ExtractionError> {
        let variables = ListMergeRequestsVariables {
            full_path: project.as_str(),
            target_branches: branches.names(),
            after: after.as_ref().map(Cursor::as_str),
            first: self.first(),
        };
        let data: ListMergeRequestsData = self
            .client
            .query(LIST_MERGE_REQUESTS, LIST_MERGE_REQUESTS_QUERY, &variables)
            .await?;

        Ok(data.into_page().unwrap_or_else(|| {
            warn!(project = project.as_str(), "project not found or not visible");
            Page::new(Vec::new(), PageInfo::last())
        }))
    }

    async fn merge_request_discussions(
        &self,
        merge_request: &MergeRequestId,
        after: Option<Cursor>,
    ) -> Result<Page<DiscussionPage>, ExtractionError> {
        let variables = ListMergeRequestNotesVariables {
            merge_request_id: merge_request.as_str(),
            after: after.as_ref().map(Cursor::as_str),
            first: self.first(),
        };
        let data: ListMergeRequestNotesData = self
            .client
            .query(
                LIST_MERGE_REQUEST_NOTES,
                LIST_MERGE_REQUEST_NOTES_QUERY,
                &variables,
            )
            .await?;

        Ok(data.into_page().unwrap_or_else(|| {
            warn!(
                merge_request = merge_request.as_str(),
                "merge request not found or not visible"
            );
            Page::new(DiscussionPage::default(), PageInfo::last())
        }))
    }
}
