//! GitLab merge request note extraction.
//!
//! This module walks a project's merge requests through GitLab's GraphQL API
//! and, for each one, walks its discussion threads and turns every
//! user-authored note into an [`OutputRecord`](crate::export::OutputRecord).
//! Both walks share one cursor pagination loop ([`pagination::traverse`])
//! and run strictly one page at a time.

pub mod enumerator;
pub mod error;
pub mod extraction;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod notes;
pub mod pagination;

pub use enumerator::MergeRequestEnumerator;
pub use error::ExtractionError;
pub use extraction::{ExtractionSummary, NoteExtraction};
pub use gateway::{DEFAULT_GRAPHQL_URL, GraphQlClient, GraphQlGateway, MergeRequestGateway};
pub use locator::{AccessToken, BranchFilter, MergeRequestId, ProjectPath};
pub use models::{Discussion, DiscussionPage, MergeRequestSummary, Note};
pub use notes::NoteAggregator;
pub use pagination::{Cursor, Page, PageInfo, PageSize, PagedQuery};
