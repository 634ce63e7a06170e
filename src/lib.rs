//! Export GitLab merge request review notes as JSON Lines.
//!
//! The library walks a project's merge requests (filtered by target branch)
//! through GitLab's GraphQL API, walks each merge request's discussions, and
//! streams every user-authored note as a flat record, one merge request at a
//! time.

pub mod config;
pub mod export;
pub mod gitlab;

pub use config::NotesConfig;
pub use export::{JsonlEmitter, OutputRecord, RecordSink};
pub use gitlab::{
    AccessToken, BranchFilter, ExtractionError, ExtractionSummary, GraphQlClient, GraphQlGateway,
    MergeRequestEnumerator, MergeRequestGateway, MergeRequestId, NoteAggregator, NoteExtraction,
    ProjectPath,
};
