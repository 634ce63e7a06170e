//! Support modules for the note extraction BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    GRAPHQL_PATH, LineCount, discussion_page, merge_request_page, note, split_list,
};
pub(crate) use state::{ExtractionState, ensure_runtime_and_server};
