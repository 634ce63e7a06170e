//! Aggregation of a merge request's discussions into output records.

use async_trait::async_trait;
use tracing::info;

use super::error::ExtractionError;
use super::gateway::MergeRequestGateway;
use super::locator::MergeRequestId;
use super::models::DiscussionPage;
use super::pagination::{Cursor, Page, PagedQuery, traverse};
use crate::export::{OutputRecord, RecordSink};

/// Paged query over one merge request's discussions.
struct DiscussionQuery<'a, Gateway: ?Sized> {
    client: &'a Gateway,
    merge_request: &'a MergeRequestId,
}

#[async_trait]
impl<Gateway> PagedQuery for DiscussionQuery<'_, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    type Items = DiscussionPage;

    fn operation(&self) -> &'static str {
        "ListMergeRequestNotes"
    }

    async fn fetch_page(
        &self,
        after: Option<Cursor>,
    ) -> Result<Page<Self::Items>, ExtractionError> {
        self.client
            .merge_request_discussions(self.merge_request, after)
            .await
    }
}

/// Joins the approver names present on a page with `/`.
#[must_use]
pub fn approved_by(approvers: &[Option<String>]) -> String {
    approvers
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("/")
}

/// Flattens one discussion page into records, dropping system notes.
///
/// Records follow discussion order, then note order within a discussion,
/// and all carry the approvers reported on this page.
pub fn page_records(
    merge_request: &MergeRequestId,
    page: DiscussionPage,
) -> impl Iterator<Item = OutputRecord> {
    let DiscussionPage {
        merge_request: summary,
        approvers,
        discussions,
    } = page;
    let snapshot = approved_by(&approvers);

    discussions
        .into_iter()
        .flat_map(|discussion| discussion.notes)
        .filter(|note| !note.system)
        .map(move |note| OutputRecord::new(merge_request, &summary, &snapshot, note))
}

/// Streams the user-authored notes of one merge request into a sink.
pub struct NoteAggregator<'client, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> NoteAggregator<'client, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    /// Create an aggregator using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Walks every discussion page of `merge_request`, emitting each record
    /// to `sink` as soon as its page arrives.
    ///
    /// Returns the number of records emitted.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway or sink failure. Records emitted before
    /// the failure stay emitted.
    pub async fn aggregate<Sink>(
        &self,
        merge_request: &MergeRequestId,
        sink: &mut Sink,
    ) -> Result<usize, ExtractionError>
    where
        Sink: RecordSink + ?Sized,
    {
        let query = DiscussionQuery {
            client: self.client,
            merge_request,
        };

        let mut emitted = 0_usize;
        let pages = traverse(&query, |page| {
            for record in page_records(merge_request, page) {
                sink.emit(&record)?;
                emitted += 1;
            }
            Ok(())
        })
        .await?;

        info!(
            merge_request = merge_request.as_str(),
            pages,
            records = emitted,
            "aggregated merge request notes"
        );
        Ok(emitted)
    }
}
