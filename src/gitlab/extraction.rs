//! End-to-end extraction: enumerate merge requests, then aggregate each one.

use tracing::info;

use super::enumerator::MergeRequestEnumerator;
use super::error::ExtractionError;
use super::gateway::MergeRequestGateway;
use super::locator::{BranchFilter, ProjectPath};
use super::notes::NoteAggregator;
use crate::export::RecordSink;

/// Totals reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Merge requests whose notes were aggregated.
    pub merge_requests: usize,
    /// Records emitted across all merge requests.
    pub records: usize,
}

/// Runs the full extraction against a gateway.
pub struct NoteExtraction<'client, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> NoteExtraction<'client, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    /// Create an extraction using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Enumerates every merge request of `project` targeting `branches`,
    /// then aggregates their notes one merge request at a time.
    ///
    /// Each merge request's discussions are fully traversed before the next
    /// merge request starts, so output order is deterministic.
    ///
    /// # Errors
    ///
    /// Stops at the first failure from enumeration, aggregation, or the
    /// sink. Records already emitted are not retracted.
    pub async fn run<Sink>(
        &self,
        project: &ProjectPath,
        branches: &BranchFilter,
        sink: &mut Sink,
    ) -> Result<ExtractionSummary, ExtractionError>
    where
        Sink: RecordSink + ?Sized,
    {
        let ids = MergeRequestEnumerator::new(self.client)
            .enumerate(project, branches)
            .await?;

        let aggregator = NoteAggregator::new(self.client);
        let mut summary = ExtractionSummary::default();
        for id in &ids {
            summary.records += aggregator.aggregate(id, sink).await?;
            summary.merge_requests += 1;
        }

        info!(
            project = project.as_str(),
            merge_requests = summary.merge_requests,
            records = summary.records,
            "extraction complete"
        );
        Ok(summary)
    }
}
