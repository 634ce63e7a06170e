//! Enumeration of merge request identifiers for one project.

use async_trait::async_trait;
use tracing::info;

use super::error::ExtractionError;
use super::gateway::MergeRequestGateway;
use super::locator::{BranchFilter, MergeRequestId, ProjectPath};
use super::pagination::{Cursor, Page, PagedQuery, traverse};

/// Paged query over a project's merge requests filtered by target branch.
struct MergeRequestQuery<'a, Gateway: ?Sized> {
    client: &'a Gateway,
    project: &'a ProjectPath,
    branches: &'a BranchFilter,
}

#[async_trait]
impl<Gateway> PagedQuery for MergeRequestQuery<'_, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    type Items = Vec<Option<MergeRequestId>>;

    fn operation(&self) -> &'static str {
        "ListMergeRequests"
    }

    async fn fetch_page(
        &self,
        after: Option<Cursor>,
    ) -> Result<Page<Self::Items>, ExtractionError> {
        self.client
            .merge_request_ids(self.project, self.branches, after)
            .await
    }
}

/// Collects every merge request identifier of a project, in API order.
pub struct MergeRequestEnumerator<'client, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> MergeRequestEnumerator<'client, Gateway>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    /// Create an enumerator using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Walks all pages of merge requests targeting any branch in `branches`.
    ///
    /// Identifiers keep page-arrival order and are not de-duplicated; entries
    /// GitLab returned without an identifier are skipped.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure. No partial list is returned.
    pub async fn enumerate(
        &self,
        project: &ProjectPath,
        branches: &BranchFilter,
    ) -> Result<Vec<MergeRequestId>, ExtractionError> {
        let query = MergeRequestQuery {
            client: self.client,
            project,
            branches,
        };

        let mut ids: Vec<MergeRequestId> = Vec::new();
        let pages = traverse(&query, |page| {
            ids.extend(page.into_iter().flatten());
            Ok(())
        })
        .await?;

        info!(
            project = project.as_str(),
            pages,
            merge_requests = ids.len(),
            "enumerated merge requests"
        );
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::{always, eq};

    use super::*;
    use crate::gitlab::gateway::MockMergeRequestGateway;
    use crate::gitlab::pagination::PageInfo;

    fn project() -> ProjectPath {
        ProjectPath::new("group/project").expect("project path should be valid")
    }

    fn branches() -> BranchFilter {
        BranchFilter::new(["main"]).expect("branch filter should be valid")
    }

    fn id(value: &str) -> MergeRequestId {
        MergeRequestId::new(value)
    }

    fn expect_page(
        gateway: &mut MockMergeRequestGateway,
        sequence: &mut Sequence,
        after: Option<&str>,
        items: Vec<Option<MergeRequestId>>,
        page_info: PageInfo,
    ) {
        let page = Page::new(items, page_info);
        gateway
            .expect_merge_request_ids()
            .with(always(), always(), eq(after.map(Cursor::new)))
            .times(1)
            .in_sequence(sequence)
            .return_once(move |_, _, _| Ok(page));
    }

    #[tokio::test]
    async fn collects_ids_across_two_pages_in_order() {
        let mut gateway = MockMergeRequestGateway::new();
        let mut sequence = Sequence::new();
        expect_page(
            &mut gateway,
            &mut sequence,
            None,
            vec![Some(id("mr-1")), Some(id("mr-2"))],
            PageInfo::new(Some(Cursor::new("c1")), true),
        );
        expect_page(
            &mut gateway,
            &mut sequence,
            Some("c1"),
            vec![Some(id("mr-3")), Some(id("mr-4"))],
            PageInfo::new(Some(Cursor::new("c2")), false),
        );

        let ids = MergeRequestEnumerator::new(&gateway)
            .enumerate(&project(), &branches())
            .await
            .expect("enumeration should succeed");

        assert_eq!(ids, vec![id("mr-1"), id("mr-2"), id("mr-3"), id("mr-4")]);
    }

    #[tokio::test]
    async fn skips_entries_without_identifier() {
        let mut gateway = MockMergeRequestGateway::new();
        let mut sequence = Sequence::new();
        expect_page(
            &mut gateway,
            &mut sequence,
            None,
            vec![Some(id("mr-1")), None, Some(id("mr-2"))],
            PageInfo::last(),
        );

        let ids = MergeRequestEnumerator::new(&gateway)
            .enumerate(&project(), &branches())
            .await
            .expect("enumeration should succeed");

        assert_eq!(ids, vec![id("mr-1"), id("mr-2")]);
    }

    #[tokio::test]
    async fn keeps_duplicate_ids() {
        let mut gateway = MockMergeRequestGateway::new();
        let mut sequence = Sequence::new();
        expect_page(
            &mut gateway,
            &mut sequence,
            None,
            vec![Some(id("mr-1")), Some(id("mr-1"))],
            PageInfo::last(),
        );

        let ids = MergeRequestEnumerator::new(&gateway)
            .enumerate(&project(), &branches())
            .await
            .expect("enumeration should succeed");

        assert_eq!(ids.len(), 2, "duplicates are not removed");
    }

    #[tokio::test]
    async fn failure_on_second_page_discards_partial_results() {
        let mut gateway = MockMergeRequestGateway::new();
        let mut sequence = Sequence::new();
        expect_page(
            &mut gateway,
            &mut sequence,
            None,
            vec![Some(id("mr-1"))],
            PageInfo::new(Some(Cursor::new("c1")), true),
        );
        gateway
            .expect_merge_request_ids()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _, _| {
                Err(ExtractionError::Network {
                    message: "timed out".to_owned(),
                })
            });

        let result = MergeRequestEnumerator::new(&gateway)
            .enumerate(&project(), &branches())
            .await;

        assert!(
            matches!(result, Err(ExtractionError::Network { .. })),
            "expected Network error, got {result:?}"
        );
    }
}
