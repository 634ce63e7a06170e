//! Cursor pagination over GitLab GraphQL connections.
//!
//! GitLab exposes collections as Relay-style connections: each page carries a
//! `pageInfo { endCursor hasNextPage }` pair, and the next page is requested by
//! passing the previous `endCursor` as the `after` argument. [`traverse`]
//! drives that loop for any [`PagedQuery`], handing every page to a handler
//! before the next request is issued.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ExtractionError;

/// Opaque continuation token returned by a previous page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a cursor value returned by the API.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw token.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Number of items requested per page through the `first` argument.
///
/// GitLab caps connection pages at 100 nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u8);

impl PageSize {
    /// Largest page GitLab will serve.
    pub const MAX: u8 = 100;

    /// Validates a requested page size.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidPagination`] when `value` is zero or
    /// above [`PageSize::MAX`].
    pub fn new(value: u32) -> Result<Self, ExtractionError> {
        match u8::try_from(value) {
            Ok(size) if (1..=Self::MAX).contains(&size) => Ok(Self(size)),
            _ => Err(ExtractionError::InvalidPagination {
                message: format!("page size must be between 1 and {}, got {value}", Self::MAX),
            }),
        }
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Continuation state reported alongside each page.
///
/// # Example
///
/// ```
/// use mr_notes::gitlab::pagination::{Cursor, PageInfo};
///
/// let info = PageInfo::new(Some(Cursor::new("abc")), true);
/// assert!(info.has_next_page());
/// assert_eq!(info.next_cursor(), Some(Cursor::new("abc")));
///
/// assert_eq!(PageInfo::last().next_cursor(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    end_cursor: Option<Cursor>,
    has_next_page: bool,
}

impl PageInfo {
    /// Creates page info from the values reported by the API.
    #[must_use]
    pub const fn new(end_cursor: Option<Cursor>, has_next_page: bool) -> Self {
        Self {
            end_cursor,
            has_next_page,
        }
    }

    /// Page info for a final page with no continuation.
    #[must_use]
    pub const fn last() -> Self {
        Self::new(None, false)
    }

    /// Returns the cursor of the last item on this page, if any.
    #[must_use]
    pub const fn end_cursor(&self) -> Option<&Cursor> {
        self.end_cursor.as_ref()
    }

    /// Returns true if the API reported more pages after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Returns the cursor to request next, or `None` when traversal is done.
    ///
    /// A page that claims more results but carries no end cursor also ends
    /// the traversal, since the first page can never be requested twice.
    #[must_use]
    pub fn next_cursor(self) -> Option<Cursor> {
        if self.has_next_page {
            self.end_cursor
        } else {
            None
        }
    }
}

/// One page of a connection: the page's payload plus its continuation info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items (or richer payload) carried by the page.
    pub items: T,
    /// Continuation info for the connection.
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a page from its payload and continuation info.
    #[must_use]
    pub const fn new(items: T, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }
}

/// A query that can fetch one page of a connection given a cursor.
#[async_trait]
pub trait PagedQuery: Send + Sync {
    /// Payload carried by one page.
    type Items: Send;

    /// Name used in diagnostics for this query.
    fn operation(&self) -> &'static str;

    /// Fetches the page following `after`, or the first page when `None`.
    async fn fetch_page(
        &self,
        after: Option<Cursor>,
    ) -> Result<Page<Self::Items>, ExtractionError>;
}

/// Walks every page of `query`, calling `on_page` once per page in order.
///
/// The first request carries no cursor; each later request carries the end
/// cursor of the page before it. Traversal stops after the first page whose
/// [`PageInfo::next_cursor`] is `None`. There is no retry and no page limit.
///
/// Returns the number of pages processed.
///
/// # Errors
///
/// Returns the first error from `fetch_page` or from `on_page`. No further
/// pages are requested after an error, and pages already handed to
/// `on_page` are not revisited.
pub async fn traverse<Q, H>(query: &Q, mut on_page: H) -> Result<usize, ExtractionError>
where
    Q: PagedQuery + ?Sized,
    H: FnMut(Q::Items) -> Result<(), ExtractionError>,
{
    let operation = query.operation();
    let mut after: Option<Cursor> = None;
    let mut pages = 0_usize;

    loop {
        let requested = after.as_ref().map(|cursor| cursor.as_str().to_owned());
        let page = query.fetch_page(after.take()).await.inspect_err(|error| {
            warn!(operation, cursor = ?requested, %error, "page fetch failed");
        })?;
        pages += 1;

        let Page { items, page_info } = page;
        let next = page_info.next_cursor();
        debug!(
            operation,
            page = pages,
            cursor = ?requested,
            has_next = next.is_some(),
            "fetched page"
        );

        on_page(items)?;

        match next {
            Some(cursor) => after = Some(cursor),
            None => return Ok(pages),
        }
    }
}
