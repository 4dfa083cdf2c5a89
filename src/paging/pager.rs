//! The paged collection fetcher

use super::types::{ListResponse, Page, PageControl};
use crate::error::{Error, Result};
use crate::http::{decode_json, PreparedRequest, Transport};
use crate::options::ContinuationOptions;
use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Build the request for a continuation link
///
/// Continuation requests are plain GETs on the link the previous page
/// returned, carrying only the request-identification headers; the link
/// itself encodes the original filter/select/page-size server-side.
pub fn continuation_request(
    next_link: &str,
    continuation: &ContinuationOptions,
) -> Result<PreparedRequest> {
    if next_link.is_empty() {
        return Err(Error::invalid_argument(
            "next_link",
            "continuation token must not be empty",
        ));
    }
    Ok(PreparedRequest::get(next_link).header_pairs(continuation.header_pairs()))
}

enum PagerState {
    /// First fetch not yet issued
    Start(Box<PreparedRequest>),
    /// Next fetch goes to this link
    Next(String),
    /// Sequence exhausted
    Done,
}

/// Lazy sequence of `T` backed by repeated page fetches
///
/// Created per list call; owns nothing across fetches besides the in-flight
/// continuation link. At most one request is in flight at a time: the next
/// fetch is only issued after the previous page has been decoded. Not
/// restartable from the middle; create a new pager to start over.
pub struct Pager<T> {
    transport: Arc<dyn Transport>,
    continuation: ContinuationOptions,
    state: PagerState,
    pages_fetched: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Pager<T> {
    /// Create a pager whose first fetch issues the given request
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        first: PreparedRequest,
        continuation: ContinuationOptions,
    ) -> Self {
        Self {
            transport,
            continuation,
            state: PagerState::Start(Box::new(first)),
            pages_fetched: 0,
            _marker: PhantomData,
        }
    }

    /// Resume a paged sequence from a continuation link
    ///
    /// Fails fast with `InvalidArgument` on an empty link; no network call
    /// is made until the first page is pulled.
    pub fn resume(
        transport: Arc<dyn Transport>,
        next_link: &str,
        continuation: ContinuationOptions,
    ) -> Result<Self> {
        // Validate eagerly so the contract violation surfaces at the call site
        continuation_request(next_link, &continuation)?;
        Ok(Self {
            transport,
            continuation,
            state: PagerState::Next(next_link.to_string()),
            pages_fetched: 0,
            _marker: PhantomData,
        })
    }

    /// Fetch the next page, or `None` once the sequence is exhausted
    ///
    /// Stopping early simply means not calling this again; no further
    /// network calls are issued.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        let request = match &self.state {
            PagerState::Done => return Ok(None),
            PagerState::Start(request) => (**request).clone(),
            PagerState::Next(link) => continuation_request(link, &self.continuation)?,
        };

        let response = self.transport.execute(request).await?;
        let envelope: ListResponse<T> = decode_json(&response)?;
        let page = Page::from(envelope);

        self.pages_fetched += 1;
        debug!(
            "page {}: {} items, more: {}",
            self.pages_fetched,
            page.items.len(),
            page.has_more()
        );

        self.state = match &page.next_link {
            Some(link) => PagerState::Next(link.clone()),
            None => PagerState::Done,
        };

        Ok(Some(page))
    }

    /// Drive the sequence with a per-page callback
    ///
    /// The callback receives each page's items in retrieval order and
    /// decides whether to continue. On `Continue` with a link present the
    /// next fetch is issued immediately; on `Stop` or link absence the
    /// aggregated item list is returned.
    pub async fn for_each_page<F>(mut self, mut on_page: F) -> Result<Vec<T>>
    where
        F: FnMut(&[T]) -> PageControl,
    {
        let mut collected = Vec::new();
        while let Some(page) = self.next_page().await? {
            let control = on_page(&page.items);
            collected.extend(page.items);
            if control.is_stop() {
                debug!("caller stopped paging after {} items", collected.len());
                break;
            }
        }
        Ok(collected)
    }

    /// Fetch every page and return the full item sequence
    pub async fn collect(self) -> Result<Vec<T>> {
        self.for_each_page(|_| PageControl::Continue).await
    }
}

impl<T> Pager<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Consume the pager as an item-level stream
    ///
    /// Pages are still fetched one at a time, on demand; dropping the stream
    /// mid-sequence issues no further calls.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        stream::try_unfold(self, |mut pager| async move {
            Ok::<_, Error>(pager.next_page().await?.map(|page| (page.items, pager)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, Error>)))
        .try_flatten()
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            PagerState::Start(_) => "start",
            PagerState::Next(_) => "next",
            PagerState::Done => "done",
        };
        f.debug_struct("Pager")
            .field("state", &state)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
