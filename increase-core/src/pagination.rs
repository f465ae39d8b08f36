//! Cursor-walking streams over paginated list endpoints.

use std::collections::VecDeque;
use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};
use increase_types::{CursorParams, IncreaseError, MAX_PAGE_LIMIT, Page, Result};

/// Reject page sizes outside `1..=100` before any request is sent.
///
/// # Errors
/// Returns `InvalidArg` naming the bad limit.
pub fn check_limit<P: CursorParams>(params: &P) -> Result<()> {
    match params.limit() {
        Some(limit) if limit == 0 || limit > MAX_PAGE_LIMIT => Err(IncreaseError::invalid_arg(
            format!("limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"),
        )),
        _ => Ok(()),
    }
}

/// Stream every item of a list, fetching pages lazily with `fetch`.
///
/// The stream follows `next_cursor` until a page has no cursor or repeats the
/// cursor that produced it. An error is yielded once and ends the stream.
pub fn paginate<'a, T, P, F, Fut>(params: P, fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    P: CursorParams + Clone + Send + 'a,
    F: Fn(P) -> Fut + Send + Sync + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    if let Err(e) = check_limit(&params) {
        return stream::once(async move { Err::<T, IncreaseError>(e) }).boxed();
    }

    let state = (Some(params), VecDeque::<T>::new(), fetch);
    stream::try_unfold(state, |(mut next, mut buffer, fetch)| async move {
        loop {
            if let Some(item) = buffer.pop_front() {
                return Ok::<_, IncreaseError>(Some((item, (next, buffer, fetch))));
            }
            let Some(params) = next.take() else {
                return Ok(None);
            };
            let page = fetch(params.clone()).await?;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                items = page.data.len(),
                has_next = page.has_next_page(),
                "fetched page"
            );
            next = page.next_page_params(&params);
            buffer.extend(page.data);
        }
    })
    .boxed()
}
