//! The fetch seam between the collector and whatever serves boards.

use std::future::Future;

use super::error::FetchError;

/// Something that can produce the raw results markup for a stop.
///
/// Implemented by the live [`BoardClient`](super::BoardClient) and the
/// offline [`MockBoardClient`](super::MockBoardClient); tests supply
/// their own.
pub trait BoardSource {
    /// Fetch the board for `stop_id` within `group_id`.
    fn fetch(
        &self,
        stop_id: &str,
        group_id: &str,
    ) -> impl Future<Output = Result<String, FetchError>>;
}

/// Fetch a board and collapse the outcome to presence or absence.
///
/// A failure is handed to `on_error` exactly once and then becomes `None`.
pub async fn fetch_markup<S, F>(
    source: &S,
    stop_id: &str,
    group_id: &str,
    on_error: F,
) -> Option<String>
where
    S: BoardSource,
    F: FnOnce(&FetchError),
{
    match source.fetch(stop_id, group_id).await {
        Ok(markup) => Some(markup),
        Err(err) => {
            on_error(&err);
            None
        }
    }
}
