//! Lazy cursor over a paginated sub-collection.
//!
//! This module provides [`PageCursor<T>`], the fetcher behind listing
//! accessors like [`Milestone::labels`](crate::rest::resources::Milestone::labels).
//! The cursor is forward-only and fetches nothing until the consumer
//! advances: the first advancement issues a GET with the query parameters,
//! later pages follow the server's `Link rel="next"` URL verbatim, and the
//! sequence terminates when the final page is exhausted. A cursor cannot be
//! rewound; calling the accessor again builds a fresh one starting from
//! page one.

use std::collections::{HashMap, VecDeque};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::Session;
use crate::rest::errors::ResourceError;
use crate::rest::materialize::materialize;

/// Default page-size hint sent as `per_page` on the first request.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// A lazy, forward-only cursor over a paginated collection of `T`.
///
/// Items are decoded one at a time as they are yielded, so a malformed item
/// fails only the advancement that reached it; the cursor remains usable
/// for the items after it.
///
/// # Example
///
/// ```rust,ignore
/// let mut labels = milestone.labels();
/// while let Some(label) = labels.try_next().await? {
///     println!("{}", label.name);
/// }
/// ```
#[derive(Debug)]
pub struct PageCursor<T> {
    session: Session,
    /// URL of the next page to fetch; `None` once the final page is in.
    next_url: Option<String>,
    /// Query parameters, sent with the first request only. Continuation
    /// URLs already carry their own query string.
    query: Option<HashMap<String, String>>,
    /// Raw items of the current page, decoded as they are yielded.
    buffer: VecDeque<Value>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> PageCursor<T> {
    /// Creates a cursor over the collection at `first_url`.
    ///
    /// Nothing is fetched until the first call to [`try_next`](Self::try_next).
    #[must_use]
    pub fn new(session: Session, first_url: impl Into<String>, per_page: u32) -> Self {
        let mut query = HashMap::new();
        query.insert("per_page".to_string(), per_page.to_string());

        Self {
            session,
            next_url: Some(first_url.into()),
            query: Some(query),
            buffer: VecDeque::new(),
            _marker: PhantomData,
        }
    }

    /// Advances the cursor by one item.
    ///
    /// Yields `Ok(Some(item))` while items remain, fetching the next page
    /// only when the buffered one is exhausted; yields `Ok(None)` once the
    /// server reports no further pages. After exhaustion no more requests
    /// are ever issued.
    ///
    /// # Errors
    ///
    /// Page-fetch failures surface at the advancement that triggered them:
    /// [`ResourceError::NotFound`] for a 404, [`ResourceError::Response`]
    /// for other non-success statuses, [`ResourceError::Transport`] for
    /// connection-level failures, and [`ResourceError::MalformedResponse`]
    /// when the page body or the reached item cannot be decoded.
    pub async fn try_next(&mut self) -> Result<Option<T>, ResourceError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return materialize(&item).map(Some);
            }

            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };
            let query = self.query.take();

            tracing::debug!(%url, "fetching collection page");
            let response = self.session.get(&url, query.as_ref()).await?;

            if !response.is_success() {
                return Err(ResourceError::from_read_failure(&url, &response));
            }

            let items = match response.body {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(ResourceError::MalformedResponse {
                        reason: "expected a JSON array as the page body".to_string(),
                    })
                }
                None => Vec::new(),
            };

            self.buffer.extend(items);
            self.next_url = response.next_link;
        }
    }

    /// Drains the rest of the cursor into a vector.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first error [`try_next`](Self::try_next)
    /// reports.
    pub async fn collect_remaining(&mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }
}
