//! Cursor pagination envelopes.

use serde::{Deserialize, Serialize};

use crate::Extras;

/// Largest page size accepted by list endpoints.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// One page of a cursor-paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Objects on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Opaque cursor for the following page; absent on the last page.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

impl<T> Page<T> {
    /// True when the server advertised a following page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Parameters that fetch the page after this one.
    ///
    /// Returns `None` on the last page, or when the server hands back the cursor
    /// that produced this page.
    #[must_use]
    pub fn next_page_params<P: CursorParams + Clone>(&self, current: &P) -> Option<P> {
        let cursor = self.next_cursor.as_deref().filter(|c| !c.is_empty())?;
        if current.cursor() == Some(cursor) {
            return None;
        }
        let mut next = current.clone();
        next.set_cursor(Some(cursor.to_string()));
        Some(next)
    }
}

/// List parameters that carry a pagination cursor.
pub trait CursorParams {
    /// Cursor currently set, if any.
    fn cursor(&self) -> Option<&str>;
    /// Replace the cursor.
    fn set_cursor(&mut self, cursor: Option<String>);
    /// Requested page size, if any.
    fn limit(&self) -> Option<u32>;
}
