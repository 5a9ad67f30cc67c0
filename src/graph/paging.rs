//! Paging descriptors returned under the `paging` key of list responses.
//!
//! An endpoint always answers with the same one of the three shapes, so the
//! payload type picks the matching descriptor. All three carry optional
//! `previous`/`next` continuation links, exposed through the [`Paging`]
//! trait. Following a link is the caller's job, one page at a time:
//!
//! ```rust,ignore
//! use fb_graph::graph::Paging;
//!
//! let mut page: UserPagesList = client.fetch(&request).await?;
//! while let Some(next) = page.paging.next_link() {
//!     page = client.fetch_link(next).await?;
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Access to the continuation links of a paging descriptor.
pub trait Paging {
    /// The raw `next` link, empty when absent.
    fn next(&self) -> &str;

    /// The raw `previous` link, empty when absent.
    fn previous(&self) -> &str;

    /// Returns the link to the following page, if there is one.
    fn next_link(&self) -> Option<&str> {
        Some(self.next()).filter(|link| !link.is_empty())
    }

    /// Returns the link to the preceding page, if there is one.
    fn previous_link(&self) -> Option<&str> {
        Some(self.previous()).filter(|link| !link.is_empty())
    }
}

/// Cursor positions bracketing the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursors {
    /// Cursor pointing at the start of the page.
    pub before: String,
    /// Cursor pointing at the end of the page.
    pub after: String,
}

/// Cursor-based paging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorPaging {
    /// Cursors of the current page.
    pub cursors: Cursors,
    /// Link to the previous page; empty on the first page.
    pub previous: String,
    /// Link to the next page; empty on the last page.
    pub next: String,
    /// Page size, when the API echoes it.
    pub limit: String,
}

/// Time-based paging, bounded by Unix timestamps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePaging {
    /// Upper time bound.
    pub until: i64,
    /// Lower time bound.
    pub since: i64,
    /// Page size.
    pub limit: i64,
    /// Link to the previous page, if any.
    pub previous: String,
    /// Link to the next page, if any.
    pub next: String,
}

/// Offset-based paging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetPaging {
    /// Index of the first entry.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
    /// Link to the previous page, if any.
    pub previous: String,
    /// Link to the next page, if any.
    pub next: String,
}

macro_rules! impl_paging {
    ($($ty:ty),+) => {
        $(
            impl Paging for $ty {
                fn next(&self) -> &str {
                    &self.next
                }

                fn previous(&self) -> &str {
                    &self.previous
                }
            }
        )+
    };
}

impl_paging!(CursorPaging, TimePaging, OffsetPaging);
