//! Paged collection types

use crate::types::OptionStringExt;
use serde::Deserialize;

/// The wire envelope every collection endpoint returns
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Items in this page, in server order
    #[serde(default)]
    pub value: Vec<T>,

    /// Link to the next page; absent on the final page
    #[serde(rename = "odata.nextLink", default)]
    pub odata_next_link: Option<String>,
}

/// One page of a paged result
///
/// The continuation link is present iff more items exist beyond this page.
/// The service is inconsistent about absent vs. empty-string links, so both
/// normalize to `None` here and `Pager` never sees an empty link.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in server-returned order
    pub items: Vec<T>,
    /// Opaque URL of the next page
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// Whether more pages exist beyond this one
    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }
}

impl<T> From<ListResponse<T>> for Page<T> {
    fn from(envelope: ListResponse<T>) -> Self {
        Self {
            items: envelope.value,
            next_link: envelope.odata_next_link.none_if_empty(),
        }
    }
}

/// Caller's verdict after receiving a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Fetch the next page if a continuation link is present
    Continue,
    /// Stop now; no further network calls are issued
    Stop,
}

impl PageControl {
    /// Check if this is a stop verdict
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}
