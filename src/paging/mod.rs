//! Paged collection fetching
//!
//! Every collection endpoint returns one page of items plus an optional
//! continuation link. This module implements the list-and-continue protocol
//! on top of the transport layer:
//!
//! - `Page<T>` - one server response worth of items
//! - `Pager<T>` - the lazy sequence across all pages, consumed by pulling
//!   pages, by a per-page callback, or as an item stream
//!
//! Only the absence of a continuation link terminates a sequence; an empty
//! page with a link present triggers exactly one more fetch.

mod pager;
mod types;

pub use pager::{continuation_request, Pager};
pub use types::{ListResponse, Page, PageControl};

#[cfg(test)]
mod tests;
