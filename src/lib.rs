// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # batchkit
//!
//! A Rust-native client for the Azure Batch REST surface: typed resource
//! models, per-resource operations, and paged collection listing that
//! follows continuation links for you.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use batchkit::{BatchClient, ClientConfig, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = BatchClient::from_endpoint("https://acct.westus.batch.azure.com")?;
//!
//!     // Fully-materialized listing
//!     let pools = client.pools().list(None)?.collect().await?;
//!
//!     // Page-at-a-time pull
//!     let mut pager = client.jobs().list(Some(ListOptions::new().max_results(100)))?;
//!     while let Some(page) = pager.next_page().await? {
//!         for job in &page.items {
//!             // ...
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         BatchClient                             │
//! │  pools() jobs() tasks(job) certificates() job_schedules() ...   │
//! └─────────────────────────────┬───────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────────────┬───────────────────┐
//! │  Operations  │           Paging            │     Transport     │
//! ├──────────────┼─────────────────────────────┼───────────────────┤
//! │ list / get   │ Pager: pull / callback /    │ PreparedRequest   │
//! │ add / delete │ stream, continuation links  │ reqwest execute   │
//! │ exists       │ single request in flight    │ error decoding    │
//! └──────────────┴─────────────────────────────┴───────────────────┘
//! ```
//!
//! Retry, throttling and request signing belong to the surrounding
//! pipeline; this crate issues each request exactly once.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and profiles
pub mod config;

/// HTTP transport layer
pub mod http;

/// Per-call operation options
pub mod options;

/// Paged collection fetching
pub mod paging;

/// Wire models
pub mod models;

/// Per-resource operations
pub mod operations;

/// The account client
mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::BatchClient;
pub use config::{ClientConfig, DEFAULT_API_VERSION};
pub use error::{Error, Result};
pub use options::{CallOptions, ContinuationOptions, ListOptions};
pub use paging::{Page, PageControl, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
