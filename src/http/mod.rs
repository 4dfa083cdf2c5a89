//! HTTP transport module
//!
//! The thin execution layer every operation goes through.
//!
//! # Overview
//!
//! - **`PreparedRequest`**: one fully-described HTTP call, built before dispatch
//! - **`Transport`**: the "execute this call, give me a response" seam
//! - **`BatchHttpClient`**: reqwest-backed `Transport` implementation
//!
//! This layer performs no retries and no throttling; those belong to the
//! caller's pipeline.

mod client;

pub use client::{
    decode_json, expect_status, service_error, BatchHttpClient, HttpClientConfig,
    HttpClientConfigBuilder, PreparedRequest, Transport, TransportResponse,
};
