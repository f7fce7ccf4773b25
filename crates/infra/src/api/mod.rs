//! Remote sync API client
//!
//! Implements the core `SyncTransport` port over HTTP. Calls are single
//! attempt with a per-call timeout; every result, including transport
//! failures, is reported as an `Outcome`.

pub mod client;
pub mod errors;

pub use client::HttpSyncClient;
pub use errors::ApiError;
