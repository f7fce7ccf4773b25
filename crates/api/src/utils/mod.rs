//! Shared helpers for the app layer

pub mod logging;
