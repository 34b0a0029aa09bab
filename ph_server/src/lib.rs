//! Tournament results server.
//!
//! Imports hand history summaries into PostgreSQL at startup and serves the
//! stored tournaments and their charts over HTTP.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
