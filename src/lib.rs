//! News aggregation and bookmarking service.
//!
//! - [`storage`]: in-memory record store, article queries and bookmarks
//! - [`api`]: axum router translating HTTP requests into store calls
//! - [`config`]: optional TOML configuration
//! - [`util`]: input cleaning and validation

pub mod api;
pub mod config;
pub mod storage;
pub mod util;
