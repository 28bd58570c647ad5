pub mod config;
pub mod error;
pub mod models;
pub mod name_utils;
pub mod report;
pub mod services;

/// Generator version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
