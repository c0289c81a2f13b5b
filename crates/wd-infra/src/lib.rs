//! # wd-infra
//!
//! Infrastructure adapters for Wardrobe: Diesel/SQLite repositories, a
//! filesystem object store, the in-process snapshot feed and configuration
//! loading.

pub mod config;
pub mod db;
pub mod feed;
pub mod fs;
pub mod time;

pub use time::SystemClock;
