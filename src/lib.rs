//! PvP Dex - In-Memory Query Core
//!
//! Core library providing the three-stage query pipeline
//! (search -> filter -> sort) over a fixed creature catalog,
//! backed by a localized name index for browsing UIs.

pub mod config;
pub mod core;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
