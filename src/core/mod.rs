//! Core module for the course management domain

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod store;

pub use registry::Registry;
pub use store::Store;

/// Returns the current version of the crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
