//! Shared library for the course manager
//! Contains the domain core used by the CLI and integration tests

pub mod core;

pub use core::config;
pub use core::get_version;
