//! Configuration
//!
//! Layered configuration: built-in defaults, then `medrep.toml`, then
//! `MEDREP__`-prefixed environment variables (`MEDREP__API__BASE_URL`).

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
