//! Configuration types module

pub mod api;
pub mod app;
pub mod logging;
pub mod notifications;
pub mod storage;

// Re-export main types
pub use app::*;
