//! # Infrastructure Layer
//!
//! Adapters behind the domain ports plus the cross-cutting concerns every
//! entry point needs.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`storage`] | Memory and file session storage |
//! | [`http`] | Auth and report gateways over reqwest |
//! | [`bootstrap`] | Composition root building the [`App`](medrep_application::App) |
//! | [`constants`] | Endpoints, defaults and file names |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod http;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use bootstrap::{Services, assemble_app, build_app, build_services};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
