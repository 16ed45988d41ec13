//! # medrep
//!
//! Client core for a medical report portal used by patients, clinics and
//! government health departments.
//!
//! ## Example
//!
//! ```ignore
//! use medrep::infrastructure::{ConfigLoader, build_app};
//!
//! let config = ConfigLoader::new().load()?;
//! let mut app = build_app(&config)?;
//! let navigation = app.start("/dashboard").await;
//! println!("{} -> {}", navigation.requested, navigation.location);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Identity, session, routes, errors and the collaborator ports
//! - `application` - Session store, access policy, route resolver and app shell
//! - `infrastructure` - Configuration, logging, session storage and HTTP gateways
//! - `cli` - Command line front end

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use medrep_domain::*;
}

/// Application layer - session, policy, routing and the app shell
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use medrep_application::*;
}

/// Infrastructure layer - config, logging, storage and gateways
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use medrep_infrastructure::*;
}

pub mod cli;

// Re-export commonly used types at the crate root
pub use application::App;
pub use cli::{Cli, Command, execute, run};
pub use domain::{Error, Navigation, Role, Session, View};
