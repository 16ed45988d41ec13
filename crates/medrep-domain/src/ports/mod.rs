//! Domain Port Interfaces
//!
//! Boundary contracts between the session logic and the outside world.
//! Infrastructure implements them; the application layer depends only on
//! these traits.
//!
//! - **storage** - persisted key-value session state
//! - **auth** - the backend's authentication endpoints
//! - **reports** - the backend's report endpoints

/// Authentication gateway
pub mod auth;
/// Report gateway
pub mod reports;
/// Session persistence
pub mod storage;

pub use auth::AuthGateway;
pub use reports::ReportGateway;
pub use storage::SessionStorage;
