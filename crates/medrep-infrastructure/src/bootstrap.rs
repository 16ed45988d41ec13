//! Composition root
//!
//! Turns an [`AppConfig`] into the collaborators the application layer needs
//! and assembles the [`App`] shell from them.
//!
//! ```text
//! AppConfig → ApiClient → HttpAuthGateway / HttpReportGateway
//!           → StorageConfig → Memory / File session storage
//!           → SessionStore + NotificationCenter → App
//! ```

use crate::config::{AppConfig, StorageBackend};
use crate::http::{ApiClient, HttpAuthGateway, HttpReportGateway};
use crate::storage::{FileSessionStorage, MemorySessionStorage};
use medrep_application::{App, NotificationCenter, SessionStore};
use medrep_domain::error::Result;
use medrep_domain::ports::{AuthGateway, ReportGateway, SessionStorage};
use std::sync::Arc;
use tracing::info;

/// Collaborators built from configuration
#[derive(Clone)]
pub struct Services {
    /// Session persistence
    pub storage: Arc<dyn SessionStorage>,
    /// Auth backend
    pub auth: Arc<dyn AuthGateway>,
    /// Report backend
    pub reports: Arc<dyn ReportGateway>,
}

/// Build the storage and gateways described by `config`
pub fn build_services(config: &AppConfig) -> Result<Services> {
    let client = ApiClient::new(&config.api)?;

    let storage: Arc<dyn SessionStorage> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(MemorySessionStorage::new()),
        StorageBackend::File => Arc::new(FileSessionStorage::new(config.storage.session_file())),
    };

    info!(
        base_url = %client.base_url(),
        storage = ?config.storage.backend,
        "Services initialized"
    );

    Ok(Services {
        storage,
        auth: Arc::new(HttpAuthGateway::new(client.clone())),
        reports: Arc::new(HttpReportGateway::new(client)),
    })
}

/// Assemble the application shell from prepared services
pub fn assemble_app(config: &AppConfig, services: Services) -> App {
    let sessions = SessionStore::new(services.storage, services.auth);
    App::new(
        sessions,
        services.reports,
        NotificationCenter::new(config.notifications.ttl()),
    )
}

/// Build the application shell described by `config`
pub fn build_app(config: &AppConfig) -> Result<App> {
    Ok(assemble_app(config, build_services(config)?))
}
