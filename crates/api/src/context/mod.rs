//! Application context - dependency injection container

use std::sync::Arc;

use rhai_core::{DestinationMatcher, LeadRepository, LeadService, OwnerAlertService, OwnerMessenger};
use rhai_domain::{catalog, Config, Result};
use rhai_infra::{HttpClient, SupabaseLeadRepository, TelegramMessenger};
use tracing::info;

/// Type alias for lead repository port trait object
pub type DynLeadRepositoryPort = dyn LeadRepository + Send + Sync + 'static;

/// Type alias for owner messenger port trait object
pub type DynOwnerMessengerPort = dyn OwnerMessenger + Send + Sync + 'static;

const USER_AGENT: &str = concat!("rhai-server/", env!("CARGO_PKG_VERSION"));

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub leads: Arc<LeadService>,
    pub owner_alerts: Arc<OwnerAlertService>,
    pub matcher: DestinationMatcher<'static>,
}

impl AppContext {
    /// Build the context with the production adapters.
    ///
    /// # Errors
    /// Fails when the HTTP client can't be built or the store URL is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::builder().user_agent(USER_AGENT).build()?;
        let repository = SupabaseLeadRepository::new(&config.store, http_client.clone())?;
        let messenger = TelegramMessenger::new(&config.messaging, http_client);

        info!(
            store = %repository.endpoint(),
            messaging_configured = config.messaging.is_configured(),
            "Application context ready"
        );

        Ok(Self::with_ports(config, Arc::new(repository), Arc::new(messenger)))
    }

    /// Build the context around arbitrary port implementations.
    pub fn with_ports(
        config: Config,
        repository: Arc<DynLeadRepositoryPort>,
        messenger: Arc<DynOwnerMessengerPort>,
    ) -> Self {
        Self {
            config,
            leads: Arc::new(LeadService::new(repository)),
            owner_alerts: Arc::new(OwnerAlertService::new(messenger)),
            matcher: DestinationMatcher::new(catalog()),
        }
    }
}
