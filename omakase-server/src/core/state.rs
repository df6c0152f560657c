//! Server state - shared handles for all services

use std::sync::Arc;

use crate::catalog::{CatalogFetcher, MenuCatalog};
use crate::core::Config;
use crate::session::SessionService;
use crate::submission::SubmissionService;
use shared::error::{AppError, AppResult, ErrorCode};

/// Shared application state
///
/// Cheap to clone: every component sits behind an `Arc`. The catalog
/// is immutable after startup; sessions and the submission guard are
/// internally synchronized.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<MenuCatalog>,
    pub sessions: Arc<SessionService>,
    pub submission: Arc<SubmissionService>,
}

impl ServerState {
    /// Initialize all services, loading the catalog through the
    /// fallback chain
    ///
    /// A failed load leaves the catalog empty rather than aborting
    /// startup; menu endpoints then answer with a catalog error and
    /// the health endpoint reports zero items.
    pub async fn initialize(config: &Config) -> Self {
        let catalog = if config.catalog_url.is_empty() {
            tracing::warn!("CATALOG_URL not set; starting with an empty catalog");
            MenuCatalog::empty()
        } else {
            let fetcher = CatalogFetcher::new(
                &config.catalog_url,
                &config.catalog_proxies,
                config.request_timeout_ms,
            );
            match Self::load_catalog(&fetcher).await {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::error!(error = %e, "Menu catalog load failed; menu endpoints disabled");
                    MenuCatalog::empty()
                }
            }
        };

        Self::with_catalog(config.clone(), catalog)
    }

    /// Build state around an already-loaded catalog (tests, tools)
    pub fn with_catalog(config: Config, catalog: MenuCatalog) -> Self {
        let submission = SubmissionService::new(&config);
        Self {
            config,
            catalog: Arc::new(catalog),
            sessions: Arc::new(SessionService::new()),
            submission: Arc::new(submission),
        }
    }

    async fn load_catalog(fetcher: &CatalogFetcher) -> AppResult<MenuCatalog> {
        let body = fetcher.fetch().await?;
        MenuCatalog::from_csv(&body)
    }

    /// Error guard for endpoints that need menu data
    pub fn require_catalog(&self) -> AppResult<&MenuCatalog> {
        if self.catalog.is_empty() {
            Err(AppError::new(ErrorCode::CatalogUnavailable))
        } else {
            Ok(&self.catalog)
        }
    }
}
