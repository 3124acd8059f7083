//! Command implementations
//!
//! Every command builds on a [`CliContext`]: the resolved configuration,
//! one API client and the session service over the shared session file.

pub mod auth;
pub mod orders;
pub mod products;
pub mod stats;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use pedidos_api::{AdminConfig, ApiClient, FileSessionStore, SessionService};
use pedidos_core::{AdminError, User};
use serde::Serialize;
use tracing::debug;

/// Services used by one command run
pub struct CliContext {
    pub config: AdminConfig,
    pub client: ApiClient,
    pub session: SessionService,
    /// Print JSON instead of tables
    pub json: bool,
}

impl CliContext {
    /// Resolve the configuration and restore the stored session
    pub fn load(config_file: Option<&Path>, json: bool) -> anyhow::Result<Self> {
        let config = AdminConfig::load(config_file).context("Failed to load configuration")?;
        let client = ApiClient::new(&config).context("Failed to build the HTTP client")?;
        let store = FileSessionStore::new(config.session_file.clone());
        debug!("Session file: {}", store.path().display());
        let session = SessionService::new(Arc::new(store));
        session.init();

        Ok(Self {
            config,
            client,
            session,
            json,
        })
    }

    /// Operator of the stored session
    ///
    /// Catalog commands refuse to run without one, like the console's
    /// dashboard.
    pub fn require_session(&self) -> anyhow::Result<User> {
        self.session
            .get()
            .ok_or(AdminError::NotAuthenticated)
            .context("Inicia sesión con `pedidos login`")
    }

    /// Print `value` as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Turn an API error into the message the console would show
pub fn fail(error: AdminError, fallback: &str) -> anyhow::Error {
    debug!("Command failed: {:?}", error);
    anyhow!(error.user_message(fallback))
}
