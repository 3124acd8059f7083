//! Services shared by every component
//!
//! The context is built once before launch, in this order: configuration,
//! session store, session restore. Components reach it with
//! `use_context::<AdminContext>()`.

use std::sync::Arc;

use pedidos_api::{AdminConfig, ApiClient, FileSessionStore, SessionService};
use pedidos_core::{AdminResult, User};
use tracing::{error, info};

/// Client, session and configuration of the running console
#[derive(Clone)]
pub struct AdminContext {
    pub client: ApiClient,
    pub session: Arc<SessionService>,
    pub config: Arc<AdminConfig>,
}

impl std::fmt::Debug for AdminContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminContext")
            .field("client", &self.client)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl AdminContext {
    /// Build the context for `config`, restoring the stored session
    pub fn from_config(config: AdminConfig) -> AdminResult<Self> {
        let client = ApiClient::new(&config)?;
        let store = FileSessionStore::new(config.session_file.clone());
        info!("Session file: {}", store.path().display());
        let session = Arc::new(SessionService::new(Arc::new(store)));
        session.init();
        Ok(Self::with_parts(config, client, session))
    }

    pub fn with_parts(config: AdminConfig, client: ApiClient, session: Arc<SessionService>) -> Self {
        Self {
            client,
            session,
            config: Arc::new(config),
        }
    }

    /// Operator restored at startup, if any
    pub fn restored_user(&self) -> Option<User> {
        self.session.get()
    }

    /// Remember a successful login
    ///
    /// A session that cannot be persisted still holds for this run.
    pub fn remember(&self, user: User) {
        if let Err(e) = self.session.set(user) {
            error!("Failed to persist session: {}", e);
        }
    }

    /// Forget the logged-in operator
    pub fn forget(&self) {
        if let Err(e) = self.session.clear() {
            error!("Failed to clear stored session: {}", e);
        }
    }

    /// Rows per page of the order panel
    pub fn page_size(&self) -> u32 {
        self.config.orders_page_size
    }
}
