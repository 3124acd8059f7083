//! Session persistence
//!
//! The logged-in operator is kept in memory by [`SessionService`] and
//! mirrored to a [`SessionStore`]. The stored identity is trusted as-is:
//! there is no expiry and no server-side check, so a present session means
//! the operator is logged in.

use parking_lot::Mutex;
use pedidos_core::{AdminError, AdminResult, ResultExt, User};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Session Store
// ============================================================================

/// Storage medium for the persisted session
pub trait SessionStore: Send + Sync {
    /// Read the stored operator, `None` when nothing is stored
    fn load(&self) -> AdminResult<Option<User>>;

    /// Replace the stored operator
    fn save(&self, user: &User) -> AdminResult<()>;

    /// Remove the stored operator
    fn clear(&self) -> AdminResult<()>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    /// A missing file is no session. A file that does not parse is logged and
    /// also treated as no session.
    fn load(&self) -> AdminResult<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| AdminError::storage(&self.path, e.to_string()))?;

        match serde_json::from_str::<User>(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, user: &User) -> AdminResult<()> {
        let json = serde_json::to_string_pretty(user).with_context("Serializing session")?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AdminError::storage(parent, e.to_string()))?;
            }
        }

        std::fs::write(&self.path, json)
            .map_err(|e| AdminError::storage(&self.path, e.to_string()))
    }

    fn clear(&self) -> AdminResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AdminError::storage(&self.path, e.to_string())),
        }
    }
}

/// In-memory store for tests and throwaway runs
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an operator already stored
    pub fn with_user(user: User) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> AdminResult<Option<User>> {
        Ok(self.user.lock().clone())
    }

    fn save(&self, user: &User) -> AdminResult<()> {
        *self.user.lock() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> AdminResult<()> {
        *self.user.lock() = None;
        Ok(())
    }
}

// ============================================================================
// Session Service
// ============================================================================

/// Holder of the logged-in operator
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    current: Mutex<Option<User>>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionService {
    /// Create a service over `store`; call [`init`](Self::init) to restore
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: Mutex::new(None),
        }
    }

    /// Restore the persisted operator, if any
    ///
    /// Storage failures are logged and leave the service logged out.
    pub fn init(&self) -> Option<User> {
        let restored = match self.store.load() {
            Ok(user) => user,
            Err(e) => {
                warn!("Could not restore session: {}", e);
                None
            }
        };
        if restored.is_some() {
            info!("Restored stored session");
        }
        *self.current.lock() = restored.clone();
        restored
    }

    /// The logged-in operator
    pub fn get(&self) -> Option<User> {
        self.current.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().is_some()
    }

    /// Record a login
    ///
    /// The operator is logged in for this process even when persisting
    /// fails; the storage error is still returned.
    pub fn set(&self, user: User) -> AdminResult<()> {
        *self.current.lock() = Some(user.clone());
        self.store.save(&user)
    }

    /// Record a logout
    pub fn clear(&self) -> AdminResult<()> {
        *self.current.lock() = None;
        self.store.clear()
    }
}

// ============================================================================
// Tests
// ============================================================================
