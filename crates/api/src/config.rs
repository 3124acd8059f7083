//! Configuration for Pedidos Admin
//!
//! Resolution order is defaults, then an optional TOML file, then
//! environment overrides. Every front-end resolves its configuration once at
//! startup, before the session store is opened.

use pedidos_core::{AdminError, AdminResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default base URL of the authentication service
pub const DEFAULT_AUTH_BASE_URL: &str = "https://backend-login-web.vercel.app";

/// Default base URL of the product/order service
pub const DEFAULT_API_BASE_URL: &str = "https://pedidos-backend-opal.vercel.app";

/// Directory name under the user's config directory
pub const APP_DIR_NAME: &str = "pedidos-admin";

/// Path of the configuration file to load
pub const ENV_CONFIG: &str = "PEDIDOS_CONFIG";
/// Overrides `auth_base_url`
pub const ENV_AUTH_URL: &str = "PEDIDOS_AUTH_URL";
/// Overrides `api_base_url`
pub const ENV_API_URL: &str = "PEDIDOS_API_URL";
/// Overrides `session_file`
pub const ENV_SESSION_FILE: &str = "PEDIDOS_SESSION_FILE";

// ============================================================================
// AdminConfig
// ============================================================================

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Base URL of the authentication service
    pub auth_base_url: String,

    /// Base URL of the product/order service
    pub api_base_url: String,

    /// Where the logged-in operator is persisted
    pub session_file: PathBuf,

    /// Orders requested per page
    pub orders_page_size: u32,

    /// Delay between the registration confirmation and the login screen
    pub register_redirect_delay_ms: u64,

    /// Per-request timeout; no timeout when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_file: default_session_file(),
            orders_page_size: pedidos_core::filters::DEFAULT_PAGE_SIZE,
            register_redirect_delay_ms: 1000,
            request_timeout_secs: None,
        }
    }
}

impl AdminConfig {
    /// Resolve the configuration for this process
    ///
    /// `explicit` (a `--config` flag) wins over `PEDIDOS_CONFIG`; an explicit
    /// file must exist. Without either, the default config file is read when
    /// present.
    pub fn load(explicit: Option<&Path>) -> AdminResult<Self> {
        let from_env = std::env::var_os(ENV_CONFIG).map(PathBuf::from);
        let requested = explicit.map(Path::to_path_buf).or(from_env);

        let mut config = match requested {
            Some(path) => Self::from_file(&path)?,
            None => match default_config_file() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.normalize()
    }

    /// Read a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> AdminResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AdminError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Parse TOML; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> AdminResult<Self> {
        toml::from_str(contents).map_err(|e| AdminError::config(e.to_string()))
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_AUTH_URL) {
            self.auth_base_url = url;
        }
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(path) = lookup(ENV_SESSION_FILE) {
            if !path.trim().is_empty() {
                self.session_file = PathBuf::from(path);
            }
        }
    }

    /// Trim trailing slashes from base URLs and check required values
    pub fn normalize(mut self) -> AdminResult<Self> {
        self.auth_base_url = normalize_base_url("auth_base_url", &self.auth_base_url)?;
        self.api_base_url = normalize_base_url("api_base_url", &self.api_base_url)?;
        if self.orders_page_size == 0 {
            return Err(AdminError::config("orders_page_size must be at least 1"));
        }
        Ok(self)
    }

    /// Per-request timeout, when configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Delay before returning to login after registering
    pub fn register_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.register_redirect_delay_ms)
    }
}

fn normalize_base_url(field: &str, url: &str) -> AdminResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AdminError::config(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Paths
// ============================================================================

/// `~/.config/pedidos-admin`, when a home directory is known
pub fn config_dir() -> Option<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;
    Some(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}

/// Default configuration file
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Default session file, falling back to the working directory
pub fn default_session_file() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("session.json")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default().normalize().unwrap();
        assert_eq!(config.auth_base_url, DEFAULT_AUTH_BASE_URL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.orders_page_size, 10);
        assert_eq!(config.register_redirect_delay(), Duration::from_millis(1000));
        assert_eq!(config.request_timeout(), None);
        assert!(config.session_file.ends_with("session.json"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AdminConfig::from_toml_str(
            r#"
            api_base_url = "http://localhost:3000/"
            request_timeout_secs = 15
            "#,
        )
        .unwrap()
        .normalize()
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.auth_base_url, DEFAULT_AUTH_BASE_URL);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "auth_base_url = \"http://file-auth\"\napi_base_url = \"http://file-api\"\n",
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "http://env-api///"),
            (ENV_SESSION_FILE, "/tmp/pedidos/session.json"),
        ]
        .into_iter()
        .collect();

        let mut config = AdminConfig::from_file(&path).unwrap();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        let config = config.normalize().unwrap();

        assert_eq!(config.auth_base_url, "http://file-auth");
        assert_eq!(config.api_base_url, "http://env-api");
        assert_eq!(config.session_file, PathBuf::from("/tmp/pedidos/session.json"));
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let mut config = AdminConfig::default();
        config.apply_overrides(|key| (key == ENV_AUTH_URL).then(|| " / ".to_string()));
        let err = config.normalize().unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
        assert!(err.to_string().contains("auth_base_url"));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = AdminConfig::from_toml_str("orders_page_size = 0").unwrap();
        assert!(config.normalize().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = AdminConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = AdminConfig::from_toml_str("orders_page_size = \"diez\"").unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }
}
