//! # Pedidos UI
//!
//! Dioxus desktop console for the Pedidos food-ordering backend.
//!
//! ## Features
//!
//! - Login and registration against the authentication service
//! - Dashboard figures computed from the product and order lists
//! - Product catalog management with filters, inline stock and status edits
//! - Order table with server-side pagination and status changes
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod context;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use pedidos_api;
pub use pedidos_core;

// Re-export main components
pub use app::App;
pub use context::AdminContext;
pub use pages::{DashboardPage, LoginPage, RegisterPage};
pub use state::{
    APP_STATE, AppState, DashboardTab, Dialog, Notice, Screen, StatusLevel, StatusMessage,
    UiState,
};

// Re-export components
pub use components::{
    Checkbox, Modal, PaginationControls, Select, SelectOption, TextArea, TextInput,
};

// Re-export hooks
pub use hooks::{OrderList, ProductList, use_dashboard_stats, use_resource_list};

use anyhow::Context;
use pedidos_api::AdminConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Pedidos Admin";

/// Application display title
pub const TITLE: &str = "Pedidos Admin - Panel de Administración";

/// CSS styles for the application, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Pedidos Admin desktop application
///
/// Loads the configuration from the default locations, restores the stored
/// session and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     pedidos_ui::launch()
/// }
/// ```
pub fn launch() -> anyhow::Result<()> {
    let config = AdminConfig::load(None).context("Failed to load configuration")?;
    launch_with_config(config)
}

/// Launch with an already loaded configuration
pub fn launch_with_config(config: AdminConfig) -> anyhow::Result<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);
    tracing::info!("Auth service: {}", config.auth_base_url);
    tracing::info!("API service: {}", config.api_base_url);

    let context = AdminContext::from_config(config).context("Failed to initialize services")?;

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(900.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(context)
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Pedidos Admin");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".status-badge"));
        assert!(STYLES.contains(".modal-overlay"));
    }
}
