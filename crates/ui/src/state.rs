//! Application State Management for Pedidos Admin
//!
//! Centralized state using Dioxus 0.7 Signals: which screen is showing,
//! the logged-in operator, the active dashboard tab, dialogs and the
//! status bar. List data lives in the panels' own controllers.

use dioxus::prelude::*;
use pedidos_core::User;
use std::time::Duration;

// ============================================================================
// Screen Navigation
// ============================================================================

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Shown until the stored session has been applied
    #[default]
    Loading,
    Login,
    Register,
    Dashboard,
}

impl Screen {
    /// Heading of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Loading => "Cargando...",
            Screen::Login => "Iniciar Sesión",
            Screen::Register => "Registrarse",
            Screen::Dashboard => "Panel de Administración",
        }
    }

    /// Check if this screen needs a logged-in operator
    pub fn requires_session(&self) -> bool {
        matches!(self, Screen::Dashboard)
    }
}

/// Tabs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Stats,
    Products,
    Orders,
}

impl DashboardTab {
    /// Tabs in navigation order
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Stats,
        DashboardTab::Products,
        DashboardTab::Orders,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Stats => "DASHBOARD",
            DashboardTab::Products => "PRODUCTOS",
            DashboardTab::Orders => "PEDIDOS",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Stats => "📊",
            DashboardTab::Products => "📦",
            DashboardTab::Orders => "📋",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Dialogs, tab and status bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub active_tab: DashboardTab,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Show a dialog, replacing the current one
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Close the active dialog, returning the screen its notice leads to
    pub fn acknowledge(&mut self) -> Option<Screen> {
        match self.active_dialog.take() {
            Some(Dialog::Notice(notice)) => notice.then,
            _ => None,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Application-wide dialogs
///
/// Panel-specific modals (product form, delete confirmation) are owned by
/// their panel instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// A message the operator must acknowledge
    Notice(Notice),
    /// Version and service endpoints
    About,
}

/// Content of a [`Dialog::Notice`]
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: StatusLevel,
    /// Screen shown once the notice is acknowledged
    pub then: Option<Screen>,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            level: StatusLevel::Error,
            then: None,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: StatusLevel::Success,
            then: None,
        }
    }

    /// Greeting shown after a successful registration, leading to login
    pub fn registered(user: &User) -> Self {
        let nombre = user.nombre.as_deref().unwrap_or_default();
        Self::success(
            "¡Usuario registrado exitosamente!",
            format!(
                "Bienvenido {nombre}. Ahora puedes iniciar sesión con tu email: {}",
                user.email
            ),
        )
        .then_show(Screen::Login)
    }

    pub fn then_show(mut self, screen: Screen) -> Self {
        self.then = Some(screen);
        self
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS modifier used by the status bar and notices
    pub fn class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    /// Logged-in operator
    pub user: Option<User>,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the dashboard header: `nombre`, else email
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    }

    /// Navigate to a screen
    ///
    /// Screens that need a session fall back to the login screen.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = if screen.requires_session() && !self.is_authenticated() {
            Screen::Login
        } else {
            screen
        };
    }

    /// Apply the session found at startup
    pub fn restore(&mut self, user: Option<User>) {
        match user {
            Some(user) => self.sign_in(user),
            None => self.navigate(Screen::Login),
        }
    }

    /// Enter the dashboard as `user`
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.ui.select_tab(DashboardTab::Stats);
        self.navigate(Screen::Dashboard);
    }

    /// Drop the operator and go back to the login screen
    pub fn sign_out(&mut self) {
        self.user = None;
        self.ui = UiState::new();
        self.navigate(Screen::Login);
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current screen
pub fn use_current_screen() -> Screen {
    APP_STATE.read().screen
}

/// Hook to access the active dashboard tab
pub fn use_active_tab() -> DashboardTab {
    APP_STATE.read().ui.active_tab
}

/// Raise an error notice and mirror it in the status bar
pub fn notify_error(message: impl Into<String>) {
    let message = message.into();
    let mut state = APP_STATE.write();
    state.ui.set_status(message.clone(), StatusLevel::Error);
    state.ui.show_dialog(Dialog::Notice(Notice::error(message)));
}

/// Close the active dialog; a notice leading elsewhere switches screens
/// after `delay`
pub fn acknowledge_dialog(delay: Duration) {
    let next = APP_STATE.write().ui.acknowledge();
    if let Some(screen) = next {
        spawn(async move {
            tokio::time::sleep(delay).await;
            APP_STATE.write().navigate(screen);
        });
    }
}

/// Report a completed operation in the status bar
pub fn notify_success(message: impl Into<String>) {
    APP_STATE
        .write()
        .ui
        .set_status(message, StatusLevel::Success);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User::new(Some("Ana".to_string()), "ana@example.com")
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::Loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_restore_without_session_shows_login() {
        let mut state = AppState::new();
        state.restore(None);
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn test_restore_with_session_shows_dashboard() {
        let mut state = AppState::new();
        state.restore(Some(ana()));
        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.display_name(), "Ana");
    }

    #[test]
    fn test_dashboard_requires_session() {
        let mut state = AppState::new();
        state.navigate(Screen::Dashboard);
        assert_eq!(state.screen, Screen::Login);

        state.navigate(Screen::Register);
        assert_eq!(state.screen, Screen::Register);
    }

    #[test]
    fn test_sign_out_resets_ui() {
        let mut state = AppState::new();
        state.sign_in(ana());
        state.ui.select_tab(DashboardTab::Orders);
        state.ui.show_dialog(Dialog::About);
        state.ui.set_status("ok", StatusLevel::Success);

        state.sign_out();

        assert_eq!(state.screen, Screen::Login);
        assert!(state.user.is_none());
        assert_eq!(state.ui, UiState::new());
    }

    #[test]
    fn test_sign_in_opens_stats_tab() {
        let mut state = AppState::new();
        state.ui.select_tab(DashboardTab::Products);
        state.sign_in(ana());
        assert_eq!(state.ui.active_tab, DashboardTab::Stats);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut state = AppState::new();
        state.sign_in(User::new(None, "ops@example.com"));
        assert_eq!(state.display_name(), "ops@example.com");
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["DASHBOARD", "PRODUCTOS", "PEDIDOS"]);
    }

    #[test]
    fn test_registered_notice() {
        let notice = Notice::registered(&ana());
        assert_eq!(notice.level, StatusLevel::Success);
        assert!(notice.message.contains("Bienvenido Ana"));
        assert!(notice.message.contains("ana@example.com"));
    }

    #[test]
    fn test_registered_notice_waits_for_acknowledgement() {
        let mut state = AppState::new();
        state.navigate(Screen::Register);
        state
            .ui
            .show_dialog(Dialog::Notice(Notice::registered(&ana())));

        // Still on the registration screen while the greeting is open
        assert_eq!(state.screen, Screen::Register);

        let next = state.ui.acknowledge();
        assert_eq!(next, Some(Screen::Login));
        assert!(state.ui.active_dialog.is_none());
        assert_eq!(state.screen, Screen::Register);

        state.navigate(next.unwrap());
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn test_plain_notices_lead_nowhere() {
        let mut ui = UiState::new();
        ui.show_dialog(Dialog::Notice(Notice::error("boom")));
        assert_eq!(ui.acknowledge(), None);

        ui.show_dialog(Dialog::About);
        assert_eq!(ui.acknowledge(), None);
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_dialog_show_close() {
        let mut ui = UiState::new();
        ui.show_dialog(Dialog::Notice(Notice::error("boom")));
        assert!(ui.active_dialog.is_some());
        ui.close_dialog();
        assert!(ui.active_dialog.is_none());
    }
}
