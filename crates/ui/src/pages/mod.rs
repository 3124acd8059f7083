//! Page Components for Pedidos Admin
//!
//! ## Available Pages
//!
//! - **LoginPage** / **RegisterPage**: the two authentication forms
//! - **DashboardPage**: header, tab bar and the active panel
//! - **StatsPanel**, **ProductsPanel**, **OrdersPanel**: the dashboard tabs

pub mod dashboard;
pub mod login;
pub mod orders;
pub mod products;
pub mod register;
pub mod stats;

// Re-export page components for convenience
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use orders::OrdersPanel;
pub use products::ProductsPanel;
pub use register::RegisterPage;
pub use stats::StatsPanel;
