//! # Pedidos Core
//!
//! Core types, traits, and error handling for Pedidos Admin.
//!
//! This crate provides the building blocks shared by the API client, the
//! desktop console and the command line, including:
//!
//! - **Types**: Records served by the remote API (`Product`, `Order`, `User`)
//! - **Traits**: `Validatable`, `QueryFilters` and `ListResource`
//! - **Validation**: Login, registration and product forms
//! - **Filters**: Filter and pagination state of the list panels
//! - **Stats**: Client-side dashboard aggregation
//! - **Display**: Row view models and number/date formatting
//! - **Errors**: Unified error handling with `AdminError` and `AdminResult`
//!

pub mod display;
pub mod error;
pub mod filters;
pub mod stats;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use display::{OrderRow, ProductRow};
pub use error::{AdminError, AdminResult, ResultExt};
pub use filters::{OrderFilters, Pagination, ProductFilters};
pub use stats::DashboardStats;
pub use traits::{ListResource, QueryFilters, Validatable};
pub use types::{
    Category, Order, OrderItem, OrderStatus, OrderUser, Product, ProductPayload, User,
};
pub use validation::{LoginForm, LoginRequest, ProductForm, RegisterForm, RegisterRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
