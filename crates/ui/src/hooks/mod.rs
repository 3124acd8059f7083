//! # UI Hooks
//!
//! Custom Dioxus hooks for the Pedidos Admin console.
//!
//! - Resource lists (fetch, filter, paginate, mutate and refetch)
//! - Dashboard statistics

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_resource_list;
pub mod use_stats;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_resource_list::{OrderList, ProductList, UseResourceList, use_resource_list};
pub use use_stats::{StatsState, UseDashboardStats, use_dashboard_stats};
