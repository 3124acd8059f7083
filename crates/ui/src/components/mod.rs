//! # UI Components
//!
//! Reusable Dioxus components for the Pedidos Admin console.
//!
//! - **Inputs**: Form inputs (text, textarea, select, checkbox)
//! - **Pagination**: Previous/next page controls
//! - **Tables**: Product and order rows
//! - **Dialogs**: Product form, delete confirmation and notices
//!
//! ## Component Hierarchy
//!
//! ```text
//! ProductsPanel
//! ├── ProductTableRow (multiple)
//! ├── ProductFormDialog (in Modal)
//! └── ConfirmDeleteDialog (in Modal)
//!
//! OrdersPanel
//! ├── OrderTableRow (multiple)
//! └── PaginationControls
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod pagination;
pub mod tables;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
pub use pagination::{PaginationControls, page_label};
pub use tables::{OrderTableRow, ProductTableRow};

pub use dialogs::{ConfirmDeleteDialog, Modal, NoticeDialog, ProductFormDialog};
