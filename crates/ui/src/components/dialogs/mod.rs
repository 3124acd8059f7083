//! # Dialog Components
//!
//! Modal dialogs of the Pedidos Admin console.
//!
//! ## Dialogs
//!
//! - **Modal**: Backdrop and frame shared by all dialogs
//! - **ProductFormDialog**: Create and edit products
//! - **ConfirmDeleteDialog**: Confirmation before a product is deleted
//! - **NoticeDialog**: Outcome messages the operator acknowledges
//!
//! ## Usage
//!
//! ```rust,ignore
//! rsx! {
//!     Modal {
//!         on_close: move |_| editing.set(None),
//!         ProductFormDialog { product: None, list, on_close: move |_| editing.set(None) }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod modal;
pub mod notice;
pub mod product_form;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::{CONFIRM_DELETE_PRODUCT, ConfirmDeleteDialog};
pub use modal::Modal;
pub use notice::NoticeDialog;
pub use product_form::ProductFormDialog;
