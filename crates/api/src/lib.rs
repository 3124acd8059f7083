//! # Pedidos API
//!
//! Everything between the front-ends and the remote services:
//!
//! - **Config**: `AdminConfig` resolved from defaults, TOML and environment
//! - **Transport**: the `HttpTransport` seam and its `reqwest` implementation
//! - **Client**: `ApiClient` with one method per remote operation
//! - **Envelope**: normalization of the list response shapes
//! - **Session**: `SessionService` over a pluggable `SessionStore`
//! - **Controller**: `ListController`, the fetch/mutate/refetch cycle
//!

pub mod client;
pub mod config;
pub mod controller;
pub mod envelope;
pub mod session;
pub mod transport;

// Re-export commonly used items at crate root
pub use client::{ApiClient, ListPage};
pub use config::AdminConfig;
pub use controller::{FetchOutcome, FetchTicket, ListController, ListState};
pub use envelope::{Envelope, PageInfo, normalize};
pub use session::{FileSessionStore, MemorySessionStore, SessionService, SessionStore};
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, ReqwestTransport};

/// Controller of the product panel
pub type ProductController = ListController<pedidos_core::Product>;

/// Controller of the order panel
pub type OrderController = ListController<pedidos_core::Order>;
