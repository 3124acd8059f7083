//! Error types for Pedidos Admin
//!
//! One error enum covers every layer of the console: client-side form
//! validation, transport failures, non-2xx API responses, malformed bodies,
//! and the ambient concerns (session storage, configuration, IO).

use std::path::PathBuf;
use thiserror::Error;

/// Generic message shown for any transport-level failure
pub const CONNECTION_ERROR: &str = "Error de conexión. Verifica que el servidor esté funcionando.";

/// Connection message of catalog and order mutations
pub const MUTATION_CONNECTION_ERROR: &str = "Error de conexión";

/// Message shown when the server answers 2xx with an empty body
pub const EMPTY_RESPONSE: &str = "Respuesta vacía del servidor";

/// The main error type for Pedidos Admin
#[derive(Debug, Error)]
pub enum AdminError {
    // ========================================================================
    // Client Validation Errors
    // ========================================================================
    /// A form failed client-side validation; the message is operator-facing
    #[error("{0}")]
    Validation(String),

    // ========================================================================
    // Remote API Errors
    // ========================================================================
    /// The request never produced a response (DNS, refused, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("sin mensaje"))]
    Api {
        status: u16,
        /// `mensaje`/`message` field of the body, when the body carried one
        message: Option<String>,
    },

    /// A read operation received a 2xx response with no body
    #[error("Respuesta vacía del servidor")]
    EmptyResponse,

    /// The body could not be interpreted
    #[error("Failed to parse response: {0}")]
    Parse(String),

    // ========================================================================
    // Session Storage Errors
    // ========================================================================
    /// Reading or writing the persisted session failed
    #[error("Session storage error at '{path}': {message}")]
    Storage { path: PathBuf, message: String },

    /// An operation needs a logged-in operator and there is none
    #[error("No hay sesión activa")]
    NotAuthenticated,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation cancelled by the operator
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl AdminError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AdminError::Validation(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        AdminError::Network(msg.into())
    }

    /// Create an API error from a status code and optional server message
    pub fn api(status: u16, message: Option<String>) -> Self {
        AdminError::Api { status, message }
    }

    /// Create a storage error
    pub fn storage(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        AdminError::Storage {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AdminError::Config(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        AdminError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a client validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, AdminError::Validation(_))
    }

    /// Check if this error is a transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, AdminError::Network(_))
    }

    /// Check if this error came from a non-2xx response
    pub fn is_api(&self) -> bool {
        matches!(self, AdminError::Api { .. })
    }

    /// Check if this error is about an unusable response body
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, AdminError::EmptyResponse | AdminError::Parse(_))
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Operator-facing message.
    ///
    /// `fallback` is used where the source of the failure carries no message
    /// of its own (an API error without `mensaje`, an unparseable body).
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AdminError::Validation(msg) => msg.clone(),
            AdminError::Network(_) => CONNECTION_ERROR.to_string(),
            AdminError::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            AdminError::Api { .. } => fallback.to_string(),
            AdminError::EmptyResponse => EMPTY_RESPONSE.to_string(),
            AdminError::NotAuthenticated => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Operator-facing message for a failed mutation
    ///
    /// Same as [`user_message`](Self::user_message), except that transport
    /// failures use the short connection message.
    pub fn mutation_message(&self, fallback: &str) -> String {
        match self {
            AdminError::Network(_) => MUTATION_CONNECTION_ERROR.to_string(),
            _ => self.user_message(fallback),
        }
    }
}

/// Result type alias using AdminError
pub type AdminResult<T> = Result<T, AdminError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> AdminResult<T>;
}

impl<T, E: Into<AdminError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> AdminResult<T> {
        self.map_err(|e| {
            let err: AdminError = e.into();
            AdminError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_shown_verbatim() {
        let err = AdminError::validation("Todos los campos son obligatorios");
        assert!(err.is_validation());
        assert!(!err.is_network());
        assert_eq!(err.to_string(), "Todos los campos son obligatorios");
        assert_eq!(
            err.user_message("Error en el login"),
            "Todos los campos son obligatorios"
        );
    }

    #[test]
    fn test_network_error_uses_connection_message() {
        let err = AdminError::network("connection refused");
        assert!(err.is_network());
        assert_eq!(err.user_message("Error en el login"), CONNECTION_ERROR);
    }

    #[test]
    fn test_mutation_network_error_uses_short_message() {
        let err = AdminError::network("connection reset");
        assert_eq!(err.mutation_message("Error al actualizar stock"), "Error de conexión");

        let api = AdminError::api(400, Some("Stock inválido".to_string()));
        assert_eq!(api.mutation_message("Error al actualizar stock"), "Stock inválido");
    }

    #[test]
    fn test_api_error_prefers_server_message() {
        let err = AdminError::api(401, Some("Credenciales inválidas".to_string()));
        assert!(err.is_api());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message("Error en el login"), "Credenciales inválidas");
    }

    #[test]
    fn test_api_error_falls_back() {
        let err = AdminError::api(500, None);
        assert_eq!(err.user_message("Error en el login"), "Error en el login");

        let blank = AdminError::api(500, Some("  ".to_string()));
        assert_eq!(blank.user_message("Error en el registro"), "Error en el registro");
        assert_eq!(err.to_string(), "API error (500): sin mensaje");
    }

    #[test]
    fn test_malformed_response_classification() {
        assert!(AdminError::EmptyResponse.is_malformed_response());
        assert!(AdminError::Parse("eof".to_string()).is_malformed_response());
        assert_eq!(AdminError::EmptyResponse.user_message("x"), EMPTY_RESPONSE);
        assert_eq!(
            AdminError::Parse("eof".to_string()).user_message("Error al cargar los productos"),
            "Error al cargar los productos"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = AdminError::with_context("Guardando sesión", "Permission denied");
        assert_eq!(err.to_string(), "Guardando sesión: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_io_error() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = io.with_context("Reading config").unwrap_err();
        assert!(err.to_string().starts_with("Reading config: IO error"));
    }
}
