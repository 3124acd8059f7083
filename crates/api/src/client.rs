//! API client for the Pedidos backends
//!
//! One client value talks to both remote services: the authentication
//! service (login/registration) and the catalog service (products, orders).
//! The client is cheap to clone and holds no per-panel state.
//!
//! ## Response handling
//!
//! - Reads need a non-empty 2xx body in one of the list envelope shapes.
//! - Create, update and toggle need a non-empty JSON body.
//! - Delete only looks at the status code; the body is best-effort.
//! - Stock and order-status updates only look at the status code.
//!
//! Any non-2xx status becomes [`AdminError::Api`] carrying the server's
//! `mensaje`/`message` field when the body has one.

use std::sync::Arc;

use pedidos_core::{
    AdminError, AdminResult, Category, DashboardStats, ListResource, LoginForm, Order,
    OrderStatus, Pagination, Product, ProductPayload, QueryFilters, RegisterForm, User,
    Validatable,
};
use reqwest::Url;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::config::AdminConfig;
use crate::envelope::{Envelope, PageInfo, normalize};
use crate::transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, ReqwestTransport};

// ============================================================================
// Operator Messages
// ============================================================================

pub const LOGIN_FAILED: &str = "Error en el login";
pub const REGISTER_FAILED: &str = "Error en el registro";
pub const SAVE_PRODUCT_FAILED: &str = "Error al guardar el producto";
pub const DELETE_PRODUCT_FAILED: &str = "Error al eliminar producto";
pub const TOGGLE_PRODUCT_FAILED: &str = "Error al cambiar estado del producto";
pub const UPDATE_STOCK_FAILED: &str = "Error al actualizar stock";
pub const UPDATE_STATUS_FAILED: &str = "Error al actualizar estado";
pub const STATS_FAILED: &str = "Error al cargar las estadísticas";

/// Key of the named envelope for the category list
const CATEGORIES_KEY: &str = "categorias";

// ============================================================================
// List Page
// ============================================================================

/// One fetched list with the totals the server reported
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub items: Vec<R>,
    pub page_info: PageInfo,
}

// ============================================================================
// API Client
// ============================================================================

/// Client for the authentication and catalog services
///
/// # Example
///
/// ```rust,ignore
/// let config = AdminConfig::load(None)?;
/// let client = ApiClient::new(&config)?;
/// let user = client.login(&LoginForm::new("ops@example.com", "secret")).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    auth_base_url: String,
    api_base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("auth_base_url", &self.auth_base_url)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over `reqwest` for the configured services
    pub fn new(config: &AdminConfig) -> AdminResult<Self> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over any transport
    pub fn with_transport(
        config: &AdminConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> AdminResult<Self> {
        for (field, base) in [
            ("auth_base_url", &config.auth_base_url),
            ("api_base_url", &config.api_base_url),
        ] {
            Url::parse(base)
                .map_err(|e| AdminError::config(format!("{field} '{base}' is not a URL: {e}")))?;
        }

        Ok(Self {
            transport,
            auth_base_url: config.auth_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL of the catalog service
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Log an operator in, returning the `usuario` of the response
    ///
    /// The form is validated first; an invalid form sends nothing.
    pub async fn login(&self, form: &LoginForm) -> AdminResult<User> {
        let request = form.validate()?;
        let url = self.auth_url("/api/login")?;
        info!("Sending login request");

        let response = self
            .send(
                ApiRequest::new(HttpMethod::Post, url).with_body(serde_json::to_value(&request)?),
            )
            .await?;
        let body = expect_json(response)?;

        let user = body
            .get("usuario")
            .cloned()
            .ok_or_else(|| AdminError::Parse("login response has no 'usuario'".to_string()))?;
        let user: User =
            serde_json::from_value(user).map_err(|e| AdminError::Parse(e.to_string()))?;

        info!("Login succeeded");
        Ok(user)
    }

    /// Register a new account
    ///
    /// Returns the created `usuario`, or the submitted name and email when the
    /// response omits it.
    pub async fn register(&self, form: &RegisterForm) -> AdminResult<User> {
        let request = form.validate()?;
        let url = self.auth_url("/api/registro")?;
        info!("Sending registration request");

        let response = self
            .send(
                ApiRequest::new(HttpMethod::Post, url).with_body(serde_json::to_value(&request)?),
            )
            .await?;
        let body = expect_json(response)?;

        let user = match body.get("usuario").cloned() {
            Some(value) => {
                serde_json::from_value(value).map_err(|e| AdminError::Parse(e.to_string()))?
            }
            None => User::new(Some(request.nombre.clone()), request.email.clone()),
        };

        info!("Registration succeeded");
        Ok(user)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Fetch one list with the given filters
    ///
    /// `page` is sent only when given; only non-empty filter fields are sent.
    pub async fn list<R: ListResource>(
        &self,
        filters: &R::Filters,
        page: Option<&Pagination>,
    ) -> AdminResult<ListPage<R>> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.extend(page.query_pairs());
        }
        query.extend(filters.query_pairs());

        let url = self.api_url(R::PATH, &query)?;
        let response = self.send(ApiRequest::new(HttpMethod::Get, url)).await?;
        let response = expect_success(response)?;

        let envelope = Envelope::<R>::from_body(&response.body, R::ENVELOPE_KEY)?;
        let items = normalize(envelope);
        debug!("Fetched {} {}", items.len(), R::LABEL);

        Ok(ListPage {
            items,
            page_info: PageInfo::from_body(&response.body),
        })
    }

    /// Fetch the category names known to the server
    pub async fn categories(&self) -> AdminResult<Vec<Category>> {
        let url = self.api_url("/api/products/categories", &[])?;
        let response = self.send(ApiRequest::new(HttpMethod::Get, url)).await?;
        let response = expect_success(response)?;

        let envelope = Envelope::<Value>::from_body(&response.body, CATEGORIES_KEY)?;
        let names = normalize(envelope)
            .into_iter()
            .filter_map(|value| match value {
                Value::String(name) => Some(name),
                Value::Object(map) => map.get("nombre").and_then(Value::as_str).map(String::from),
                _ => None,
            })
            .filter(|name| !name.trim().is_empty())
            .map(Category::from)
            .collect();
        Ok(names)
    }

    /// Fetch every product and order and aggregate the dashboard figures
    pub async fn load_dashboard_stats(&self) -> AdminResult<DashboardStats> {
        let products = self.list::<Product>(&Default::default(), None).await?;
        let orders = self.list::<Order>(&Default::default(), None).await?;
        let stats = DashboardStats::compute_now(&products.items, &orders.items);
        info!(
            "Dashboard stats: {} products, {} orders",
            stats.total_productos, stats.total_ordenes
        );
        Ok(stats)
    }

    // ========================================================================
    // Product Mutations
    // ========================================================================

    /// `POST /api/products`
    pub async fn create_product(&self, payload: &ProductPayload) -> AdminResult<()> {
        let url = self.api_url("/api/products", &[])?;
        info!("Creating product '{}'", payload.nombre);
        let response = self
            .send(
                ApiRequest::new(HttpMethod::Post, url).with_body(serde_json::to_value(payload)?),
            )
            .await?;
        expect_json(response).map(|_| ())
    }

    /// `PUT /api/products/:id`
    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> AdminResult<()> {
        let url = self.api_url(&format!("/api/products/{id}"), &[])?;
        info!("Updating product {id}");
        let response = self
            .send(
                ApiRequest::new(HttpMethod::Put, url).with_body(serde_json::to_value(payload)?),
            )
            .await?;
        expect_json(response).map(|_| ())
    }

    /// `DELETE /api/products/:id`
    ///
    /// Any 2xx status is a success. A body that is not JSON, or that reports
    /// `success: false`, is logged and otherwise ignored.
    pub async fn delete_product(&self, id: &str) -> AdminResult<()> {
        let url = self.api_url(&format!("/api/products/{id}"), &[])?;
        info!("Deleting product {id}");
        let response = self.send(ApiRequest::new(HttpMethod::Delete, url)).await?;
        let response = expect_success(response)?;

        if response.has_body() {
            match serde_json::from_str::<Value>(&response.body) {
                Ok(body) => {
                    if body.get("success").and_then(Value::as_bool) != Some(true) {
                        warn!(
                            "Delete of product {id} returned 2xx without success: {}",
                            server_message(&body).unwrap_or_default()
                        );
                    }
                }
                Err(_) => debug!("Delete of product {id} returned a non-JSON body"),
            }
        }
        Ok(())
    }

    /// `PATCH /api/products/:id/toggle-activo`
    pub async fn toggle_product_active(&self, id: &str) -> AdminResult<()> {
        let url = self.api_url(&format!("/api/products/{id}/toggle-activo"), &[])?;
        info!("Toggling product {id}");
        let response = self.send(ApiRequest::new(HttpMethod::Patch, url)).await?;
        expect_json(response).map(|_| ())
    }

    /// `PATCH /api/products/:id/stock`
    pub async fn update_product_stock(&self, id: &str, stock: i64) -> AdminResult<()> {
        let url = self.api_url(&format!("/api/products/{id}/stock"), &[])?;
        info!("Setting stock of product {id} to {stock}");
        let response = self
            .send(ApiRequest::new(HttpMethod::Patch, url).with_body(json!({ "stock": stock })))
            .await?;
        expect_success(response).map(|_| ())
    }

    // ========================================================================
    // Order Mutations
    // ========================================================================

    /// `PATCH /api/orders/:id/status`
    pub async fn update_order_status(&self, id: &str, estado: &OrderStatus) -> AdminResult<()> {
        let url = self.api_url(&format!("/api/orders/{id}/status"), &[])?;
        info!("Setting status of order {id} to {estado}");
        let response = self
            .send(
                ApiRequest::new(HttpMethod::Patch, url)
                    .with_body(json!({ "estado": estado.as_str() })),
            )
            .await?;
        expect_success(response).map(|_| ())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn send(&self, request: ApiRequest) -> AdminResult<ApiResponse> {
        debug!("{} {}", request.method, request.url);
        self.transport.send(&request).await
    }

    fn auth_url(&self, path: &str) -> AdminResult<String> {
        build_url(&self.auth_base_url, path, &[])
    }

    fn api_url(&self, path: &str, query: &[(&'static str, String)]) -> AdminResult<String> {
        build_url(&self.api_base_url, path, query)
    }
}

/// Join `base` and `path`, appending the query only when it has pairs
fn build_url(base: &str, path: &str, query: &[(&'static str, String)]) -> AdminResult<String> {
    let mut url = Url::parse(&format!("{base}{path}"))
        .map_err(|e| AdminError::config(format!("invalid URL '{base}{path}': {e}")))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url.to_string())
}

/// Fail on non-2xx, extracting the server message
fn expect_success(response: ApiResponse) -> AdminResult<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| server_message(&body));
    warn!("Request failed with status {}", response.status);
    Err(AdminError::api(response.status, message))
}

/// Fail on non-2xx, then require a non-empty JSON body
fn expect_json(response: ApiResponse) -> AdminResult<Value> {
    let response = expect_success(response)?;
    if !response.has_body() {
        return Err(AdminError::EmptyResponse);
    }
    serde_json::from_str(&response.body).map_err(|e| AdminError::Parse(e.to_string()))
}

/// `mensaje`, or else `message`, of a JSON body
fn server_message(body: &Value) -> Option<String> {
    ["mensaje", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(String::from)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_query_has_no_question_mark() {
        let url = build_url("https://api.example.com", "/api/products", &[]).unwrap();
        assert_eq!(url, "https://api.example.com/api/products");
    }

    #[test]
    fn test_build_url_encodes_query() {
        let url = build_url(
            "https://api.example.com",
            "/api/products",
            &[("categoria", "Acompañamientos".to_string()), ("buscar", "papas fritas".to_string())],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://api.example.com/api/products?categoria=Acompa%C3%B1amientos&buscar=papas+fritas"
        );
    }

    #[test]
    fn test_server_message_prefers_mensaje() {
        let body = json!({"mensaje": "Credenciales inválidas", "message": "Invalid"});
        assert_eq!(server_message(&body).as_deref(), Some("Credenciales inválidas"));
        assert_eq!(
            server_message(&json!({"message": "Not found"})).as_deref(),
            Some("Not found")
        );
        assert_eq!(server_message(&json!({"error": true})), None);
    }

    #[test]
    fn test_expect_success_maps_status() {
        let err = expect_success(ApiResponse::new(404, r#"{"message": "No existe"}"#)).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(DELETE_PRODUCT_FAILED), "No existe");

        let err = expect_success(ApiResponse::new(500, "<html>")).unwrap_err();
        assert_eq!(err.user_message(DELETE_PRODUCT_FAILED), DELETE_PRODUCT_FAILED);
    }

    #[test]
    fn test_expect_json_requires_body() {
        let err = expect_json(ApiResponse::new(200, "")).unwrap_err();
        assert!(matches!(err, AdminError::EmptyResponse));

        let err = expect_json(ApiResponse::new(200, "ok")).unwrap_err();
        assert!(matches!(err, AdminError::Parse(_)));

        let body = expect_json(ApiResponse::new(201, r#"{"success": true}"#)).unwrap();
        assert_eq!(body["success"], json!(true));
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        struct Unused;

        #[async_trait::async_trait]
        impl HttpTransport for Unused {
            async fn send(&self, _request: &ApiRequest) -> AdminResult<ApiResponse> {
                Err(AdminError::network("unused"))
            }
        }

        let config = AdminConfig {
            api_base_url: "not a url".to_string(),
            ..AdminConfig::default()
        };
        let err = ApiClient::with_transport(&config, Arc::new(Unused)).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }
}
