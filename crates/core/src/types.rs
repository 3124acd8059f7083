//! Domain types for Pedidos Admin
//!
//! These mirror the records served by the remote API. The API owns them;
//! the console only reads them and sends mutation payloads back. Field names
//! on the wire are Spanish (`nombre`, `precio`, ...) and ids are Mongo-style
//! `_id` strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Session / User
// ============================================================================

/// Identity of the logged-in operator, as returned in `usuario`
///
/// Unknown fields are kept so the persisted session round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Create a user with just name and email
    pub fn new(nombre: Option<String>, email: impl Into<String>) -> Self {
        Self {
            nombre,
            email: email.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Name used in greetings: `nombre` when present, otherwise the email
    pub fn display_name(&self) -> &str {
        match self.nombre.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

// ============================================================================
// Product Category
// ============================================================================

/// Product category
///
/// The form offers the fixed list below; the server may return other names,
/// which are preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Hamburguesas,
    Bebidas,
    Acompanamientos,
    Pollo,
    Postres,
    Ensaladas,
    Electronica,
    Otros,
    Other(String),
}

impl Category {
    /// Categories offered by the product form, in display order
    pub const ALL: [Category; 8] = [
        Category::Hamburguesas,
        Category::Bebidas,
        Category::Acompanamientos,
        Category::Pollo,
        Category::Postres,
        Category::Ensaladas,
        Category::Electronica,
        Category::Otros,
    ];

    /// Wire name of the category
    pub fn as_str(&self) -> &str {
        match self {
            Category::Hamburguesas => "Hamburguesas",
            Category::Bebidas => "Bebidas",
            Category::Acompanamientos => "Acompañamientos",
            Category::Pollo => "Pollo",
            Category::Postres => "Postres",
            Category::Ensaladas => "Ensaladas",
            Category::Electronica => "Electronica",
            Category::Otros => "Otros",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Hamburguesas" => Category::Hamburguesas,
            "Bebidas" => Category::Bebidas,
            "Acompañamientos" => Category::Acompanamientos,
            "Pollo" => Category::Pollo,
            "Postres" => Category::Postres,
            "Ensaladas" => Category::Ensaladas,
            "Electronica" => Category::Electronica,
            "Otros" => Category::Otros,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Product
// ============================================================================

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub nombre: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub descripcion: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub precio: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    pub stock: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub categoria: Category,

    #[serde(default = "default_true")]
    pub activo: bool,
}

/// Body of `POST /api/products` and `PUT /api/products/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub stock: i64,
    pub imagen: String,
    pub categoria: Category,
    pub activo: bool,
}

// ============================================================================
// Order Status
// ============================================================================

/// Order status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pendiente,
    Confirmado,
    Enviado,
    Entregado,
    Cancelado,
    Other(String),
}

impl OrderStatus {
    /// Statuses the operator can pick, in workflow order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pendiente,
        OrderStatus::Confirmado,
        OrderStatus::Enviado,
        OrderStatus::Entregado,
        OrderStatus::Cancelado,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pendiente => "pendiente",
            OrderStatus::Confirmado => "confirmado",
            OrderStatus::Enviado => "enviado",
            OrderStatus::Entregado => "entregado",
            OrderStatus::Cancelado => "cancelado",
            OrderStatus::Other(name) => name,
        }
    }

    /// Display label, first letter capitalized
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Badge colour for the status
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "#ffa500",
            OrderStatus::Confirmado => "#2196f3",
            OrderStatus::Enviado => "#9c27b0",
            OrderStatus::Entregado => "#4caf50",
            OrderStatus::Cancelado => "#f44336",
            OrderStatus::Other(_) => "#666",
        }
    }

    /// Whether the order counts towards sales figures
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelado)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pendiente" => OrderStatus::Pendiente,
            "confirmado" => OrderStatus::Confirmado,
            "enviado" => OrderStatus::Enviado,
            "entregado" => OrderStatus::Entregado,
            "cancelado" => OrderStatus::Cancelado,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        OrderStatus::from(value.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Order
// ============================================================================

/// Customer attached to an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUser {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Line item of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    pub cantidad: i64,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub usuario: Option<OrderUser>,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Missing totals count as zero in every sum
    #[serde(default)]
    pub total: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub estado: OrderStatus,

    #[serde(rename = "metodoPago", default, skip_serializing_if = "Option::is_none")]
    pub metodo_pago: Option<String>,

    /// Unparseable timestamps become `None`
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "deserialize_lenient_datetime"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Order total, zero when the server omitted it
    pub fn total_or_zero(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }
}

// ============================================================================
// Serde Helpers
// ============================================================================

fn default_true() -> bool {
    true
}

/// Treat an explicit `null` like a missing field
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `2`, `2.0` and `null` for integer counters
fn deserialize_lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trunc() as i64).unwrap_or(0))
}

/// Parse RFC 3339 timestamps, mapping anything else to `None`
fn deserialize_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_user_display_name() {
        let named = User::new(Some("Ana".to_string()), "ana@example.com");
        assert_eq!(named.display_name(), "Ana");

        let anonymous = User::new(None, "ops@example.com");
        assert_eq!(anonymous.display_name(), "ops@example.com");

        let blank = User::new(Some("  ".to_string()), "ops@example.com");
        assert_eq!(blank.display_name(), "ops@example.com");
    }

    #[test]
    fn test_user_keeps_unknown_fields() {
        let raw = json!({"nombre": "Ana", "email": "ana@example.com", "rol": "admin"});
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.extra.get("rol"), Some(&json!("admin")));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::from("Acompañamientos"), Category::Acompanamientos);
        assert_eq!(Category::Acompanamientos.as_str(), "Acompañamientos");
        assert_eq!(
            Category::from("Vinos"),
            Category::Other("Vinos".to_string())
        );
        assert_eq!(
            serde_json::to_value(Category::Postres).unwrap(),
            json!("Postres")
        );
    }

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_value(json!({
            "_id": "1",
            "nombre": "X",
            "precio": 10,
            "stock": 2,
            "activo": true,
            "categoria": "Otros"
        }))
        .unwrap();

        assert_eq!(product.id, "1");
        assert_eq!(product.nombre, "X");
        assert_eq!(product.precio, 10.0);
        assert_eq!(product.stock, 2);
        assert!(product.activo);
        assert_eq!(product.categoria, Category::Otros);
        assert_eq!(product.descripcion, "");
        assert_eq!(product.imagen, None);
    }

    #[test]
    fn test_product_stock_accepts_float() {
        let product: Product =
            serde_json::from_value(json!({"_id": "1", "stock": 3.0})).unwrap();
        assert_eq!(product.stock, 3);
        assert!(product.activo);
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Pendiente.label(), "Pendiente");
        assert_eq!(OrderStatus::from("cancelado"), OrderStatus::Cancelado);
        assert!(OrderStatus::Cancelado.is_cancelled());
        assert_eq!(
            OrderStatus::from("devuelto"),
            OrderStatus::Other("devuelto".to_string())
        );
        assert_eq!(OrderStatus::Other("devuelto".to_string()).color(), "#666");
    }

    #[test]
    fn test_order_deserialize() {
        let order: Order = serde_json::from_value(json!({
            "_id": "665f1c2ab3e4d5f6a7b8c9d0",
            "usuario": {"nombre": "Luis", "email": "luis@example.com"},
            "items": [{"nombre": "Combo", "cantidad": 2}],
            "total": 25.5,
            "estado": "enviado",
            "metodoPago": "tarjeta",
            "createdAt": "2024-05-01T12:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(order.estado, OrderStatus::Enviado);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.metodo_pago.as_deref(), Some("tarjeta"));
        assert_eq!(
            order.created_at.unwrap().to_rfc3339(),
            "2024-05-01T12:30:00+00:00"
        );
    }

    #[test]
    fn test_order_tolerates_missing_and_bad_fields() {
        let order: Order = serde_json::from_value(json!({
            "_id": "a",
            "createdAt": "ayer"
        }))
        .unwrap();

        assert_eq!(order.total_or_zero(), 0.0);
        assert_eq!(order.created_at, None);
        assert!(order.items.is_empty());
        assert_eq!(order.estado, OrderStatus::Pendiente);
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let product: Product = serde_json::from_value(json!({
            "_id": "2",
            "nombre": null,
            "descripcion": null,
            "precio": null,
            "categoria": null
        }))
        .unwrap();
        assert_eq!(product.nombre, "");
        assert_eq!(product.descripcion, "");
        assert_eq!(product.precio, 0.0);
        assert_eq!(product.categoria, Category::Hamburguesas);

        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "estado": null,
            "items": [{"nombre": null, "cantidad": 1}]
        }))
        .unwrap();
        assert_eq!(order.estado, OrderStatus::Pendiente);
        assert_eq!(order.items[0].nombre, "");
    }
}
