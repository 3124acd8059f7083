//! Row view models and formatting helpers
//!
//! The desktop tables and the CLI render the same rows, so the text shown
//! for each cell is computed here once.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::types::{Order, OrderStatus, Product};

/// Image shown when a product has none
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50x50/667eea/ffffff?text=IMG";

/// Characters of the description shown under the product name
pub const EXCERPT_LEN: usize = 50;

pub const NO_PRODUCTS: &str = "No se encontraron productos con los filtros aplicados.";
pub const NO_ORDERS: &str = "No se encontraron pedidos con los filtros aplicados.";

// ============================================================================
// Number and Date Formatting
// ============================================================================

/// Format an amount with grouped thousands and up to three decimals
///
/// `10.0` becomes `10`, `1234.5` becomes `1,234.5`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part.chars().any(|c| c != '0') || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// `$` followed by [`format_amount`]
pub fn format_price(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Currency with exactly two decimals, as on the stats cards
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// `dd/mm/yyyy, hh:mm` in the given time zone
pub fn format_date_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%d/%m/%Y, %H:%M").to_string()
}

/// `dd/mm/yyyy, hh:mm` in the system time zone
pub fn format_date(at: &DateTime<Utc>) -> String {
    format_date_in(at, &Local)
}

/// `#` followed by the last eight characters of an id
pub fn short_id(id: &str) -> String {
    let count = id.chars().count();
    let tail: String = id.chars().skip(count.saturating_sub(8)).collect();
    format!("#{tail}")
}

/// The first [`EXCERPT_LEN`] characters of a description, with an ellipsis
pub fn excerpt(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let head: String = text.chars().take(EXCERPT_LEN).collect();
    format!("{head}...")
}

// ============================================================================
// Product Row
// ============================================================================

/// Text of one product table row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub image: String,
    pub nombre: String,
    pub excerpt: String,
    pub categoria: String,
    pub price: String,
    pub stock: i64,
    pub status: &'static str,
    pub active: bool,
    /// Icon of the toggle button: deactivate when active
    pub toggle_icon: &'static str,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        let image = product
            .imagen
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string();

        Self {
            id: product.id.clone(),
            image,
            nombre: product.nombre.clone(),
            excerpt: excerpt(&product.descripcion),
            categoria: product.categoria.to_string(),
            price: format_price(product.precio),
            stock: product.stock,
            status: if product.activo { "Activo" } else { "Inactivo" },
            active: product.activo,
            toggle_icon: if product.activo { "🔒" } else { "🔓" },
        }
    }
}

// ============================================================================
// Order Row
// ============================================================================

/// Text of one order table row
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub short_id: String,
    pub user_name: String,
    pub user_email: String,
    pub date: String,
    pub items_count: String,
    /// `nombre xcantidad` per item
    pub items: Vec<String>,
    pub total: String,
    pub status: OrderStatus,
    pub status_label: String,
    pub status_color: &'static str,
    pub payment: String,
}

impl OrderRow {
    /// Build the row, rendering dates in the system time zone
    pub fn from_order(order: &Order) -> Self {
        Self::from_order_in(order, &Local)
    }

    /// Build the row, rendering dates in `tz`
    pub fn from_order_in<Tz: TimeZone>(order: &Order, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let usuario = order.usuario.clone().unwrap_or_default();
        let user_name = usuario
            .nombre
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Usuario".to_string());

        Self {
            id: order.id.clone(),
            short_id: short_id(&order.id),
            user_name,
            user_email: usuario.email.unwrap_or_default(),
            date: order
                .created_at
                .as_ref()
                .map(|at| format_date_in(at, tz))
                .unwrap_or_else(|| "-".to_string()),
            items_count: format!("{} productos", order.items.len()),
            items: order
                .items
                .iter()
                .map(|item| format!("{} x{}", item.nombre, item.cantidad))
                .collect(),
            total: format_price(order.total_or_zero()),
            status: order.estado.clone(),
            status_label: order.estado.label(),
            status_color: order.estado.color(),
            payment: order
                .metodo_pago
                .clone()
                .filter(|method| !method.is_empty())
                .unwrap_or_else(|| "No especificado".to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderItem, OrderUser};
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.0), "10");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(1234567.891), "1,234,567.891");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.9999), "1,000");
        assert_eq!(format_amount(-1500.25), "-1,500.25");
        assert_eq!(format_price(10.0), "$10");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(15.5), "$15.50");
    }

    #[test]
    fn test_short_id_and_excerpt() {
        assert_eq!(short_id("665f1c2ab3e4d5f6a7b8c9d0"), "#a7b8c9d0");
        assert_eq!(short_id("abc"), "#abc");

        let long = "a".repeat(80);
        assert_eq!(excerpt(&long), format!("{}...", "a".repeat(50)));
        assert_eq!(excerpt("Corta"), "Corta...");
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_product_row_from_wrapped_response_item() {
        let product: Product = serde_json::from_value(json!({
            "_id": "1", "nombre": "X", "precio": 10, "stock": 2,
            "activo": true, "categoria": "Otros"
        }))
        .unwrap();

        let row = ProductRow::from_product(&product);
        assert_eq!(row.nombre, "X");
        assert_eq!(row.price, "$10");
        assert_eq!(row.stock, 2);
        assert_eq!(row.status, "Activo");
        assert_eq!(row.toggle_icon, "🔒");
        assert_eq!(row.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_order_row_defaults() {
        let order = Order {
            id: "665f1c2ab3e4d5f6a7b8c9d0".to_string(),
            usuario: Some(OrderUser {
                nombre: None,
                email: Some("luis@example.com".to_string()),
            }),
            items: vec![
                OrderItem { nombre: "Combo".to_string(), cantidad: 2 },
                OrderItem { nombre: "Soda".to_string(), cantidad: 1 },
            ],
            total: Some(1234.5),
            estado: OrderStatus::Enviado,
            metodo_pago: None,
            created_at: DateTime::parse_from_rfc3339("2024-05-01T15:07:00Z")
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        };

        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let row = OrderRow::from_order_in(&order, &tz);
        assert_eq!(row.short_id, "#a7b8c9d0");
        assert_eq!(row.user_name, "Usuario");
        assert_eq!(row.user_email, "luis@example.com");
        assert_eq!(row.date, "01/05/2024, 10:07");
        assert_eq!(row.items_count, "2 productos");
        assert_eq!(row.items, vec!["Combo x2", "Soda x1"]);
        assert_eq!(row.total, "$1,234.5");
        assert_eq!(row.status_label, "Enviado");
        assert_eq!(row.status_color, "#9c27b0");
        assert_eq!(row.payment, "No especificado");
    }
}
