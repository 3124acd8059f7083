//! Response envelopes
//!
//! List endpoints answer in one of three shapes:
//!
//! - `{"success": true, "data": [...]}`
//! - a bare JSON array
//! - an object with the list under a resource key (`productos`, `ordenes`,
//!   `categorias`)
//!
//! [`Envelope`] names the shape and [`normalize`] collapses it into one list.
//! Paginated lists also carry page totals, read by [`PageInfo::from_body`].

use pedidos_core::{AdminError, AdminResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// Envelope
// ============================================================================

/// The shape a list response arrived in
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// `{success: true, data: [...]}`
    Wrapped(Vec<T>),
    /// `[...]`
    Bare(Vec<T>),
    /// `{<key>: [...]}`
    Named { key: String, items: Vec<T> },
    /// Anything else; yields an empty list
    Unrecognized,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Classify a parsed body, looking for the list under `key` when named
    ///
    /// Shapes are tried in order: wrapped, bare, named. Items that do not
    /// deserialize as `T` make the whole body a parse error.
    pub fn from_value(value: Value, key: &str) -> AdminResult<Self> {
        match value {
            Value::Array(items) => Ok(Envelope::Bare(decode_items(items)?)),
            Value::Object(mut map) => {
                let success = map.get("success").and_then(Value::as_bool).unwrap_or(false);
                if success {
                    if let Some(Value::Array(items)) = map.remove("data") {
                        return Ok(Envelope::Wrapped(decode_items(items)?));
                    }
                }
                match map.remove(key) {
                    Some(Value::Array(items)) => Ok(Envelope::Named {
                        key: key.to_string(),
                        items: decode_items(items)?,
                    }),
                    _ => Ok(Envelope::Unrecognized),
                }
            }
            _ => Ok(Envelope::Unrecognized),
        }
    }

    /// Parse a raw body; empty bodies are an error
    pub fn from_body(body: &str, key: &str) -> AdminResult<Self> {
        if body.trim().is_empty() {
            return Err(AdminError::EmptyResponse);
        }
        let value: Value =
            serde_json::from_str(body).map_err(|e| AdminError::Parse(e.to_string()))?;
        Self::from_value(value, key)
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> AdminResult<Vec<T>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| AdminError::Parse(e.to_string())))
        .collect()
}

/// Collapse any envelope into its list
pub fn normalize<T>(envelope: Envelope<T>) -> Vec<T> {
    match envelope {
        Envelope::Wrapped(items) | Envelope::Bare(items) => items,
        Envelope::Named { items, .. } => items,
        Envelope::Unrecognized => {
            tracing::warn!("Unrecognized list response shape, showing an empty list");
            Vec::new()
        }
    }
}

// ============================================================================
// Page Info
// ============================================================================

/// Totals reported alongside a paginated list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
}

impl PageInfo {
    /// Read `pagination.totalItems`/`pagination.totalPages`, or top-level
    /// `total`/`totalPages` when there is no `pagination` object
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };

        match map.get("pagination") {
            Some(Value::Object(pagination)) => Self {
                total: Some(pagination.get("totalItems").and_then(Value::as_u64).unwrap_or(0)),
                total_pages: Some(
                    pagination
                        .get("totalPages")
                        .and_then(Value::as_u64)
                        .unwrap_or(0) as u32,
                ),
            },
            _ => Self {
                total: map.get("total").and_then(Value::as_u64).filter(|t| *t > 0),
                total_pages: map
                    .get("totalPages")
                    .and_then(Value::as_u64)
                    .filter(|t| *t > 0)
                    .map(|t| t as u32),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pedidos_core::{Order, OrderStatus, Product};
    use serde_json::json;

    fn product_json() -> Value {
        json!({"_id": "1", "nombre": "X", "precio": 10, "stock": 2, "activo": true, "categoria": "Otros"})
    }

    #[test]
    fn test_three_shapes_normalize_to_the_same_list() {
        let wrapped = json!({"success": true, "data": [product_json()]});
        let bare = json!([product_json()]);
        let named = json!({"productos": [product_json()]});

        let lists: Vec<Vec<Product>> = [wrapped, bare, named]
            .into_iter()
            .map(|value| normalize(Envelope::from_value(value, "productos").unwrap()))
            .collect();

        assert_eq!(lists[0].len(), 1);
        assert_eq!(lists[0], lists[1]);
        assert_eq!(lists[1], lists[2]);
        assert_eq!(lists[0][0].nombre, "X");
    }

    #[test]
    fn test_shape_classification() {
        let wrapped: Envelope<Product> =
            Envelope::from_value(json!({"success": true, "data": []}), "productos").unwrap();
        assert_eq!(wrapped, Envelope::Wrapped(Vec::new()));

        let named: Envelope<String> =
            Envelope::from_value(json!({"categorias": ["Pollo"]}), "categorias").unwrap();
        assert_eq!(
            named,
            Envelope::Named {
                key: "categorias".to_string(),
                items: vec!["Pollo".to_string()]
            }
        );
    }

    #[test]
    fn test_failed_wrapper_falls_through_to_named_key() {
        let value = json!({"success": false, "data": [], "ordenes": []});
        let envelope: Envelope<Value> = Envelope::from_value(value, "ordenes").unwrap();
        assert!(matches!(envelope, Envelope::Named { .. }));
    }

    #[test]
    fn test_unknown_shape_is_empty() {
        let envelope: Envelope<Product> =
            Envelope::from_value(json!({"items": [product_json()]}), "productos").unwrap();
        assert_eq!(envelope, Envelope::Unrecognized);
        assert!(normalize(envelope).is_empty());

        let scalar: Envelope<Product> = Envelope::from_value(json!(42), "productos").unwrap();
        assert_eq!(scalar, Envelope::Unrecognized);
    }

    #[test]
    fn test_null_description_keeps_the_whole_list() {
        let mut second = product_json();
        second["_id"] = json!("2");
        second["descripcion"] = Value::Null;
        let body = json!({"success": true, "data": [product_json(), second]}).to_string();

        let products = normalize(Envelope::<Product>::from_body(&body, "productos").unwrap());
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].descripcion, "");
    }

    #[test]
    fn test_null_status_keeps_the_order() {
        let body = r#"[{"_id": "o1", "estado": null, "items": []}]"#;
        let orders = normalize(Envelope::<Order>::from_body(body, "ordenes").unwrap());
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].estado, OrderStatus::Pendiente);
    }

    #[test]
    fn test_empty_and_malformed_bodies() {
        let empty = Envelope::<Product>::from_body("  ", "productos").unwrap_err();
        assert!(matches!(empty, AdminError::EmptyResponse));

        let malformed = Envelope::<Product>::from_body("{not json", "productos").unwrap_err();
        assert!(matches!(malformed, AdminError::Parse(_)));

        let bad_item = Envelope::<Product>::from_body(r#"[{"nombre": "sin id"}]"#, "productos")
            .unwrap_err();
        assert!(bad_item.is_malformed_response());
    }

    #[test]
    fn test_page_info_sources() {
        let nested = PageInfo::from_body(
            r#"{"ordenes": [], "pagination": {"totalItems": 35, "totalPages": 4}}"#,
        );
        assert_eq!(nested, PageInfo { total: Some(35), total_pages: Some(4) });

        let top_level = PageInfo::from_body(r#"{"ordenes": [], "total": 12, "totalPages": 2}"#);
        assert_eq!(top_level, PageInfo { total: Some(12), total_pages: Some(2) });

        let bare = PageInfo::from_body("[]");
        assert_eq!(bare, PageInfo::default());
    }
}
