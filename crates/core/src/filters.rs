//! Filter and pagination state for the list panels
//!
//! Filters are client-local and never persisted. Each filter type knows how
//! to turn itself into query-string pairs, and only non-empty fields are
//! emitted.

use chrono::NaiveDate;

use crate::traits::{ListResource, QueryFilters};
use crate::types::{Category, Order, OrderStatus, Product};

/// Default number of orders per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ============================================================================
// Product Filters
// ============================================================================

/// Filters of the product panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub categoria: Option<Category>,
    /// `None` means "all"
    pub activo: Option<bool>,
    /// Sent as `buscar`
    pub search: String,
}

impl QueryFilters for ProductFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(categoria) = &self.categoria {
            if !categoria.as_str().is_empty() {
                pairs.push(("categoria", categoria.as_str().to_string()));
            }
        }
        if let Some(activo) = self.activo {
            pairs.push(("activo", activo.to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("buscar", search.to_string()));
        }
        pairs
    }
}

// ============================================================================
// Order Filters
// ============================================================================

/// Filters of the order panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilters {
    pub estado: Option<OrderStatus>,
    pub fecha_desde: Option<NaiveDate>,
    pub fecha_hasta: Option<NaiveDate>,
    pub search: String,
}

impl QueryFilters for OrderFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(estado) = &self.estado {
            if !estado.as_str().is_empty() {
                pairs.push(("estado", estado.as_str().to_string()));
            }
        }
        if let Some(desde) = self.fecha_desde {
            pairs.push(("fechaDesde", desde.format("%Y-%m-%d").to_string()));
        }
        if let Some(hasta) = self.fecha_hasta {
            pairs.push(("fechaHasta", hasta.format("%Y-%m-%d").to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

/// Parse the value of a date input (`YYYY-MM-DD`), empty meaning unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination state of a list panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based current page
    pub page: u32,
    pub limit: u32,
    /// Total items reported by the server
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start at page 1 with the given page size
    pub fn with_limit(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
            total_pages: 0,
        }
    }

    /// Query pairs for the current page
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Go back to the first page (filters changed)
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Whether a previous page exists
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the pager should be shown at all
    pub fn is_multi_page(&self) -> bool {
        self.total_pages > 1
    }

    /// Record totals reported by a response
    pub fn apply_totals(&mut self, total: u64, total_pages: u32) {
        self.total = total;
        self.total_pages = total_pages;
    }

    /// Pages needed for `len` items when the server reports no totals
    pub fn pages_for(&self, len: u64) -> u32 {
        let limit = u64::from(self.limit.max(1));
        len.div_ceil(limit) as u32
    }
}

// ============================================================================
// Resource Descriptions
// ============================================================================

impl ListResource for Product {
    type Filters = ProductFilters;

    const PATH: &'static str = "/api/products";
    const ENVELOPE_KEY: &'static str = "productos";
    const PAGINATED: bool = false;
    const LABEL: &'static str = "productos";
    const LOAD_ERROR: &'static str = "Error al cargar los productos";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListResource for Order {
    type Filters = OrderFilters;

    const PATH: &'static str = "/api/orders";
    const ENVELOPE_KEY: &'static str = "ordenes";
    const PAGINATED: bool = true;
    const LABEL: &'static str = "pedidos";
    const LOAD_ERROR: &'static str = "Error al cargar los pedidos";

    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_product_filters_emit_nothing() {
        let filters = ProductFilters::default();
        assert!(filters.query_pairs().is_empty());
        assert!(QueryFilters::is_empty(&filters));
    }

    #[test]
    fn test_product_filters_only_non_empty_fields() {
        let filters = ProductFilters {
            categoria: Some(Category::Bebidas),
            activo: None,
            search: "   ".to_string(),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("categoria", "Bebidas".to_string())]
        );

        let filters = ProductFilters {
            categoria: None,
            activo: Some(false),
            search: " cola ".to_string(),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("activo", "false".to_string()),
                ("buscar", "cola".to_string())
            ]
        );
    }

    #[test]
    fn test_product_filters_every_combination() {
        let categorias = [None, Some(Category::Pollo)];
        let activos = [None, Some(true), Some(false)];
        let searches = ["", "  ", "pizza"];

        for categoria in &categorias {
            for activo in &activos {
                for search in &searches {
                    let filters = ProductFilters {
                        categoria: categoria.clone(),
                        activo: *activo,
                        search: search.to_string(),
                    };
                    let pairs = filters.query_pairs();
                    assert!(pairs.iter().all(|(_, v)| !v.trim().is_empty()));
                    assert_eq!(
                        pairs.iter().any(|(k, _)| *k == "categoria"),
                        categoria.is_some()
                    );
                    assert_eq!(pairs.iter().any(|(k, _)| *k == "activo"), activo.is_some());
                    assert_eq!(
                        pairs.iter().any(|(k, _)| *k == "buscar"),
                        !search.trim().is_empty()
                    );
                }
            }
        }
    }

    #[test]
    fn test_order_filters_query_names() {
        let filters = OrderFilters {
            estado: Some(OrderStatus::Entregado),
            fecha_desde: parse_date_input("2024-05-01"),
            fecha_hasta: None,
            search: "luis".to_string(),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("estado", "entregado".to_string()),
                ("fechaDesde", "2024-05-01".to_string()),
                ("search", "luis".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("no-date"), None);
        assert_eq!(
            parse_date_input("2024-12-31"),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
    }

    #[test]
    fn test_pagination_navigation() {
        let mut pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
        assert!(!pagination.has_previous());

        pagination.apply_totals(35, 4);
        pagination.page = 4;
        assert!(pagination.has_previous());
        assert!(!pagination.has_next());
        assert!(pagination.is_multi_page());

        pagination.reset();
        assert_eq!(pagination.page, 1);
        assert_eq!(
            pagination.query_pairs(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_pages_for() {
        let pagination = Pagination::with_limit(10);
        assert_eq!(pagination.pages_for(0), 0);
        assert_eq!(pagination.pages_for(10), 1);
        assert_eq!(pagination.pages_for(11), 2);
    }
}
