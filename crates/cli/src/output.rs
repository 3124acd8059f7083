//! Terminal output: aligned, coloured tables and one-line outcomes

use colored::{Color, Colorize};
use pedidos_core::display::format_currency;
use pedidos_core::{DashboardStats, Order, OrderRow, OrderStatus, Pagination, Product, ProductRow};

// ============================================================================
// Cells and Tables
// ============================================================================

/// One table cell; the colour is applied after padding
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

impl Cell {
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

/// Render rows under bold headers, columns padded to their widest cell
pub fn render_table(headers: &[&str], rows: &[Vec<Cell>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.width());
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{:<width$}", header, width = width))
        .collect();
    out.push_str(&header_line.join("  ").trim_end().bold().to_string());
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let padded = format!("{:<width$}", cell.text, width = width);
                match cell.color {
                    Some(color) => padded.color(color).to_string(),
                    None => padded,
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

// ============================================================================
// Domain Tables
// ============================================================================

/// Product table columns
pub const PRODUCT_HEADERS: [&str; 6] = ["ID", "Nombre", "Categoría", "Precio", "Stock", "Estado"];

/// Order table columns
pub const ORDER_HEADERS: [&str; 7] = [
    "ID Pedido",
    "Usuario",
    "Fecha",
    "Productos",
    "Total",
    "Estado",
    "Método Pago",
];

pub fn product_rows(products: &[Product]) -> Vec<Vec<Cell>> {
    products
        .iter()
        .map(|product| {
            let row = ProductRow::from_product(product);
            let status_color = if row.active { Color::Green } else { Color::Red };
            vec![
                Cell::from(row.id),
                Cell::from(row.nombre),
                Cell::from(row.categoria),
                Cell::from(row.price),
                Cell::from(row.stock.to_string()),
                Cell::colored(row.status, status_color),
            ]
        })
        .collect()
}

/// Terminal colour of an order status
pub fn status_color(status: &OrderStatus) -> Color {
    match status {
        OrderStatus::Pendiente => Color::Yellow,
        OrderStatus::Confirmado => Color::Blue,
        OrderStatus::Enviado => Color::Magenta,
        OrderStatus::Entregado => Color::Green,
        OrderStatus::Cancelado => Color::Red,
        OrderStatus::Other(_) => Color::White,
    }
}

pub fn order_rows(orders: &[Order]) -> Vec<Vec<Cell>> {
    orders
        .iter()
        .map(|order| {
            let row = OrderRow::from_order(order);
            let user = if row.user_email.is_empty() {
                row.user_name
            } else {
                format!("{} <{}>", row.user_name, row.user_email)
            };
            vec![
                Cell::from(row.short_id),
                Cell::from(user),
                Cell::from(row.date),
                Cell::from(row.items_count),
                Cell::from(row.total),
                Cell::colored(row.status_label, status_color(&row.status)),
                Cell::from(row.payment),
            ]
        })
        .collect()
}

/// "Página N de M (T pedidos)"
pub fn page_footer(pagination: &Pagination) -> String {
    format!(
        "Página {} de {} ({} pedidos)",
        pagination.page,
        pagination.total_pages.max(1),
        pagination.total
    )
}

/// The dashboard cards and summary as text
pub fn render_stats(stats: &DashboardStats) -> String {
    let lines = [
        ("Total Productos", stats.total_productos.to_string()),
        ("Productos Activos", stats.productos_activos.to_string()),
        ("Total Órdenes", stats.total_ordenes.to_string()),
        ("Órdenes Hoy", stats.ordenes_hoy.to_string()),
        ("Ventas Hoy", format_currency(stats.ventas_hoy)),
        ("Ventas del Mes", format_currency(stats.ventas_mes)),
    ];

    let mut out = format!("{}\n", "Resumen del Sistema".bold());
    for (label, value) in lines {
        out.push_str(&format!("  {:<18} {}\n", format!("{label}:"), value.bold()));
    }
    out
}

// ============================================================================
// Outcomes
// ============================================================================

/// Print a completed operation
pub fn success(message: impl AsRef<str>) {
    println!("{} {}", "✓".green().bold(), message.as_ref());
}

/// Print a note that is neither success nor failure
pub fn note(message: impl AsRef<str>) {
    println!("{} {}", "•".cyan(), message.as_ref());
}
