//! `orders` subcommands

use anyhow::bail;
use chrono::NaiveDate;
use pedidos_api::OrderController;
use pedidos_api::client::UPDATE_STATUS_FAILED;
use pedidos_core::display::NO_ORDERS;
use pedidos_core::filters::parse_date_input;
use pedidos_core::{Order, OrderFilters, OrderStatus};

use super::{CliContext, fail};
use crate::OrderCommand;
use crate::output::{self, ORDER_HEADERS};

const LOAD_ORDERS_FAILED: &str = "Error al cargar pedidos";

pub async fn run(ctx: &CliContext, command: OrderCommand) -> anyhow::Result<()> {
    ctx.require_session()?;

    match command {
        OrderCommand::List {
            page,
            limit,
            estado,
            desde,
            hasta,
            search,
        } => {
            let filters = OrderFilters {
                estado: estado.map(OrderStatus::from),
                fecha_desde: date_arg("--desde", desde.as_deref())?,
                fecha_hasta: date_arg("--hasta", hasta.as_deref())?,
                search: search.unwrap_or_default(),
            };
            let page_size = limit.unwrap_or(ctx.config.orders_page_size);
            let controller = OrderController::new(ctx.client.clone(), page_size);
            controller
                .load_page(filters, page)
                .await
                .map_err(|e| fail(e, LOAD_ORDERS_FAILED))?;

            let state = controller.snapshot();
            if ctx.json {
                return ctx.print_json(&state.items);
            }
            print_orders(&state.items);
            output::note(output::page_footer(&state.pagination));
            Ok(())
        }

        OrderCommand::Status { id, estado } => {
            let estado = OrderStatus::from(estado.trim());
            if !OrderStatus::ALL.contains(&estado) {
                bail!(
                    "Estado desconocido '{}'. Usa uno de: {}",
                    estado,
                    known_statuses()
                );
            }
            let controller = OrderController::new(ctx.client.clone(), ctx.config.orders_page_size);
            controller
                .update_status(&id, &estado)
                .await
                .map_err(|e| fail(e, UPDATE_STATUS_FAILED))?;
            output::success(format!("Pedido {} marcado como {}", id, estado.label()));
            Ok(())
        }
    }
}

fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("{NO_ORDERS}");
        return;
    }
    print!(
        "{}",
        output::render_table(&ORDER_HEADERS, &output::order_rows(orders))
    );
}

/// Parse an optional `YYYY-MM-DD` flag, rejecting anything else
fn date_arg(flag: &str, value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match parse_date_input(value) {
        Some(date) => Ok(Some(date)),
        None => bail!("{flag} espera una fecha YYYY-MM-DD, no '{value}'"),
    }
}

fn known_statuses() -> String {
    OrderStatus::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_arg() {
        assert_eq!(date_arg("--desde", None).unwrap(), None);
        assert_eq!(date_arg("--desde", Some("")).unwrap(), None);
        assert_eq!(
            date_arg("--desde", Some("2024-05-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert!(date_arg("--hasta", Some("01/05/2024")).is_err());
    }

    #[test]
    fn test_known_statuses() {
        assert_eq!(
            known_statuses(),
            "pendiente, confirmado, enviado, entregado, cancelado"
        );
    }
}
