//! Dashboard statistics
//!
//! Everything here is derived client-side from the full product and order
//! lists. Date windows are computed in the operator's time zone.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::types::{Order, Product};

/// Figures shown on the stats panel
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_productos: usize,
    pub productos_activos: usize,
    pub total_ordenes: usize,
    /// Non-cancelled orders created today
    pub ordenes_hoy: usize,
    pub ventas_hoy: f64,
    pub ventas_mes: f64,
}

impl DashboardStats {
    /// Compute the figures relative to `now`
    ///
    /// "Today" is `[local midnight, next local midnight)` and "this month" is
    /// everything from the first of the month at local midnight. Both exclude
    /// cancelled orders and orders without a parseable creation date.
    pub fn compute<Tz: TimeZone>(products: &[Product], orders: &[Order], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let day_start = local_midnight(&tz, today);
        let day_end = today.succ_opt().map(|tomorrow| local_midnight(&tz, tomorrow));
        let month_start = today
            .with_day(1)
            .map(|first| local_midnight(&tz, first))
            .unwrap_or(day_start);

        let counted: Vec<(&Order, DateTime<Utc>)> = orders
            .iter()
            .filter(|order| !order.estado.is_cancelled())
            .filter_map(|order| order.created_at.map(|at| (order, at)))
            .collect();

        let (ordenes_hoy, ventas_hoy) = counted
            .iter()
            .filter(|(_, at)| *at >= day_start && day_end.is_none_or(|end| *at < end))
            .fold((0, 0.0), |(count, sum), (order, _)| {
                (count + 1, sum + order.total_or_zero())
            });

        let ventas_mes: f64 = counted
            .iter()
            .filter(|(_, at)| *at >= month_start)
            .map(|(order, _)| order.total_or_zero())
            .sum();

        Self {
            total_productos: products.len(),
            productos_activos: products.iter().filter(|p| p.activo).count(),
            total_ordenes: orders.len(),
            ordenes_hoy,
            ventas_hoy,
            ventas_mes,
        }
    }

    /// Compute the figures for the current moment in the system time zone
    pub fn compute_now(products: &[Product], orders: &[Order]) -> Self {
        Self::compute(products, orders, &Local::now())
    }
}

/// Midnight of `date` in `tz`, as a UTC instant
///
/// Where a DST transition skips midnight the date's UTC midnight is used.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

// ============================================================================
// Tests
// ============================================================================
