//! `stats`

use pedidos_api::client::STATS_FAILED;

use super::{CliContext, fail};
use crate::output;

pub async fn show(ctx: &CliContext) -> anyhow::Result<()> {
    ctx.require_session()?;

    let stats = ctx
        .client
        .load_dashboard_stats()
        .await
        .map_err(|e| fail(e, STATS_FAILED))?;

    if ctx.json {
        return ctx.print_json(&stats);
    }
    print!("{}", output::render_stats(&stats));
    Ok(())
}
