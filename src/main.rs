//! Pedidos Admin
//!
//! Desktop administration console for the Pedidos food-ordering backend.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   🍔 Pedidos Admin v{:<38}║", pedidos_ui::VERSION);
    println!("║   Panel de Administración                                 ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    pedidos_ui::launch()
}
