//! # Pedidos CLI
//!
//! Command-line interface for Pedidos Admin.
//!
//! Runs the same operations as the desktop console against the same
//! services, one command per process. The session file is shared with the
//! console, so logging in here also logs the console in.
//!
//! ## Commands
//!
//! - `login`, `register`, `logout`, `whoami` - Session management
//! - `stats` - Dashboard figures
//! - `products` - List, create, update, delete, toggle and restock products
//! - `orders` - List orders and change their status
//!

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Arguments
// ============================================================================

/// Administration console for the Pedidos backend
#[derive(Parser, Debug)]
#[command(name = "pedidos", author, version, about)]
pub struct Cli {
    /// Configuration file (overrides PEDIDOS_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests and responses
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long, env = "PEDIDOS_EMAIL")]
        email: String,

        #[arg(long, env = "PEDIDOS_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a new account
    Register {
        #[arg(long)]
        nombre: String,

        #[arg(long)]
        email: String,

        #[arg(long, hide_env_values = true)]
        password: String,

        /// Defaults to `--password`
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in operator
    Whoami,

    /// Show the dashboard figures
    Stats,

    /// Manage the product catalog
    #[command(subcommand)]
    Products(ProductCommand),

    /// Inspect and update orders
    #[command(subcommand)]
    Orders(OrderCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// List products
    List {
        #[arg(long)]
        categoria: Option<String>,

        /// Only active (`true`) or inactive (`false`) products
        #[arg(long)]
        activo: Option<bool>,

        #[arg(long)]
        search: Option<String>,
    },

    /// List the categories known to the server
    Categories,

    /// Create a product
    Create(ProductFields),

    /// Update a product; omitted fields keep their current value
    Update {
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Activate or deactivate a product
    Toggle { id: String },

    /// Set the stock of a product
    Stock { id: String, stock: String },
}

/// Product fields, as typed by the operator
#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    #[arg(long)]
    pub nombre: Option<String>,

    #[arg(long)]
    pub descripcion: Option<String>,

    #[arg(long)]
    pub precio: Option<String>,

    #[arg(long)]
    pub stock: Option<String>,

    #[arg(long)]
    pub imagen: Option<String>,

    #[arg(long)]
    pub categoria: Option<String>,

    #[arg(long)]
    pub activo: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// List one page of orders
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size (defaults to the configured size)
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        estado: Option<String>,

        /// `YYYY-MM-DD`
        #[arg(long)]
        desde: Option<String>,

        /// `YYYY-MM-DD`
        #[arg(long)]
        hasta: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Change the status of an order
    Status { id: String, estado: String },
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run one parsed command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = commands::CliContext::load(cli.config.as_deref(), cli.json)?;

    match cli.command {
        Command::Login { email, password } => commands::auth::login(&ctx, email, password).await,
        Command::Register {
            nombre,
            email,
            password,
            confirm_password,
        } => {
            let confirm = confirm_password.unwrap_or_else(|| password.clone());
            commands::auth::register(&ctx, nombre, email, password, confirm).await
        }
        Command::Logout => commands::auth::logout(&ctx),
        Command::Whoami => commands::auth::whoami(&ctx),
        Command::Stats => commands::stats::show(&ctx).await,
        Command::Products(command) => commands::products::run(&ctx, command).await,
        Command::Orders(command) => commands::orders::run(&ctx, command).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_parse_products_update() {
        let cli = Cli::try_parse_from([
            "pedidos", "products", "update", "abc", "--precio", "9.5", "--activo", "false",
        ])
        .unwrap();

        match cli.command {
            Command::Products(ProductCommand::Update { id, fields }) => {
                assert_eq!(id, "abc");
                assert_eq!(fields.precio.as_deref(), Some("9.5"));
                assert_eq!(fields.activo, Some(false));
                assert!(fields.nombre.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_orders_list_defaults() {
        let cli = Cli::try_parse_from(["pedidos", "--json", "orders", "list"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Orders(OrderCommand::List { page, limit, .. }) => {
                assert_eq!(page, 1);
                assert_eq!(limit, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
