//! # GoMarketplace Cart CLI
//!
//! Command-line host for the cart: loads configuration, opens the
//! key-value store, mounts the cart provider and runs one command.
//!
//! ## Module Organization
//! ```text
//! cart_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing & run)
//! ├── config.rs       ◄─── CliConfig: defaults, cart.toml, GOMARKET_* env
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── config.rs   ◄─── Effective configuration
//! └── error.rs        ◄─── CliError with machine-readable codes
//! ```
//!
//! ## Output
//! Results are printed to stdout as JSON, errors to stderr as JSON.
//! Logs go to stderr so stdout stays machine-readable.

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use market_cart::{CartProvider, CartStore};
use market_core::ProductDescriptor;
use market_storage::{KeyValueStore, MemoryStore, SqliteStore, StorageConfig};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Backend, CliConfig};
use error::CliError;

// =============================================================================
// Arguments
// =============================================================================

/// GoMarketplace shopping cart.
#[derive(Debug, Parser)]
#[command(name = "gomarket-cart", version, about)]
pub struct Cli {
    /// Path to a cart.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log cart and storage activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the cart
    List,

    /// Add one unit of a product
    Add(AddArgs),

    /// Add one to an item's quantity
    Increment {
        /// Product id
        id: String,
    },

    /// Take one from an item's quantity
    Decrement {
        /// Product id
        id: String,
    },

    /// Remove an item entirely
    Remove {
        /// Product id
        id: String,
    },

    /// Empty the cart
    Clear,

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub image_url: String,

    #[arg(long)]
    pub price: f64,
}

impl From<AddArgs> for ProductDescriptor {
    fn from(args: AddArgs) -> Self {
        ProductDescriptor::new(args.id, args.title, args.image_url, args.price)
    }
}

// =============================================================================
// Run
// =============================================================================

/// Parses arguments, runs the command and reports the outcome.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let body = serde_json::to_string(&e).unwrap_or_else(|_| e.to_string());
            eprintln!("{}", body);
            ExitCode::FAILURE
        }
    }
}

/// Runs a parsed command and returns its JSON output.
pub async fn execute(cli: Cli) -> Result<String, CliError> {
    let config = CliConfig::load(cli.config)?;

    if let Command::Config = cli.command {
        return to_json(&commands::config::get_config(&config));
    }

    let storage = open_storage(&config).await?;
    let store = CartStore::with_options(storage, config.cart_options());

    // Load up front so a corrupt cart under `on_corrupt = "fail"` aborts here.
    store.initialize().await?;

    CartProvider::scope(store, dispatch(cli.command)).await
}

async fn dispatch(command: Command) -> Result<String, CliError> {
    use commands::cart;

    let response = match command {
        Command::List => cart::get_cart().await?,
        Command::Add(args) => cart::add_to_cart(args.into()).await?,
        Command::Increment { id } => cart::increment(id).await?,
        Command::Decrement { id } => cart::decrement(id).await?,
        Command::Remove { id } => cart::remove_from_cart(id).await?,
        Command::Clear => cart::clear_cart().await?,
        Command::Config => return Err(CliError::internal("config is handled before dispatch")),
    };

    to_json(&response)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Opens the configured key-value store.
///
/// ## Backends
/// - `sqlite`: the database file, created with its parent directory
/// - `memory`: a fresh in-process map, empty on every run
pub async fn open_storage(config: &CliConfig) -> Result<Arc<dyn KeyValueStore>, CliError> {
    match config.storage.backend {
        Backend::Memory => {
            debug!("Using in-memory cart storage");
            Ok(Arc::new(MemoryStore::new()))
        }
        Backend::Sqlite => {
            let path = config
                .database_path()
                .ok_or_else(|| CliError::internal("Could not determine app data directory"))?;

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CliError::internal(format!("Could not create {}: {}", parent.display(), e))
                })?;
            }

            info!(?path, "Opening cart database");
            let store = SqliteStore::connect(StorageConfig::new(path)).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=market_cart=trace` - Show trace for the cart crate only
/// - `--verbose` - Default to `info,market_cart=debug,market_storage=debug`
/// - Default: WARN level
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,market_cart=debug,market_storage=debug,cart_cli=debug,sqlx=warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
