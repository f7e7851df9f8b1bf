use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod console;

use commands::{
    AuthCommand, CategoryCommand, ConfigCommand, DashboardCommand, ExportCommand, ItemCommand,
    MenuCommand, Reported, RestaurantCommand,
};
use config::{Config, DEFAULT_LOG_FILTER};
use console::ConsoleNotifier;
use menuboard_core::{ApiClient, MenuBoard, SessionStore};

#[derive(Parser)]
#[command(name = "menuboard")]
#[command(version)]
#[command(about = "Manage restaurant menus from the terminal", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage restaurants
    Restaurant(RestaurantCommand),

    /// Manage menu categories
    Category(CategoryCommand),

    /// Manage menu items
    Item(ItemCommand),

    /// Owner dashboard for the selected restaurant
    Dashboard(DashboardCommand),

    /// Public menu of one restaurant
    Menu(MenuCommand),

    /// Download a restaurant's menu as PDF or QR code
    Export(ExportCommand),

    /// Manage the session token
    Auth(AuthCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Reported failures were already printed as a notice.
        if !e.is::<Reported>() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    init_tracing(&config);

    let session = SessionStore::new(config.session_path.value.clone());
    let client = ApiClient::new(config.api_url.value.clone(), Arc::new(session.clone()));
    let board = MenuBoard::new(client, Arc::new(ConsoleNotifier));

    match cli.command {
        Some(Commands::Restaurant(cmd)) => cmd.run(&board).await?,
        Some(Commands::Category(cmd)) => cmd.run(&board).await?,
        Some(Commands::Item(cmd)) => cmd.run(&board).await?,
        Some(Commands::Dashboard(cmd)) => cmd.run(&board).await?,
        Some(Commands::Menu(cmd)) => cmd.run(&board).await?,
        Some(Commands::Export(cmd)) => cmd.run(&board).await?,
        Some(Commands::Auth(cmd)) => cmd.run(&session, &config)?,
        Some(Commands::Config(cmd)) => cmd.run(&config, cli.config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter.value)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
