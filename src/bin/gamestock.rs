//! gamestock shell binary
//!
//! Runs the interactive inventory menu on stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use gamestock::shell::Session;
use gamestock::{Config, Inventory};
use tracing_subscriber::{fmt, EnvFilter};

/// Video game shop inventory
#[derive(Parser, Debug)]
#[command(name = "gamestock")]
#[command(about = "Console inventory manager for a video game shop")]
#[command(version)]
struct Args {
    /// Inventory data file
    #[arg(short, long, default_value = Config::DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Maximum number of games that can be added
    #[arg(short, long, default_value_t = Config::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Return to the menu right after each report
    #[arg(long)]
    no_pause: bool,
}

fn main() {
    // Logs go to stderr; stdout belongs to the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("gamestock v{}", gamestock::VERSION);
    tracing::info!("Data file: {}", args.file.display());

    let config = Config::builder()
        .data_file(&args.file)
        .capacity(args.capacity)
        .pause_after_report(!args.no_pause)
        .build();

    let inventory = match Inventory::open(config) {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::error!("Failed to open inventory: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(inventory, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
