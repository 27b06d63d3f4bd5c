use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::process;

use bank_management_cli::account::AccountStore;
use bank_management_cli::cli::{self, Console};
use bank_management_cli::config;

/// Bank Management System - a terminal bank account manager backed by a flat file
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Sets the configuration file
    #[clap(short, long, value_name = "FILE", default_value = "config.toml")]
    config: String,

    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger, RUST_LOG takes precedence over the verbosity flag
    let default_filter = match cli.debug {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Starting Bank Management System");

    if let Err(err) = config::load_config(&cli.config) {
        error!("Failed to load configuration: {:#}", err);
        process::exit(1);
    }
    let config = config::get_config();
    info!("Configuration loaded from {}", cli.config);

    let mut store = match AccountStore::open(&config) {
        Ok(store) => store,
        Err(err) => {
            error!("Failed to open account file {}: {}", config.storage.path, err);
            process::exit(1);
        }
    };

    let mut console = Console::stdio();
    if let Err(err) = cli::run_menu(&mut store, &mut console, &config.app_name) {
        error!("Terminal error: {:#}", err);
    }
}
