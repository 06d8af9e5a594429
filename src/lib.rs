//! shiftlog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! attendance core (state machine, calculator, geofence) for tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod geo;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::CheckIn { .. } => cli::commands::checkin::handle(&cli.command, cfg),
        Commands::CheckOut { .. } => cli::commands::checkout::handle(&cli.command, cfg),
        Commands::OtStart { .. } | Commands::OtEnd { .. } => {
            cli::commands::ot::handle(&cli.command, cfg)
        }
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }

    dispatch(&cli, &cfg)
}
