//! rafflepick library root.
//! Exposes the raffle core, environment resolution, the local run store,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod environment;
pub mod errors;
pub mod export;
pub mod models;
pub mod raffle;
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
        Commands::Draw { .. } => cli::commands::draw::handle(&cli.command, cfg),
        Commands::Runs { .. } => cli::commands::runs::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Env { .. } => cli::commands::env::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db wins over the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
