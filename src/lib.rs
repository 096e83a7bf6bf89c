//! emchecklist library root.
//! Exposes the CLI parser, the high-level run() function and the checklist
//! modules (form store, persistence, PDF report, email delivery).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::New { .. } => commands::edit::handle_new(&cli.command, cfg),
        Commands::Set { .. } => commands::edit::handle_set(&cli.command, cfg),
        Commands::Show => commands::show::handle_show(cfg),
        Commands::Status { .. } => commands::show::handle_status(&cli.command, cfg),
        Commands::Save => commands::persist::handle_save(cfg),
        Commands::Load { .. } => commands::persist::handle_load(&cli.command, cfg),
        Commands::List => commands::list::handle(cfg),
        Commands::Locations => commands::locations::handle(),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Send { .. } => commands::send::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
