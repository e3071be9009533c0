mod calculator;
mod cli;
mod config;
mod context;
mod models;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use context::AppContext;
use models::Language;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // --lang beats the config file
    let lang = match &cli.lang {
        Some(code) => code.parse::<Language>()?,
        None => config.general.language,
    };
    log::debug!("starting with language {}", lang);

    match cli.command {
        Some(Commands::Calc(args)) => {
            handlers::handle_calc(&args, &config, lang)?;
        }
        Some(Commands::Catalog { group, json }) => {
            handlers::handle_catalog(lang, group.as_deref(), json)?;
        }
        Some(Commands::Apply) => {
            handlers::handle_apply(lang)?;
        }
        Some(Commands::Config { init }) => {
            handlers::handle_config(&config, init)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(&config, AppContext::new(lang))?;
        }
    }

    Ok(())
}
