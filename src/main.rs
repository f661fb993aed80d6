// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

mod app;
mod walkthrough;

use app::{Args, Command};
use clap::Parser;
use color_eyre::eyre::Result;
use std::io::Write;
use stockroom::{init_logging, load_config, ItemManager, LogConfig};
use tracing::info;

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments and config first, so both can shape logging
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let mut log_config = LogConfig::from(&config.logging);
    args.apply_log_overrides(&mut log_config);
    init_logging(log_config)?;

    let manager = ItemManager::with_rules(config.validation);
    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Walkthrough => {
            info!("Running catalog walkthrough");
            walkthrough::run(&manager, &mut out)?;
        }
        Command::Sku { name, category } => {
            writeln!(out, "{}", manager.creator().sku_for(&name, &category))?;
        }
        Command::Check {
            name,
            category,
            quantity,
        } => {
            let item = manager.creator().create(&name, &category, quantity)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?;
        }
    }
    Ok(())
}
