use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use product_catalog::config::Config;
use product_catalog::demo::demo_products;
use product_catalog::logging::{init_tracing, resolve_log_path};
use product_catalog::ui::runtime;

/// Terminal product catalog: add products with a form, browse and delete
/// them in a list. Nothing is saved when the program exits.
#[derive(Parser, Debug)]
#[command(name = "product-catalog", version)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with a few sample products
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let log_path = resolve_log_path(&config.logging, cli.log_file.as_deref());
    if let Err(err) = init_tracing(&config.logging, &log_path) {
        eprintln!("Warning: logging disabled ({}): {err}", log_path.display());
    }
    tracing::info!(config = %config_path.display(), log = %log_path.display(), "starting");

    let seed = if cli.demo { demo_products() } else { Vec::new() };
    runtime::run(config, seed).context("terminal UI failed")?;
    Ok(())
}
