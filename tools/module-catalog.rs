//! Inspect the cytopipe module catalog from a shell.
//!
//! Lists registered modules and data tools, resolves (possibly legacy)
//! module names, and reports scan faults.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cytopipe_modules::{CatalogConfig, ModuleCatalog};

#[derive(Parser)]
#[command(name = "module-catalog", about = "Inspect the cytopipe module catalog")]
struct Cli {
    /// Catalog configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plugin directory; overrides the config file and environment.
    #[arg(long)]
    plugin_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all registered module names.
    List,
    /// List data-tool-capable modules.
    DataTools,
    /// Resolve a (possibly legacy) module name.
    Resolve { name: String },
    /// Show the last scan's fault ledger.
    Faults,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CatalogConfig::default(),
    }
    .or_env();
    if cli.plugin_dir.is_some() {
        config.plugin_dir = cli.plugin_dir.clone();
    }

    let catalog = ModuleCatalog::new(&config);
    catalog.scan();
    let snapshot = catalog.snapshot();

    match cli.command {
        Command::List => {
            for name in snapshot.registry.all_names() {
                println!("{name}");
            }
        }
        Command::DataTools => {
            for name in snapshot.registry.data_tool_names() {
                println!("{name}");
            }
        }
        Command::Resolve { name } => match catalog.resolve(&name) {
            Ok(resolved) => {
                print!("{}", resolved.name());
                match resolved.revision {
                    Some(revision) => println!(" (revision {revision})"),
                    None => println!(),
                }
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Command::Faults => {
            if snapshot.report.is_clean() {
                println!("scan was clean");
            } else {
                for collision in &snapshot.report.collisions {
                    println!(
                        "collision: {} (old {}, new {})",
                        collision.name, collision.previous_origin, collision.new_origin
                    );
                }
                for fault in &snapshot.report.faults {
                    println!("fault: {}: {}", fault.identifier, fault.error);
                }
            }
        }
    }

    Ok(())
}
