use anyhow::Result;
use clap::{Parser, Subcommand};
use sen3_stac::stac::CreateItemOptions;
use sen3_stac::{ephemeral, stac};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sen3-stac")]
#[command(about = "Convert Sentinel-3 SAFE archives to STAC Items and Collections")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one .SEN3 archive to a STAC Item
    CreateItem {
        /// Path to the .SEN3 archive
        source: PathBuf,

        /// Directory the Item JSON is written into
        destination: PathBuf,

        /// Do not open NetCDF measurement files for resolution metadata
        #[arg(long)]
        skip_nc: bool,
    },
    /// Write the Sentinel-3 Collection JSON
    CreateCollection {
        /// Directory the Collection JSON is written into
        destination: PathBuf,
    },
    /// Template collection and item, for demonstration purposes
    Ephemeral {
        #[command(subcommand)]
        command: EphemeralCommands,
    },
}

#[derive(Subcommand)]
enum EphemeralCommands {
    /// Write the template Collection JSON
    CreateCollection {
        /// Directory the Collection JSON is written into
        destination: PathBuf,
    },
    /// Write the template Item JSON pointing at an asset
    CreateItem {
        /// HREF of the asset the Item references
        source: String,

        /// Directory the Item JSON is written into
        destination: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Commands::CreateItem {
            source,
            destination,
            skip_nc,
        } => {
            let options = CreateItemOptions {
                skip_resolution: skip_nc,
                read_href_modifier: None,
            };
            let item = stac::create_item_with(&source, &options)?;
            let path = output_path(&destination, &item.id)?;
            item.write(&path)?;
            info!("Wrote {}", path.display());
        }
        Commands::CreateCollection { destination } => {
            let collection = stac::create_collection();
            let path = output_path(&destination, &collection.id)?;
            collection.write(&path)?;
            info!("Wrote {}", path.display());
        }
        Commands::Ephemeral { command } => match command {
            EphemeralCommands::CreateCollection { destination } => {
                let collection = ephemeral::create_collection();
                let path = output_path(&destination, &collection.id)?;
                collection.write(&path)?;
                info!("Wrote {}", path.display());
            }
            EphemeralCommands::CreateItem {
                source,
                destination,
            } => {
                let item = ephemeral::create_item(&source);
                let path = output_path(&destination, &item.id)?;
                item.write(&path)?;
                info!("Wrote {}", path.display());
            }
        },
    }
    Ok(())
}

fn output_path(destination: &Path, id: &str) -> Result<PathBuf> {
    fs::create_dir_all(destination)?;
    Ok(destination.join(format!("{id}.json")))
}
