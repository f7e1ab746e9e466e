use clap::{Parser, Subcommand};

#[cfg(not(feature = "dhat-heap"))]
use mimalloc::MiMalloc;

use crate::{route::RouteArgs, route_dataset::RouteDatasetArgs};

mod arrival;
mod config;
mod file_utils;
mod network_parser;
mod parsers;
mod report;
mod route;
mod route_dataset;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[cfg(not(feature = "dhat-heap"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route from the DC node to the WH node of a network file
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Routes every network file of a folder
    RouteDataset {
        #[command(flatten)]
        args: RouteDatasetArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args)?,
        Some(Commands::RouteDataset { args }) => route_dataset::run(args)?,
        None => {
            // Without a subcommand, route the default network file
            route::run(RouteArgs::default())?
        }
    }

    Ok(())
}
