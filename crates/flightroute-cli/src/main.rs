use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightroute_lib::GraphStore;

mod commands;

use commands::{airport, list, route};

#[derive(Parser, Debug)]
#[command(version, about = "Airport route map utilities")]
struct Cli {
    /// Override the route map file path.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Output format for query results.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

/// Rendering style for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-friendly text.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an airport to the route map.
    AddAirport {
        /// Airport name.
        name: String,
    },
    /// Add or update the route between two existing airports.
    AddRoute {
        /// Source airport name.
        from: String,
        /// Destination airport name.
        to: String,
        /// Distance in kilometres.
        distance: String,
    },
    /// Compute the shortest route between two airports.
    Route {
        /// Starting airport name.
        #[arg(long = "from")]
        from: String,
        /// Destination airport name.
        #[arg(long = "to")]
        to: String,
    },
    /// List airports and their routes.
    List,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = open_store(cli.data_file)?;
    match cli.command {
        Command::AddAirport { name } => airport::handle_add_airport(store, &name),
        Command::AddRoute { from, to, distance } => {
            route::handle_add_route(store, &from, &to, &distance)
        }
        Command::Route { from, to } => route::handle_route(store, &from, &to, cli.format),
        Command::List => list::handle_list(store, cli.format),
    }
}

fn open_store(data_file: Option<PathBuf>) -> Result<GraphStore> {
    match data_file {
        Some(path) => Ok(GraphStore::new(path)),
        None => GraphStore::open_default()
            .context("failed to resolve the default route map location"),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
