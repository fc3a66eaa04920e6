//! Route map listing handler.

use anyhow::{Context, Result};
use flightroute_lib::GraphStore;

use crate::OutputFormat;

/// Handle the list subcommand.
pub fn handle_list(store: GraphStore, format: OutputFormat) -> Result<()> {
    let map = store.load().context("failed to load the route map")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        OutputFormat::Text => {
            if map.is_empty() {
                println!("No airports have been added yet.");
                return Ok(());
            }

            println!("Airports ({}):", map.len());
            for airport in map.airports() {
                println!("- {airport}");
            }

            let routes: Vec<_> = map.routes().collect();
            if routes.is_empty() {
                println!("No routes have been added yet.");
            } else {
                println!("Routes ({}):", routes.len());
                for (from, to, km) in routes {
                    println!("- {from} <-> {to} ({km} km)");
                }
            }
        }
    }

    Ok(())
}
