//! Airport mutation handler.

use anyhow::{Context, Result};
use flightroute_lib::{GraphStore, RouteEditor};

/// Handle the add-airport subcommand.
pub fn handle_add_airport(store: GraphStore, name: &str) -> Result<()> {
    let mut editor = RouteEditor::open(store).context("failed to load the route map")?;
    editor.add_airport(name)?;
    println!("Airport '{}' added.", name.trim());
    Ok(())
}
