//! Route mutation and query handlers.

use anyhow::{Context, Result};
use flightroute_lib::{plan_route, GraphStore, RouteEditor, RouteRequest, RouteSummary};

use crate::OutputFormat;

/// Handle the add-route subcommand.
pub fn handle_add_route(store: GraphStore, from: &str, to: &str, distance: &str) -> Result<()> {
    let mut editor = RouteEditor::open(store).context("failed to load the route map")?;
    let km = editor.add_route(from, to, distance)?;
    println!(
        "Route added between {} and {} with distance {} km.",
        from.trim(),
        to.trim(),
        km
    );
    Ok(())
}

/// Handle the route subcommand.
///
/// An unreachable destination is an ordinary outcome, reported on stdout
/// with a zero exit code rather than as an error.
pub fn handle_route(store: GraphStore, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let map = store.load().context("failed to load the route map")?;
    let request = RouteRequest::new(from, to);

    match plan_route(&map, &request)? {
        Some(plan) => {
            let summary = RouteSummary::from_plan(&map, &plan);
            match format {
                OutputFormat::Text => println!("{}", summary.render_plain()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
        None => match format {
            OutputFormat::Text => println!(
                "No available route between {} and {}.",
                from.trim(),
                to.trim()
            ),
            OutputFormat::Json => println!("{}", serde_json::json!({ "route": null })),
        },
    }

    Ok(())
}
