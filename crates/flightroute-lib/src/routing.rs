//! Route queries over the airport map.
//!
//! [`plan_route`] is the validation layer in front of the Dijkstra search:
//! it rejects blank or identical endpoints and unknown airports before the
//! search runs, and reports an unreachable destination as `Ok(None)` rather
//! than an error so presentation layers can treat "no route" as an ordinary
//! outcome.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::RouteMap;
use crate::path::shortest_path;

/// Shortest-path query between two airports.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

impl RouteRequest {
    /// Convenience constructor.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub from: String,
    pub to: String,
    /// Airports visited in order, including both endpoints.
    pub steps: Vec<String>,
    /// Total distance along `steps` in kilometres.
    pub total_km: u64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the shortest route for a request.
///
/// `Ok(None)` means both endpoints exist but no chain of routes connects
/// them. Validation failures are reported before the search runs, so a
/// request that errors never reaches the pathfinder.
pub fn plan_route(map: &RouteMap, request: &RouteRequest) -> Result<Option<RoutePlan>> {
    let from = request.from.trim();
    let to = request.to.trim();

    if from.is_empty() || to.is_empty() {
        return Err(Error::EmptyName);
    }
    if from == to {
        return Err(Error::SameEndpoints);
    }
    for endpoint in [from, to] {
        if !map.contains(endpoint) {
            return Err(Error::UnknownAirport {
                name: endpoint.to_string(),
                suggestions: map.suggestions_for(endpoint),
            });
        }
    }

    Ok(shortest_path(map, from, to).map(|found| RoutePlan {
        from: from.to_string(),
        to: to.to_string(),
        steps: found.steps,
        total_km: found.total_km,
    }))
}
