use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{Km, RouteMap};
use crate::store::GraphStore;

/// Editing session over the persisted route map.
///
/// The editor owns the loaded [`RouteMap`] together with its [`GraphStore`]
/// and writes the full document back after every successful mutation. A
/// failed save is surfaced to the caller but the in-memory mutation stands;
/// the next successful save reconciles the two.
#[derive(Debug)]
pub struct RouteEditor {
    store: GraphStore,
    map: RouteMap,
}

impl RouteEditor {
    /// Load the persisted map and start an editing session.
    pub fn open(store: GraphStore) -> Result<Self> {
        let map = store.load()?;
        Ok(Self { store, map })
    }

    /// The current in-memory map.
    pub fn map(&self) -> &RouteMap {
        &self.map
    }

    /// Add a new airport with no routes.
    pub fn add_airport(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.map.contains(name) {
            return Err(Error::DuplicateAirport {
                name: name.to_string(),
            });
        }

        self.map.insert_airport(name);
        self.store.save(&self.map)?;
        info!(airport = name, "airport added");
        Ok(())
    }

    /// Add or overwrite the route between two existing airports.
    ///
    /// `distance` is the raw user token; it must parse as a positive whole
    /// number of kilometres. Both endpoints must already exist; an airport
    /// is never created as a side effect, and never routed to itself.
    pub fn add_route(&mut self, from: &str, to: &str, distance: &str) -> Result<Km> {
        let km = parse_distance(distance)?;
        let from = from.trim();
        let to = to.trim();
        if from.is_empty() || to.is_empty() {
            return Err(Error::EmptyName);
        }
        for endpoint in [from, to] {
            if !self.map.contains(endpoint) {
                return Err(Error::UnknownAirport {
                    name: endpoint.to_string(),
                    suggestions: self.map.suggestions_for(endpoint),
                });
            }
        }
        if from == to {
            return Err(Error::SelfRoute {
                name: from.to_string(),
            });
        }

        self.map.insert_route(from, to, km);
        self.store.save(&self.map)?;
        info!(from, to, km, "route added");
        Ok(km)
    }
}

/// Parse a distance token as a positive whole number of kilometres.
pub fn parse_distance(token: &str) -> Result<Km> {
    match token.trim().parse::<Km>() {
        Ok(km) if km > 0 => Ok(km),
        _ => Err(Error::InvalidDistance {
            token: token.to_string(),
        }),
    }
}
