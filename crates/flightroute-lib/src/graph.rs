use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distance between two airports in kilometres.
pub type Km = u32;

/// Names scoring at least this much Jaro-Winkler similarity qualify as
/// "did you mean" suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.72;

/// Number of suggestions attached to unknown-airport errors.
const SUGGESTION_LIMIT: usize = 3;

/// Structural invariant violation found in a route map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A neighbour entry points at an airport that is not a key in the map.
    #[error("route {from} -> {to} references an unknown airport")]
    DanglingNeighbour { from: String, to: String },

    /// The two directions of a route disagree on distance, or one is missing.
    #[error("route {from} -> {to} is asymmetric")]
    AsymmetricEdge { from: String, to: String },

    /// An airport links back to itself.
    #[error("airport '{name}' has a route to itself")]
    SelfLoop { name: String },
}

/// In-memory representation of the airport route graph.
///
/// Airports are keyed by name; each maps to its neighbours and the distance
/// of the connecting route. Both directions of every route are stored with
/// equal weights. Ordered maps keep neighbour iteration and the persisted
/// document deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteMap {
    airports: BTreeMap<String, BTreeMap<String, Km>>,
}

impl RouteMap {
    /// Number of airports in the map.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// `true` when no airports have been added yet.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Whether an airport with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.airports.contains_key(name)
    }

    /// Iterate over airport names in lexicographic order.
    pub fn airports(&self) -> impl Iterator<Item = &str> {
        self.airports.keys().map(String::as_str)
    }

    /// Iterate over the neighbours of an airport and their distances.
    ///
    /// Unknown airports yield an empty iterator.
    pub fn neighbours<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, Km)> + 'a {
        self.airports
            .get(name)
            .into_iter()
            .flatten()
            .map(|(neighbour, km)| (neighbour.as_str(), *km))
    }

    /// Distance of the direct route between two airports, if one exists.
    pub fn distance(&self, from: &str, to: &str) -> Option<Km> {
        self.airports.get(from).and_then(|n| n.get(to)).copied()
    }

    /// Insert an airport with no routes.
    ///
    /// Callers validate the name first; inserting an existing airport leaves
    /// its routes untouched.
    pub fn insert_airport(&mut self, name: impl Into<String>) {
        self.airports.entry(name.into()).or_default();
    }

    /// Insert or overwrite the symmetric route between two airports.
    ///
    /// Both endpoints must already be present; the editor enforces this.
    pub fn insert_route(&mut self, a: &str, b: &str, km: Km) {
        debug_assert!(self.contains(a) && self.contains(b), "endpoints must exist");
        self.airports
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), km);
        self.airports
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), km);
    }

    /// Iterate over undirected routes, yielding each pair exactly once.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, Km)> {
        self.airports.iter().flat_map(|(from, neighbours)| {
            neighbours
                .iter()
                .filter(move |(to, _)| from.as_str() < to.as_str())
                .map(move |(to, km)| (from.as_str(), to.as_str(), *km))
        })
    }

    /// Number of undirected routes in the map.
    pub fn route_count(&self) -> usize {
        self.routes().count()
    }

    /// Check the structural invariants of the map.
    ///
    /// Every neighbour must resolve to an existing airport, no airport may
    /// link to itself, and both directions of a route must carry the same
    /// distance.
    pub fn validate(&self) -> std::result::Result<(), InvariantViolation> {
        for (from, neighbours) in &self.airports {
            for (to, km) in neighbours {
                if from == to {
                    return Err(InvariantViolation::SelfLoop { name: from.clone() });
                }
                if !self.contains(to) {
                    return Err(InvariantViolation::DanglingNeighbour {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
                if self.distance(to, from) != Some(*km) {
                    return Err(InvariantViolation::AsymmetricEdge {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Rank airports by name similarity for error suggestions.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored.truncate(limit);
        scored.into_iter().map(|(_, name)| name.to_string()).collect()
    }

    /// Suggestion list for error messages, capped at a small fixed number.
    pub fn suggestions_for(&self, name: &str) -> Vec<String> {
        self.fuzzy_matches(name, SUGGESTION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_route_sets_both_directions() {
        let mut map = RouteMap::default();
        map.insert_airport("Oslo");
        map.insert_airport("Riga");
        map.insert_route("Oslo", "Riga", 840);

        assert_eq!(map.distance("Oslo", "Riga"), Some(840));
        assert_eq!(map.distance("Riga", "Oslo"), Some(840));
    }

    #[test]
    fn routes_yields_each_pair_once() {
        let mut map = RouteMap::default();
        map.insert_airport("Oslo");
        map.insert_airport("Riga");
        map.insert_airport("Vilnius");
        map.insert_route("Oslo", "Riga", 840);
        map.insert_route("Riga", "Vilnius", 260);

        let routes: Vec<_> = map.routes().collect();
        assert_eq!(
            routes,
            vec![("Oslo", "Riga", 840), ("Riga", "Vilnius", 260)]
        );
        assert_eq!(map.route_count(), 2);
    }

    #[test]
    fn validate_accepts_symmetric_map() {
        let mut map = RouteMap::default();
        map.insert_airport("Oslo");
        map.insert_airport("Riga");
        map.insert_route("Oslo", "Riga", 840);

        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn fuzzy_matches_ranks_near_misses() {
        let mut map = RouteMap::default();
        map.insert_airport("Heathrow");
        map.insert_airport("Gatwick");

        let matches = map.fuzzy_matches("Hethrow", 3);
        assert_eq!(matches.first().map(String::as_str), Some("Heathrow"));
    }

    #[test]
    fn fuzzy_matches_respects_limit() {
        let mut map = RouteMap::default();
        map.insert_airport("Oslo");
        map.insert_airport("Osla");
        map.insert_airport("Oslu");

        assert!(map.fuzzy_matches("Oslo", 2).len() <= 2);
    }
}
