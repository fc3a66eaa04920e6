//! Structured route summaries for presentation layers.
//!
//! The core never renders anything itself; consumers receive a
//! [`RouteSummary`] and decide how to display it. The summary is the stable
//! shape presentation code can serialise (it derives `Serialize`) or turn
//! into text with [`RouteSummary::render_plain`].

use std::fmt::Write;

use serde::Serialize;

use crate::graph::{Km, RouteMap};
use crate::routing::RoutePlan;

/// Single leg of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteLeg {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub km: Km,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub from: String,
    pub to: String,
    pub hops: usize,
    pub total_km: u64,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-leg distances
    /// resolved from the map the plan was computed against.
    pub fn from_plan(map: &RouteMap, plan: &RoutePlan) -> Self {
        let legs = plan
            .steps
            .windows(2)
            .enumerate()
            .map(|(index, pair)| RouteLeg {
                index,
                from: pair[0].clone(),
                to: pair[1].clone(),
                km: map.distance(&pair[0], &pair[1]).unwrap_or_default(),
            })
            .collect();

        Self {
            from: plan.from.clone(),
            to: plan.to.clone(),
            hops: plan.hop_count(),
            total_km: plan.total_km,
            legs,
        }
    }

    /// The route as a single `A -> B -> C` line.
    pub fn path_line(&self) -> String {
        let mut names: Vec<&str> = Vec::with_capacity(self.legs.len() + 1);
        names.push(self.from.as_str());
        for leg in &self.legs {
            names.push(leg.to.as_str());
        }
        names.join(" -> ")
    }

    /// Human-friendly rendering of the route.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Shortest path: {}", self.path_line());
        let _ = write!(out, "Distance: {} km", self.total_km);
        out
    }
}
