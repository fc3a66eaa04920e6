use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::RouteMap;

/// Outcome of a successful shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFound {
    /// Airports visited in order, starting at the source.
    pub steps: Vec<String>,
    /// Sum of the route distances along `steps`.
    pub total_km: u64,
}

/// Run Dijkstra's algorithm to find the lowest-distance path between two
/// airports.
///
/// Returns `None` when either endpoint is missing from the map or when no
/// chain of routes connects them; an unreachable goal never yields a partial
/// path. A node's distance is final the moment it is popped from the heap,
/// which holds because route distances are never negative.
pub fn shortest_path(map: &RouteMap, start: &str, goal: &str) -> Option<PathFound> {
    if !map.contains(start) || !map.contains(goal) {
        return None;
    }

    let mut distances: HashMap<&str, u64> = HashMap::new();
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry {
        node: start,
        cost: 0,
    });

    while let Some(entry) = queue.pop() {
        match distances.get(entry.node) {
            Some(&best) if entry.cost > best => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.node == goal {
            return Some(PathFound {
                steps: reconstruct_path(&parents, start, goal),
                total_km: entry.cost,
            });
        }

        for (neighbour, km) in map.neighbours(entry.node) {
            let next_cost = entry.cost + u64::from(km);
            if next_cost < distances.get(neighbour).copied().unwrap_or(u64::MAX) {
                distances.insert(neighbour, next_cost);
                parents.insert(neighbour, Some(entry.node));
                queue.push(QueueEntry {
                    node: neighbour,
                    cost: next_cost,
                });
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<&str, Option<&str>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: u64,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
