//! Flight route library entry points.
//!
//! This crate owns the airport route map: loading and saving it, applying
//! validated mutations, and answering shortest-path queries. Higher-level
//! consumers (the CLI, or any other front end) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod editor;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod store;

pub use editor::{parse_distance, RouteEditor};
pub use error::{Error, Result};
pub use graph::{InvariantViolation, Km, RouteMap};
pub use output::{RouteLeg, RouteSummary};
pub use path::{shortest_path, PathFound};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use store::{default_store_path, GraphStore};
