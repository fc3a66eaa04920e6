use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required airport name was blank after trimming.
    #[error("airport name must not be blank")]
    EmptyName,

    /// Raised when inserting an airport that already exists.
    #[error("airport '{name}' already exists")]
    DuplicateAirport { name: String },

    /// Raised when an airport name could not be found in the route map.
    #[error("unknown airport: {name}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a distance token is not a positive whole number.
    #[error("invalid distance '{token}': expected a positive whole number of kilometres")]
    InvalidDistance { token: String },

    /// Raised when a route would connect an airport to itself.
    #[error("cannot add a route from '{name}' to itself")]
    SelfRoute { name: String },

    /// Raised when a shortest-path query names the same airport twice.
    #[error("source and destination airports must differ")]
    SameEndpoints,

    /// No suitable project directories could be resolved for the route map.
    #[error("failed to resolve project directories for the route map")]
    ProjectDirsUnavailable,

    /// Raised when the persisted route map is unreadable or structurally invalid.
    #[error("route map at {path} is malformed: {message}")]
    MalformedStore { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
