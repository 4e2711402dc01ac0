//! Error types.

use thiserror::Error;

/// Errors reported by the tour heuristics and configuration loading.
#[derive(Debug, Error)]
pub enum TspError {
    /// The starting city is not a valid index for the instance.
    #[error("start city {start} is out of range for an instance of {num_cities} cities")]
    StartCityOutOfRange {
        /// Requested starting city.
        start: usize,
        /// Number of cities in the instance.
        num_cities: usize,
    },

    /// A distance-based selection found no city to insert next.
    #[error("no candidate city to insert ({remaining} cities still outside the cycle)")]
    NoCandidate {
        /// Cities not yet inserted when selection failed.
        remaining: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
