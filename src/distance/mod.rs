//! Distances between cities.
//!
//! Provides the [`DistanceOracle`] trait consumed by every heuristic and a
//! dense [`DistanceMatrix`] implementation.

mod matrix;
mod oracle;

pub use matrix::DistanceMatrix;
pub use oracle::DistanceOracle;
