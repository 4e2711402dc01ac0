//! Constructive heuristics for building a tour from scratch.
//!
//! - [`insertion_tour`] — Cheapest insertion with a random, nearest-first
//!   or farthest-first [`InsertionPolicy`], O(n²)
//! - [`random_tour`] — Uniformly random permutation, O(n)

mod cycle;
mod distance_based;
mod insertion;
mod random_order;
mod random_tour;

pub use insertion::{
    insertion_tour, insertion_tour_with_observer, InsertionPolicy, DEFAULT_RANDOM_SEED,
};
pub use random_tour::random_tour;
