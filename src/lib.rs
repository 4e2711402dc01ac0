//! # u-tsp
//!
//! Travelling salesman heuristics over a symmetric integer distance oracle:
//! cheapest-insertion construction and best-improvement 2-opt.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour, Edge)
//! - [`distance`] — Distance oracle trait and dense distance matrix
//! - [`splice`] — Arena-backed linked list with O(1) splicing
//! - [`constructive`] — Cheapest insertion (random, nearest, farthest) and random tours
//! - [`local_search`] — 2-opt improvement
//! - [`observer`] — Progress callbacks invoked after every accepted change
//! - [`config`] — TOML-loadable heuristic selection
//! - [`solver`] — Construct-then-improve pipeline
//!
//! All computations are synchronous and single-threaded and hold no global
//! state, so independent instances can be solved in parallel by the caller.

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod observer;
pub mod solver;
pub mod splice;

pub use error::{Result, TspError};
