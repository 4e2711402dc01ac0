//! Domain model types for travelling salesman problems.
//!
//! Provides city coordinates, tours as closed visiting orders with their
//! length, and the edges that make up a tour.

mod city;
mod edge;
mod tour;

pub use city::City;
pub use edge::{Edge, Edges};
pub use tour::{tour_length, Tour};
