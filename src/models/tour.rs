//! Tour value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Edges;
use crate::distance::DistanceOracle;

/// A closed visiting order over every city of an instance, with its length.
///
/// The city sequence is interpreted as a cycle: the last city connects back
/// to the first. A tour is never mutated once built; heuristics produce a
/// new `Tour` instead.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::{City, Tour};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 0.0),
///     City::new(3.0, 4.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let tour = Tour::from_order(&dm, vec![0, 1, 2]);
/// assert_eq!(tour.length(), 12); // 3 + 4 + 5
/// assert_eq!(tour.get(2), 2);
/// assert!(tour.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
    length: i64,
}

impl Tour {
    /// Wraps a city order with an already known length.
    ///
    /// Ownership of `cities` moves into the tour; the length is trusted.
    pub fn new(cities: Vec<usize>, length: i64) -> Self {
        Self { cities, length }
    }

    /// Builds a tour from a city order, computing its length.
    pub fn from_order<D: DistanceOracle + ?Sized>(distances: &D, cities: Vec<usize>) -> Self {
        let length = tour_length(distances, &cities);
        Self { cities, length }
    }

    /// City at position `i` in the tour.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> usize {
        self.cities[i]
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// An independent copy of the visiting order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.cities.clone()
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }

    /// Total length, including the edge from the last city back to the first.
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Lazy iterator over the tour's edges.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.cities)
    }

    /// Returns `true` if the order visits each of `0..len()` exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.cities.len();
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// Recomputes the length from the given distances, ignoring the stored value.
    pub fn recompute_length<D: DistanceOracle + ?Sized>(&self, distances: &D) -> i64 {
        tour_length(distances, &self.cities)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Length: {}, Tour: {:?}", self.length, self.cities)
    }
}

/// Computes the closed length of a city order:
/// `order[0] → order[1] → ... → order[n-1] → order[0]`.
///
/// An empty or single-city order has length 0.
pub fn tour_length<D: DistanceOracle + ?Sized>(distances: &D, order: &[usize]) -> i64 {
    if order.len() < 2 {
        return 0;
    }
    Edges::new(order)
        .map(|e| distances.distance(e.u, e.v))
        .sum()
}
