//! Tour edges and the lazy edge iterator.

use serde::{Deserialize, Serialize};

/// An edge of a tour, from city `u` to city `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First city.
    pub u: usize,
    /// Second city.
    pub v: usize,
}

impl Edge {
    /// Creates an edge between two cities.
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }
}

/// Lazy iterator over the closed edges of a city order.
///
/// Yields `(order[i], order[(i + 1) % n])` for every position, so the last
/// edge wraps back to the first city. Edges are created on demand; nothing
/// is allocated.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Edge, Edges};
///
/// let edges: Vec<Edge> = Edges::new(&[2, 0, 1]).collect();
/// assert_eq!(edges, vec![Edge::new(2, 0), Edge::new(0, 1), Edge::new(1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    order: &'a [usize],
    index: usize,
}

impl<'a> Edges<'a> {
    /// Creates an edge iterator over the given city order.
    pub fn new(order: &'a [usize]) -> Self {
        Self { order, index: 0 }
    }
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let n = self.order.len();
        if self.index >= n {
            return None;
        }
        let u = self.order[self.index];
        self.index += 1;
        let v = if self.index == n {
            self.order[0]
        } else {
            self.order[self.index]
        };
        Some(Edge::new(u, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_empty() {
        assert_eq!(Edges::new(&[]).count(), 0);
    }

    #[test]
    fn test_edges_single_city_self_loop() {
        let edges: Vec<Edge> = Edges::new(&[4]).collect();
        assert_eq!(edges, vec![Edge::new(4, 4)]);
    }

    #[test]
    fn test_edges_wrap_around() {
        let mut edges = Edges::new(&[0, 1, 2, 3]);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges.next(), Some(Edge::new(0, 1)));
        assert_eq!(edges.len(), 3);
        assert_eq!(edges.last(), Some(Edge::new(3, 0)));
    }
}
