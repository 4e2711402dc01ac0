//! Partial cycle grown by cheapest insertion.

use tracing::trace;

use crate::distance::DistanceOracle;
use crate::models::{Edge, Tour};
use crate::observer::TourObserver;
use crate::splice::{NodeId, SpliceList};

/// A cycle under construction, plus the length accrued so far.
///
/// Cities are kept in a [`SpliceList`] so that splicing a city into the
/// chosen edge is O(1); only the placement scan is linear.
#[derive(Debug)]
pub(crate) struct PartialCycle {
    cities: SpliceList<usize>,
    length: i64,
}

impl PartialCycle {
    /// Starts a cycle holding only `start`, with room for `capacity` cities.
    pub(crate) fn new(start: usize, capacity: usize) -> Self {
        let mut cities = SpliceList::with_capacity(capacity);
        cities.add(start);
        Self { cities, length: 0 }
    }

    /// Number of cities in the cycle.
    pub(crate) fn len(&self) -> usize {
        self.cities.len()
    }

    /// Inserts `city` into the edge `(u, v)` minimizing
    /// `d(u, city) + d(city, v) - d(u, v)`, and returns that cost.
    ///
    /// Edges are scanned in traversal order, the last one wrapping back to
    /// the head; on ties the first edge wins.
    pub(crate) fn insert_cheapest<D>(&mut self, distances: &D, city: usize) -> i64
    where
        D: DistanceOracle + ?Sized,
    {
        let Some((after, cost)) = self.cheapest_edge(distances, city) else {
            // Only reachable on an empty cycle, which `new` rules out.
            self.cities.add(city);
            return 0;
        };

        self.cities.insert_after(after, city);
        self.length += cost;
        trace!(city, after = *self.cities.value(after), cost, "inserted city");
        cost
    }

    fn cheapest_edge<D>(&self, distances: &D, city: usize) -> Option<(NodeId, i64)>
    where
        D: DistanceOracle + ?Sized,
    {
        let head = *self.cities.value(self.cities.first()?);
        let mut best: Option<(NodeId, i64)> = None;

        for node in self.cities.ids() {
            let u = *self.cities.value(node);
            let v = self
                .cities
                .next(node)
                .map_or(head, |next| *self.cities.value(next));

            let cost = distances.distance(u, city) + distances.distance(city, v)
                - distances.distance(u, v);

            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((node, cost));
            }
        }

        best
    }

    /// Lazy sequence of the cycle's edges, closing back to the head.
    pub(crate) fn edges(&self) -> CycleEdges<'_> {
        CycleEdges {
            cities: &self.cities,
            cursor: self.cities.first(),
        }
    }

    /// Reports the current cycle to `observer`.
    pub(crate) fn notify(&self, observer: &mut dyn TourObserver) {
        observer.update(&mut self.edges());
    }

    /// Materializes the traversal order into a tour.
    pub(crate) fn into_tour(self) -> Tour {
        let order: Vec<usize> = self.cities.iter().copied().collect();
        Tour::new(order, self.length)
    }
}

/// Edges of a [`PartialCycle`] in traversal order.
#[derive(Debug)]
pub(crate) struct CycleEdges<'a> {
    cities: &'a SpliceList<usize>,
    cursor: Option<NodeId>,
}

impl Iterator for CycleEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let node = self.cursor?;
        self.cursor = self.cities.next(node);
        let v = match self.cursor {
            Some(next) => *self.cities.value(next),
            None => *self.cities.value(self.cities.first()?),
        };
        Some(Edge::new(*self.cities.value(node), v))
    }
}
