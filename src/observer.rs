//! Progress notification for running heuristics.
//!
//! Heuristics call [`TourObserver::update`] synchronously after every
//! accepted change (an insertion during construction, a 2-opt move during
//! improvement), passing the current tour as a lazy edge sequence. The
//! algorithm does not continue until `update` returns.

use crate::models::Edge;

/// Receives the current tour state after each accepted change.
///
/// Any `FnMut(&mut dyn Iterator<Item = Edge>)` closure is an observer.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Edge;
/// use u_tsp::observer::TourObserver;
///
/// let mut updates = 0;
/// let mut observer = |edges: &mut dyn Iterator<Item = Edge>| {
///     updates += 1;
///     assert!(edges.count() > 0);
/// };
/// observer.update(&mut [Edge::new(0, 1), Edge::new(1, 0)].into_iter());
/// assert_eq!(updates, 1);
/// ```
pub trait TourObserver {
    /// Called with the edges of the current tour. The sequence is finite
    /// and may only be traversed once.
    fn update(&mut self, edges: &mut dyn Iterator<Item = Edge>);
}

impl<F> TourObserver for F
where
    F: FnMut(&mut dyn Iterator<Item = Edge>),
{
    fn update(&mut self, edges: &mut dyn Iterator<Item = Edge>) {
        (self)(edges)
    }
}

/// Observer that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TourObserver for NoopObserver {
    fn update(&mut self, _edges: &mut dyn Iterator<Item = Edge>) {}
}

/// Observer that stores every update as a snapshot of edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeRecorder {
    snapshots: Vec<Vec<Edge>>,
}

impl EdgeRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Vec<Edge>] {
        &self.snapshots
    }

    /// Number of updates received.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no update was received.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&[Edge]> {
        self.snapshots.last().map(Vec::as_slice)
    }
}

impl TourObserver for EdgeRecorder {
    fn update(&mut self, edges: &mut dyn Iterator<Item = Edge>) {
        self.snapshots.push(edges.collect());
    }
}
