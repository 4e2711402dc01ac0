//! Nearest- and farthest-first city selection.
//!
//! Both policies keep, for every city outside the cycle, the smallest
//! distance seen so far from that city to any city inside the cycle. After
//! each insertion the distances are relaxed against the new city and the
//! extremal candidate (minimum for nearest, maximum for farthest) is chosen
//! next, ties going to the first candidate in list order.
//!
//! # Complexity
//!
//! O(n²) for the candidate bookkeeping, on top of the O(n²) placement scan
//! shared with every insertion policy.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem",
//! *SIAM Journal on Computing* 6(3), 563-581.

use tracing::warn;

use super::cycle::PartialCycle;
use crate::distance::DistanceOracle;
use crate::error::{Result, TspError};
use crate::observer::TourObserver;
use crate::splice::{NodeId, SpliceList};

/// Which end of the candidate distances a policy selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extremum {
    /// Nearest outstanding city first.
    Min,
    /// Farthest outstanding city first.
    Max,
}

impl Extremum {
    /// Starting value that any real distance beats.
    pub(crate) fn sentinel(self) -> i64 {
        match self {
            Extremum::Min => i64::MAX,
            Extremum::Max => i64::MIN,
        }
    }

    /// Returns `true` if `candidate` strictly beats `incumbent`.
    pub(crate) fn prefers(self, candidate: i64, incumbent: i64) -> bool {
        match self {
            Extremum::Min => candidate < incumbent,
            Extremum::Max => candidate > incumbent,
        }
    }
}

/// A city outside the cycle and its distance to the nearest cycle city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    city: usize,
    distance: i64,
}

/// Grows `cycle` until every city is inserted, choosing cities by `extremum`.
pub(crate) fn grow<D>(
    distances: &D,
    cycle: &mut PartialCycle,
    start: usize,
    extremum: Extremum,
    observer: &mut dyn TourObserver,
) -> Result<()>
where
    D: DistanceOracle + ?Sized,
{
    let n = distances.num_cities();
    let mut outside = SpliceList::with_capacity(n.saturating_sub(1));

    for city in (0..n).filter(|&city| city != start) {
        outside.add(Candidate {
            city,
            distance: distances.distance(city, start),
        });
    }

    while !outside.is_empty() {
        let Some(selected) = select(&outside, extremum) else {
            return Err(no_candidate(outside.len()));
        };
        let city = outside.value(selected).city;
        cycle.insert_cheapest(distances, city);
        cycle.notify(observer);
        outside.remove(selected);
        relax(distances, &mut outside, city);
    }
    Ok(())
}

/// Lowers each candidate's distance if `inserted` is closer.
fn relax<D>(distances: &D, outside: &mut SpliceList<Candidate>, inserted: usize)
where
    D: DistanceOracle + ?Sized,
{
    let mut cursor = outside.first();
    while let Some(node) = cursor {
        let candidate = outside.value_mut(node);
        let d = distances.distance(inserted, candidate.city);
        if d < candidate.distance {
            candidate.distance = d;
        }
        cursor = outside.next(node);
    }
}

/// The extremal candidate; the first one in list order on ties.
///
/// The scan is seeded with the policy's sentinel, so `None` means every
/// outstanding distance equals it (e.g. all `i64::MAX` when nearest).
fn select(outside: &SpliceList<Candidate>, extremum: Extremum) -> Option<NodeId> {
    let mut best = None;
    let mut best_distance = extremum.sentinel();
    for node in outside.ids() {
        let distance = outside.value(node).distance;
        if extremum.prefers(distance, best_distance) {
            best_distance = distance;
            best = Some(node);
        }
    }
    best
}

fn no_candidate(remaining: usize) -> TspError {
    warn!(remaining, "no candidate city to insert; remaining cities are at i64::MAX from the cycle");
    TspError::NoCandidate { remaining }
}
