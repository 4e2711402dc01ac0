//! Best-improvement 2-opt.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent edges `(t[i], t[i+1])` and `(t[j], t[j+1])`
//! of the closed tour (`j + 1` wrapping to 0), compute the gain from
//! reconnecting them the other way:
//!
//! ```text
//! gain = d(t[i], t[i+1]) + d(t[j], t[j+1]) - d(t[i], t[j]) - d(t[i+1], t[j+1])
//! ```
//!
//! A pass scans every pair and keeps the single largest positive gain. If
//! there is one, the segment `[i+1..=j]` is reversed and the pass repeats;
//! otherwise the tour is 2-optimal and the search stops (best-improvement
//! strategy).
//!
//! # Complexity
//!
//! O(n²) per pass, O(q·n²) overall where q is the number of accepted moves.
//! Each move strictly shortens an integer length, so the search terminates.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::{debug, trace};

use crate::distance::DistanceOracle;
use crate::models::{Edges, Tour};
use crate::observer::{NoopObserver, TourObserver};

/// Improves a tour with best-improvement 2-opt until no move shortens it.
///
/// The input tour is left untouched; the result is never longer. The input
/// must be a permutation of the instance's cities, which is not checked.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
/// use u_tsp::models::{City, Tour};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 0.0),
///     City::new(10.0, 10.0),
///     City::new(0.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// // Both diagonals: 14 + 10 + 14 + 10
/// let crossing = Tour::from_order(&dm, vec![0, 2, 1, 3]);
/// assert_eq!(crossing.length(), 48);
///
/// let improved = two_opt_improve(&dm, &crossing);
/// assert_eq!(improved.length(), 40);
/// assert_eq!(improved.cities(), &[0, 1, 2, 3]);
/// ```
pub fn two_opt_improve<D>(distances: &D, tour: &Tour) -> Tour
where
    D: DistanceOracle + ?Sized,
{
    two_opt_improve_with_observer(distances, tour, &mut NoopObserver)
}

/// Same as [`two_opt_improve`], reporting the tour to `observer` after
/// every accepted move.
pub fn two_opt_improve_with_observer<D>(
    distances: &D,
    tour: &Tour,
    observer: &mut dyn TourObserver,
) -> Tour
where
    D: DistanceOracle + ?Sized,
{
    let mut current = tour.to_vec();
    let mut length = tour.length();
    let mut moves = 0usize;

    debug!(cities = current.len(), length, "starting 2-opt");

    while let Some((i, j, gain)) = best_move(&current, distances) {
        current[i + 1..=j].reverse();
        length -= gain;
        moves += 1;
        trace!(i, j, gain, length, "applied 2-opt move");
        observer.update(&mut Edges::new(&current));
    }

    debug!(moves, length, gain = tour.length() - length, "2-opt converged");
    Tour::new(current, length)
}

/// Scans every pair of non-adjacent edges and returns `(i, j, gain)` for
/// the largest strictly positive gain, the first one found on ties.
fn best_move<D>(tour: &[usize], distances: &D) -> Option<(usize, usize, i64)>
where
    D: DistanceOracle + ?Sized,
{
    let n = tour.len();
    let mut best: Option<(usize, usize, i64)> = None;
    let mut best_gain = 0;

    for i in 0..n.saturating_sub(2) {
        let a = tour[i];
        let b = tour[i + 1];
        let ab = distances.distance(a, b);

        for j in i + 2..n {
            let c = tour[j];
            let d = tour[if j + 1 == n { 0 } else { j + 1 }];

            let gain = ab + distances.distance(c, d)
                - distances.distance(a, c)
                - distances.distance(b, d);

            if gain > best_gain {
                best_gain = gain;
                best = Some((i, j, gain));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{City, Edge};
    use crate::observer::EdgeRecorder;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(10.0, 0.0),
            City::new(10.0, 10.0),
            City::new(0.0, 10.0),
        ])
    }

    fn circle(n: usize) -> DistanceMatrix {
        let cities: Vec<City> = (0..n)
            .map(|k| {
                let theta = k as f64 * std::f64::consts::TAU / n as f64;
                City::new(1000.0 * theta.cos(), 1000.0 * theta.sin())
            })
            .collect();
        DistanceMatrix::from_cities(&cities)
    }

    #[test]
    fn test_2opt_uncrosses_square() {
        let dm = square();
        let crossing = Tour::from_order(&dm, vec![0, 2, 1, 3]);
        let improved = two_opt_improve(&dm, &crossing);
        assert_eq!(improved.cities(), &[0, 1, 2, 3]);
        assert_eq!(improved.length(), 40);
        // Input untouched.
        assert_eq!(crossing.cities(), &[0, 2, 1, 3]);
        assert_eq!(crossing.length(), 48);
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = square();
        let tour = Tour::from_order(&dm, vec![0, 1, 2, 3]);
        let mut rec = EdgeRecorder::new();
        let improved = two_opt_improve_with_observer(&dm, &tour, &mut rec);
        assert_eq!(improved, tour);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_best_move_picks_largest_gain() {
        let dm = square();
        // Only (0, 2) improves: 14 + 14 - 10 - 10 = 8.
        assert_eq!(best_move(&[0, 2, 1, 3], &dm), Some((0, 2, 8)));
        assert_eq!(best_move(&[0, 1, 2, 3], &dm), None);
    }

    /// Six cities, all 10 apart except four shortcut chords. On the tour
    /// 0..6 the improving pairs are, in scan order, (0,2) +2, (0,3) +3,
    /// (1,3) +1, (1,4) +3, (1,5) +1 and (2,5) +6.
    fn chords() -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(6);
        for a in 0..6 {
            for b in a + 1..6 {
                dm.set_symmetric(a, b, 10);
            }
        }
        dm.set_symmetric(0, 2, 9);
        dm.set_symmetric(1, 3, 9);
        dm.set_symmetric(2, 5, 7);
        dm.set_symmetric(0, 3, 7);
        dm
    }

    #[test]
    fn test_best_move_skips_earlier_smaller_gain() {
        let dm = chords();
        let order = [0, 1, 2, 3, 4, 5];
        assert_eq!(best_move(&order, &dm), Some((2, 5, 6)));

        let tour = Tour::from_order(&dm, order.to_vec());
        assert_eq!(tour.length(), 60);
        let mut rec = EdgeRecorder::new();
        let improved = two_opt_improve_with_observer(&dm, &tour, &mut rec);

        let first: Vec<Edge> = Edges::new(&[0, 1, 2, 5, 4, 3]).collect();
        assert_eq!(rec.snapshots()[0], first);
        let first_len: i64 = first.iter().map(|e| dm.get(e.u, e.v)).sum();
        assert_eq!(first_len, 54);
        assert!(improved.length() <= 54);
    }

    #[test]
    fn test_2opt_small_tours() {
        let dm = square();
        for order in [vec![], vec![2], vec![1, 3], vec![0, 2, 3]] {
            let tour = Tour::from_order(&dm, order.clone());
            let improved = two_opt_improve(&dm, &tour);
            assert_eq!(improved.cities(), order.as_slice());
            assert_eq!(improved.length(), tour.length());
        }
    }

    #[test]
    fn test_2opt_circle_reaches_convex_order() {
        let n = 12;
        let dm = circle(n);
        // Interleave even and odd positions: many crossings.
        let order: Vec<usize> = (0..n).step_by(2).chain((1..n).step_by(2)).collect();
        let tour = Tour::from_order(&dm, order);
        let convex = Tour::from_order(&dm, (0..n).collect());

        let improved = two_opt_improve(&dm, &tour);
        assert!(improved.is_permutation());
        assert_eq!(improved.length(), improved.recompute_length(&dm));
        assert_eq!(improved.length(), convex.length());
    }

    #[test]
    fn test_2opt_observer_tracks_each_move() {
        let n = 10;
        let dm = circle(n);
        // 9, 6, 3, 0 then the rest in order; chord 2-4 crosses 6-3.
        let order: Vec<usize> = (0..n)
            .rev()
            .step_by(3)
            .chain((0..n).filter(|c| (n - 1 - c) % 3 != 0))
            .collect();
        let tour = Tour::from_order(&dm, order);

        let mut rec = EdgeRecorder::new();
        let improved = two_opt_improve_with_observer(&dm, &tour, &mut rec);
        assert!(!rec.is_empty());

        let mut previous = tour.length();
        for snap in rec.snapshots() {
            let len: i64 = snap.iter().map(|e| dm.get(e.u, e.v)).sum();
            assert!(len < previous);
            previous = len;
        }
        assert_eq!(previous, improved.length());
    }

    #[test]
    fn test_2opt_fixed_point() {
        let n = 12;
        let dm = circle(n);
        let order: Vec<usize> = (0..n).map(|k| (k * 5) % n).collect();
        let once = two_opt_improve(&dm, &Tour::from_order(&dm, order));
        let twice = two_opt_improve(&dm, &once);
        assert_eq!(once, twice);
    }
}
