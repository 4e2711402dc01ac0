//! Cheapest-insertion tour construction.
//!
//! # Algorithm
//!
//! Start from a cycle holding only the start city. Repeatedly let the
//! [`InsertionPolicy`] pick the next city, then splice it into the edge
//! `(u, v)` of the current cycle minimizing
//!
//! ```text
//! cost = d(u, city) + d(city, v) - d(u, v)
//! ```
//!
//! (first such edge in traversal order on ties) and add `cost` to the tour
//! length. When every city is in, the traversal order becomes the tour.
//!
//! # Complexity
//!
//! O(n²) for every policy: the k-th insertion scans k edges. Nearest and
//! farthest selection add another O(n²) of candidate bookkeeping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cycle::PartialCycle;
use super::distance_based::{self, Extremum};
use super::random_order;
use crate::distance::DistanceOracle;
use crate::error::{Result, TspError};
use crate::models::Tour;
use crate::observer::{NoopObserver, TourObserver};

/// Seed of [`InsertionPolicy::random`].
pub const DEFAULT_RANDOM_SEED: u64 = 0x134D_A73;

/// How the next city to insert is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InsertionPolicy {
    /// Cities in a shuffled order fixed up front by `seed`.
    Random {
        /// Seed for the shuffle.
        #[serde(default = "default_seed")]
        seed: u64,
    },
    /// The outstanding city nearest to the cycle.
    #[default]
    Nearest,
    /// The outstanding city farthest from the cycle.
    Farthest,
}

fn default_seed() -> u64 {
    DEFAULT_RANDOM_SEED
}

impl InsertionPolicy {
    /// Random order with [`DEFAULT_RANDOM_SEED`].
    pub fn random() -> Self {
        InsertionPolicy::Random {
            seed: DEFAULT_RANDOM_SEED,
        }
    }

    /// Short name, e.g. for log output or report columns.
    pub fn name(&self) -> &'static str {
        match self {
            InsertionPolicy::Random { .. } => "random_insertion",
            InsertionPolicy::Nearest => "nearest_insertion",
            InsertionPolicy::Farthest => "farthest_insertion",
        }
    }
}

/// Builds a tour by cheapest insertion, starting from city `start`.
///
/// # Errors
///
/// - [`TspError::StartCityOutOfRange`] if `start >= distances.num_cities()`
/// - [`TspError::NoCandidate`] if a distance-based policy finds no city to
///   insert (only possible when every outstanding city is at the policy's
///   sentinel distance from the cycle)
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::{insertion_tour, InsertionPolicy};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::City;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 0.0),
///     City::new(10.0, 10.0),
///     City::new(0.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let tour = insertion_tour(&dm, 0, InsertionPolicy::Nearest).unwrap();
/// assert_eq!(tour.length(), 40);
/// assert!(tour.is_permutation());
/// ```
pub fn insertion_tour<D>(distances: &D, start: usize, policy: InsertionPolicy) -> Result<Tour>
where
    D: DistanceOracle + ?Sized,
{
    insertion_tour_with_observer(distances, start, policy, &mut NoopObserver)
}

/// Same as [`insertion_tour`], reporting the partial cycle to `observer`
/// after every insertion.
pub fn insertion_tour_with_observer<D>(
    distances: &D,
    start: usize,
    policy: InsertionPolicy,
    observer: &mut dyn TourObserver,
) -> Result<Tour>
where
    D: DistanceOracle + ?Sized,
{
    let n = distances.num_cities();
    if start >= n {
        return Err(TspError::StartCityOutOfRange {
            start,
            num_cities: n,
        });
    }

    debug!(policy = policy.name(), cities = n, start, "constructing tour");

    let mut cycle = PartialCycle::new(start, n);
    match policy {
        InsertionPolicy::Random { seed } => {
            random_order::grow(distances, &mut cycle, start, seed, observer)
        }
        InsertionPolicy::Nearest => {
            distance_based::grow(distances, &mut cycle, start, Extremum::Min, observer)?
        }
        InsertionPolicy::Farthest => {
            distance_based::grow(distances, &mut cycle, start, Extremum::Max, observer)?
        }
    }

    debug_assert_eq!(cycle.len(), n);
    let tour = cycle.into_tour();
    debug!(policy = policy.name(), length = tour.length(), "tour constructed");
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::City;
    use crate::observer::EdgeRecorder;

    const POLICIES: [InsertionPolicy; 3] = [
        InsertionPolicy::Random {
            seed: DEFAULT_RANDOM_SEED,
        },
        InsertionPolicy::Nearest,
        InsertionPolicy::Farthest,
    ];

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(10.0, 0.0),
            City::new(10.0, 10.0),
            City::new(0.0, 10.0),
        ])
    }

    fn scattered() -> DistanceMatrix {
        let cities: Vec<City> = (0..15)
            .map(|i| {
                let t = i as f64;
                City::new((t * 37.0) % 101.0, (t * t * 13.0) % 97.0)
            })
            .collect();
        DistanceMatrix::from_cities(&cities)
    }

    #[test]
    fn test_all_policies_valid_on_scattered() {
        let dm = scattered();
        for policy in POLICIES {
            for start in 0..dm.size() {
                let tour = insertion_tour(&dm, start, policy).expect("valid start");
                assert!(tour.is_permutation(), "{} from {start}", policy.name());
                assert_eq!(tour.length(), tour.recompute_length(&dm));
                assert_eq!(tour.get(0), start);
            }
        }
    }

    #[test]
    fn test_nearest_square_gives_perimeter() {
        let dm = square();
        for start in 0..4 {
            let tour = insertion_tour(&dm, start, InsertionPolicy::Nearest).expect("valid");
            assert_eq!(tour.length(), 40);
        }
    }

    #[test]
    fn test_one_city() {
        let dm = DistanceMatrix::new(1);
        for policy in POLICIES {
            let tour = insertion_tour(&dm, 0, policy).expect("valid");
            assert_eq!(tour.cities(), &[0]);
            assert_eq!(tour.length(), 0);
        }
    }

    #[test]
    fn test_two_cities() {
        let dm = DistanceMatrix::from_data(2, vec![0, 9, 9, 0]).expect("valid");
        for policy in POLICIES {
            let tour = insertion_tour(&dm, 1, policy).expect("valid");
            assert_eq!(tour.cities(), &[1, 0]);
            assert_eq!(tour.length(), 18);
        }
    }

    #[test]
    fn test_start_out_of_range() {
        let dm = square();
        let err = insertion_tour(&dm, 4, InsertionPolicy::Farthest).unwrap_err();
        assert!(matches!(
            err,
            TspError::StartCityOutOfRange {
                start: 4,
                num_cities: 4
            }
        ));
        assert!(insertion_tour(&DistanceMatrix::new(0), 0, InsertionPolicy::Nearest).is_err());
    }

    #[test]
    fn test_observer_sees_every_insertion() {
        let dm = scattered();
        for policy in POLICIES {
            let mut rec = EdgeRecorder::new();
            let tour =
                insertion_tour_with_observer(&dm, 3, policy, &mut rec).expect("valid start");
            assert_eq!(rec.len(), dm.size() - 1);
            for (k, snap) in rec.snapshots().iter().enumerate() {
                assert_eq!(snap.len(), k + 2);
            }
            let last: Vec<usize> = rec.last().expect("updates").iter().map(|e| e.u).collect();
            assert_eq!(last, tour.cities());
        }
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let dm = scattered();
        for policy in POLICIES {
            let silent = insertion_tour(&dm, 5, policy).expect("valid");
            let observed =
                insertion_tour_with_observer(&dm, 5, policy, &mut EdgeRecorder::new())
                    .expect("valid");
            assert_eq!(silent, observed);
        }
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let dm = scattered();
        let policy = InsertionPolicy::Random { seed: 1234 };
        assert_eq!(
            insertion_tour(&dm, 2, policy).expect("valid"),
            insertion_tour(&dm, 2, policy).expect("valid")
        );
    }

    #[test]
    fn test_policy_names_and_default() {
        assert_eq!(InsertionPolicy::default(), InsertionPolicy::Nearest);
        assert_eq!(InsertionPolicy::random().name(), "random_insertion");
        assert_eq!(InsertionPolicy::Farthest.name(), "farthest_insertion");
    }
}
