//! Construct-then-improve pipeline for one start city.

use tracing::info;

use crate::config::HeuristicConfig;
use crate::constructive::insertion_tour_with_observer;
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::local_search::two_opt_improve_with_observer;
use crate::models::Tour;
use crate::observer::{NoopObserver, TourObserver};

/// Builds a tour from `start` with `config.policy`, then applies 2-opt if
/// `config.improve` is set.
///
/// # Errors
///
/// Propagates construction errors, see
/// [`insertion_tour`](crate::constructive::insertion_tour).
///
/// # Examples
///
/// ```
/// use u_tsp::config::HeuristicConfig;
/// use u_tsp::constructive::InsertionPolicy;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::City;
/// use u_tsp::solver::solve;
///
/// let cities: Vec<City> = (0..8)
///     .map(|i| City::new((i * 7 % 8) as f64 * 10.0, (i * 3 % 5) as f64 * 10.0))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let config = HeuristicConfig::default().with_policy(InsertionPolicy::Farthest);
///
/// let tour = solve(&dm, 0, &config).unwrap();
/// assert!(tour.is_permutation());
/// assert_eq!(tour.length(), tour.recompute_length(&dm));
/// ```
pub fn solve<D>(distances: &D, start: usize, config: &HeuristicConfig) -> Result<Tour>
where
    D: DistanceOracle + ?Sized,
{
    solve_with_observer(distances, start, config, &mut NoopObserver)
}

/// Same as [`solve`], forwarding `observer` to both stages.
pub fn solve_with_observer<D>(
    distances: &D,
    start: usize,
    config: &HeuristicConfig,
    observer: &mut dyn TourObserver,
) -> Result<Tour>
where
    D: DistanceOracle + ?Sized,
{
    let constructed = insertion_tour_with_observer(distances, start, config.policy, observer)?;
    if !config.improve {
        return Ok(constructed);
    }

    let improved = two_opt_improve_with_observer(distances, &constructed, observer);
    info!(
        policy = config.policy.name(),
        start,
        constructed = constructed.length(),
        improved = improved.length(),
        "solved"
    );
    Ok(improved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::{insertion_tour, InsertionPolicy};
    use crate::distance::DistanceMatrix;
    use crate::error::TspError;
    use crate::models::City;
    use crate::observer::EdgeRecorder;

    fn scattered() -> DistanceMatrix {
        let cities: Vec<City> = (0..20)
            .map(|i| {
                let t = i as f64;
                City::new((t * 53.0) % 89.0, (t * t * 7.0) % 83.0)
            })
            .collect();
        DistanceMatrix::from_cities(&cities)
    }

    #[test]
    fn test_without_improve_matches_construction() {
        let dm = scattered();
        let config = HeuristicConfig::default()
            .with_policy(InsertionPolicy::random())
            .with_improve(false);
        let tour = solve(&dm, 4, &config).expect("valid");
        assert_eq!(tour, insertion_tour(&dm, 4, InsertionPolicy::random()).expect("valid"));
    }

    #[test]
    fn test_improve_never_worse() {
        let dm = scattered();
        for policy in [
            InsertionPolicy::random(),
            InsertionPolicy::Nearest,
            InsertionPolicy::Farthest,
        ] {
            let constructed = insertion_tour(&dm, 0, policy).expect("valid");
            let config = HeuristicConfig::default().with_policy(policy);
            let solved = solve(&dm, 0, &config).expect("valid");
            assert!(solved.length() <= constructed.length());
            assert!(solved.is_permutation());
            assert_eq!(solved.length(), solved.recompute_length(&dm));
        }
    }

    #[test]
    fn test_observer_sees_both_stages() {
        let dm = scattered();
        let mut rec = EdgeRecorder::new();
        let config = HeuristicConfig::default().with_policy(InsertionPolicy::random());
        solve_with_observer(&dm, 0, &config, &mut rec).expect("valid");
        assert!(rec.len() >= dm.size() - 1);
    }

    #[test]
    fn test_bad_start_propagates() {
        let dm = scattered();
        let err = solve(&dm, 99, &HeuristicConfig::default()).unwrap_err();
        assert!(matches!(err, TspError::StartCityOutOfRange { .. }));
    }
}
