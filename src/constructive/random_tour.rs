//! Uniformly random tour.
//!
//! Shuffles all cities into a random permutation. Linear time and space;
//! mostly useful as a deliberately poor starting point for 2-opt.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceOracle;
use crate::models::Tour;

/// Builds a uniformly random tour over every city of the instance.
///
/// Successive calls with the same generator give different tours; two
/// generators seeded identically give the same sequence of tours.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::constructive::random_tour;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::City;
///
/// let cities: Vec<City> = (0..5).map(|i| City::new(i as f64, 0.0)).collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let tour = random_tour(&dm, &mut rng);
/// assert_eq!(tour.len(), 5);
/// assert!(tour.is_permutation());
/// assert_eq!(tour.length(), tour.recompute_length(&dm));
/// ```
pub fn random_tour<D, R>(distances: &D, rng: &mut R) -> Tour
where
    D: DistanceOracle + ?Sized,
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = (0..distances.num_cities()).collect();
    order.shuffle(rng);
    Tour::from_order(distances, order)
}
