//! Random insertion order.
//!
//! The cities other than the start are shuffled once with a seeded
//! generator and inserted in that fixed order, whatever the shape of the
//! cycle. Runs with the same seed, instance and start city are identical.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::cycle::PartialCycle;
use crate::distance::DistanceOracle;
use crate::observer::TourObserver;

/// Grows `cycle` by inserting the remaining cities in shuffled order.
pub(crate) fn grow<D>(
    distances: &D,
    cycle: &mut PartialCycle,
    start: usize,
    seed: u64,
    observer: &mut dyn TourObserver,
) where
    D: DistanceOracle + ?Sized,
{
    for city in shuffled_order(distances.num_cities(), start, seed) {
        cycle.insert_cheapest(distances, city);
        cycle.notify(observer);
    }
}

/// Every city in `0..n` except `start`, shuffled by a generator seeded with `seed`.
fn shuffled_order(n: usize, start: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cities: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    cities.shuffle(&mut rng);
    cities
}
