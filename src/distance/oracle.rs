//! Distance oracle trait.

/// Read-only access to a symmetric TSP instance.
///
/// Implementations must be pure: the same pair always yields the same
/// non-negative distance, `distance(i, j) == distance(j, i)` and
/// `distance(i, i) == 0`. Lookups are expected to be O(1) since every
/// heuristic in this crate calls them O(n²) times.
///
/// # Range
///
/// Insertion costs and 2-opt gains add two distances, and tour lengths add
/// `n` of them, all in plain `i64`. Keep every distance and every tour
/// length well below `i64::MAX / 4`. The one exception is `i64::MAX` itself,
/// which nearest insertion treats as "unreachable": such cities are never
/// selected and construction fails with
/// [`TspError::NoCandidate`](crate::TspError::NoCandidate) instead.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceOracle;
///
/// /// Cities on a line at integer positions.
/// struct Line(usize);
///
/// impl DistanceOracle for Line {
///     fn num_cities(&self) -> usize { self.0 }
///     fn distance(&self, from: usize, to: usize) -> i64 {
///         (from as i64 - to as i64).abs()
///     }
/// }
///
/// let line = Line(4);
/// assert_eq!(line.distance(0, 3), 3);
/// ```
pub trait DistanceOracle {
    /// Number of cities in the instance.
    fn num_cities(&self) -> usize;

    /// Distance between cities `from` and `to`.
    fn distance(&self, from: usize, to: usize) -> i64;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn num_cities(&self) -> usize {
        (**self).num_cities()
    }

    fn distance(&self, from: usize, to: usize) -> i64 {
        (**self).distance(from, to)
    }
}
