//! Local search operators for improving an existing tour.
//!
//! - [`two_opt_improve`] — Best-improvement 2-opt with in-place segment reversal

mod two_opt;

pub use two_opt::{two_opt_improve, two_opt_improve_with_observer};
