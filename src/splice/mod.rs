//! O(1) splicing list used while growing a cycle.

mod list;

pub use list::{Ids, Iter, NodeId, SpliceList};
