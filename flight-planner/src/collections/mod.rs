//! Ordered and priority collections used by the network and the planner.
//!
//! - [`AvlSet`]: a height-balanced ordered set with pluggable ordering
//! - [`AvlMap`]: an ordered map layered on the set
//! - [`BinaryMinHeap`]: a min-priority queue whose priorities can change

mod avl;
mod avl_map;
mod heap;

pub use avl::{AvlSet, Comparator, FnOrder, Iter, NaturalOrder};
pub use avl_map::AvlMap;
pub use heap::BinaryMinHeap;
