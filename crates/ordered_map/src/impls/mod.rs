mod sorted_vec;
mod std_btree;
mod tree;

pub use sorted_vec::SortedVecMap;
pub use std_btree::StdBTreeMap;
pub use tree::{Iter as TreeIter, IterMut as TreeIterMut, TreeMap};
