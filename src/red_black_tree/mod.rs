//! Self-balancing binary search tree that uses color markers and parent back-references to
//! remain approximately balanced during insertions and deletions.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
