//! Ordered associative containers built on an arena-backed red black tree.

#[macro_use]
extern crate serde_derive;

mod entry;
pub mod arena;
pub mod red_black_tree;
