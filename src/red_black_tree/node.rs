use crate::arena::Handle;
use crate::entry::Entry;

/// An enum representing the color of a node in a red black tree.
///
/// `DoubleBlack` marks a black-height deficit while a removal is being rebalanced. It only exists
/// inside a single `remove` call and must be gone by the time the call returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
    DoubleBlack,
}

/// A struct representing an internal node of a red black tree.
///
/// The child links own their subtrees through the arena. The parent link is a plain
/// back-reference used for successor computation and rotation bookkeeping, never for ownership.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry::new(key, value),
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }
}
