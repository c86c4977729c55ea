use crate::arena::{Arena, Handle};
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// The red black tree engine underlying `RedBlackMap` and `RedBlackSet`.
///
/// Nodes live in a typed arena and refer to each other through `Handle` indices, so the parent
/// back-references needed for successor computation cost nothing to maintain and introduce no
/// ownership cycles. The tree exclusively owns every node reachable from its root; dropping the
/// tree drops the arena and releases every node exactly once.
pub struct RedBlackTree<T, U> {
    arena: Arena<Node<T, U>>,
    root: Option<Handle>,
    len: usize,
}

impl<T, U> RedBlackTree<T, U> {
    pub fn new() -> Self {
        RedBlackTree {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn entry_mut(&mut self, handle: Handle) -> &mut Entry<T, U> {
        &mut self.arena[handle].entry
    }

    // Null leaves below the tree count as black.
    fn color(&self, tree: Option<Handle>) -> Color {
        match tree {
            None => Color::Black,
            Some(handle) => self.arena[handle].color,
        }
    }

    fn is_black(&self, tree: Option<Handle>) -> bool {
        self.color(tree) != Color::Red
    }

    fn set_color(&mut self, tree: Option<Handle>, color: Color) {
        if let Some(handle) = tree {
            self.arena[handle].color = color;
        }
    }

    /// Returns a handle to the node with a matching key, walking from the root by comparison.
    pub fn find<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => curr = node.right,
                Ordering::Equal => return Some(handle),
            }
        }
        None
    }

    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    pub fn get<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).map(move |handle| &self.arena[handle].entry)
    }

    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.find(key) {
            Some(handle) => Some(&mut self.arena[handle].entry),
            None => None,
        }
    }

    /// Inserts a key-value pair into the tree and returns a handle to its node. If an equal key
    /// already exists, the tree is left unchanged and the handle of the existing node is
    /// returned; the primitive never overwrites.
    pub fn insert(&mut self, key: T, value: U) -> Handle
    where
        T: Ord,
    {
        let mut parent = None;
        let mut curr = self.root;
        let mut attach_left = false;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            parent = Some(handle);
            match key.cmp(&node.entry.key) {
                Ordering::Less => {
                    curr = node.left;
                    attach_left = true;
                },
                Ordering::Greater => {
                    curr = node.right;
                    attach_left = false;
                },
                Ordering::Equal => return handle,
            }
        }

        let mut new_node = Node::new(key, value);
        new_node.parent = parent;
        let handle = self.arena.insert(new_node);
        match parent {
            None => self.root = Some(handle),
            Some(parent_handle) => {
                if attach_left {
                    self.arena[parent_handle].left = Some(handle);
                } else {
                    self.arena[parent_handle].right = Some(handle);
                }
            },
        }
        self.len += 1;
        self.insert_fixup(handle);
        handle
    }

    // Restores the no-red-red invariant starting from a freshly attached red node.
    fn insert_fixup(&mut self, mut curr: Handle) {
        while Some(curr) != self.root
            && !self.is_black(Some(curr))
            && !self.is_black(self.arena[curr].parent)
        {
            let mut parent = self.arena[curr].parent.expect("Expected a parent node.");
            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a grandparent node.");

            if self.arena[grandparent].left == Some(parent) {
                let uncle = self.arena[grandparent].right;
                if !self.is_black(uncle) {
                    // red uncle: push the violation up two levels
                    self.set_color(uncle, Color::Black);
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    curr = grandparent;
                } else {
                    if self.arena[parent].right == Some(curr) {
                        // zig-zag: straighten before the terminal rotation
                        self.rotate_left(parent);
                        curr = parent;
                        parent = self.arena[curr].parent.expect("Expected a parent node.");
                    }
                    self.rotate_right(grandparent);
                    let parent_color = self.arena[parent].color;
                    self.arena[parent].color = self.arena[grandparent].color;
                    self.arena[grandparent].color = parent_color;
                    curr = parent;
                }
            } else {
                let uncle = self.arena[grandparent].left;
                if !self.is_black(uncle) {
                    self.set_color(uncle, Color::Black);
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    curr = grandparent;
                } else {
                    if self.arena[parent].left == Some(curr) {
                        self.rotate_right(parent);
                        curr = parent;
                        parent = self.arena[curr].parent.expect("Expected a parent node.");
                    }
                    self.rotate_left(grandparent);
                    let parent_color = self.arena[parent].color;
                    self.arena[parent].color = self.arena[grandparent].color;
                    self.arena[grandparent].color = parent_color;
                    curr = parent;
                }
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Removes the node with a matching key and returns its entry, or `None` if the key is
    /// absent. An absent key leaves the tree untouched.
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let found = self.find(key)?;

        let two_children = self.arena[found].left.is_some() && self.arena[found].right.is_some();
        let target = if two_children {
            // The structural delete always hits a node with at most one child; a two-child
            // removal collapses onto the in-order successor instead.
            let mut succ = self.arena[found]
                .right
                .expect("Expected a right child node.");
            while let Some(next) = self.arena[succ].left {
                succ = next;
            }
            succ
        } else {
            found
        };

        let node = self.unlink(target);
        self.len -= 1;
        if target == found {
            Some(node.entry)
        } else {
            // Both key and value move onto the surviving node; only the successor node dies.
            Some(std::mem::replace(&mut self.arena[found].entry, node.entry))
        }
    }

    // Splices out a node with at most one child, rebalancing if its removal leaves a
    // black-height deficit, and frees it through the arena.
    fn unlink(&mut self, curr: Handle) -> Node<T, U> {
        let left = self.arena[curr].left;
        let right = self.arena[curr].right;

        if Some(curr) == self.root && left.is_none() && right.is_none() {
            self.root = None;
            return self.arena.remove(curr);
        }

        let child = left.or(right);
        if !self.is_black(Some(curr)) || !self.is_black(child) {
            // No deficit: splice the child in and paint it black.
            self.splice(curr, child);
            self.set_color(child, Color::Black);
            return self.arena.remove(curr);
        }

        // The node and its (absent) child are both black, so the paths through it lose a black
        // node. Mark the position double black and resolve the deficit bottom-up.
        self.arena[curr].color = Color::DoubleBlack;
        let mut ptr = curr;
        while Some(ptr) != self.root && self.arena[ptr].color == Color::DoubleBlack {
            let parent = self.arena[ptr].parent.expect("Expected a parent node.");
            if self.arena[parent].left == Some(ptr) {
                let mut sibling = self.arena[parent].right.expect("Expected a sibling node.");
                if !self.is_black(Some(sibling)) {
                    // red sibling: rotate it above the parent and retry
                    self.arena[sibling].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_left(parent);
                } else {
                    let sibling_left = self.arena[sibling].left;
                    let sibling_right = self.arena[sibling].right;
                    if self.is_black(sibling_left) && self.is_black(sibling_right) {
                        // all-black sibling: pull the deficit up to the parent
                        self.arena[ptr].color = Color::Black;
                        self.arena[sibling].color = Color::Red;
                        if !self.is_black(Some(parent)) {
                            self.arena[parent].color = Color::Black;
                        } else {
                            self.arena[parent].color = Color::DoubleBlack;
                        }
                        ptr = parent;
                    } else {
                        if self.is_black(sibling_right) {
                            // align the sibling's red child to the outer side
                            self.set_color(sibling_left, Color::Black);
                            self.arena[sibling].color = Color::Red;
                            self.rotate_right(sibling);
                            sibling = self.arena[parent].right.expect("Expected a sibling node.");
                        }
                        self.arena[ptr].color = Color::Black;
                        self.arena[sibling].color = self.arena[parent].color;
                        self.arena[parent].color = Color::Black;
                        let sibling_right = self.arena[sibling].right;
                        self.set_color(sibling_right, Color::Black);
                        self.rotate_left(parent);
                        break;
                    }
                }
            } else {
                let mut sibling = self.arena[parent].left.expect("Expected a sibling node.");
                if !self.is_black(Some(sibling)) {
                    self.arena[sibling].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_right(parent);
                } else {
                    let sibling_left = self.arena[sibling].left;
                    let sibling_right = self.arena[sibling].right;
                    if self.is_black(sibling_left) && self.is_black(sibling_right) {
                        self.arena[ptr].color = Color::Black;
                        self.arena[sibling].color = Color::Red;
                        if !self.is_black(Some(parent)) {
                            self.arena[parent].color = Color::Black;
                        } else {
                            self.arena[parent].color = Color::DoubleBlack;
                        }
                        ptr = parent;
                    } else {
                        if self.is_black(sibling_left) {
                            self.set_color(sibling_right, Color::Black);
                            self.arena[sibling].color = Color::Red;
                            self.rotate_left(sibling);
                            sibling = self.arena[parent].left.expect("Expected a sibling node.");
                        }
                        self.arena[ptr].color = Color::Black;
                        self.arena[sibling].color = self.arena[parent].color;
                        self.arena[parent].color = Color::Black;
                        let sibling_left = self.arena[sibling].left;
                        self.set_color(sibling_left, Color::Black);
                        self.rotate_right(parent);
                        break;
                    }
                }
            }
        }

        // The marked node is a leaf; detach it from whichever child slot it occupies now.
        let parent = self.arena[curr].parent.expect("Expected a parent node.");
        if self.arena[parent].left == Some(curr) {
            self.arena[parent].left = None;
        } else {
            self.arena[parent].right = None;
        }
        let root = self.root;
        self.set_color(root, Color::Black);
        self.arena.remove(curr)
    }

    // Replaces `curr` with `child` in the child slot of `curr`'s parent.
    fn splice(&mut self, curr: Handle, child: Option<Handle>) {
        let parent = self.arena[curr].parent;
        if let Some(child_handle) = child {
            self.arena[child_handle].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent_handle) => {
                if self.arena[parent_handle].left == Some(curr) {
                    self.arena[parent_handle].left = child;
                } else {
                    self.arena[parent_handle].right = child;
                }
            },
        }
    }

    fn rotate_left(&mut self, curr: Handle) {
        let right_child = self.arena[curr]
            .right
            .expect("Expected right child node to be `Some`.");
        let inner = self.arena[right_child].left;
        self.arena[curr].right = inner;
        if let Some(inner_handle) = inner {
            self.arena[inner_handle].parent = Some(curr);
        }

        let parent = self.arena[curr].parent;
        self.arena[right_child].parent = parent;
        match parent {
            None => self.root = Some(right_child),
            Some(parent_handle) => {
                if self.arena[parent_handle].left == Some(curr) {
                    self.arena[parent_handle].left = Some(right_child);
                } else {
                    self.arena[parent_handle].right = Some(right_child);
                }
            },
        }

        self.arena[right_child].left = Some(curr);
        self.arena[curr].parent = Some(right_child);
    }

    fn rotate_right(&mut self, curr: Handle) {
        let left_child = self.arena[curr]
            .left
            .expect("Expected left child node to be `Some`.");
        let inner = self.arena[left_child].right;
        self.arena[curr].left = inner;
        if let Some(inner_handle) = inner {
            self.arena[inner_handle].parent = Some(curr);
        }

        let parent = self.arena[curr].parent;
        self.arena[left_child].parent = parent;
        match parent {
            None => self.root = Some(left_child),
            Some(parent_handle) => {
                if self.arena[parent_handle].left == Some(curr) {
                    self.arena[parent_handle].left = Some(left_child);
                } else {
                    self.arena[parent_handle].right = Some(left_child);
                }
            },
        }

        self.arena[left_child].right = Some(curr);
        self.arena[curr].parent = Some(left_child);
    }

    fn min_handle(&self) -> Option<Handle> {
        let mut curr = self.root?;
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        Some(curr)
    }

    fn max_handle(&self) -> Option<Handle> {
        let mut curr = self.root?;
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        Some(curr)
    }

    pub fn min(&self) -> Option<&Entry<T, U>> {
        self.min_handle().map(move |handle| &self.arena[handle].entry)
    }

    pub fn max(&self) -> Option<&Entry<T, U>> {
        self.max_handle().map(move |handle| &self.arena[handle].entry)
    }

    fn ceil_handle<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut result = None;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Greater => curr = node.right,
                Ordering::Less => {
                    result = Some(handle);
                    curr = node.left;
                },
                Ordering::Equal => return Some(handle),
            }
        }
        result
    }

    fn floor_handle<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut result = None;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    result = Some(handle);
                    curr = node.right;
                },
                Ordering::Equal => return Some(handle),
            }
        }
        result
    }

    pub fn ceil<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.ceil_handle(key)
            .map(move |handle| &self.arena[handle].entry)
    }

    pub fn floor<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.floor_handle(key)
            .map(move |handle| &self.arena[handle].entry)
    }

    // In-order successor: leftmost node of the right subtree, otherwise the first ancestor
    // reached from a left child. Rotations keep parent links fresh, so the climb is sound.
    fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.arena[handle].right {
            let mut curr = right;
            while let Some(left) = self.arena[curr].left {
                curr = left;
            }
            return Some(curr);
        }

        let mut curr = handle;
        let mut parent = self.arena[curr].parent;
        while let Some(parent_handle) = parent {
            if self.arena[parent_handle].right == Some(curr) {
                curr = parent_handle;
                parent = self.arena[parent_handle].parent;
            } else {
                return Some(parent_handle);
            }
        }
        None
    }

    /// Returns an in-order iterator over the tree. An empty tree yields an iterator that is
    /// exhausted from the start.
    pub fn iter(&self) -> Iter<'_, T, U> {
        Iter {
            tree: self,
            next: self.min_handle(),
        }
    }

    /// Returns an in-order iterator positioned at the first key greater than or equal to `key`.
    /// After a removal, this is how a caller resumes from the removed key's next position.
    pub fn iter_from<V>(&self, key: &V) -> Iter<'_, T, U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Iter {
            tree: self,
            next: self.ceil_handle(key),
        }
    }

    #[cfg(test)]
    fn black_height(&self, tree: Option<Handle>) -> Option<usize> {
        let handle = match tree {
            Some(handle) => handle,
            None => return Some(1),
        };
        let node = &self.arena[handle];
        if node.color == Color::DoubleBlack {
            return None;
        }
        let left_height = self.black_height(node.left)?;
        let right_height = self.black_height(node.right)?;
        if left_height != right_height {
            return None;
        }
        if node.color == Color::Red && (!self.is_black(node.left) || !self.is_black(node.right)) {
            return None;
        }
        if node.color == Color::Black {
            Some(left_height + 1)
        } else {
            Some(left_height)
        }
    }

    #[cfg(test)]
    fn links_consistent(&self, tree: Option<Handle>, parent: Option<Handle>) -> bool
    where
        T: Ord,
    {
        let handle = match tree {
            Some(handle) => handle,
            None => return true,
        };
        let node = &self.arena[handle];
        if node.parent != parent {
            return false;
        }
        if let Some(left) = node.left {
            if self.arena[left].entry.key >= node.entry.key {
                return false;
            }
        }
        if let Some(right) = node.right {
            if self.arena[right].entry.key <= node.entry.key {
                return false;
            }
        }
        self.links_consistent(node.left, Some(handle))
            && self.links_consistent(node.right, Some(handle))
    }

    #[cfg(test)]
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        self.is_black(self.root)
            && self.links_consistent(self.root, None)
            && self.black_height(self.root).is_some()
    }
}

impl<T, U> Default for RedBlackTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> IntoIterator for RedBlackTree<T, U> {
    type IntoIter = IntoIter<T, U>;
    type Item = Entry<T, U>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            current: self.root,
            arena: self.arena,
            stack: Vec::new(),
        }
    }
}

/// An iterator over the entries of a `RedBlackTree<T, U>` in ascending key order.
///
/// Advancing computes the in-order successor through the parent links; no auxiliary stack is
/// needed.
pub struct Iter<'a, T, U> {
    tree: &'a RedBlackTree<T, U>,
    next: Option<Handle>,
}

impl<'a, T, U> Iterator for Iter<'a, T, U> {
    type Item = &'a Entry<T, U>;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        self.next = self.tree.successor(handle);
        Some(&self.tree.arena[handle].entry)
    }
}

/// An owning in-order iterator for `RedBlackTree<T, U>`.
///
/// Walks the arena with an explicit stack and frees each node as it is yielded, so parent links
/// are never consulted after their node is gone.
pub struct IntoIter<T, U> {
    current: Option<Handle>,
    arena: Arena<Node<T, U>>,
    stack: Vec<Handle>,
}

impl<T, U> Iterator for IntoIter<T, U> {
    type Item = Entry<T, U>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.arena[handle].left;
        }
        self.stack.pop().map(|handle| {
            let node = self.arena.remove(handle);
            self.current = node.right;
            node.entry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use rand::Rng;

    fn keys(tree: &RedBlackTree<u32, u32>) -> Vec<u32> {
        tree.iter().map(|entry| entry.key).collect()
    }

    #[test]
    fn test_len_empty() {
        let tree: RedBlackTree<u32, u32> = RedBlackTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.iter().next().is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut tree = RedBlackTree::new();
        tree.insert(1, 10);
        assert!(tree.contains(&1));
        assert_eq!(tree.get(&1).map(|entry| entry.value), Some(10));
        assert_eq!(tree.get(&2), None);
    }

    #[test]
    fn test_insert_duplicate_is_noop() {
        let mut tree = RedBlackTree::new();
        let first = tree.insert(1, 10);
        let second = tree.insert(1, 20);
        assert_eq!(first, second);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&1).map(|entry| entry.value), Some(10));
    }

    #[test]
    fn test_in_order_traversal() {
        let mut tree = RedBlackTree::new();
        for &key in &[10, 20, 30, 15, 25, 5, 1] {
            tree.insert(key, key);
        }
        assert_eq!(keys(&tree), vec![1, 5, 10, 15, 20, 25, 30]);
        assert!(tree.is_valid());

        assert!(tree.remove(&20).is_some());
        assert!(tree.remove(&5).is_some());
        assert_eq!(keys(&tree), vec![1, 10, 15, 25, 30]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = RedBlackTree::new();
        tree.insert(1, 10);
        assert!(tree.remove(&2).is_none());
        assert_eq!(tree.len(), 1);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_sole_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(1, 10);
        assert_eq!(tree.remove(&1).map(|entry| entry.value), Some(10));
        assert!(tree.is_empty());
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_root_with_one_child() {
        let mut tree = RedBlackTree::new();
        tree.insert(10, 100);
        tree.insert(20, 200);
        assert_eq!(tree.remove(&10).map(|entry| entry.value), Some(100));
        assert_eq!(keys(&tree), vec![20]);
        assert_eq!(tree.get(&20).map(|entry| entry.value), Some(200));
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_two_children_keeps_values() {
        let mut tree = RedBlackTree::new();
        for &key in &[50, 30, 70, 20, 40, 60, 80] {
            tree.insert(key, key * 10);
        }
        let removed = tree.remove(&50).map(|entry| (entry.key, entry.value));
        assert_eq!(removed, Some((50, 500)));
        for &key in &[20, 30, 40, 60, 70, 80] {
            assert_eq!(tree.get(&key).map(|entry| entry.value), Some(key * 10));
        }
        assert!(tree.is_valid());
    }

    #[test]
    fn test_min_max() {
        let mut tree = RedBlackTree::new();
        for &key in &[3, 1, 5] {
            tree.insert(key, key);
        }
        assert_eq!(tree.min().map(|entry| entry.key), Some(1));
        assert_eq!(tree.max().map(|entry| entry.key), Some(5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut tree = RedBlackTree::new();
        for &key in &[1, 3, 5] {
            tree.insert(key, key);
        }
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.floor(&4).map(|entry| entry.key), Some(3));
        assert_eq!(tree.ceil(&4).map(|entry| entry.key), Some(5));
        assert_eq!(tree.ceil(&6), None);
    }

    #[test]
    fn test_iter_from() {
        let mut tree = RedBlackTree::new();
        for &key in &[1, 3, 5, 7] {
            tree.insert(key, key);
        }
        tree.remove(&5);
        let resumed: Vec<u32> = tree.iter_from(&5).map(|entry| entry.key).collect();
        assert_eq!(resumed, vec![7]);
    }

    #[test]
    fn test_into_iter() {
        let mut tree = RedBlackTree::new();
        for &key in &[2, 1, 3] {
            tree.insert(key, key * 10);
        }
        let pairs: Vec<(u32, u32)> = tree
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect();
        assert_eq!(pairs, vec![(1, 10), (2, 20), (3, 30)]);
    }

    #[test]
    fn test_sequential_insert_stays_balanced() {
        let mut tree = RedBlackTree::new();
        for key in 0..256 {
            tree.insert(key, key);
            assert!(tree.is_valid());
        }
        assert_eq!(tree.len(), 256);
        assert_eq!(keys(&tree), (0..256).collect::<Vec<u32>>());
    }

    #[test]
    fn test_random_insert_remove_preserves_invariants() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut keys: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut keys);

        let mut tree = RedBlackTree::new();
        for &key in &keys {
            tree.insert(key, key);
            assert!(tree.is_valid());
        }
        assert_eq!(tree.len(), 100);

        rng.shuffle(&mut keys);
        let mut remaining = tree.len();
        for &key in &keys {
            assert!(tree.remove(&key).is_some());
            remaining -= 1;
            assert_eq!(tree.len(), remaining);
            assert!(tree.is_valid());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_round_trip_leaves_tree_empty() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
        let mut keys: Vec<u32> = (0..64).collect();
        rng.shuffle(&mut keys);

        let mut tree = RedBlackTree::new();
        for &key in &keys {
            tree.insert(key, key);
        }
        rng.shuffle(&mut keys);
        for &key in &keys {
            assert!(tree.remove(&key).is_some());
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.iter().next().is_none());
    }
}
