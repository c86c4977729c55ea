//! Fast, but limited allocator.

use std::mem;
use std::ops::{Index, IndexMut};

/// A stable handle to an object in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// All objects inside the arena will be destroyed when the arena is destroyed. Removed slots are
/// threaded onto a free list and reused by later insertions, so handles stay valid for the
/// lifetime of the object they were created for and the code uses no unsafe blocks. Handles are
/// plain indices, so they may be copied freely and stored inside the allocated objects
/// themselves.
///
/// # Examples
///
/// ```
/// use redwood::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.insert(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.remove(x), 2);
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// ```
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Constructs a new, empty `Arena<T>` with space for `capacity` objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    /// Returns the number of occupied slots in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena contains no objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an object into the arena and returns a handle to it. Vacant slots are reused
    /// before the arena grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// ```
    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle(self.slots.len() - 1)
            },
            Some(handle) => {
                let vacant_slot = mem::replace(&mut self.slots[handle.0], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next_handle) => {
                        self.head = next_handle;
                        handle
                    },
                    Slot::Occupied(_) => panic!("Expected a vacant slot at the free list head."),
                }
            },
        }
    }

    /// Removes an object from the arena and returns it, pushing its slot onto the free list.
    ///
    /// # Panics
    ///
    /// Panics if the handle corresponds to an invalid or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// assert_eq!(arena.remove(x), 0);
    /// ```
    pub fn remove(&mut self, handle: Handle) -> T {
        if handle.0 >= self.slots.len() {
            panic!("Error: attempting to remove an invalid slot.");
        }
        let old_slot = mem::replace(&mut self.slots[handle.0], Slot::Vacant(self.head.take()));
        match old_slot {
            Slot::Vacant(_) => panic!("Error: attempting to remove a vacant slot."),
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                value
            },
        }
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if the handle
    /// does not correspond to an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if the handle does
    /// not correspond to an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// assert_eq!(arena.get_mut(x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Removes all objects from the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use redwood::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.insert(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle out of bounds.")
    }
}
