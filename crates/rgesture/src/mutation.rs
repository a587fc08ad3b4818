#![forbid(unsafe_code)]

//! Data mutations the gestures commit.
//!
//! Controllers own their item store and call it exactly once per commit,
//! followed by the matching host notification. A store that declines a
//! mutation (index out of range) suppresses that notification.

/// Reorder capability used by drag-to-reorder.
pub trait SwapItems {
    /// Exchange the items at `a` and `b`. Returns `false` if either index is
    /// out of range.
    fn swap_items(&mut self, a: usize, b: usize) -> bool;
}

/// Removal capability used by swipe-to-dismiss.
pub trait RemoveItems {
    /// Remove the item at `index`. Returns `false` if it is out of range.
    fn remove_item(&mut self, index: usize) -> bool;
}

impl<T> SwapItems for Vec<T> {
    fn swap_items(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }
        self.swap(a, b);
        true
    }
}

impl<T> RemoveItems for Vec<T> {
    fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.remove(index);
        true
    }
}

/// A `Vec`-backed item store with both capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList<T> {
    items: Vec<T>,
}

impl<T> ItemList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> SwapItems for ItemList<T> {
    fn swap_items(&mut self, a: usize, b: usize) -> bool {
        self.items.swap_items(a, b)
    }
}

impl<T> RemoveItems for ItemList<T> {
    fn remove_item(&mut self, index: usize) -> bool {
        self.items.remove_item(index)
    }
}
