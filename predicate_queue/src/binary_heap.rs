use std::fmt::Debug;
use std::vec::Vec;

use crate::order::{outranks, Order};

/// Implicit binary tree over `Vec`.
/// Children of `i` are `2i + 1` and `2i + 2`.
///
/// Heap itself doesn't own order, every reordering method takes it as argument.
/// The caller must always pass the same order, otherwise it is logic error.
pub(crate) struct BinaryHeap<T> {
    data: Vec<T>,
}

impl<T> BinaryHeap<T> {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds valid heap from arbitrary vector
    /// Time complexity - O(n), sinks every internal node starting from the last one
    pub(crate) fn from_vec<O: Order<T>>(data: Vec<T>, order: &O) -> Self {
        let mut res = Self { data };
        for position in (0..res.data.len() / 2).rev() {
            res.heapify_down(position, order);
        }
        res
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Puts item in heap and returns its final position
    /// Time complexity - O(log n) swaps
    #[inline(always)]
    pub(crate) fn push<O: Order<T>>(&mut self, item: T, order: &O) -> usize {
        self.data.push(item);
        self.heapify_up(self.data.len() - 1, order)
    }

    /// Removes item with the biggest priority
    /// Time complexity - O(log n) swaps
    #[inline(always)]
    pub(crate) fn pop<O: Order<T>>(&mut self, order: &O) -> Option<T> {
        self.remove(0, order)
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes item at position and returns it
    /// Time complexity - O(log n) swaps
    pub(crate) fn remove<O: Order<T>>(&mut self, position: usize, order: &O) -> Option<T> {
        if position >= self.data.len() {
            return None;
        }
        let last = self.data.len() - 1;
        if position == last {
            return self.data.pop();
        }
        self.swap_items(position, last);
        let result = self.data.pop();
        // Moved element came from other subtree so it can go either way.
        let position = self.heapify_up(position, order);
        self.heapify_down(position, order);
        result
    }

    /// Puts `item` instead of element at `position` and returns replaced one
    /// Time complexity - O(log n) swaps
    pub(crate) fn replace<O: Order<T>>(&mut self, position: usize, item: T, order: &O) -> T {
        if position >= self.data.len() {
            panic!("Out of index during replacing item");
        }
        let old = std::mem::replace(&mut self.data[position], item);
        let position = self.heapify_up(position, order);
        self.heapify_down(position, order);
        old
    }

    /// Returns position of first item equal to `item`
    /// Time complexity - O(n)
    #[inline]
    pub(crate) fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|x| x == item)
    }

    /// Returns position of the least prioritized item
    /// Time complexity - O(n)
    pub(crate) fn least_prioritized_idx<O: Order<T>>(&self, order: &O) -> Option<usize> {
        // Parent never has lower priority than its children,
        // so it is enough to scan leaves.
        let first_leaf = self.data.len() / 2;
        let mut candidates = self.data.iter().enumerate().skip(first_leaf);
        let (mut least_idx, mut least) = candidates.next()?;
        for (idx, item) in candidates {
            if outranks(order, least, item) {
                least_idx = idx;
                least = item;
            }
        }
        Some(least_idx)
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: usize) -> Option<&T> {
        self.data.get(position)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline(always)]
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn heapify_up<O: Order<T>>(&mut self, position: usize, order: &O) -> usize {
        debug_assert!(position < self.data.len(), "Out of index in heapify_up");
        let mut position = position;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if order.is_lower(&self.data[parent_pos], &self.data[position]) {
                self.swap_items(parent_pos, position);
                position = parent_pos;
            } else {
                break;
            }
        }
        position
    }

    fn heapify_down<O: Order<T>>(&mut self, position: usize, order: &O) -> usize {
        debug_assert!(position < self.data.len(), "Out of index in heapify_down");
        let mut position = position;
        loop {
            let max_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 >= self.data.len()
                    || order.is_lower(&self.data[child2], &self.data[child1])
                {
                    child1
                } else {
                    child2
                }
            };

            if order.is_lower(&self.data[position], &self.data[max_child_idx]) {
                self.swap_items(position, max_child_idx);
                position = max_child_idx;
            } else {
                break;
            }
        }
        position
    }

    #[inline(always)]
    fn swap_items(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
    }
}

// Default implementations

impl<T: Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T: Debug> Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

#[cfg(test)]
pub(crate) fn is_valid_heap<T, O: Order<T>>(heap: &BinaryHeap<T>, order: &O) -> bool {
    for (i, current) in heap.data.iter().enumerate().skip(1) {
        let parent = &heap.data[(i - 1) / 2];
        if order.is_lower(parent, current) {
            return false;
        }
    }
    true
}
