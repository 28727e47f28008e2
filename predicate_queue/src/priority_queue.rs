use std::fmt::Debug;
use std::iter::FusedIterator;

use crate::binary_heap::BinaryHeap;
use crate::order::{outranks, ByPredicate, Natural, Order};

/// A priority queue with pluggable order.
///
/// Which element is popped first is decided by `TOrder`, see [`Order`].
/// With [`Natural`] order it works as min-queue or max-queue
/// depending on `ascending` flag; with [`ByPredicate`] any closure can be used.
///
/// Equal elements are allowed and indistinguishable,
/// there is no guarantee about pop order of elements with same priority.
///
/// It is logic error if element priority changes while it is in queue.
/// This normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// [`Order`]: trait.Order.html
/// [`Natural`]: struct.Natural.html
/// [`ByPredicate`]: struct.ByPredicate.html
///
/// # Examples
///
/// ## Main example
/// ```
/// use predicate_queue::PriorityQueue;
///
/// // Lowest value is popped first
/// let mut queue = PriorityQueue::new(true, vec![5, 3, 8]);
///
/// queue.push(1);
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.len(), 4);
///
/// // Element can be removed by value
/// assert_eq!(queue.remove(&5), Some(5));
/// assert_eq!(queue.remove(&42), None);
///
/// // Consuming iterator returns items in priority order
/// let drained: Vec<i32> = queue.clone().into_iter().collect();
/// assert_eq!(drained, [1, 3, 8]);
///
/// assert_eq!(queue.pop(), Some(1));
/// queue.clear();
/// assert!(queue.is_empty());
/// assert_eq!(queue.pop(), None);
/// ```
///
/// ## Custom order
///
/// Work items which have less lifespan left are processed first:
///
/// ```
/// use predicate_queue::PriorityQueue;
///
/// #[derive(Debug, PartialEq)]
/// struct Item {
///     name: &'static str,
///     lifespan: u32,
/// }
///
/// let mut queue = PriorityQueue::with_predicate(
///     |a: &Item, b: &Item| a.lifespan > b.lifespan,
///     Vec::new(),
/// );
/// queue.push(Item { name: "long", lifespan: 25 });
/// queue.push(Item { name: "short", lifespan: 2 });
/// assert_eq!(queue.pop().map(|x| x.name), Some("short"));
/// assert_eq!(queue.pop().map(|x| x.name), Some("long"));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, TOrder = Natural>
where
    TOrder: Order<T>,
{
    heap: BinaryHeap<T>,
    order: TOrder,
}

impl<T: Ord> PriorityQueue<T, Natural> {
    /// Creates queue ordered by [`Ord`] of values and fills it with `initial`.
    ///
    /// If `ascending` is true, the lowest value has the highest priority (min-queue),
    /// otherwise the highest value has the highest priority (max-queue).
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new(true, vec![5, 3, 8, 1]);
    /// assert_eq!(queue.pop(), Some(1));
    /// let mut queue = PriorityQueue::new(false, vec![5, 3, 8, 1]);
    /// assert_eq!(queue.pop(), Some(8));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** for `n` initial elements.
    #[inline]
    pub fn new(ascending: bool, initial: Vec<T>) -> Self {
        Self::with_order(Natural::new(ascending), initial)
    }
}

impl<T, F> PriorityQueue<T, ByPredicate<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates queue ordered by `predicate` and fills it with `initial`.
    ///
    /// `predicate(a, b)` must return true if `a` has lower priority than `b`,
    /// in other words, if `b` must be popped before `a`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// // Longest word first
    /// let mut queue = PriorityQueue::with_predicate(
    ///     |a: &&str, b: &&str| a.len() < b.len(),
    ///     vec!["a", "abc", "ab"],
    /// );
    /// assert_eq!(queue.pop(), Some("abc"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** for `n` initial elements.
    #[inline]
    pub fn with_predicate(predicate: F, initial: Vec<T>) -> Self {
        Self::with_order(ByPredicate::new(predicate), initial)
    }
}

impl<T, TOrder: Order<T>> PriorityQueue<T, TOrder> {
    /// Creates queue with provided order and fills it with `initial`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::{Natural, PriorityQueue};
    /// let mut queue = PriorityQueue::with_order(Natural::descending(), vec![2, 7, 4]);
    /// assert_eq!(queue.peek(), Some(&7));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** for `n` initial elements.
    #[inline]
    pub fn with_order(order: TOrder, initial: Vec<T>) -> Self {
        let heap = BinaryHeap::from_vec(initial, &order);
        Self { heap, order }
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::{Natural, PriorityQueue};
    /// let mut queue = PriorityQueue::with_capacity(Natural::ascending(), 10);
    /// assert!(queue.capacity() >= 10);
    /// queue.push(4);
    /// ```
    #[inline]
    pub fn with_capacity(order: TOrder, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            order,
        }
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
    }

    /// Number of elements queue can hold without reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Order used by this queue.
    #[inline]
    pub fn order(&self) -> &TOrder {
        &self.order
    }

    /// Adds new element to queue.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new(true, Vec::new());
    /// queue.push(10);
    /// queue.push(4);
    /// queue.push(7);
    /// assert_eq!(queue.peek(), Some(&4));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***.
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.heap.push(element, &self.order);
    }

    /// Adds element while keeping queue no longer than `max_count`.
    ///
    /// If queue is shorter than `max_count`, works as [`push`] and returns `None`.
    /// Otherwise finds the least prioritized element:
    /// if `element` doesn't outrank it, `element` is rejected and returned back,
    /// else `element` takes its place and the evicted element is returned.
    ///
    /// So queue always keeps `max_count` most prioritized elements ever pushed this way.
    ///
    /// ### Panics
    ///
    /// Panics if `max_count` is zero.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// // Min-queue: smaller values are more important
    /// let mut queue = PriorityQueue::new(true, Vec::new());
    /// assert_eq!(queue.push_bounded(5, 2), None);
    /// assert_eq!(queue.push_bounded(3, 2), None);
    /// // 9 is less important than everything inside, so it is rejected
    /// assert_eq!(queue.push_bounded(9, 2), Some(9));
    /// // 1 is more important, 5 is evicted
    /// assert_eq!(queue.push_bounded(1, 2), Some(5));
    /// assert_eq!(queue.into_sorted_vec(), [1, 3]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)*** while queue is shorter than `max_count`, ***O(n)*** after that.
    ///
    /// [`push`]: struct.PriorityQueue.html#method.push
    pub fn push_bounded(&mut self, element: T, max_count: usize) -> Option<T> {
        if max_count == 0 {
            panic!("max_count for push_bounded must be positive");
        }
        if self.heap.len() < max_count {
            self.heap.push(element, &self.order);
            return None;
        }

        let least_idx = self
            .heap
            .least_prioritized_idx(&self.order)
            .expect("Queue is not empty because max_count is positive");
        let least = self
            .heap
            .look_into(least_idx)
            .expect("Index returned by heap itself");
        if !outranks(&self.order, &element, least) {
            return Some(element);
        }
        Some(self.heap.replace(least_idx, element, &self.order))
    }

    /// Remove and return item with the maximal priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new(false, vec![1, 4, 2]);
    /// assert_eq!(queue.pop(), Some(4));
    /// assert_eq!(queue.pop(), Some(2));
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of pop is always ***O(log n)***
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop(&self.order)
    }

    /// Get reference to the element with the maximal priority.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes first found element equal to `item`.
    /// Returns removed element or `None` if there is no such element,
    /// in this case queue is not changed.
    ///
    /// ### Examples
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new(false, (0..5).collect());
    /// assert_eq!(queue.remove(&2), Some(2));
    /// assert_eq!(queue.remove(&10), None);
    /// assert_eq!(queue.into_sorted_vec(), [4, 3, 1, 0]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** to find element and ***O(log n)*** to restore the heap.
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let position = self.heap.position_of(item)?;
        self.heap.remove(position, &self.order)
    }

    /// Get the number of elements in queue.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = predicate_queue::PriorityQueue::new(true, Vec::new());
    /// assert!(queue.is_empty());
    /// queue.push(5);
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Make the queue empty. Allocated memory is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Create readonly borrowing iterator over queue.
    /// Items are returned in arbitrary order.
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// let queue = PriorityQueue::new(true, vec![3, 1, 2]);
    /// let mut items: Vec<i32> = queue.iter().copied().collect();
    /// items.sort();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    #[inline]
    pub fn iter(&self) -> PriorityQueueBorrowIter<'_, T> {
        PriorityQueueBorrowIter {
            inner: self.heap.iter(),
        }
    }

    /// Returns underlying vector in arbitrary order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Returns all elements, the most prioritized first.
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)***
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len());
        result.extend(self);
        result
    }
}

impl<T: Debug, TOrder: Order<T>> Debug for PriorityQueue<T, TOrder> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.heap.fmt(f)
    }
}

impl<T, TOrder: Order<T>> Extend<T> for PriorityQueue<T, TOrder> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<T, TOrder: Order<T>> IntoIterator for PriorityQueue<T, TOrder> {
    type Item = T;
    type IntoIter = PriorityQueueIterator<T, TOrder>;

    /// Make iterator that return items in priority order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use predicate_queue::PriorityQueue;
    /// let queue = PriorityQueue::new(true, vec![5, 1, 3, 2, 4]);
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.len(), 4);
    /// assert_eq!(iterator.collect::<Vec<_>>(), [2, 3, 4, 5]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns elements in priority order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct PriorityQueueIterator<T, TOrder = Natural>
where
    TOrder: Order<T>,
{
    queue: PriorityQueue<T, TOrder>,
}

impl<T, TOrder: Order<T>> Iterator for PriorityQueueIterator<T, TOrder> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

impl<T, TOrder: Order<T>> ExactSizeIterator for PriorityQueueIterator<T, TOrder> {}

impl<T, TOrder: Order<T>> FusedIterator for PriorityQueueIterator<T, TOrder> {}

/// This is unordered borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct PriorityQueueBorrowIter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for PriorityQueueBorrowIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.count()
    }
}

impl<'a, T> ExactSizeIterator for PriorityQueueBorrowIter<'a, T> {}
