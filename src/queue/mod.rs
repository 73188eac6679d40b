/*!
 * Priority Queue
 * Heap-ordered container keyed by unique integer priorities
 */

use crate::core::types::{ExtractOrder, Priority};
use ahash::RandomState;
use entry::Entry;
use log::debug;
use std::collections::HashMap;

mod entry;
mod iter;
mod operations;
mod render;
mod serde;

pub use iter::{Drain, IntoIter};

/// An indexed priority queue.
///
/// Stores `(value, priority)` entries with unique [`Priority`] keys. The
/// extreme entry (largest priority under [`ExtractOrder::MaxFirst`], the
/// default; smallest under [`ExtractOrder::MinFirst`]) is readable in
/// O(1) and removable in O(log n). An auxiliary index keyed by priority
/// backs O(1) [`get`](Self::get) and [`contains`](Self::contains)
/// lookups.
///
/// Enqueueing a priority that is already present overwrites the stored
/// value in place; the container never holds two entries with the same
/// priority.
///
/// Iteration over this container is **destructive**: [`drain`](Self::drain)
/// and `into_iter` remove what they yield. There is no borrowing view
/// iterator.
///
/// # Example
///
/// ```
/// use priomap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("background", 1);
/// queue.enqueue("interactive", 10);
///
/// assert_eq!(queue.peek(), Some(&"interactive"));
/// assert_eq!(queue.dequeue(), Ok("interactive"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T> {
    // Binary heap over priorities; slot 0 holds the extreme entry
    heap: Vec<Entry<T>>,
    // Priority -> heap slot, kept current across every sift swap
    index: HashMap<Priority, usize, RandomState>,
    order: ExtractOrder,
}

impl<T> PriorityQueue<T> {
    /// Create an empty max-first queue
    pub fn new() -> Self {
        Self::with_order(ExtractOrder::MaxFirst)
    }

    /// Create an empty queue with an explicit extraction order
    ///
    /// ```
    /// use priomap::{ExtractOrder, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::with_order(ExtractOrder::MinFirst);
    /// queue.enqueue('a', 3);
    /// queue.enqueue('b', 1);
    /// assert_eq!(queue.dequeue(), Ok('b'));
    /// ```
    pub fn with_order(order: ExtractOrder) -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::with_hasher(RandomState::new()),
            order,
        }
    }

    /// Create an empty max-first queue with pre-allocated storage
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_order_and_capacity(ExtractOrder::MaxFirst, capacity)
    }

    /// Create an empty queue with an explicit order and pre-allocated storage
    pub fn with_order_and_capacity(order: ExtractOrder, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            order,
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The extraction order fixed at construction
    pub fn order(&self) -> ExtractOrder {
        self.order
    }

    /// Whether this queue extracts smallest-priority first
    pub fn is_reversed(&self) -> bool {
        self.order.is_reversed()
    }

    /// Number of entries the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Reserve room for at least `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.index.reserve(additional);
    }

    /// Release unused backing storage
    pub fn shrink_to_fit(&mut self) {
        self.heap.shrink_to_fit();
        self.index.shrink_to_fit();
    }

    /// Drop all entries, keeping allocations for reuse
    pub fn clear(&mut self) {
        if !self.heap.is_empty() {
            debug!("Cleared {} entries", self.heap.len());
        }
        self.heap.clear();
        self.index.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
