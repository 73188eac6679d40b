/*!
 * Queue Iterators
 * Destructive iteration: every iterator over the queue removes the
 * entries it yields, in extraction order
 */

use std::iter::FusedIterator;

use super::PriorityQueue;
use crate::core::types::Priority;

impl<T> PriorityQueue<T> {
    /// Iterate destructively by reference, yielding values in extraction
    /// order.
    ///
    /// Each call to `next` dequeues one entry. Dropping the iterator before
    /// exhaustion clears whatever remains, leaving the queue empty either
    /// way.
    ///
    /// ```
    /// use priomap::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue("low", 1);
    /// queue.enqueue("high", 9);
    ///
    /// let drained: Vec<_> = queue.drain().collect();
    /// assert_eq!(drained, vec!["high", "low"]);
    /// assert!(queue.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }
}

/// Draining iterator returned by [`PriorityQueue::drain`].
pub struct Drain<'a, T> {
    queue: &'a mut PriorityQueue<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.remove_root().map(|entry| entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        if !self.queue.is_empty() {
            self.queue.clear();
        }
    }
}

/// Owning iterator returned by [`IntoIterator::into_iter`].
pub struct IntoIter<T> {
    queue: PriorityQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.remove_root().map(|entry| entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consume the queue, yielding values in extraction order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { queue: self }
    }
}

impl<T> Extend<(T, Priority)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T> FromIterator<(T, Priority)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
