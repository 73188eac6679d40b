/*!
 * Queue Operations
 * Insertion, extraction, and lookup, plus the sift routines that keep
 * the heap and the priority index aligned
 */

use super::entry::Entry;
use super::PriorityQueue;
use crate::core::errors::{QueueError, QueueResult};
use crate::core::types::{ExtractOrder, Priority};
use log::trace;

impl<T> PriorityQueue<T> {
    /// Insert `value` at `priority`, restoring the heap invariant.
    ///
    /// If the priority is already present the stored value is replaced in
    /// place and returned; the entry keeps its heap slot because its
    /// priority is unchanged. O(log n) for a new priority, O(1) for an
    /// overwrite.
    pub fn enqueue(&mut self, value: T, priority: Priority) -> Option<T> {
        if let Some(&slot) = self.index.get(&priority) {
            trace!("Enqueue overwrote value at existing priority {}", priority);
            return Some(std::mem::replace(&mut self.heap[slot].value, value));
        }

        let slot = self.heap.len();
        self.heap.push(Entry::new(priority, value));
        self.index.insert(priority, slot);
        self.sift_up(slot);
        None
    }

    /// Remove and return the value of the extreme entry. O(log n).
    ///
    /// Fails with [`QueueError::Empty`] when the queue holds no entries;
    /// check [`is_empty`](Self::is_empty) or [`peek`](Self::peek) first to
    /// avoid the error.
    pub fn dequeue(&mut self) -> QueueResult<T> {
        let entry = self.remove_root().ok_or(QueueError::Empty)?;
        Ok(entry.value)
    }

    /// Value of the extreme entry without removing it, `None` when empty. O(1).
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|entry| &entry.value)
    }

    /// Priority and value of the extreme entry without removing it. O(1).
    pub fn peek_entry(&self) -> Option<(Priority, &T)> {
        self.heap.first().map(|entry| (entry.priority, &entry.value))
    }

    /// Value stored at exactly `priority`, `None` when absent. O(1) expected.
    pub fn get(&self, priority: Priority) -> Option<&T> {
        self.index
            .get(&priority)
            .map(|&slot| &self.heap[slot].value)
    }

    /// Mutable access to the value stored at `priority`.
    ///
    /// Safe to expose: ordering depends only on priorities, so mutating a
    /// value cannot disturb the heap.
    pub fn get_mut(&mut self, priority: Priority) -> Option<&mut T> {
        let slot = *self.index.get(&priority)?;
        Some(&mut self.heap[slot].value)
    }

    /// Whether any entry holds exactly `priority`. O(1) expected.
    pub fn contains(&self, priority: Priority) -> bool {
        self.index.contains_key(&priority)
    }

    /// Whether any entry holds `value`. Linear scan, O(n).
    pub fn contains_element(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.heap.iter().any(|entry| entry.value == *value)
    }

    /// Detach the root entry and restore the heap invariant.
    ///
    /// Shared by `dequeue` and the draining iterators.
    pub(super) fn remove_root(&mut self) -> Option<Entry<T>> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let entry = self.heap.pop()?;
        self.index.remove(&entry.priority);

        if !self.heap.is_empty() {
            self.index.insert(self.heap[0].priority, 0);
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Entries as (priority, value) pairs sorted in extraction order.
    ///
    /// Backs rendering and serialization; O(n log n).
    pub(super) fn ordered_entries(&self) -> Vec<(Priority, &T)> {
        let mut entries: Vec<_> = self
            .heap
            .iter()
            .map(|entry| (entry.priority, &entry.value))
            .collect();
        entries.sort_unstable_by(|(a, _), (b, _)| match self.order {
            ExtractOrder::MaxFirst => b.cmp(a),
            ExtractOrder::MinFirst => a.cmp(b),
        });
        entries
    }

    /// Move the entry at `slot` rootward until its parent outranks it
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.outranks_at(slot, parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    /// Move the entry at `slot` leafward until it outranks both children
    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let mut extreme = slot;
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < self.heap.len() && self.outranks_at(child, extreme) {
                    extreme = child;
                }
            }
            if extreme == slot {
                break;
            }
            self.swap_slots(slot, extreme);
            slot = extreme;
        }
    }

    /// Swap two heap slots and repoint both index entries
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].priority, a);
        self.index.insert(self.heap[b].priority, b);
    }

    fn outranks_at(&self, a: usize, b: usize) -> bool {
        self.order
            .outranks(self.heap[a].priority, self.heap[b].priority)
    }
}
