/*!
 * Queue Entry Types
 * Internal data structure for stored (priority, value) pairs
 */

use crate::core::types::Priority;

/// A stored entry: one value keyed by its unique priority.
///
/// Comparison lives on the queue, not here: extraction order is a runtime
/// field of the container, so the heap cannot rely on an `Ord` impl.
#[derive(Debug, Clone)]
pub(super) struct Entry<T> {
    pub priority: Priority,
    pub value: T,
}

impl<T> Entry<T> {
    pub fn new(priority: Priority, value: T) -> Self {
        Self { priority, value }
    }
}
