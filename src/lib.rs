/*!
 * Priomap
 * An indexed priority queue: unique integer priorities mapped to values,
 * extracted in configurable max-first or min-first order
 */

pub mod core;
pub mod queue;

// Re-exports
pub use crate::core::errors::{QueueError, QueueResult};
pub use crate::core::types::{ExtractOrder, Priority};
pub use crate::queue::{Drain, IntoIter, PriorityQueue};
