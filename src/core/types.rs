/*!
 * Core Types
 * Priority keys and the extraction-order policy
 */

use serde::{Deserialize, Serialize};

/// Priority key type (full signed 64-bit range)
///
/// Priorities are unique within a queue: enqueueing a priority that is
/// already present overwrites the stored value instead of adding an entry.
pub type Priority = i64;

/// Extraction order, fixed when a queue is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractOrder {
    /// Dequeue and peek yield the entry with the numerically largest priority
    MaxFirst,
    /// Dequeue and peek yield the entry with the numerically smallest priority
    MinFirst,
}

impl ExtractOrder {
    /// Whether priority `a` is extracted before priority `b` under this order.
    ///
    /// A pure comparator sign flip: `a > b` for [`MaxFirst`](Self::MaxFirst),
    /// `a < b` for [`MinFirst`](Self::MinFirst). Strict, so equal priorities
    /// never outrank each other (they cannot coexist in one queue anyway).
    pub fn outranks(self, a: Priority, b: Priority) -> bool {
        match self {
            ExtractOrder::MaxFirst => a > b,
            ExtractOrder::MinFirst => a < b,
        }
    }

    /// True for the min-first order (the reverse of the default)
    pub fn is_reversed(self) -> bool {
        matches!(self, ExtractOrder::MinFirst)
    }
}

impl Default for ExtractOrder {
    fn default() -> Self {
        ExtractOrder::MaxFirst
    }
}
