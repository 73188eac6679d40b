/*!
 * Queue Rendering
 * Display and Debug formatting, entries shown in extraction order
 */

use std::fmt;

use super::PriorityQueue;

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    /// Render as `{priority: value, ...}` in extraction order, `{}` when
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (priority, value)) in self.ordered_entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", priority, value)?;
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.ordered_entries()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ExtractOrder;

    #[test]
    fn display_empty_queue() {
        let queue: PriorityQueue<String> = PriorityQueue::new();
        assert_eq!(queue.to_string(), "{}");
    }

    #[test]
    fn display_follows_extraction_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("mid", 5);
        queue.enqueue("top", 9);
        queue.enqueue("bottom", 1);

        assert_eq!(queue.to_string(), "{9: top, 5: mid, 1: bottom}");
    }

    #[test]
    fn display_respects_min_first() {
        let mut queue = PriorityQueue::with_order(ExtractOrder::MinFirst);
        queue.enqueue(30, 3);
        queue.enqueue(10, 1);

        assert_eq!(queue.to_string(), "{1: 10, 3: 30}");
    }

    #[test]
    fn debug_renders_as_map() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("high", 9);
        queue.enqueue("low", 2);

        assert_eq!(format!("{:?}", queue), r#"{9: "high", 2: "low"}"#);
    }
}
