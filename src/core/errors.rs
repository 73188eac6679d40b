/*!
 * Error Types
 * Queue error taxonomy with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Queue operation result
pub type QueueResult<T> = Result<T, QueueError>;

/// Queue errors with serialization support
///
/// Absent lookups (`peek`, `get`, `contains` misses) are reported as
/// `Option`/`bool` returns, never as errors; an error always marks a
/// contract violation at the calling site.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Cannot dequeue from an empty queue")]
    #[diagnostic(
        code(queue::empty),
        help("Check is_empty() or peek() before dequeueing.")
    )]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueueError::Empty.to_string(),
            "Cannot dequeue from an empty queue"
        );
    }

    #[test]
    fn test_error_serializes_tagged() {
        let json = serde_json::to_string(&QueueError::Empty).unwrap();
        assert_eq!(json, r#"{"error_type":"empty"}"#);
    }
}
