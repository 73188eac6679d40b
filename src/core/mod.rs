/*!
 * Core Module
 * Priority and ordering types plus the queue error taxonomy
 */

pub mod errors;
pub mod types;

// Flattened so callers can reach everything through the crate root
pub use errors::*;
pub use types::*;
