//! Worker Lambda handler for the fetch queue

pub mod handler;

// Re-export the main handler for convenience
pub use handler::{BatchSummary, handler, process_event};
