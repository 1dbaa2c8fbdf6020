//! Small shared utilities.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Milliseconds since the Unix epoch, used for order and trade timestamps.
#[must_use]
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// A fresh 36-character order identifier (hyphenated UUID v4).
#[must_use]
pub fn new_order_id() -> String {
    Uuid::new_v4().to_string()
}
