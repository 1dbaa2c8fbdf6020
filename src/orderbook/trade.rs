//! Trade records produced by the matching engine.

use serde::{Deserialize, Serialize};

/// One execution between a buyer and a seller. Immutable once recorded;
/// the book's trade log is append-only, so indices into it are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Engine-assigned identifier, `TRADE-` plus an 8-digit zero-padded
    /// sequence number, unique within a book's lifetime.
    pub trade_id: String,
    /// Order id of the buy side of this execution.
    pub buy_order_id: String,
    /// User id of the buy side.
    pub buy_user_id: String,
    /// Order id of the sell side of this execution.
    pub sell_order_id: String,
    /// User id of the sell side.
    pub sell_user_id: String,
    /// Executed quantity, always positive.
    pub size: u64,
    /// Execution price: the resting order's limit price.
    pub price: f64,
    /// Execution timestamp in milliseconds.
    pub timestamp: u64,
}
