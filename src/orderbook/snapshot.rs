//! Owned depth views of the book.

use serde::{Deserialize, Serialize};

/// Aggregate of one price level as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// The level's price.
    pub price: f64,
    /// Total open quantity resting at this price.
    pub quantity: u64,
    /// Number of orders queued at this price.
    pub order_count: usize,
}

/// Top-of-book depth: bids in descending price order, asks ascending.
///
/// The snapshot is an owned copy and does not track later book mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// Symbol of the book the snapshot was taken from.
    pub symbol: String,
    /// Capture timestamp in milliseconds.
    pub timestamp: u64,
    /// Bid levels, most competitive (highest) first.
    pub bids: Vec<DepthLevel>,
    /// Ask levels, most competitive (lowest) first.
    pub asks: Vec<DepthLevel>,
}
