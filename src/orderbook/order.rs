//! Order value type and side tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::OrderBookError;
use crate::utils::current_time_millis;

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side.
    Buy,
    /// Ask side.
    Sell,
}

impl Side {
    /// The side this one trades against.
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A day limit order. Copied by value at every API boundary; the book keeps
/// its own copies of resting orders and never hands out mutable access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned identifier, unique among live orders in a book.
    pub order_id: String,
    /// Identifier of the submitting user.
    pub user_id: String,
    /// Buy or sell.
    pub side: Side,
    /// Limit price. Must be finite and positive; compared by exact bit
    /// equality when locating a price level.
    pub price: f64,
    /// Remaining open quantity. Decreases as the order fills.
    pub quantity: u64,
    /// Admission timestamp in milliseconds.
    pub timestamp: u64,
}

impl Order {
    /// Build an order stamped with the current time.
    pub fn new(
        order_id: impl Into<String>,
        user_id: impl Into<String>,
        side: Side,
        price: f64,
        quantity: u64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            user_id: user_id.into(),
            side,
            price,
            quantity,
            timestamp: current_time_millis(),
        }
    }

    /// Admission checks: positive finite price, positive quantity, non-empty
    /// identifiers.
    pub(crate) fn validate(&self) -> Result<(), OrderBookError> {
        if self.order_id.is_empty() {
            return Err(OrderBookError::MissingOrderId);
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(OrderBookError::InvalidPrice { price: self.price });
        }
        if self.quantity == 0 {
            return Err(OrderBookError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}
