//! Order book error types

use std::fmt;

/// Errors that can occur when submitting orders to the book.
///
/// Cancellation and trade lookup are not error paths: unknown ids are
/// reported through `bool` / `Option` returns with no side effect.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// Order submitted with an empty order id.
    MissingOrderId,

    /// Order price is not a finite positive number.
    InvalidPrice {
        /// The price that failed validation.
        price: f64,
    },

    /// Order quantity is zero.
    InvalidQuantity {
        /// The quantity that failed validation.
        quantity: u64,
    },

    /// An order with the same id is already resting in the book. The
    /// submission is rejected before any matching takes place.
    DuplicateOrderId {
        /// The id that is already in use.
        order_id: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::MissingOrderId => write!(f, "order id must not be empty"),
            OrderBookError::InvalidPrice { price } => {
                write!(f, "invalid price: {price} is not a finite positive number")
            }
            OrderBookError::InvalidQuantity { quantity } => {
                write!(f, "invalid quantity: {quantity} must be positive")
            }
            OrderBookError::DuplicateOrderId { order_id } => {
                write!(f, "duplicate order id: {order_id} is already resting")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
