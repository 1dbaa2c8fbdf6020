//! Prelude module that re-exports the commonly used types.
//!
//! ```rust
//! use limitbook::prelude::*;
//! ```

pub use crate::orderbook::{
    BookSide, DepthLevel, DepthSnapshot, Fill, Order, OrderBook, OrderBookError, PriceLevel, Side,
    Trade,
};

pub use crate::csv::{Command, CsvError};

pub use crate::utils::{current_time_millis, new_order_id};
