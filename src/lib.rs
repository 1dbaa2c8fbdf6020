//! # Limit Order Book with Continuous Matching
//!
//! A single-instrument limit order book for day limit orders, with an
//! integrated continuous-auction matching engine. Incoming orders cross
//! against resting liquidity under price-time priority; executions are
//! recorded in an append-only trade log with replayable identifiers; the
//! unfilled remainder rests at its limit price.
//!
//! ## Key pieces
//!
//! - **[`PriceTree`]**: an AVL-balanced sorted map from price to
//!   [`PriceLevel`], with O(log n) mutation, min/max, and key-based
//!   bidirectional cursors that survive rebalancing.
//! - **[`OrderIdIndex`]**: a djb2 separate-chaining hash table from order
//!   id to resting price, making cancellation a single-level walk.
//! - **[`PriceLevel`]**: the FIFO queue of orders at one price, with a
//!   cached aggregate quantity.
//! - **[`BookSide`]**: one side of the book, composing the three above;
//!   executes incoming flow against its levels and evicts levels that
//!   empty.
//! - **[`OrderBook`]**: two sides plus the trade log; routes crossings,
//!   assigns `TRADE-%08d` identifiers from a per-book counter, and serves
//!   top-of-book and depth queries.
//!
//! The [`csv`] module adds a line-oriented command surface (`ADD`,
//!  `REMOVE`, `SHOW_BEST`, `SHOW_TOP`, ...) used by the bundled replay
//! binary.
//!
//! ## Price representation
//!
//! Prices are binary `f64` values and the price index locates levels by
//! **exact bit equality**. Two numerically close prices computed along
//! different arithmetic paths land on different levels. This mirrors the
//! wire format the book speaks; production deployments should quantize to
//! an integer tick grid before submission.
//!
//! ## Concurrency
//!
//! A book is single-writer by construction: every operation takes
//! `&mut self`, runs synchronously, and completes in time bounded by its
//! data-structure work. Wrap the book in your own serialization layer
//! (a channel consumer, one task per book) for concurrent producers.
//!
//! ## Example
//!
//! ```
//! use limitbook::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new("XYZ");
//!
//! // Resting ask, then a crossing bid.
//! book.submit(Order::new("ask-1", "alice", Side::Sell, 100.0, 100))?;
//! let trades = book.submit(Order::new("bid-1", "bob", Side::Buy, 101.0, 50))?;
//!
//! assert_eq!(trades, vec!["TRADE-00000001".to_string()]);
//! let trade = book.trade_by_id("TRADE-00000001").unwrap();
//! assert_eq!(trade.price, 100.0); // resting side sets the price
//! assert_eq!(trade.size, 50);
//! assert_eq!(book.best_ask(), Some(100.0));
//! # Ok::<(), limitbook::OrderBookError>(())
//! ```

pub mod csv;
pub mod orderbook;
pub mod prelude;
mod utils;

pub use orderbook::{
    BookSide, DepthLevel, DepthSnapshot, Fill, Order, OrderBook, OrderBookError, OrderIdIndex,
    PriceCursor, PriceLevel, PriceTree, Side, Trade,
};
pub use utils::{current_time_millis, new_order_id};
