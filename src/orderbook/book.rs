//! Core order book: two sides, the matching loop, and the trade log.

use tracing::trace;

use super::error::OrderBookError;
use super::order::{Order, Side};
use super::side::{BookSide, Fill};
use super::snapshot::{DepthLevel, DepthSnapshot};
use super::trade::Trade;
use crate::utils::current_time_millis;

/// A single-instrument limit order book with continuous matching.
///
/// The book assumes exclusive access: all operations take `&mut self` and
/// run to completion, with no internal locking. An external harness that
/// serializes submissions per book provides any mutual exclusion needed.
///
/// Prices are `f64` values located by exact bit equality in the price
/// index. Quantize to a tick grid before submission if two producers can
/// compute the "same" price along different arithmetic paths.
///
/// # Examples
///
/// ```
/// use limitbook::{Order, OrderBook, Side};
///
/// let mut book = OrderBook::new("XYZ");
/// book.submit(Order::new("ask-1", "alice", Side::Sell, 100.0, 100))?;
/// let trades = book.submit(Order::new("bid-1", "bob", Side::Buy, 101.0, 40))?;
///
/// assert_eq!(trades.len(), 1);
/// assert_eq!(book.best_ask(), Some(100.0));
/// # Ok::<(), limitbook::OrderBookError>(())
/// ```
#[derive(Debug)]
pub struct OrderBook {
    symbol: String,
    bids: BookSide,
    asks: BookSide,
    trades: Vec<Trade>,
    next_trade_seq: u64,
}

impl OrderBook {
    /// Create an empty book for `symbol`.
    #[must_use]
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            trades: Vec::new(),
            next_trade_seq: 1,
        }
    }

    /// The symbol this book trades.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Submit a limit order.
    ///
    /// The order is validated, matched against the opposite side under
    /// price-time priority, and any unfilled remainder is rested at its
    /// limit price. One [`Trade`] is recorded per consumed counterparty,
    /// in consumption order; the returned ids index into the trade log.
    ///
    /// # Errors
    ///
    /// Rejects the order before any matching when validation fails or when
    /// `order_id` is already resting in the book ([`OrderBookError`]); the
    /// book is left untouched.
    pub fn submit(&mut self, order: Order) -> Result<Vec<String>, OrderBookError> {
        order.validate()?;
        if self.contains_order(&order.order_id) {
            return Err(OrderBookError::DuplicateOrderId {
                order_id: order.order_id.clone(),
            });
        }

        trace!(
            symbol = %self.symbol,
            order_id = %order.order_id,
            side = %order.side,
            price = order.price,
            quantity = order.quantity,
            "submit"
        );

        let mut incoming = order;
        let fills = match incoming.side {
            Side::Buy => self.asks.execute_against(&mut incoming),
            Side::Sell => self.bids.execute_against(&mut incoming),
        };

        let mut trade_ids = Vec::with_capacity(fills.len());
        for fill in &fills {
            trade_ids.push(self.record_trade(&incoming, fill));
        }

        if incoming.quantity > 0 {
            match incoming.side {
                Side::Buy => self.bids.add_resting(incoming),
                Side::Sell => self.asks.add_resting(incoming),
            }
        }

        Ok(trade_ids)
    }

    /// Synthesize and log the trade for one fill. The resting side sets
    /// the price; buyer and seller are picked from the aggressor's side.
    fn record_trade(&mut self, incoming: &Order, fill: &Fill) -> String {
        let trade_id = format!("TRADE-{:08}", self.next_trade_seq);
        self.next_trade_seq += 1;

        let (buyer, seller) = match incoming.side {
            Side::Buy => (incoming, &fill.order),
            Side::Sell => (&fill.order, incoming),
        };
        let trade = Trade {
            trade_id: trade_id.clone(),
            buy_order_id: buyer.order_id.clone(),
            buy_user_id: buyer.user_id.clone(),
            sell_order_id: seller.order_id.clone(),
            sell_user_id: seller.user_id.clone(),
            size: fill.size,
            price: fill.order.price,
            timestamp: current_time_millis(),
        };
        trace!(
            symbol = %self.symbol,
            trade_id = %trade.trade_id,
            price = trade.price,
            size = trade.size,
            "trade"
        );
        self.trades.push(trade);
        trade_id
    }

    /// Cancel a resting order by id, whichever side it rests on. Returns
    /// `false` for unknown ids with no side effect; a repeated cancel of
    /// the same id is a no-op returning `false`.
    pub fn cancel(&mut self, order_id: &str) -> bool {
        self.bids.cancel(order_id) || self.asks.cancel(order_id)
    }

    /// Highest bid price, `None` when the bid side is empty.
    #[must_use]
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.best_price()
    }

    /// Lowest ask price, `None` when the ask side is empty.
    #[must_use]
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.best_price()
    }

    /// Best ask minus best bid. `None` unless both sides are populated.
    #[must_use]
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of best bid and best ask. `None` unless both sides are
    /// populated.
    #[must_use]
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Price of the most recent trade, `None` before the first execution.
    #[must_use]
    pub fn last_trade_price(&self) -> Option<f64> {
        self.trades.last().map(|trade| trade.price)
    }

    /// Owned depth view of the top `k` levels per side; `k = 0` returns
    /// every level. Bids are sorted descending by price, asks ascending.
    #[must_use]
    pub fn depth(&self, k: usize) -> DepthSnapshot {
        DepthSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: self.bids.depth_levels(k),
            asks: self.asks.depth_levels(k),
        }
    }

    /// Top `k` levels of one side in competitiveness order.
    #[must_use]
    pub fn depth_of(&self, side: Side, k: usize) -> Vec<DepthLevel> {
        match side {
            Side::Buy => self.bids.depth_levels(k),
            Side::Sell => self.asks.depth_levels(k),
        }
    }

    /// Snapshot copy of the trade log in append order.
    #[must_use]
    pub fn trades(&self) -> Vec<Trade> {
        self.trades.clone()
    }

    /// Number of trades recorded so far.
    #[must_use]
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// Look up a trade by id. Linear scan of the log, acceptable at the
    /// volumes a single in-memory book sees.
    #[must_use]
    pub fn trade_by_id(&self, trade_id: &str) -> Option<&Trade> {
        self.trades.iter().find(|trade| trade.trade_id == trade_id)
    }

    /// `true` when an order with `order_id` is resting on either side.
    #[must_use]
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.bids.contains(order_id) || self.asks.contains(order_id)
    }

    /// Resolve a resting order by id, whichever side it rests on.
    #[must_use]
    pub fn find_order(&self, order_id: &str) -> Option<&Order> {
        self.bids
            .find_order(order_id)
            .or_else(|| self.asks.find_order(order_id))
    }

    /// Total resting orders across both sides.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Number of populated price levels on `side`.
    #[must_use]
    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::Buy => self.bids.level_count(),
            Side::Sell => self.asks.level_count(),
        }
    }

    /// Direct access to one side, for inspection.
    #[must_use]
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }
}
