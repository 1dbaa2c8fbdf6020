//! One side of the book: price-ordered levels plus the id index over them.

use tracing::trace;

use super::id_index::OrderIdIndex;
use super::level::PriceLevel;
use super::order::{Order, Side};
use super::price_index::PriceTree;
use super::snapshot::DepthLevel;

/// The consumption of one resting counterparty by an incoming order.
///
/// `order` is a snapshot of the counterparty at fill time with `quantity`
/// set to the executed size; the remaining fields are the counterparty's.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// Counterparty snapshot. `order.quantity == size`.
    pub order: Order,
    /// Executed quantity.
    pub size: u64,
}

/// One side of a book. Owns a [`PriceLevel`] per distinct price through its
/// ordered price index and keeps an id index alongside for cancellation.
///
/// The side's [`Side`] tag selects the competitiveness direction: the best
/// bid is the maximum price, the best ask the minimum. The same tag drives
/// the cross predicate when this side is consumed by an incoming order of
/// the opposite side.
#[derive(Debug)]
pub struct BookSide {
    side: Side,
    levels: PriceTree<PriceLevel>,
    ids: OrderIdIndex,
}

impl BookSide {
    /// Create an empty side.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: PriceTree::new(),
            ids: OrderIdIndex::new(),
        }
    }

    /// Which side this is.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of resting orders across all levels.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of distinct price levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// `true` when an order with `order_id` rests on this side.
    #[must_use]
    pub fn contains(&self, order_id: &str) -> bool {
        self.ids.get(order_id).is_some()
    }

    /// The level at exactly `price`, if one exists.
    #[must_use]
    pub fn level(&self, price: f64) -> Option<&PriceLevel> {
        self.levels.get(price)
    }

    /// Resolve a resting order by id.
    #[must_use]
    pub fn find_order(&self, order_id: &str) -> Option<&Order> {
        let price = self.ids.get(order_id)?;
        self.levels.get(price)?.find_by_id(order_id)
    }

    /// Most competitive price: maximum for the bid side, minimum for the
    /// ask side. `None` when the side is empty.
    #[must_use]
    pub fn best_price(&self) -> Option<f64> {
        let entry = match self.side {
            Side::Buy => self.levels.max(),
            Side::Sell => self.levels.min(),
        };
        entry.map(|(price, _)| price)
    }

    /// Rest `order` on this side: locate or create its price level, append
    /// at the tail, and register the id. The order must already be
    /// validated and must carry this side's tag.
    pub fn add_resting(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side);
        let price = order.price;
        let order_id = order.order_id.clone();

        match self.levels.get_mut(price) {
            Some(level) => level.add_order(order),
            None => {
                let mut level = PriceLevel::new(price);
                level.add_order(order);
                self.levels.insert(price, level);
            }
        }
        self.ids.add(&order_id, price);
        trace!(side = %self.side, order_id = %order_id, price, "order rested");
    }

    /// Cancel the resting order with `order_id`. The id resolves through
    /// the id index to its level; the level that empties is evicted in the
    /// same call. Returns `false` for unknown ids, with no side effect.
    pub fn cancel(&mut self, order_id: &str) -> bool {
        let Some(price) = self.ids.get(order_id) else {
            return false;
        };
        let Some(level) = self.levels.get_mut(price) else {
            return false;
        };
        if !level.delete_by_id(order_id) {
            return false;
        }
        self.ids.remove(order_id);
        if level.is_empty() {
            self.levels.remove(price);
        }
        trace!(side = %self.side, order_id, price, "order cancelled");
        true
    }

    /// `true` when a resting level at `level_price` is crossed by an
    /// incoming opposite-side order limited at `incoming_price`. Equal
    /// prices cross.
    fn crosses(&self, level_price: f64, incoming_price: f64) -> bool {
        match self.side {
            Side::Buy => level_price >= incoming_price,
            Side::Sell => level_price <= incoming_price,
        }
    }

    /// Execute `incoming` against this side under price-time priority.
    ///
    /// Walks the most competitive levels first and, inside a level, the
    /// FIFO queue from the head. Fully consumed counterparties are popped
    /// and deregistered; a partially consumed head is reduced in place.
    /// Levels that empty are evicted before moving on. `incoming.quantity`
    /// is reduced by the total executed size; the caller rests any
    /// remainder on the opposite side.
    ///
    /// Returns the fills in execution order (strict price priority, then
    /// arrival order within a price).
    pub fn execute_against(&mut self, incoming: &mut Order) -> Vec<Fill> {
        debug_assert_eq!(incoming.side, self.side.opposite());
        let mut fills = Vec::new();

        while incoming.quantity > 0 {
            let Some(best_price) = self.best_price() else {
                break;
            };
            if !self.crosses(best_price, incoming.price) {
                break;
            }
            let Some(level) = self.levels.get_mut(best_price) else {
                break;
            };

            while incoming.quantity > 0 {
                let Some(head) = level.peek_head() else {
                    break;
                };
                let mut counterparty = head.clone();
                let fill = counterparty.quantity.min(incoming.quantity);
                incoming.quantity -= fill;

                if fill == counterparty.quantity {
                    level.pop_head();
                    self.ids.remove(&counterparty.order_id);
                } else {
                    level.fill_head(fill);
                    counterparty.quantity = fill;
                }
                trace!(
                    side = %self.side,
                    maker = %counterparty.order_id,
                    taker = %incoming.order_id,
                    price = best_price,
                    size = fill,
                    "fill"
                );
                fills.push(Fill {
                    order: counterparty,
                    size: fill,
                });
            }

            let emptied = self
                .levels
                .get(best_price)
                .is_none_or(PriceLevel::is_empty);
            if emptied {
                self.levels.remove(best_price);
            }
        }

        fills
    }

    /// The top `k` levels in competitiveness order: descending prices for
    /// the bid side, ascending for the ask side. `k = 0` returns every
    /// level. Walks a back-cursor on the bid side and a front-cursor on
    /// the ask side.
    #[must_use]
    pub fn depth_levels(&self, k: usize) -> Vec<DepthLevel> {
        let limit = if k == 0 { usize::MAX } else { k };
        let mut out = Vec::new();
        let mut cursor = match self.side {
            Side::Buy => self.levels.back(),
            Side::Sell => self.levels.front(),
        };

        while out.len() < limit {
            let Some((price, level)) = self.levels.entry(&cursor) else {
                break;
            };
            out.push(DepthLevel {
                price,
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            });
            let alive = match self.side {
                Side::Buy => self.levels.prev(&mut cursor),
                Side::Sell => self.levels.next(&mut cursor),
            };
            if !alive {
                break;
            }
        }

        out
    }

    /// Iterate levels in ascending price order, regardless of side.
    pub(crate) fn levels_ascending(&self) -> impl Iterator<Item = (f64, &PriceLevel)> {
        self.levels.iter()
    }
}
