//! End-to-end book scenarios driven through the public API.

use limitbook::{Order, OrderBook, Side};

fn order(id: &str, user: &str, side: Side, price: f64, quantity: u64) -> Order {
    Order::new(id, user, side, price, quantity)
}

#[test]
fn non_crossing_book_builds_both_sides() {
    let mut book = OrderBook::new("TEST");
    book.submit(order("ask1", "alice", Side::Sell, 101.0, 100))
        .unwrap();
    book.submit(order("bid1", "bob", Side::Buy, 99.0, 50))
        .unwrap();

    assert!(book.trades().is_empty());
    assert_eq!(book.best_bid(), Some(99.0));
    assert_eq!(book.best_ask(), Some(101.0));

    let depth = book.depth(0);
    assert_eq!(depth.bids.len(), 1);
    assert_eq!((depth.bids[0].price, depth.bids[0].quantity), (99.0, 50));
    assert_eq!(depth.asks.len(), 1);
    assert_eq!((depth.asks[0].price, depth.asks[0].quantity), (101.0, 100));
}

#[test]
fn partial_cross_leaves_the_remainder_resting() {
    let mut book = OrderBook::new("TEST");
    book.submit(order("ask1", "alice", Side::Sell, 100.0, 100))
        .unwrap();
    let trades = book
        .submit(order("bid1", "bob", Side::Buy, 101.0, 50))
        .unwrap();

    assert_eq!(trades.len(), 1);
    let trade = book.trade_by_id(&trades[0]).unwrap();
    assert_eq!(trade.size, 50);
    assert_eq!(trade.price, 100.0);
    assert_eq!(trade.buy_user_id, "bob");
    assert_eq!(trade.sell_user_id, "alice");

    assert_eq!(book.best_ask(), Some(100.0));
    assert_eq!(book.depth(1).asks[0].quantity, 50);
    assert_eq!(book.best_bid(), None);
}

#[test]
fn follow_up_bid_finishes_the_ask_and_rests() {
    let mut book = OrderBook::new("TEST");
    book.submit(order("ask1", "alice", Side::Sell, 100.0, 100))
        .unwrap();
    book.submit(order("bid1", "bob", Side::Buy, 101.0, 50))
        .unwrap();

    let trades = book
        .submit(order("bid2", "bob", Side::Buy, 101.0, 100))
        .unwrap();
    assert_eq!(trades.len(), 1);
    let trade = book.trade_by_id(&trades[0]).unwrap();
    assert_eq!((trade.size, trade.price), (50, 100.0));

    assert_eq!(book.best_ask(), None);
    assert_eq!(book.best_bid(), Some(101.0));
    assert_eq!(book.depth(1).bids[0].quantity, 50);
}

#[test]
fn fifo_fills_inside_one_level() {
    let mut book = OrderBook::new("TEST");
    book.submit(order("a1", "m1", Side::Sell, 100.0, 30))
        .unwrap();
    book.submit(order("a2", "m2", Side::Sell, 100.0, 40))
        .unwrap();
    book.submit(order("a3", "m3", Side::Sell, 100.0, 50))
        .unwrap();

    let trades = book
        .submit(order("b1", "taker", Side::Buy, 101.0, 50))
        .unwrap();
    assert_eq!(trades.len(), 2);

    let first = book.trade_by_id(&trades[0]).unwrap();
    let second = book.trade_by_id(&trades[1]).unwrap();
    assert_eq!((first.sell_order_id.as_str(), first.size), ("a1", 30));
    assert_eq!((second.sell_order_id.as_str(), second.size), ("a2", 20));

    let depth = book.depth(0);
    assert_eq!(depth.asks.len(), 1);
    assert_eq!(depth.asks[0].quantity, 70);
    assert_eq!(depth.asks[0].order_count, 2);
}

#[test]
fn cancelled_bid_cannot_fill() {
    let mut book = OrderBook::new("TEST");
    book.submit(order("bid1", "bob", Side::Buy, 99.0, 100))
        .unwrap();
    assert!(book.cancel("bid1"));

    let trades = book
        .submit(order("ask1", "alice", Side::Sell, 99.0, 10))
        .unwrap();
    assert!(trades.is_empty());
    assert_eq!(book.best_ask(), Some(99.0));
    assert_eq!(book.best_bid(), None);
}

#[test]
fn top_two_depth_after_shuffled_inserts() {
    let mut book = OrderBook::new("TEST");
    for (id, price) in [("b96", 96.0), ("b98", 98.0), ("b95", 95.0), ("b97", 97.0)] {
        book.submit(order(id, "u", Side::Buy, price, 10)).unwrap();
    }
    for (id, price) in [
        ("a102", 102.0),
        ("a100", 100.0),
        ("a103", 103.0),
        ("a101", 101.0),
    ] {
        book.submit(order(id, "u", Side::Sell, price, 10)).unwrap();
    }

    let depth = book.depth(2);
    let bid_prices: Vec<f64> = depth.bids.iter().map(|l| l.price).collect();
    let ask_prices: Vec<f64> = depth.asks.iter().map(|l| l.price).collect();
    assert_eq!(bid_prices, vec![98.0, 97.0]);
    assert_eq!(ask_prices, vec![100.0, 101.0]);
}

#[test]
fn generated_order_ids_are_accepted() {
    let mut book = OrderBook::new("TEST");
    let id = limitbook::new_order_id();
    assert_eq!(id.len(), 36);
    book.submit(order(&id, "alice", Side::Buy, 50.0, 1)).unwrap();
    assert!(book.contains_order(&id));
}

#[test]
fn trade_lookup_misses_return_none() {
    let mut book = OrderBook::new("TEST");
    book.submit(order("a", "u", Side::Sell, 100.0, 10)).unwrap();
    book.submit(order("b", "u2", Side::Buy, 100.0, 10)).unwrap();

    assert!(book.trade_by_id("TRADE-00000001").is_some());
    assert!(book.trade_by_id("TRADE-00000002").is_none());
    assert!(book.trade_by_id("bogus").is_none());
}
