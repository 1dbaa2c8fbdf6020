//! CSV driver behaviour over a live book.

use limitbook::csv::{self, Command, parse_command};
use limitbook::{OrderBook, Side, Trade};

fn run_script(script: &str) -> (OrderBook, String) {
    let mut book = OrderBook::new("TEST");
    let mut out = Vec::new();
    csv::run(&mut book, script.as_bytes(), &mut out).unwrap();
    (book, String::from_utf8(out).unwrap())
}

#[test]
fn add_and_query_best_prices() {
    let (_, output) = run_script(
        "ADD,b1,bob,buy,99,50\n\
         ADD,a1,alice,sell,101,100\n\
         SHOW_BEST\n\
         BEST_BID\n\
         BEST_ASK\n",
    );
    assert_eq!(output, "BEST,99,101\nBEST_BID,99\nBEST_ASK,101\n");
}

#[test]
fn crossing_add_prints_each_trade() {
    let (book, output) = run_script(
        "ADD,a1,alice,sell,100,30\n\
         ADD,a2,anna,sell,100,40\n\
         ADD,b1,bob,buy,101,50\n",
    );
    assert_eq!(book.trade_count(), 2);
    assert_eq!(
        output,
        "TRADE,TRADE-00000001,100,30,b1,a1\n\
         TRADE,TRADE-00000002,100,20,b1,a2\n"
    );
}

#[test]
fn remove_then_show_best_reports_zero() {
    let (book, output) = run_script(
        "ADD,b1,bob,buy,99,50\n\
         REMOVE,b1\n\
         SHOW_BEST\n",
    );
    assert_eq!(book.order_count(), 0);
    assert_eq!(output, "BEST,0,0\n");
}

#[test]
fn show_top_prints_both_sides_in_order() {
    let (_, output) = run_script(
        "ADD,b1,u,buy,97,10\n\
         ADD,b2,u,buy,98,20\n\
         ADD,b3,u,buy,96,30\n\
         ADD,a1,u,sell,100,5\n\
         ADD,a2,u,sell,102,15\n\
         SHOW_TOP,2\n",
    );
    assert_eq!(
        output,
        "BID,98,20\nBID,97,10\nASK,100,5\nASK,102,15\n"
    );
}

#[test]
fn get_trade_round_trips_through_json() {
    let (_, output) = run_script(
        "ADD,a1,alice,sell,100,10\n\
         ADD,b1,bob,buy,100,10\n\
         GET_TRADE,TRADE-00000001\n\
         GET_TRADE,TRADE-00000099\n",
    );
    let mut lines = output.lines();
    // The crossing ADD printed its own trade line first.
    assert_eq!(lines.next(), Some("TRADE,TRADE-00000001,100,10,b1,a1"));

    let trade: Trade = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(trade.trade_id, "TRADE-00000001");
    assert_eq!(trade.buy_order_id, "b1");
    assert_eq!(trade.sell_order_id, "a1");
    assert_eq!((trade.price, trade.size), (100.0, 10));

    assert_eq!(lines.next(), Some("TRADE_NOT_FOUND,TRADE-00000099"));
}

#[test]
fn show_all_trades_emits_json_lines() {
    let (_, output) = run_script(
        "ADD,a1,alice,sell,100,10\n\
         ADD,a2,alice,sell,101,10\n\
         ADD,b1,bob,buy,101,20\n\
         SHOW_ALL_TRADES\n",
    );
    let trades: Vec<Trade> = output
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].trade_id, "TRADE-00000001");
    assert_eq!(trades[1].trade_id, "TRADE-00000002");
    assert_eq!(trades[0].price, 100.0);
    assert_eq!(trades[1].price, 101.0);
}

#[test]
fn empty_and_bad_lines_are_skipped() {
    let (book, output) = run_script(
        "\n\
         ADD,b1,bob,buy,99,50\n\
         \n\
         NO_SUCH_COMMAND,1,2\n\
         ADD,broken,bob,buy,not-a-price,50\n\
         ADD,b2,bob,buy,0,10\n\
         BEST_BID\n",
    );
    // Only the valid ADD landed; rejected and malformed lines left no state.
    assert_eq!(book.order_count(), 1);
    assert_eq!(output, "BEST_BID,99\n");
}

#[test]
fn side_parsing_is_case_insensitive_buy_or_default_sell() {
    match parse_command("ADD,x,u,BuY,1,1").unwrap() {
        Some(Command::Add { side, .. }) => assert_eq!(side, Side::Buy),
        other => panic!("unexpected parse: {other:?}"),
    }
    match parse_command("ADD,x,u,SeLl,1,1").unwrap() {
        Some(Command::Add { side, .. }) => assert_eq!(side, Side::Sell),
        other => panic!("unexpected parse: {other:?}"),
    }
}
