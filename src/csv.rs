//! CSV command surface over an [`OrderBook`].
//!
//! One command per line, comma separated:
//!
//! ```text
//! ADD,order_id,user_id,side,price,quantity
//! REMOVE,order_id
//! SHOW_BEST
//! BEST_BID
//! BEST_ASK
//! SHOW_TOP,k
//! SHOW_ALL_TRADES
//! GET_TRADE,trade_id
//! ```
//!
//! `side` is "buy" case-insensitively; anything else is treated as sell.
//! Empty lines are skipped. A malformed or unknown command emits a warning
//! diagnostic and processing continues with the next line. Query output is
//! written to the supplied writer; absent best prices print as `0`.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::orderbook::{Order, OrderBook, Side};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit a limit order.
    Add {
        /// Caller-assigned order id.
        order_id: String,
        /// Submitting user.
        user_id: String,
        /// Buy or sell.
        side: Side,
        /// Limit price.
        price: f64,
        /// Order quantity.
        quantity: u64,
    },
    /// Cancel a resting order.
    Remove {
        /// Id of the order to cancel.
        order_id: String,
    },
    /// Print best bid and best ask on one line.
    ShowBest,
    /// Print the best bid.
    BestBid,
    /// Print the best ask.
    BestAsk,
    /// Print the top `levels` price levels per side; `0` prints all.
    ShowTop {
        /// Number of levels per side.
        levels: usize,
    },
    /// Print every recorded trade, one JSON object per line.
    ShowAllTrades,
    /// Print one trade by id.
    GetTrade {
        /// Id of the trade to print.
        trade_id: String,
    },
}

/// Parse failures for a single command line.
#[derive(Debug)]
#[non_exhaustive]
pub enum CsvError {
    /// The line's leading token is not a known command.
    UnknownCommand {
        /// The offending token.
        command: String,
    },

    /// A required field is absent.
    MissingField {
        /// The command being parsed.
        command: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A numeric field failed to parse.
    InvalidNumber {
        /// The field being parsed.
        field: &'static str,
        /// The raw text.
        value: String,
    },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::UnknownCommand { command } => write!(f, "unknown command: {command}"),
            CsvError::MissingField { command, field } => {
                write!(f, "{command}: missing field {field}")
            }
            CsvError::InvalidNumber { field, value } => {
                write!(f, "invalid number for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for CsvError {}

fn required<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    field: &'static str,
) -> Result<&'a str, CsvError> {
    match fields.next().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CsvError::MissingField { command, field }),
    }
}

/// Parse one line. Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, CsvError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',');
    let command = fields.next().map(str::trim).unwrap_or_default();

    let parsed = match command {
        "ADD" => {
            let order_id = required(&mut fields, "ADD", "order_id")?.to_string();
            let user_id = required(&mut fields, "ADD", "user_id")?.to_string();
            let side_text = required(&mut fields, "ADD", "side")?;
            let side = if side_text.eq_ignore_ascii_case("buy") {
                Side::Buy
            } else {
                Side::Sell
            };
            let price_text = required(&mut fields, "ADD", "price")?;
            let price = price_text
                .parse::<f64>()
                .map_err(|_| CsvError::InvalidNumber {
                    field: "price",
                    value: price_text.to_string(),
                })?;
            let quantity_text = required(&mut fields, "ADD", "quantity")?;
            let quantity = quantity_text
                .parse::<u64>()
                .map_err(|_| CsvError::InvalidNumber {
                    field: "quantity",
                    value: quantity_text.to_string(),
                })?;
            Command::Add {
                order_id,
                user_id,
                side,
                price,
                quantity,
            }
        }
        "REMOVE" => Command::Remove {
            order_id: required(&mut fields, "REMOVE", "order_id")?.to_string(),
        },
        "SHOW_BEST" => Command::ShowBest,
        "BEST_BID" => Command::BestBid,
        "BEST_ASK" => Command::BestAsk,
        "SHOW_TOP" => {
            let levels_text = required(&mut fields, "SHOW_TOP", "k")?;
            let levels = levels_text
                .parse::<usize>()
                .map_err(|_| CsvError::InvalidNumber {
                    field: "k",
                    value: levels_text.to_string(),
                })?;
            Command::ShowTop { levels }
        }
        "SHOW_ALL_TRADES" => Command::ShowAllTrades,
        "GET_TRADE" => Command::GetTrade {
            trade_id: required(&mut fields, "GET_TRADE", "trade_id")?.to_string(),
        },
        other => {
            return Err(CsvError::UnknownCommand {
                command: other.to_string(),
            });
        }
    };

    Ok(Some(parsed))
}

fn price_or_zero(price: Option<f64>) -> f64 {
    price.unwrap_or(0.0)
}

fn to_json_line<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string(value).map_err(io::Error::other)
}

/// Apply one command to `book`, writing any query output to `out`.
pub fn apply<W: Write>(book: &mut OrderBook, command: Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Add {
            order_id,
            user_id,
            side,
            price,
            quantity,
        } => {
            let order = Order::new(order_id, user_id, side, price, quantity);
            match book.submit(order) {
                Ok(trade_ids) => {
                    for trade_id in trade_ids {
                        if let Some(trade) = book.trade_by_id(&trade_id) {
                            writeln!(
                                out,
                                "TRADE,{},{},{},{},{}",
                                trade.trade_id,
                                trade.price,
                                trade.size,
                                trade.buy_order_id,
                                trade.sell_order_id
                            )?;
                        }
                    }
                }
                Err(err) => warn!(%err, "order rejected"),
            }
        }
        Command::Remove { order_id } => {
            book.cancel(&order_id);
        }
        Command::ShowBest => {
            writeln!(
                out,
                "BEST,{},{}",
                price_or_zero(book.best_bid()),
                price_or_zero(book.best_ask())
            )?;
        }
        Command::BestBid => {
            writeln!(out, "BEST_BID,{}", price_or_zero(book.best_bid()))?;
        }
        Command::BestAsk => {
            writeln!(out, "BEST_ASK,{}", price_or_zero(book.best_ask()))?;
        }
        Command::ShowTop { levels } => {
            let depth = book.depth(levels);
            for level in &depth.bids {
                writeln!(out, "BID,{},{}", level.price, level.quantity)?;
            }
            for level in &depth.asks {
                writeln!(out, "ASK,{},{}", level.price, level.quantity)?;
            }
        }
        Command::ShowAllTrades => {
            for trade in book.trades() {
                writeln!(out, "{}", to_json_line(&trade)?)?;
            }
        }
        Command::GetTrade { trade_id } => match book.trade_by_id(&trade_id) {
            Some(trade) => writeln!(out, "{}", to_json_line(trade)?)?,
            None => writeln!(out, "TRADE_NOT_FOUND,{trade_id}")?,
        },
    }
    Ok(())
}

/// Drive `book` from a line-oriented command stream.
///
/// Bad lines are reported on the warn log and skipped; only I/O failures
/// abort the run.
pub fn run<R: BufRead, W: Write>(book: &mut OrderBook, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => apply(book, command, out)?,
            Ok(None) => {}
            Err(err) => warn!(%err, line = %line, "skipping line"),
        }
    }
    Ok(())
}
