//! # Stock Holding Example
//!
//! Demonstrates schema-gated validation on the stock holding record:
//! a valid construction, the rejection scenarios, and JSON output.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example stock
//! ```

use stockade_core::{stock_record, stock_schema, Record, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A holding that passes every rule
    let mut holding = stock_record("AAPL", 100, 91.1)?;
    println!("shares: {}", holding.get("shares")?);
    println!("as json: {}", serde_json::to_string(&holding)?);

    // Each rejection names the field and the rule it broke
    for (tag, shares) in [("GOOGL", 100), ("IBM", -50)] {
        match stock_record(tag, shares, 91.1) {
            Ok(_) => println!("{tag}: accepted"),
            Err(err) => println!("{tag}: rejected: {err}"),
        }
    }

    // A rejected write leaves the previous value in place
    if let Err(err) = holding.set("price", Value::from(-1.0)) {
        println!("price update rejected: {err}");
    }
    println!("price still: {}", holding.get("price")?);

    // Fields can also be assigned one at a time
    let mut draft = Record::empty(stock_schema()?);
    draft.set("tag", "MSFT")?;
    draft.set("shares", 25)?;
    draft.set("price", 310.5)?;
    println!("draft complete: {}", draft.is_complete());

    Ok(())
}
