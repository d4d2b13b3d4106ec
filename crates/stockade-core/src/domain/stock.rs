//! Worked example: a stock holding record.
//!
//! Three constrained fields: a ticker `tag` strictly shorter than 5 chars,
//! a non-negative integer `shares` count, and a non-negative float `price`.

use std::sync::Arc;

use crate::{Record, RuleSet, Schema, ValidationError, Value};

const MAX_TAG_LEN: usize = 5;

/// Schema for a stock holding.
pub fn stock_schema() -> Result<Arc<Schema>, ValidationError> {
    Ok(Schema::builder()
        .field("tag", RuleSet::sized_string(MAX_TAG_LEN)?)
        .field("shares", RuleSet::unsigned_int())
        .field("price", RuleSet::unsigned_float())
        .build())
}

/// Construct a validated stock holding.
pub fn stock_record(tag: &str, shares: i64, price: f64) -> Result<Record, ValidationError> {
    let schema = stock_schema()?;
    Record::from_values(
        schema,
        [Value::from(tag), Value::from(shares), Value::from(price)],
    )
}
