//! # Domain Model
//!
//! Constrained-field records and the rules that gate them.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Value`] | Dynamically typed field value (int, float, str) |
//! | [`ValueKind`] | Runtime tag of a value |
//! | [`FieldRule`] | One constraint (type check, non-negative, max length) |
//! | [`RuleSet`] | Ordered rule composition with first-failure short-circuit |
//! | [`Schema`] | Field name to rule-set binding, fixed at definition time |
//! | [`Record`] | Instance storage where every write passes validation |
//!
//! Construction validates all invariants: a [`Record`] built through
//! [`Record::from_values`] or [`Record::from_named`] is never observable
//! with a field value that failed its rules.

mod record;
mod rule;
mod schema;
mod stock;
mod value;

pub use record::Record;
pub use rule::{FieldRule, RuleSet};
pub use schema::{Schema, SchemaBuilder};
pub use stock::{stock_record, stock_schema};
pub use value::{Value, ValueKind};
