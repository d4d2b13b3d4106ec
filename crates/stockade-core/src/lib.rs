//! Core contracts for stockade.
//!
//! This crate contains:
//! - A dynamically typed value model and its runtime kind tags
//! - Field rules and ordered rule sets with first-failure short-circuit
//! - Schemas binding field names to rules at type-definition time
//! - Records whose every field write is gated by its schema
//!
//! All operations are synchronous, constant-time value checks; rejections
//! surface as [`ValidationError`] and never leave partial state behind.

pub mod domain;
pub mod error;

pub use domain::{
    stock_record, stock_schema, FieldRule, Record, RuleSet, Schema, SchemaBuilder, Value,
    ValueKind,
};
pub use error::ValidationError;
