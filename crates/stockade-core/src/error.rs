use thiserror::Error;

use crate::ValueKind;

/// Validation and contract errors exposed by `stockade-core`.
///
/// Every failure is surfaced synchronously to the caller that attempted the
/// mutating or configuring operation. There is no partial commit: a rejected
/// write leaves the previously stored value in place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: ValueKind,
    },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: String },
    #[error("field '{field}' length {len} must be < {max}")]
    TooLong {
        field: String,
        len: usize,
        max: usize,
    },

    #[error("field '{field}' was never set")]
    UninitializedField { field: String },
    #[error("no field named '{field}' is declared")]
    UnknownField { field: String },

    #[error("rule '{rule}' is misconfigured: {reason}")]
    MisconfiguredRule {
        rule: &'static str,
        reason: &'static str,
    },

    #[error("expected {expected} initial values, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("field '{field}' supplied more than once")]
    DuplicateField { field: String },
}
