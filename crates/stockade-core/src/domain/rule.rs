use serde::{Deserialize, Serialize};

use crate::{ValidationError, Value, ValueKind};

/// A single immutable constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// Candidate's runtime kind must equal the expected kind.
    Typed(ValueKind),
    /// Candidate must compare `>= 0` against zero.
    NonNegative,
    /// Candidate's char count must be strictly less than `max`.
    MaxLength { max: usize },
}

impl FieldRule {
    /// Declare a max-length rule.
    ///
    /// The limit must admit at least one value; a zero limit is reported at
    /// declaration time, before any schema or record uses the rule.
    pub fn max_length(max: usize) -> Result<Self, ValidationError> {
        if max == 0 {
            return Err(ValidationError::MisconfiguredRule {
                rule: "max_length",
                reason: "limit must be at least 1",
            });
        }
        Ok(Self::MaxLength { max })
    }

    /// Check `candidate` against this rule for the named field.
    ///
    /// The candidate is never mutated; the only outcome is the
    /// accept/reject decision.
    pub fn check(&self, field: &str, candidate: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Typed(expected) => {
                if candidate.kind() != *expected {
                    return Err(ValidationError::TypeMismatch {
                        field: field.to_owned(),
                        expected: expected.as_str(),
                        actual: candidate.kind(),
                    });
                }
                Ok(())
            }
            Self::NonNegative => match candidate {
                Value::Int(value) if *value >= 0 => Ok(()),
                // NaN fails the comparison and is rejected with the rest.
                Value::Float(value) if *value >= 0.0 => Ok(()),
                Value::Int(_) | Value::Float(_) => Err(ValidationError::NegativeValue {
                    field: field.to_owned(),
                }),
                Value::Str(_) => Err(ValidationError::TypeMismatch {
                    field: field.to_owned(),
                    expected: "int or float",
                    actual: candidate.kind(),
                }),
            },
            Self::MaxLength { max } => match candidate {
                Value::Str(value) => {
                    let len = value.chars().count();
                    if len >= *max {
                        return Err(ValidationError::TooLong {
                            field: field.to_owned(),
                            len,
                            max: *max,
                        });
                    }
                    Ok(())
                }
                _ => Err(ValidationError::TypeMismatch {
                    field: field.to_owned(),
                    expected: "str",
                    actual: candidate.kind(),
                }),
            },
        }
    }
}

/// Ordered composition of rules for one field.
///
/// Rules apply in declared order; the first failure short-circuits and is
/// the rejection surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet(Vec<FieldRule>);

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self(rules)
    }

    pub fn integer() -> Self {
        Self(vec![FieldRule::Typed(ValueKind::Int)])
    }

    pub fn float() -> Self {
        Self(vec![FieldRule::Typed(ValueKind::Float)])
    }

    pub fn string() -> Self {
        Self(vec![FieldRule::Typed(ValueKind::Str)])
    }

    /// Non-negative integer.
    pub fn unsigned_int() -> Self {
        Self(vec![FieldRule::Typed(ValueKind::Int), FieldRule::NonNegative])
    }

    /// Non-negative float.
    pub fn unsigned_float() -> Self {
        Self(vec![
            FieldRule::Typed(ValueKind::Float),
            FieldRule::NonNegative,
        ])
    }

    /// String strictly shorter than `max` chars.
    pub fn sized_string(max: usize) -> Result<Self, ValidationError> {
        Ok(Self(vec![
            FieldRule::Typed(ValueKind::Str),
            FieldRule::max_length(max)?,
        ]))
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.0
    }

    /// Run the composed rules against `candidate` for the named field.
    pub fn check(&self, field: &str, candidate: &Value) -> Result<(), ValidationError> {
        for rule in &self.0 {
            rule.check(field, candidate)?;
        }
        Ok(())
    }
}
