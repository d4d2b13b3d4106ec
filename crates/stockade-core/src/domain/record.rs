use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Schema, ValidationError, Value};

/// A record instance whose fields are gated by a [`Schema`].
///
/// Each field is either unset or holds a value that passed its rules; a
/// rejected write leaves storage untouched. Instances own their storage
/// exclusively and define single-threaded semantics only.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Option<Value>>,
}

impl Record {
    /// A record with every declared field unset.
    pub fn empty(schema: Arc<Schema>) -> Self {
        let values = vec![None; schema.len()];
        Self { schema, values }
    }

    /// Construct from one value per declared field, in declaration order.
    ///
    /// Every field is set through validation; the first rejection aborts
    /// construction and no instance is returned.
    pub fn from_values(
        schema: Arc<Schema>,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, ValidationError> {
        let values: Vec<Value> = values.into_iter().collect();
        if values.len() != schema.len() {
            return Err(ValidationError::ArityMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }

        let mut record = Self::empty(schema);
        for (index, value) in values.into_iter().enumerate() {
            record.set_at(index, value)?;
        }
        Ok(record)
    }

    /// Construct from `(name, value)` pairs.
    ///
    /// Every declared field must be supplied exactly once. Validation runs
    /// in declaration order regardless of the order pairs arrive in.
    pub fn from_named<N>(
        schema: Arc<Schema>,
        pairs: impl IntoIterator<Item = (N, Value)>,
    ) -> Result<Self, ValidationError>
    where
        N: Into<String>,
    {
        let mut supplied: Vec<Option<Value>> = vec![None; schema.len()];
        let mut count = 0usize;
        for (name, value) in pairs {
            let name = name.into();
            let Some(index) = schema.position(&name) else {
                return Err(ValidationError::UnknownField { field: name });
            };
            if supplied[index].is_some() {
                return Err(ValidationError::DuplicateField { field: name });
            }
            supplied[index] = Some(value);
            count += 1;
        }
        if count != schema.len() {
            return Err(ValidationError::ArityMismatch {
                expected: schema.len(),
                actual: count,
            });
        }

        let mut record = Self::empty(schema);
        for (index, value) in supplied.into_iter().enumerate() {
            if let Some(value) = value {
                record.set_at(index, value)?;
            }
        }
        Ok(record)
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Validate `value` against the rules bound to `name`, then store it.
    ///
    /// All-or-nothing: on rejection the previously stored value survives and
    /// the specific rejection propagates.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        let Some(index) = self.schema.position(name) else {
            return Err(ValidationError::UnknownField {
                field: name.to_owned(),
            });
        };
        self.set_at(index, value.into())
    }

    /// Currently stored value for `name`.
    pub fn get(&self, name: &str) -> Result<&Value, ValidationError> {
        let Some(index) = self.schema.position(name) else {
            return Err(ValidationError::UnknownField {
                field: name.to_owned(),
            });
        };
        self.values[index]
            .as_ref()
            .ok_or_else(|| ValidationError::UninitializedField {
                field: name.to_owned(),
            })
    }

    /// True once every declared field has been set.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    fn set_at(&mut self, index: usize, value: Value) -> Result<(), ValidationError> {
        let schema = Arc::clone(&self.schema);
        schema.validate(schema.field_name(index), &value)?;
        self.values[index] = Some(value);
        Ok(())
    }
}

// Serializes as an object in declaration order; unset fields are omitted.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let set = self.values.iter().filter(|slot| slot.is_some()).count();
        let mut map = serializer.serialize_map(Some(set))?;
        for (name, slot) in self.schema.fields().zip(&self.values) {
            if let Some(value) = slot {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}
