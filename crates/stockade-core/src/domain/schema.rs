use std::sync::Arc;

use crate::{RuleSet, ValidationError, Value};

/// Binds each declared field name to its rule set.
///
/// A schema is built once per record type and shared by every instance; the
/// name-to-rules association is fixed for the lifetime of the type. Field
/// order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(String, RuleSet)>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Rule set bound to `name`, if declared.
    pub fn rules(&self, name: &str) -> Option<&RuleSet> {
        self.fields
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, rules)| rules)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(declared, _)| declared == name)
    }

    pub(crate) fn field_name(&self, index: usize) -> &str {
        &self.fields[index].0
    }

    /// Run the rule set bound to `name` against `candidate`.
    pub fn validate(&self, name: &str, candidate: &Value) -> Result<(), ValidationError> {
        let Some(index) = self.position(name) else {
            return Err(ValidationError::UnknownField {
                field: name.to_owned(),
            });
        };
        self.fields[index].1.check(name, candidate)
    }
}

/// Registers field declarations for a [`Schema`].
///
/// Re-declaring a name overwrites the earlier rule set in place: the last
/// declaration wins and the field keeps its original position.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, RuleSet)>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        let name = name.into();
        if let Some(index) = self.fields.iter().position(|(declared, _)| *declared == name) {
            self.fields[index].1 = rules;
        } else {
            self.fields.push((name, rules));
        }
        self
    }

    pub fn build(self) -> Arc<Schema> {
        Arc::new(Schema {
            fields: self.fields,
        })
    }
}
