//! A decoded record: an ordered mapping from field name to value.
//!
//! Field order matches the spec that produced the record; fields added
//! later by a recode hook go to the end. Backed by a plain `Vec` of
//! pairs — specs in this domain have on the order of ten fields, and
//! iteration order matters more than lookup speed.

use crate::value::Value;

static NA: Value = Value::Na;

/// One decoded line as named, typed fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Looks up a field by name, treating an absent field as `Na`.
    ///
    /// Recode hooks read through this so they never have to distinguish
    /// "field missing" from "field unparseable".
    pub fn value(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(&NA)
    }

    /// Sets a field, overwriting in place if the name already exists or
    /// appending a new field otherwise.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in order as `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}
