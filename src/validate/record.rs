//! Validated record values.
//!
//! A `ValidatedRecord` is constructed only by successful validation and is
//! immutable afterwards: fields satisfy their declared types and constraints
//! by construction.

use serde_json::{Map, Value};

/// A typed field value inside a validated record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string
    String(String),
    /// 64-bit signed integer
    Int(i64),
    /// Boolean
    Bool(bool),
    /// 64-bit floating point
    Float(f64),
    /// Nested validated record
    Record(ValidatedRecord),
    /// Homogeneous sequence of validated values
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the nested record, if this is a record
    pub fn as_record(&self) -> Option<&ValidatedRecord> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the element slice, if this is an array
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Converts the value back to JSON.
    pub fn to_value(&self) -> Value {
        match self {
            FieldValue::String(s) => Value::from(s.clone()),
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Bool(b) => Value::from(*b),
            FieldValue::Float(f) => Value::from(*f),
            FieldValue::Record(r) => r.to_value(),
            FieldValue::Array(elements) => {
                Value::Array(elements.iter().map(FieldValue::to_value).collect())
            }
        }
    }
}

/// An immutable, constraint-satisfying record instance.
///
/// Fields appear in schema declaration order. Optional fields absent from the
/// input have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ValidatedRecord {
    pub(crate) fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// Returns the number of populated fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record has no populated fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Looks up a string field by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Looks up an int field by name.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_int)
    }

    /// Looks up a bool field by name.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    /// Looks up a float field by name.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_float)
    }

    /// Iterates fields in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Converts the record back to a JSON object.
    ///
    /// Re-validating the result against the originating schema succeeds and
    /// reproduces an equal record.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_value());
        }
        Value::Object(map)
    }
}
