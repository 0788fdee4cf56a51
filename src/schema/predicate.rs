//! Constraint predicates for field-level semantic rules.
//!
//! A predicate runs after type checking and narrows the set of acceptable
//! values (e.g. string content constraints). Predicates carry a name so that
//! schemas holding them stay comparable and debuggable; the closure itself is
//! opaque and is not serialized.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::errors::{SchemaDefinitionError, SchemaResult};

/// A named constraint evaluated against a raw value after type coercion.
///
/// Returning `Err(message)` marks the value as violating the constraint;
/// the message surfaces verbatim in the validation failure.
#[derive(Clone)]
pub struct Predicate {
    name: String,
    check: Arc<dyn Fn(&Value) -> Result<(), String> + Send + Sync>,
}

impl Predicate {
    /// Creates a predicate from an arbitrary check function.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Creates a predicate requiring a string value to fully match `pattern`.
    ///
    /// The pattern is implicitly anchored at both ends.
    pub fn matches(name: impl Into<String>, pattern: &str) -> SchemaResult<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| SchemaDefinitionError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        let shown = pattern.to_string();

        Ok(Self::new(name, move |value| match value.as_str() {
            Some(s) if regex.is_match(s) => Ok(()),
            Some(s) => Err(format!("value '{}' does not match pattern '{}'", s, shown)),
            None => Err("pattern constraint applies to string values only".into()),
        }))
    }

    /// Returns the predicate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the predicate against a raw value.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

// Predicates compare by name; the closure is opaque.
impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Predicate {}
