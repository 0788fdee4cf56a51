//! Validation failure types.
//!
//! Failure codes:
//! - MISSING_FIELD: required field absent from the input
//! - TYPE_MISMATCH: value not convertible to the declared type
//! - CONSTRAINT_VIOLATION: value rejected by a field predicate
//! - UNKNOWN_FIELD: input key not declared in the schema

use std::fmt;

/// Failure reason codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// Required field absent from the input
    MissingField,
    /// Value not convertible to the declared type
    TypeMismatch,
    /// Value rejected by a field predicate
    ConstraintViolation,
    /// Input key not declared in the schema
    UnknownField,
}

impl FailureCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            FailureCode::MissingField => "MISSING_FIELD",
            FailureCode::TypeMismatch => "TYPE_MISMATCH",
            FailureCode::ConstraintViolation => "CONSTRAINT_VIOLATION",
            FailureCode::UnknownField => "UNKNOWN_FIELD",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single field-level failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Field path (e.g. "address.city", "tags[1]", "[3].id")
    pub field: String,
    /// Failure reason code
    pub code: FailureCode,
    /// Human-readable message
    pub message: String,
}

impl FieldFailure {
    /// Required field absent from the input
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: FailureCode::MissingField,
            message: "required field is missing".into(),
        }
    }

    /// Value not convertible to the declared type
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: FailureCode::TypeMismatch,
            message: format!("expected {}, got {}", expected.into(), actual.into()),
        }
    }

    /// Value rejected by a field predicate
    pub fn constraint_violation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: FailureCode::ConstraintViolation,
            message: message.into(),
        }
    }

    /// Input key not declared in the schema
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: FailureCode::UnknownField,
            message: "field is not declared in the schema".into(),
        }
    }

    /// Returns a copy with the field path prefixed (batch/element indexing).
    pub(crate) fn prefixed(mut self, prefix: &str) -> Self {
        self.field = if self.field == "$root" {
            prefix.to_string()
        } else {
            format!("{}.{}", prefix, self.field)
        };
        self
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}' [{}]: {}", self.field, self.code, self.message)
    }
}

/// Validation error: one or more field failures against one schema.
///
/// Never empty; every field-level problem found during a validate call is
/// listed, in schema field order followed by unknown input keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    schema: String,
    failures: Vec<FieldFailure>,
}

impl ValidationError {
    /// Builds a validation error from collected failures.
    pub(crate) fn new(schema: impl Into<String>, failures: Vec<FieldFailure>) -> Self {
        debug_assert!(!failures.is_empty(), "validation error with no failures");
        Self {
            schema: schema.into(),
            failures,
        }
    }

    /// Returns the schema name the input was validated against.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Returns every field failure, in deterministic order.
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Returns whether a failure with the given field path and code exists.
    pub fn contains(&self, field: &str, code: FailureCode) -> bool {
        self.failures
            .iter()
            .any(|f| f.field == field && f.code == code)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation against '{}' failed with {} failure(s): ",
            self.schema,
            self.failures.len()
        )?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes_are_stable() {
        assert_eq!(FailureCode::MissingField.code(), "MISSING_FIELD");
        assert_eq!(FailureCode::TypeMismatch.code(), "TYPE_MISMATCH");
        assert_eq!(FailureCode::ConstraintViolation.code(), "CONSTRAINT_VIOLATION");
        assert_eq!(FailureCode::UnknownField.code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_field_failure_display() {
        let failure = FieldFailure::type_mismatch("id", "int", "string");
        let display = format!("{}", failure);
        assert!(display.contains("id"));
        assert!(display.contains("TYPE_MISMATCH"));
        assert!(display.contains("expected int, got string"));
    }

    #[test]
    fn test_error_lists_every_failure() {
        let err = ValidationError::new(
            "users",
            vec![
                FieldFailure::missing_field("first_name"),
                FieldFailure::unknown_field("invalid_attr"),
            ],
        );
        let display = format!("{}", err);
        assert!(display.contains("2 failure(s)"));
        assert!(display.contains("first_name"));
        assert!(display.contains("invalid_attr"));
    }

    #[test]
    fn test_contains_matches_field_and_code() {
        let err = ValidationError::new("users", vec![FieldFailure::missing_field("id")]);
        assert!(err.contains("id", FailureCode::MissingField));
        assert!(!err.contains("id", FailureCode::TypeMismatch));
        assert!(!err.contains("name", FailureCode::MissingField));
    }

    #[test]
    fn test_prefixed_rewrites_root() {
        let failure = FieldFailure::type_mismatch("$root", "record", "string").prefixed("[2]");
        assert_eq!(failure.field, "[2]");

        let failure = FieldFailure::missing_field("id").prefixed("[0]");
        assert_eq!(failure.field, "[0].id");
    }
}
