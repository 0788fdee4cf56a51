//! Schema definition error types.
//!
//! Definition-time failures are fatal to the schema being defined; there is
//! nothing to recover. Validation-time failures live in `validate::errors`.

use thiserror::Error;

/// Result type for schema definition
pub type SchemaResult<T> = Result<T, SchemaDefinitionError>;

/// Errors raised while defining a schema
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaDefinitionError {
    /// Field name declared more than once within one record
    #[error("duplicate field '{field}' in schema '{schema}'")]
    DuplicateField {
        /// Offending field name (dotted path for nested records)
        field: String,
        /// Schema being defined
        schema: String,
    },

    /// Field declared with an empty name
    #[error("empty field name in schema '{schema}'")]
    EmptyFieldName {
        /// Schema being defined
        schema: String,
    },

    /// Schema declared with an empty name
    #[error("schema name must not be empty")]
    EmptySchemaName,

    /// Constraint pattern failed to compile
    #[error("invalid constraint pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_display() {
        let err = SchemaDefinitionError::DuplicateField {
            field: "id".into(),
            schema: "users".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("id"));
        assert!(display.contains("users"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = SchemaDefinitionError::InvalidPattern {
            pattern: "[".into(),
            reason: "unclosed character class".into(),
        };
        assert!(format!("{}", err).contains("["));
    }
}
