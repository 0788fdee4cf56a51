//! Record validation against a schema.
//!
//! Validation semantics:
//! - All required fields are present
//! - No undeclared fields exist
//! - Field types exactly match declared types
//! - Constraint predicates run after type checks
//!
//! Every failure is collected; validation never stops at the first offending
//! field. Failures follow schema field order, then undeclared input keys.
//! Validation is deterministic and stateless: a pure function of the schema
//! and the raw input.

use serde_json::{Map, Value};
use tracing::debug;

use crate::schema::{FieldSpec, FieldType, Schema};

use super::errors::{FieldFailure, ValidationError, ValidationResult};
use super::record::{FieldValue, ValidatedRecord};

/// Validates a raw value against a schema.
///
/// # Errors
///
/// Returns `ValidationError` listing every field-level failure: missing
/// required fields, type mismatches (nulls included), constraint violations,
/// and undeclared input keys. A non-object input is reported at path `$root`.
pub fn validate(schema: &Schema, raw: &Value) -> ValidationResult<ValidatedRecord> {
    let mut failures = Vec::new();

    let record = match raw.as_object() {
        Some(obj) => validate_fields(schema.fields(), obj, "", &mut failures),
        None => {
            failures.push(FieldFailure::type_mismatch(
                "$root",
                "record",
                json_type_name(raw),
            ));
            ValidatedRecord::new()
        }
    };

    if failures.is_empty() {
        Ok(record)
    } else {
        debug!(
            schema = %schema.name(),
            failure_count = failures.len(),
            "validation failed"
        );
        Err(ValidationError::new(schema.name(), failures))
    }
}

/// Validates a sequence of raw values against a schema, in input order.
///
/// An empty input yields an empty output. Failures from element `i` are
/// reported under the path prefix `[i]`.
pub fn validate_all(schema: &Schema, raws: &[Value]) -> ValidationResult<Vec<ValidatedRecord>> {
    let mut records = Vec::with_capacity(raws.len());
    let mut failures = Vec::new();

    for (i, raw) in raws.iter().enumerate() {
        match validate(schema, raw) {
            Ok(record) => records.push(record),
            Err(err) => {
                let prefix = format!("[{}]", i);
                failures.extend(
                    err.failures()
                        .iter()
                        .cloned()
                        .map(|failure| failure.prefixed(&prefix)),
                );
            }
        }
    }

    if failures.is_empty() {
        Ok(records)
    } else {
        Err(ValidationError::new(schema.name(), failures))
    }
}

/// Validates one object against an ordered field list, collecting failures.
///
/// The returned record only carries fields that coerced cleanly; it escapes
/// to the caller only when the failure list stayed empty.
fn validate_fields(
    fields: &[FieldSpec],
    obj: &Map<String, Value>,
    path_prefix: &str,
    failures: &mut Vec<FieldFailure>,
) -> ValidatedRecord {
    let mut record = ValidatedRecord::new();

    for spec in fields {
        let path = make_path(path_prefix, &spec.name);

        match obj.get(&spec.name) {
            Some(value) => {
                let coerced = coerce_value(value, &spec.field_type, &path, failures);
                if let Some(coerced) = coerced {
                    match &spec.predicate {
                        Some(predicate) => match predicate.check(value) {
                            Ok(()) => record.push(spec.name.as_str(), coerced),
                            Err(message) => {
                                failures.push(FieldFailure::constraint_violation(&path, message));
                            }
                        },
                        None => record.push(spec.name.as_str(), coerced),
                    }
                }
            }
            None => {
                if spec.required {
                    failures.push(FieldFailure::missing_field(&path));
                }
            }
        }
    }

    // Strict mode: every undeclared input key is a failure, reported after
    // the declared fields.
    for key in obj.keys() {
        if !fields.iter().any(|spec| &spec.name == key) {
            failures.push(FieldFailure::unknown_field(make_path(path_prefix, key)));
        }
    }

    record
}

/// Coerces a raw value to its declared type, collecting failures.
///
/// Returns `None` when the value (or any nested part of it) failed; the
/// corresponding failures have already been pushed.
fn coerce_value(
    value: &Value,
    expected: &FieldType,
    path: &str,
    failures: &mut Vec<FieldFailure>,
) -> Option<FieldValue> {
    match expected {
        FieldType::String => match value.as_str() {
            Some(s) => Some(FieldValue::String(s.to_string())),
            None => {
                failures.push(FieldFailure::type_mismatch(
                    path,
                    "string",
                    json_type_name(value),
                ));
                None
            }
        },
        FieldType::Int => match value.as_i64() {
            Some(i) => Some(FieldValue::Int(i)),
            None => {
                // A u64 beyond i64::MAX is an integer, just not a representable one.
                let actual = if value.is_u64() {
                    "out-of-range integer"
                } else {
                    json_type_name(value)
                };
                failures.push(FieldFailure::type_mismatch(path, "int", actual));
                None
            }
        },
        FieldType::Bool => match value.as_bool() {
            Some(b) => Some(FieldValue::Bool(b)),
            None => {
                failures.push(FieldFailure::type_mismatch(
                    path,
                    "bool",
                    json_type_name(value),
                ));
                None
            }
        },
        FieldType::Float => match value.as_f64() {
            // Integral values widen to float
            Some(f) => Some(FieldValue::Float(f)),
            None => {
                failures.push(FieldFailure::type_mismatch(
                    path,
                    "float",
                    json_type_name(value),
                ));
                None
            }
        },
        FieldType::Record { fields } => match value.as_object() {
            Some(obj) => {
                let before = failures.len();
                let nested = validate_fields(fields, obj, path, failures);
                (failures.len() == before).then(|| FieldValue::Record(nested))
            }
            None => {
                failures.push(FieldFailure::type_mismatch(
                    path,
                    "record",
                    json_type_name(value),
                ));
                None
            }
        },
        FieldType::Array { element_type } => match value.as_array() {
            Some(elements) => {
                let before = failures.len();
                let mut coerced = Vec::with_capacity(elements.len());
                for (i, element) in elements.iter().enumerate() {
                    let element_path = format!("{}[{}]", path, i);
                    if let Some(element) = coerce_value(element, element_type, &element_path, failures)
                    {
                        coerced.push(element);
                    }
                }
                (failures.len() == before).then(|| FieldValue::Array(coerced))
            }
            None => {
                failures.push(FieldFailure::type_mismatch(
                    path,
                    "array",
                    json_type_name(value),
                ));
                None
            }
        },
    }
}

/// Returns the JSON type name for failure messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "record",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}
