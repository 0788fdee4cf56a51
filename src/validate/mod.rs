//! Record validation subsystem
//!
//! # Design Principles
//!
//! - Strict: undeclared input fields abort validation
//! - Exhaustive: every failure is reported, never just the first
//! - Deterministic: failure order follows schema field order
//! - Stateless: validation is a pure function of (schema, raw input)
//! - No nulls, no defaults, no implicit coercion

mod errors;
mod record;
mod validator;

pub use errors::{FailureCode, FieldFailure, ValidationError, ValidationResult};
pub use record::{FieldValue, ValidatedRecord};
pub use validator::{validate, validate_all};
