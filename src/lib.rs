//! strictrec - A strict, deterministic record validation library
//!
//! Declare typed record schemas, then validate untyped input (e.g. parsed
//! JSON) against them. Validation collects every field-level failure.

pub mod schema;
pub mod validate;
