//! Schema model for strictrec
//!
//! Schemas are declared once, programmatically, and are immutable after
//! definition.
//!
//! # Design Principles
//!
//! - Ordered field declarations (validation reports follow field order)
//! - Field names unique per record, checked at definition time
//! - Closed set of declared types, open set of constraint predicates
//! - No registry: schemas are passed explicitly to every validate call

mod errors;
mod predicate;
mod types;

pub use errors::{SchemaDefinitionError, SchemaResult};
pub use predicate::Predicate;
pub use types::{FieldSpec, FieldType, Schema};
