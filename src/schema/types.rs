//! Schema type declarations
//!
//! Supported declared types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point
//! - record: Nested record with its own ordered field list
//! - array: Homogeneous sequence with a single element type

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::errors::{SchemaDefinitionError, SchemaResult};
use super::predicate::Predicate;

/// Declared field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Nested record with its own ordered field list
    Record {
        /// Nested field declarations
        fields: Vec<FieldSpec>,
    },
    /// Homogeneous sequence with a single element type
    Array {
        /// Element type (boxed to allow recursive types)
        #[serde(rename = "element_type")]
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name for failure messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Record { .. } => "record",
            FieldType::Array { .. } => "array",
        }
    }
}

/// A single named field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within its record
    pub name: String,
    /// Declared field type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Optional constraint, evaluated after type checking (not serialized)
    #[serde(skip)]
    pub predicate: Option<Predicate>,
}

impl FieldSpec {
    /// Create a field declaration
    pub fn new(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
            predicate: None,
        }
    }

    /// Create a required string field
    pub fn required_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, false)
    }

    /// Create a required int field
    pub fn required_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, true)
    }

    /// Create an optional int field
    pub fn optional_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, false)
    }

    /// Create a required bool field
    pub fn required_bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool, true)
    }

    /// Create a required float field
    pub fn required_float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float, true)
    }

    /// Create a required nested record field
    pub fn required_record(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self::new(name, FieldType::Record { fields }, true)
    }

    /// Create an optional nested record field
    pub fn optional_record(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self::new(name, FieldType::Record { fields }, false)
    }

    /// Create a required array field
    pub fn required_array(name: impl Into<String>, element_type: FieldType) -> Self {
        Self::new(
            name,
            FieldType::Array {
                element_type: Box::new(element_type),
            },
            true,
        )
    }

    /// Create an optional array field
    pub fn optional_array(name: impl Into<String>, element_type: FieldType) -> Self {
        Self::new(
            name,
            FieldType::Array {
                element_type: Box::new(element_type),
            },
            false,
        )
    }

    /// Attach a constraint predicate
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Attach a full-match pattern constraint named after the field
    pub fn with_pattern(self, pattern: &str) -> SchemaResult<Self> {
        let predicate = Predicate::matches(format!("{}_format", self.name), pattern)?;
        Ok(self.with_predicate(predicate))
    }
}

/// Complete schema definition: a named, ordered, immutable field list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name, used in failure reports
    name: String,
    /// Ordered field declarations
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Defines a new schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaDefinitionError` if the schema name is empty, any field
    /// name is empty, or a field name repeats within one record (nested
    /// records included).
    pub fn define(name: impl Into<String>, fields: Vec<FieldSpec>) -> SchemaResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaDefinitionError::EmptySchemaName);
        }
        check_fields(&name, &fields, "")?;

        trace!(schema = %name, field_count = fields.len(), "schema defined");
        Ok(Self { name, fields })
    }

    /// Returns the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered field declarations.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns whether a field name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Re-checks the definition invariants.
    ///
    /// Deserialized schemas bypass `define`; callers loading schemas from
    /// serialized form should run this before validating records.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaDefinitionError::EmptySchemaName);
        }
        check_fields(&self.name, &self.fields, "")
    }
}

/// Checks name uniqueness and non-emptiness for one record's field list.
fn check_fields(schema: &str, fields: &[FieldSpec], path_prefix: &str) -> SchemaResult<()> {
    let mut seen: Vec<&str> = Vec::with_capacity(fields.len());

    for field in fields {
        if field.name.is_empty() {
            return Err(SchemaDefinitionError::EmptyFieldName {
                schema: schema.to_string(),
            });
        }
        let path = make_path(path_prefix, &field.name);
        if seen.contains(&field.name.as_str()) {
            return Err(SchemaDefinitionError::DuplicateField {
                field: path,
                schema: schema.to_string(),
            });
        }
        seen.push(field.name.as_str());

        check_field_type(schema, &path, &field.field_type)?;
    }

    Ok(())
}

/// Recurses into composite types carrying nested field lists.
fn check_field_type(schema: &str, path: &str, field_type: &FieldType) -> SchemaResult<()> {
    match field_type {
        FieldType::Record { fields } => check_fields(schema, fields, path),
        FieldType::Array { element_type } => check_field_type(schema, path, element_type),
        _ => Ok(()),
    }
}

fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required_int("id"),
            FieldSpec::required_string("first_name"),
            FieldSpec::required_string("last_name"),
            FieldSpec::optional_int("age"),
        ]
    }

    #[test]
    fn test_define_valid_schema() {
        let schema = Schema::define("users", user_fields()).unwrap();
        assert_eq!(schema.name(), "users");
        assert_eq!(schema.fields().len(), 4);
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = Schema::define("users", user_fields()).unwrap();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "first_name", "last_name", "age"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let fields = vec![
            FieldSpec::required_int("id"),
            FieldSpec::required_string("id"),
        ];
        let result = Schema::define("users", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaDefinitionError::DuplicateField {
                field: "id".into(),
                schema: "users".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_nested_field_rejected() {
        let fields = vec![FieldSpec::required_record(
            "address",
            vec![
                FieldSpec::required_string("city"),
                FieldSpec::required_string("city"),
            ],
        )];
        let result = Schema::define("users", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaDefinitionError::DuplicateField {
                field: "address.city".into(),
                schema: "users".into(),
            }
        );
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let fields = vec![FieldSpec::required_string("")];
        assert!(matches!(
            Schema::define("users", fields),
            Err(SchemaDefinitionError::EmptyFieldName { .. })
        ));
    }

    #[test]
    fn test_empty_schema_name_rejected() {
        assert_eq!(
            Schema::define("", vec![]).unwrap_err(),
            SchemaDefinitionError::EmptySchemaName
        );
    }

    #[test]
    fn test_field_lookup() {
        let schema = Schema::define("users", user_fields()).unwrap();
        assert!(schema.contains("first_name"));
        assert!(!schema.contains("unknown"));
        assert_eq!(schema.field("id").unwrap().field_type, FieldType::Int);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::Bool.type_name(), "bool");
        assert_eq!(FieldType::Float.type_name(), "float");
        assert_eq!(FieldType::Record { fields: vec![] }.type_name(), "record");
        assert_eq!(
            FieldType::Array {
                element_type: Box::new(FieldType::String)
            }
            .type_name(),
            "array"
        );
    }

    #[test]
    fn test_schema_serde_round_trip() {
        let schema = Schema::define(
            "posts",
            vec![
                FieldSpec::required_string("title"),
                FieldSpec::required_array("tags", FieldType::String),
                FieldSpec::optional_record("meta", vec![FieldSpec::required_int("views")]),
            ],
        )
        .unwrap();

        let encoded = serde_json::to_string(&schema).unwrap();
        let decoded: Schema = serde_json::from_str(&encoded).unwrap();
        decoded.validate_structure().unwrap();
        assert_eq!(decoded, schema);
    }

    #[test]
    fn test_predicate_skipped_on_serialization() {
        let schema = Schema::define(
            "tokens",
            vec![FieldSpec::required_string("access_token")
                .with_pattern(r"token[0-9]+")
                .unwrap()],
        )
        .unwrap();

        let encoded = serde_json::to_string(&schema).unwrap();
        let decoded: Schema = serde_json::from_str(&encoded).unwrap();
        assert!(decoded.field("access_token").unwrap().predicate.is_none());
    }
}
