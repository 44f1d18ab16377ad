//! Struct definitions for rawgen schemas.
//!
//! This module contains the data structures representing record types:
//! the struct itself, its fields, and anonymous struct shapes declared
//! inline on a field.

use crate::types::{Literal, TypeRef};
use serde::{Deserialize, Serialize};

/// Struct definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    /// Struct name.
    pub name: String,
    /// Documentation lines.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    /// Creates a new struct definition without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a documentation line.
    #[must_use]
    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    /// Adds a field to the struct.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Finds a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the struct has any optional field.
    #[must_use]
    pub fn has_optional_fields(&self) -> bool {
        self.fields.iter().any(FieldDef::is_optional)
    }
}

/// Field definition within a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Type held by the field.
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Whether a value must always be present.
    #[serde(default)]
    pub required: bool,
    /// Explicit default used when no value is supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    /// Documentation lines.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl FieldDef {
    /// Creates a required field.
    #[must_use]
    pub fn required(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            required: true,
            default: None,
            comments: Vec::new(),
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            required: false,
            ..Self::required(name, type_ref)
        }
    }

    /// Sets the explicit default.
    #[must_use]
    pub fn with_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }

    /// Appends a documentation line.
    #[must_use]
    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    /// Returns true if the field may be absent.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        !self.required
    }
}

/// Anonymous struct shape declared inline on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineStruct {
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl InlineStruct {
    /// Creates an inline struct shape from its fields.
    #[must_use]
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    #[test]
    fn test_struct_def_new() {
        let def = StructDef::new("SomeStruct");
        assert_eq!(def.name, "SomeStruct");
        assert!(def.fields.is_empty());
        assert!(!def.has_optional_fields());
    }

    #[test]
    fn test_struct_def_fields() {
        let mut def = StructDef::new("SomeStruct")
            .with_field(FieldDef::required("id", TypeRef::Primitive(PrimitiveKind::Integer)));
        def.add_field(FieldDef::optional("fieldAny", TypeRef::Any));

        assert_eq!(def.fields.len(), 2);
        assert!(def.field("id").unwrap().required);
        assert!(def.field("fieldAny").unwrap().is_optional());
        assert!(def.has_optional_fields());
        assert!(def.field("missing").is_none());
    }

    #[test]
    fn test_field_def_default() {
        let field = FieldDef::optional("title", TypeRef::Primitive(PrimitiveKind::String))
            .with_default(Literal::String("untitled".into()))
            .with_comment("Dashboard title.");

        assert_eq!(field.default, Some(Literal::String("untitled".into())));
        assert_eq!(field.comments, vec!["Dashboard title.".to_string()]);
    }
}
