//! Error types for schema loading and validation.

use crate::types::{EnumKind, RawValue};
use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid document structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// Error type for schema validation.
///
/// Every variant is fatal for the generation unit it was found in.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two definitions share a name.
    #[error("duplicate definition '{name}'")]
    DuplicateDefinition {
        /// Name of the duplicate.
        name: String,
    },

    /// Enum without variants.
    #[error("enum '{enum_name}' has no variants")]
    EmptyEnum {
        /// Enum name.
        enum_name: String,
    },

    /// Two variants of one enum share a name.
    #[error("duplicate variant name '{name}' in enum '{enum_name}'")]
    DuplicateVariantName {
        /// Enum name.
        enum_name: String,
        /// Variant name.
        name: String,
    },

    /// Two variants of one enum share a raw value.
    #[error(
        "duplicate raw value '{value}' in enum '{enum_name}': variants '{first}' and '{second}'"
    )]
    DuplicateVariantValue {
        /// Enum name.
        enum_name: String,
        /// Shared raw value.
        value: RawValue,
        /// First variant carrying the value.
        first: String,
        /// Second variant carrying the value.
        second: String,
    },

    /// A variant's raw value does not match the enum's kind.
    #[error("variant '{variant}' of enum '{enum_name}' does not hold a value of kind {expected}")]
    VariantKindMismatch {
        /// Enum name.
        enum_name: String,
        /// Variant name.
        variant: String,
        /// Kind declared by the enum.
        expected: EnumKind,
    },

    /// Two fields of one struct share a name.
    #[error("duplicate field '{field}' in struct '{struct_name}'")]
    DuplicateField {
        /// Struct name.
        struct_name: String,
        /// Field name.
        field: String,
    },

    /// A field references a definition absent from the unit.
    #[error("unresolved type reference '{type_name}' in field '{definition}.{field}'")]
    UnresolvedTypeReference {
        /// Definition owning the field.
        definition: String,
        /// Field name.
        field: String,
        /// Missing definition name.
        type_name: String,
    },

    /// A default literal cannot initialize its field.
    #[error("invalid default for field '{definition}.{field}': {message}")]
    InvalidDefault {
        /// Definition owning the field.
        definition: String,
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates an unresolved type reference error.
    pub fn unresolved(
        definition: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnresolvedTypeReference {
            definition: definition.into(),
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an invalid default error.
    pub fn invalid_default(
        definition: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidDefault {
            definition: definition.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}
