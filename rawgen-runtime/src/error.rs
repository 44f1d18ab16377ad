//! Error types for rawgen runtime operations.

use crate::value::RawValue;
use thiserror::Error;

/// Runtime error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Enum declared without variants.
    #[error("enum '{enum_name}' has no variants")]
    EmptyEnum {
        /// Enum name.
        enum_name: String,
    },

    /// Variant name declared twice.
    #[error("duplicate variant '{variant}' in enum '{enum_name}'")]
    DuplicateVariant {
        /// Enum name.
        enum_name: String,
        /// Variant name.
        variant: String,
    },

    /// Raw value shared by two variants.
    #[error("duplicate raw value '{value}' in enum '{enum_name}'")]
    DuplicateRawValue {
        /// Enum name.
        enum_name: String,
        /// Shared raw value.
        value: RawValue,
    },

    /// Accessor called for a variant the enum does not declare.
    #[error("enum '{enum_name}' has no variant '{variant}'")]
    UnknownVariant {
        /// Enum name.
        enum_name: String,
        /// Requested variant.
        variant: String,
    },
}

/// Result type alias for rawgen runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
