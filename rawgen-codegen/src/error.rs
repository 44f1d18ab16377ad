//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] rawgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] rawgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two schema names resolve to the same target identifier.
    #[error("name collision in {scope}: '{first}' and '{second}' both resolve to '{identifier}'")]
    NameCollision {
        /// Scope in which the identifiers clash.
        scope: String,
        /// Resolved target identifier.
        identifier: String,
        /// Schema name that claimed the identifier first.
        first: String,
        /// Schema name that clashed with it.
        second: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a name collision error.
    pub fn collision(
        scope: impl Into<String>,
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            scope: scope.into(),
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}
