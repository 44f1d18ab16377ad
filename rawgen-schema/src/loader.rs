//! JSON loader for IR documents.
//!
//! The on-disk form mirrors the IR types one to one:
//!
//! ```json
//! {
//!   "package": "enums",
//!   "definitions": [
//!     {
//!       "definition": "enum",
//!       "name": "DashboardCursorSync",
//!       "kind": "integer",
//!       "variants": [{ "name": "Off", "value": 0 }]
//!     }
//!   ]
//! }
//! ```

use crate::error::ParseError;
use crate::types::Schema;
use std::path::Path;

/// Parses an IR document from a JSON string.
///
/// # Arguments
/// * `json` - IR document content
///
/// # Returns
/// Parsed schema with its definition index built.
///
/// # Errors
/// Returns `ParseError` if the document is malformed or has no package.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let mut schema: Schema = serde_json::from_str(json)?;

    if schema.package.trim().is_empty() {
        return Err(ParseError::invalid_structure(
            "package name must not be empty",
        ));
    }

    schema.build_definition_map();
    tracing::debug!(
        "Loaded package '{}' with {} definitions",
        schema.package,
        schema.definitions.len()
    );

    Ok(schema)
}

/// Parses an IR document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
