//! # rawgen Codegen
//!
//! Code generation from rawgen data-model definitions.
//!
//! This crate provides:
//! - Identifier resolution with collision detection
//! - Enum generation with identity-stable variants and raw-value serialization
//! - Struct generation with uniform defaulting and null-inclusive serialization
//! - An emission driver producing one source unit per definition
//! - PHP and Rust targets

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod php;
pub mod rust;
pub mod target;

pub use config::{DefaultingPolicy, GeneratorConfig, TargetKind};
pub use error::CodegenError;
pub use generator::{Generator, RenderedUnit, UnitSource};
pub use naming::{Conventions, NameTable, Role};
pub use target::{RenderContext, Target, target_for};

use std::path::Path;

/// Generates source units from an IR document.
///
/// # Arguments
/// * `json` - IR document content
/// * `config` - Generator configuration
///
/// # Returns
/// One unit per definition, plus the target's index unit if any.
///
/// # Errors
/// Returns `CodegenError` if loading, validation or generation fails.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
) -> Result<Vec<RenderedUnit>, CodegenError> {
    let schema = rawgen_schema::parse_schema(json)?;
    let ir = rawgen_schema::SchemaIr::from_schema(&schema);
    Generator::new(&ir, config).generate()
}

/// Generates source units from an IR document file.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, validation or generation fails.
pub fn generate_from_file(
    path: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<RenderedUnit>, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}

/// Writes rendered units below an output directory.
///
/// # Errors
/// Returns `CodegenError::Io` if a directory or file cannot be written.
pub fn write_units(units: &[RenderedUnit], out_dir: &Path) -> Result<(), CodegenError> {
    for unit in units {
        let path = out_dir.join(&unit.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &unit.contents)?;
        tracing::debug!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ENUMS: &str = r#"{
        "package": "enums",
        "definitions": [
            {
                "definition": "enum",
                "name": "DashboardCursorSync",
                "comments": [
                    "0 for no shared crosshair or tooltip (default).",
                    "1 for shared crosshair.",
                    "2 for shared crosshair AND shared tooltip."
                ],
                "kind": "integer",
                "variants": [
                    { "name": "Off", "value": 0 },
                    { "name": "Crosshair", "value": 1 },
                    { "name": "Tooltip", "value": 2 }
                ]
            }
        ]
    }"#;

    const OPTIONAL_FIELDS: &str = r#"{
        "package": "struct_optional_fields",
        "definitions": [
            {
                "definition": "struct",
                "name": "SomeStruct",
                "fields": [
                    {
                        "name": "FieldAnonymousStruct",
                        "type": { "struct": { "fields": [ { "name": "FieldAny", "type": "any" } ] } }
                    },
                    {
                        "name": "Operator",
                        "type": {
                            "enum": {
                                "kind": "string",
                                "variants": [
                                    { "name": "GreaterThan", "value": ">" },
                                    { "name": "LessThan", "value": "<" }
                                ]
                            }
                        }
                    }
                ]
            }
        ]
    }"#;

    fn grafana() -> GeneratorConfig {
        GeneratorConfig::new().namespace_root("Grafana\\Foundation")
    }

    #[test]
    fn test_generate_from_json_enums() {
        let units = generate_from_json(ENUMS, &grafana()).unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(
            units[0].path,
            Path::new("src/Types/Enums/DashboardCursorSync.php")
        );
        assert_eq!(
            units[0].contents,
            include_str!("../testdata/php/Enums/DashboardCursorSync.php")
        );
    }

    #[test]
    fn test_generate_from_json_optional_fields() {
        let units = generate_from_json(OPTIONAL_FIELDS, &grafana()).unwrap();

        let find = |name: &str| {
            units
                .iter()
                .find(|u| u.definition() == Some(name))
                .map(|u| u.contents.as_str())
                .unwrap()
        };
        assert_eq!(
            find("StructOptionalFieldsSomeStructFieldAnonymousStruct"),
            include_str!(
                "../testdata/php/StructOptionalFields/StructOptionalFieldsSomeStructFieldAnonymousStruct.php"
            )
        );
        assert_eq!(
            find("SomeStructOperator"),
            include_str!("../testdata/php/StructOptionalFields/SomeStructOperator.php")
        );
    }

    #[test]
    fn test_generated_rust_matches_checked_in_crate() {
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/rust");
        let config = GeneratorConfig::new().target(TargetKind::Rust);

        for json in [ENUMS, OPTIONAL_FIELDS] {
            for unit in generate_from_json(json, &config).unwrap() {
                let expected = std::fs::read_to_string(fixtures.join(&unit.path)).unwrap();
                assert_eq!(unit.contents, expected, "{}", unit.path.display());
            }
        }
    }

    #[test]
    fn test_generate_from_file_and_write_units() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(OPTIONAL_FIELDS.as_bytes()).unwrap();

        let config = GeneratorConfig::new().target(TargetKind::Rust);
        let units = generate_from_file(input.path(), &config).unwrap();

        let out = tempfile::tempdir().unwrap();
        write_units(&units, out.path()).unwrap();

        let index =
            std::fs::read_to_string(out.path().join("src/struct_optional_fields/mod.rs")).unwrap();
        assert!(index.contains("pub mod some_struct_operator;\n"));
        assert!(index.contains("pub use some_struct::SomeStruct;\n"));
        for unit in &units {
            let written = std::fs::read_to_string(out.path().join(&unit.path)).unwrap();
            assert_eq!(written, unit.contents);
            assert!(syn::parse_file(&written).is_ok(), "{}", unit.path.display());
        }
    }

    #[test]
    fn test_generate_from_json_rejects_duplicate_values() {
        let json = r#"{
            "package": "enums",
            "definitions": [
                {
                    "definition": "enum",
                    "name": "Broken",
                    "kind": "integer",
                    "variants": [ { "name": "A", "value": 0 }, { "name": "B", "value": 0 } ]
                }
            ]
        }"#;

        let err = generate_from_json(json, &grafana()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "schema error: duplicate raw value '0' in enum 'Broken': variants 'A' and 'B'"
        );
    }

    #[test]
    fn test_generate_from_file_missing() {
        let err = generate_from_file(Path::new("/nonexistent/schema.json"), &grafana()).unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
