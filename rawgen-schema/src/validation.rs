//! Schema validation utilities.
//!
//! This module checks a flattened schema before any code is emitted, so that a
//! generation unit either renders completely or not at all.

use crate::error::SchemaError;
use crate::ir::SchemaIr;
use crate::structs::{FieldDef, StructDef};
use crate::types::{Definition, EnumDef, Literal, RawValue, Schema, TypeRef};
use std::collections::{HashMap, HashSet};

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_ir(&SchemaIr::from_schema(schema))
}

/// Validates a flattened schema.
///
/// Definitions are checked in declaration order and the first error wins.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_ir(ir: &SchemaIr) -> Result<(), SchemaError> {
    validate_definition_names(ir)?;

    for def in &ir.definitions {
        match &def.definition {
            Definition::Enum(enum_def) => validate_enum(enum_def)?,
            Definition::Struct(struct_def) => validate_struct(ir, struct_def)?,
        }
    }

    Ok(())
}

/// Validates that definition names are unique within the unit.
fn validate_definition_names(ir: &SchemaIr) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for def in &ir.definitions {
        if !seen.insert(def.name()) {
            return Err(SchemaError::DuplicateDefinition {
                name: def.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Validates an enum type definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    if enum_def.variants.is_empty() {
        return Err(SchemaError::EmptyEnum {
            enum_name: enum_def.name.clone(),
        });
    }

    let mut seen_names = HashSet::new();
    let mut seen_values: HashMap<&RawValue, &str> = HashMap::new();

    for variant in &enum_def.variants {
        if variant.value.kind() != enum_def.kind {
            return Err(SchemaError::VariantKindMismatch {
                enum_name: enum_def.name.clone(),
                variant: variant.name.clone(),
                expected: enum_def.kind,
            });
        }

        if !seen_names.insert(variant.name.as_str()) {
            return Err(SchemaError::DuplicateVariantName {
                enum_name: enum_def.name.clone(),
                name: variant.name.clone(),
            });
        }

        if let Some(first) = seen_values.insert(&variant.value, variant.name.as_str()) {
            return Err(SchemaError::DuplicateVariantValue {
                enum_name: enum_def.name.clone(),
                value: variant.value.clone(),
                first: first.to_string(),
                second: variant.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a struct definition.
fn validate_struct(ir: &SchemaIr, struct_def: &StructDef) -> Result<(), SchemaError> {
    let mut seen_fields = HashSet::new();

    for field in &struct_def.fields {
        if !seen_fields.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                struct_name: struct_def.name.clone(),
                field: field.name.clone(),
            });
        }

        validate_type_ref(ir, struct_def, field, &field.type_ref)?;
        validate_default(ir, struct_def, field)?;
    }

    Ok(())
}

/// Validates that every reference in a field type resolves.
fn validate_type_ref(
    ir: &SchemaIr,
    struct_def: &StructDef,
    field: &FieldDef,
    type_ref: &TypeRef,
) -> Result<(), SchemaError> {
    match type_ref {
        TypeRef::Reference(name) if ir.get_definition(name).is_none() => Err(
            SchemaError::unresolved(&struct_def.name, &field.name, name),
        ),
        TypeRef::Array(inner) | TypeRef::Map(inner) => {
            validate_type_ref(ir, struct_def, field, inner)
        }
        _ => Ok(()),
    }
}

/// Validates that a field's default literal fits its type.
fn validate_default(
    ir: &SchemaIr,
    struct_def: &StructDef,
    field: &FieldDef,
) -> Result<(), SchemaError> {
    let Some(default) = &field.default else {
        return Ok(());
    };
    let invalid =
        |message: String| SchemaError::invalid_default(&struct_def.name, &field.name, message);

    if let Literal::Float(v) = default
        && !v.is_finite()
    {
        return Err(invalid(format!("float default must be finite, found {v}")));
    }

    match &field.type_ref {
        TypeRef::Any => Ok(()),
        TypeRef::Primitive(kind) if default.fits(*kind) => Ok(()),
        TypeRef::Primitive(kind) => Err(invalid(format!(
            "expected a {} literal, found {}",
            kind.name(),
            describe(default)
        ))),
        TypeRef::Reference(name) => match ir.get_definition(name) {
            Some(Definition::Enum(enum_def)) => {
                let matched = default
                    .as_raw_value()
                    .is_some_and(|raw| enum_def.variant_by_value(&raw).is_some());
                if matched {
                    Ok(())
                } else {
                    Err(invalid(format!(
                        "no variant of enum '{}' has the raw value {}",
                        enum_def.name,
                        describe(default)
                    )))
                }
            }
            Some(Definition::Struct(_)) => Err(invalid(format!(
                "struct '{name}' fields cannot carry a default"
            ))),
            None => Err(SchemaError::unresolved(&struct_def.name, &field.name, name)),
        },
        TypeRef::Array(_) | TypeRef::Map(_) => Err(invalid(
            "collection fields cannot carry a default".to_string(),
        )),
        TypeRef::Struct(_) | TypeRef::Enum(_) => Err(invalid(
            "anonymous shapes cannot carry a default".to_string(),
        )),
    }
}

fn describe(literal: &Literal) -> String {
    match literal {
        Literal::Bool(v) => format!("bool {v}"),
        Literal::Integer(v) => format!("integer {v}"),
        Literal::Float(v) => format!("float {v}"),
        Literal::String(v) => format!("string {v:?}"),
    }
}
