//! Rust type and literal rendering.

use crate::error::CodegenError;
use crate::target::RenderContext;
use rawgen_schema::{Definition, Literal, PrimitiveKind, SchemaIr, TypeRef};
use std::collections::HashSet;

/// Returns the Rust type of a schema type.
///
/// References go through the package index (`super::Type`).
///
/// # Errors
/// Returns `CodegenError` for a reference that has no resolved name.
pub fn rust_type(ctx: &RenderContext<'_>, type_ref: &TypeRef) -> Result<String, CodegenError> {
    match type_ref {
        TypeRef::Primitive(kind) => Ok(primitive(*kind).to_string()),
        TypeRef::Any => Ok("serde_json::Value".to_string()),
        TypeRef::Reference(name) => Ok(format!("super::{}", ctx.names.type_name(name)?)),
        TypeRef::Array(elem) => Ok(format!("Vec<{}>", rust_type(ctx, elem)?)),
        TypeRef::Map(value) => Ok(format!(
            "std::collections::BTreeMap<String, {}>",
            rust_type(ctx, value)?
        )),
        TypeRef::Struct(_) | TypeRef::Enum(_) => Err(CodegenError::generation(
            "anonymous shapes must be hoisted before rendering",
        )),
    }
}

/// Returns true if values of the type implement `rawgen_runtime::Falsy`.
///
/// Generated enums and structs are objects and are never falsy.
#[must_use]
pub const fn is_falsy_capable(type_ref: &TypeRef) -> bool {
    !matches!(
        type_ref,
        TypeRef::Reference(_) | TypeRef::Struct(_) | TypeRef::Enum(_)
    )
}

/// Returns true if a field of `owner` holding `type_ref` must be boxed to
/// keep `owner` finitely sized.
///
/// Only direct struct references can close a cycle; collections already
/// live on the heap.
#[must_use]
pub fn needs_box(ir: &SchemaIr, owner: &str, type_ref: &TypeRef) -> bool {
    let TypeRef::Reference(name) = type_ref else {
        return false;
    };
    let mut visited = HashSet::new();
    reaches(ir, name, owner, &mut visited)
}

fn reaches<'a>(ir: &'a SchemaIr, from: &'a str, target: &str, visited: &mut HashSet<&'a str>) -> bool {
    if from == target {
        return true;
    }
    if !visited.insert(from) {
        return false;
    }
    let Some(Definition::Struct(def)) = ir.get_definition(from) else {
        return false;
    };
    def.fields.iter().any(|field| match &field.type_ref {
        TypeRef::Reference(next) => reaches(ir, next, target, visited),
        _ => false,
    })
}

/// Renders a default literal for a field of the given type.
///
/// # Errors
/// Returns `CodegenError` if an enum default matches no variant.
pub fn literal(
    ctx: &RenderContext<'_>,
    type_ref: &TypeRef,
    value: &Literal,
) -> Result<String, CodegenError> {
    match type_ref {
        TypeRef::Reference(name) => {
            let enum_def = ctx.ir.get_enum(name).ok_or_else(|| {
                CodegenError::generation(format!("default on non-enum reference '{name}'"))
            })?;
            let position = value
                .as_raw_value()
                .and_then(|raw| enum_def.variants.iter().position(|v| v.value == raw))
                .ok_or_else(|| {
                    CodegenError::generation(format!("no variant of '{name}' matches the default"))
                })?;
            Ok(format!(
                "super::{}::{}",
                ctx.names.type_name(name)?,
                ctx.names.variants(name)?[position].ident
            ))
        }
        TypeRef::Any => Ok(format!("serde_json::Value::from({})", scalar(value, None))),
        TypeRef::Primitive(kind) => Ok(scalar(value, Some(*kind))),
        _ => Err(CodegenError::generation(
            "collection and anonymous fields cannot carry a default",
        )),
    }
}

fn scalar(value: &Literal, kind: Option<PrimitiveKind>) -> String {
    match value {
        Literal::Bool(v) => v.to_string(),
        Literal::Integer(v) if kind == Some(PrimitiveKind::Float) => format!("{v}.0"),
        Literal::Integer(v) => format!("{v}_i64"),
        Literal::Float(v) => format!("{v:?}_f64"),
        Literal::String(v) if kind.is_some() => format!("{v:?}.to_string()"),
        Literal::String(v) => format!("{v:?}"),
    }
}

const fn primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "String",
        PrimitiveKind::Integer => "i64",
        PrimitiveKind::Float => "f64",
        PrimitiveKind::Bool => "bool",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rawgen_schema::{FieldDef, Schema, StructDef};

    #[test]
    fn test_scalar_literals() {
        assert_eq!(scalar(&Literal::Integer(3), Some(PrimitiveKind::Integer)), "3_i64");
        assert_eq!(scalar(&Literal::Integer(-3), Some(PrimitiveKind::Float)), "-3.0");
        assert_eq!(scalar(&Literal::Float(1.5), Some(PrimitiveKind::Float)), "1.5_f64");
        assert_eq!(
            scalar(&Literal::String("a\"b".into()), Some(PrimitiveKind::String)),
            "\"a\\\"b\".to_string()"
        );
        assert_eq!(scalar(&Literal::String("x".into()), None), "\"x\"");
        assert_eq!(scalar(&Literal::Bool(true), None), "true");
    }

    #[test]
    fn test_needs_box() {
        let schema = Schema::new("pkg")
            .with_definition(
                StructDef::new("Node")
                    .with_field(FieldDef::optional("next", TypeRef::reference("Node")))
                    .with_field(FieldDef::optional(
                        "children",
                        TypeRef::array(TypeRef::reference("Node")),
                    ))
                    .with_field(FieldDef::optional("meta", TypeRef::reference("Meta"))),
            )
            .with_definition(
                StructDef::new("Meta").with_field(FieldDef::optional("owner", TypeRef::reference("Node"))),
            )
            .with_definition(StructDef::new("Leaf"));
        let ir = SchemaIr::from_schema(&schema);

        assert!(needs_box(&ir, "Node", &TypeRef::reference("Node")));
        assert!(needs_box(&ir, "Node", &TypeRef::reference("Meta")));
        assert!(!needs_box(&ir, "Node", &TypeRef::array(TypeRef::reference("Node"))));
        assert!(!needs_box(&ir, "Node", &TypeRef::reference("Leaf")));
    }
}
