//! PHP type and literal rendering.

use super::namespace;
use crate::error::CodegenError;
use crate::target::RenderContext;
use rawgen_schema::{Literal, PrimitiveKind, RawValue, TypeRef};

/// Returns the native type declaration for a type, or an empty string when
/// PHP cannot express it (`Any`).
///
/// # Errors
/// Returns `CodegenError` for a reference that has no resolved name.
pub fn type_hint(ctx: &RenderContext<'_>, type_ref: &TypeRef) -> Result<String, CodegenError> {
    match type_ref {
        TypeRef::Primitive(kind) => Ok(primitive(*kind).to_string()),
        TypeRef::Any => Ok(String::new()),
        TypeRef::Reference(name) => class_ref(ctx, name),
        TypeRef::Array(_) | TypeRef::Map(_) => Ok("array".to_string()),
        TypeRef::Struct(_) | TypeRef::Enum(_) => Err(inline_shape()),
    }
}

/// Returns the docblock type for a type.
///
/// # Errors
/// Returns `CodegenError` for a reference that has no resolved name.
pub fn doc_type(ctx: &RenderContext<'_>, type_ref: &TypeRef) -> Result<String, CodegenError> {
    match type_ref {
        TypeRef::Primitive(kind) => Ok(primitive(*kind).to_string()),
        TypeRef::Any => Ok("mixed".to_string()),
        TypeRef::Reference(name) => class_ref(ctx, name),
        TypeRef::Array(elem) => Ok(format!("array<{}>", doc_type(ctx, elem)?)),
        TypeRef::Map(value) => Ok(format!("array<string, {}>", doc_type(ctx, value)?)),
        TypeRef::Struct(_) | TypeRef::Enum(_) => Err(inline_shape()),
    }
}

/// Returns the fully qualified name of a generated class.
///
/// # Errors
/// Returns `CodegenError` if the definition has no resolved name.
pub fn class_ref(ctx: &RenderContext<'_>, definition: &str) -> Result<String, CodegenError> {
    Ok(format!(
        "\\{}\\{}",
        namespace(ctx),
        ctx.names.type_name(definition)?
    ))
}

/// Renders a default literal for a field of the given type.
///
/// A default on an enum-typed field is rendered as the accessor call of the
/// variant holding that raw value.
///
/// # Errors
/// Returns `CodegenError` if an enum default matches no variant.
pub fn literal(
    ctx: &RenderContext<'_>,
    type_ref: &TypeRef,
    value: &Literal,
) -> Result<String, CodegenError> {
    if let TypeRef::Reference(name) = type_ref
        && let Some(enum_def) = ctx.ir.get_enum(name)
    {
        let position = value
            .as_raw_value()
            .and_then(|raw| enum_def.variants.iter().position(|v| v.value == raw))
            .ok_or_else(|| {
                CodegenError::generation(format!("no variant of '{name}' matches the default"))
            })?;
        let accessor = &ctx.names.variants(name)?[position].accessor;
        return Ok(format!("{}::{}()", class_ref(ctx, name)?, accessor));
    }

    Ok(match value {
        Literal::Bool(v) => v.to_string(),
        Literal::Integer(v) => v.to_string(),
        Literal::Float(v) => format!("{v:?}"),
        Literal::String(v) => string_literal(v),
    })
}

/// Renders an enum raw value.
#[must_use]
pub fn raw_value(value: &RawValue) -> String {
    match value {
        RawValue::Integer(v) => v.to_string(),
        RawValue::String(v) => string_literal(v),
    }
}

/// Renders a double-quoted PHP string.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    output.push('"');
    for c in value.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '"' => output.push_str("\\\""),
            '$' => output.push_str("\\$"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => output.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => output.push(c),
        }
    }
    output.push('"');
    output
}

const fn primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "string",
        PrimitiveKind::Integer => "int",
        PrimitiveKind::Float => "float",
        PrimitiveKind::Bool => "bool",
    }
}

fn inline_shape() -> CodegenError {
    CodegenError::generation("anonymous shapes must be hoisted before rendering")
}
