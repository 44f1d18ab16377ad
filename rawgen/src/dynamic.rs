//! Runtime enums built straight from IR.
//!
//! Useful where an enum is only known once a schema is loaded: the resulting
//! [`DynamicEnum`] hands out identity-stable instances keyed by the same
//! singleton keys generated classes intern under.

use rawgen_runtime::{DynamicEnum, Error as RuntimeError, RawValue};
use rawgen_schema::EnumDef;
use rawgen_schema::naming::to_pascal_case;

/// Builds a runtime enum from an enum definition.
///
/// Variants are keyed by their singleton key (the PascalCase variant name).
///
/// # Errors
/// Returns `RuntimeError` if the enum has no variants, or if two variants
/// share a key or a raw value.
pub fn instantiate_enum(def: &EnumDef) -> Result<DynamicEnum, RuntimeError> {
    DynamicEnum::new(
        def.name.clone(),
        def.variants.iter().map(|variant| {
            (
                to_pascal_case(&variant.name),
                runtime_value(&variant.value),
            )
        }),
    )
}

fn runtime_value(value: &rawgen_schema::RawValue) -> RawValue {
    match value {
        rawgen_schema::RawValue::Integer(v) => RawValue::Integer(*v),
        rawgen_schema::RawValue::String(v) => RawValue::String(v.clone()),
    }
}
