//! Synthetic schemas of configurable size.

use rawgen_schema::{
    EnumDef, EnumKind, FieldDef, InlineEnum, InlineStruct, Literal, PrimitiveKind, Schema,
    StructDef, TypeRef, Variant,
};

/// Builds a package with `enums` enums and `structs` structs.
///
/// Every struct references the enum of the same index (modulo `enums`),
/// carries an `Any` field, a defaulted primitive, and one anonymous struct
/// and enum, so each struct also yields two synthetic definitions.
#[must_use]
pub fn synthetic_schema(enums: usize, structs: usize) -> Schema {
    let mut schema = Schema::new("bench_package");

    for i in 0..enums {
        let mut def = EnumDef::new(format!("Level{i}"), EnumKind::Integer);
        for v in 0..8 {
            def = def.with_variant(format!("Step{v}"), v);
        }
        schema.add_definition(def);
    }

    for i in 0..structs {
        let mut def = StructDef::new(format!("Record{i}"))
            .with_comment(format!("Synthetic record {i}."))
            .with_field(FieldDef::required(
                "name",
                TypeRef::Primitive(PrimitiveKind::String),
            ))
            .with_field(
                FieldDef::optional("limit", TypeRef::Primitive(PrimitiveKind::Integer))
                    .with_default(Literal::Integer(100)),
            )
            .with_field(FieldDef::optional("fieldAny", TypeRef::Any))
            .with_field(FieldDef::optional(
                "tags",
                TypeRef::array(TypeRef::Primitive(PrimitiveKind::String)),
            ))
            .with_field(FieldDef::optional(
                "nested",
                TypeRef::Struct(InlineStruct::new(vec![FieldDef::optional(
                    "value",
                    TypeRef::Any,
                )])),
            ))
            .with_field(FieldDef::optional(
                "operator",
                TypeRef::Enum(InlineEnum {
                    kind: EnumKind::String,
                    variants: vec![
                        Variant::new("GreaterThan", ">"),
                        Variant::new("LessThan", "<"),
                    ],
                }),
            ));
        if enums > 0 {
            def = def.with_field(FieldDef::optional(
                "level",
                TypeRef::reference(format!("Level{}", i % enums)),
            ));
        }
        schema.add_definition(def);
    }

    schema
}
