//! Intermediate representation for code generation.
//!
//! This module provides a flattened representation of a schema in which every
//! anonymous struct or enum shape has been hoisted into a synthetic top-level
//! definition. Generators only ever see named definitions and references.

use crate::naming::{synthetic_enum_name, synthetic_struct_name, to_pascal_case};
use crate::structs::{FieldDef, StructDef};
use crate::types::{Definition, EnumDef, Schema, TypeRef};
use std::collections::HashMap;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Package name.
    pub package: String,
    /// Flattened definitions, each parent followed by the shapes hoisted out of it.
    pub definitions: Vec<IrDefinition>,
    /// Definition lookup map.
    index: HashMap<String, usize>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed schema.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let mut definitions = Vec::with_capacity(schema.definitions.len());

        for definition in &schema.definitions {
            match definition {
                Definition::Enum(e) => definitions.push(IrDefinition {
                    definition: Definition::Enum(e.clone()),
                    origin: Origin::Declared,
                }),
                Definition::Struct(s) => {
                    let lowering = Lowering {
                        package: &schema.package,
                    };
                    lowering.lower_struct(
                        s.name.clone(),
                        s.comments.clone(),
                        &s.fields,
                        Origin::Declared,
                        &mut definitions,
                    );
                }
            }
        }

        let mut index = HashMap::with_capacity(definitions.len());
        for (idx, def) in definitions.iter().enumerate() {
            index.entry(def.name().to_string()).or_insert(idx);
        }

        Self {
            package: schema.package.clone(),
            definitions,
            index,
        }
    }

    /// Gets a definition by name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.index
            .get(name)
            .map(|&idx| &self.definitions[idx].definition)
    }

    /// Gets an enum definition by name.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.get_definition(name).and_then(Definition::as_enum)
    }

    /// Gets a struct definition by name.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        self.get_definition(name).and_then(Definition::as_struct)
    }

    /// Iterates over every enum definition in order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.definitions
            .iter()
            .filter_map(|d| d.definition.as_enum())
    }

    /// Iterates over every struct definition in order.
    pub fn structs(&self) -> impl Iterator<Item = &StructDef> {
        self.definitions
            .iter()
            .filter_map(|d| d.definition.as_struct())
    }

    /// Returns the number of definitions, synthetic ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the unit has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Definition together with where it came from.
#[derive(Debug, Clone)]
pub struct IrDefinition {
    /// The definition, with inline shapes replaced by references.
    pub definition: Definition,
    /// Origin of the definition.
    pub origin: Origin,
}

impl IrDefinition {
    /// Returns the definition name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// Returns true if the definition was hoisted out of a field.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self.origin, Origin::Synthetic { .. })
    }
}

/// Origin of an IR definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Declared at the top level of the schema.
    Declared,
    /// Hoisted out of an anonymous shape.
    Synthetic {
        /// Definition owning the field.
        parent: String,
        /// Field the shape was declared on.
        field: String,
    },
}

struct Lowering<'a> {
    package: &'a str,
}

impl Lowering<'_> {
    fn lower_struct(
        &self,
        name: String,
        comments: Vec<String>,
        fields: &[FieldDef],
        origin: Origin,
        out: &mut Vec<IrDefinition>,
    ) {
        let synthetic_parent = matches!(origin, Origin::Synthetic { .. });
        let mut hoisted = Vec::new();

        let fields = fields
            .iter()
            .map(|field| FieldDef {
                type_ref: self.lower_type(
                    &name,
                    synthetic_parent,
                    &field.name,
                    &field.type_ref,
                    &mut hoisted,
                ),
                ..field.clone()
            })
            .collect();

        out.push(IrDefinition {
            definition: Definition::Struct(StructDef {
                name,
                comments,
                fields,
            }),
            origin,
        });
        out.extend(hoisted);
    }

    fn lower_type(
        &self,
        parent: &str,
        synthetic_parent: bool,
        field: &str,
        type_ref: &TypeRef,
        hoisted: &mut Vec<IrDefinition>,
    ) -> TypeRef {
        let origin = || Origin::Synthetic {
            parent: parent.to_string(),
            field: field.to_string(),
        };

        match type_ref {
            TypeRef::Struct(inline) => {
                let name = if synthetic_parent {
                    format!("{}{}", parent, to_pascal_case(field))
                } else {
                    synthetic_struct_name(self.package, parent, field)
                };
                self.lower_struct(name.clone(), Vec::new(), &inline.fields, origin(), hoisted);
                TypeRef::Reference(name)
            }
            TypeRef::Enum(inline) => {
                let name = synthetic_enum_name(parent, field);
                hoisted.push(IrDefinition {
                    definition: Definition::Enum(EnumDef {
                        name: name.clone(),
                        comments: Vec::new(),
                        kind: inline.kind,
                        variants: inline.variants.clone(),
                    }),
                    origin: origin(),
                });
                TypeRef::Reference(name)
            }
            TypeRef::Array(elem) => TypeRef::Array(Box::new(self.lower_type(
                parent,
                synthetic_parent,
                field,
                elem,
                hoisted,
            ))),
            TypeRef::Map(value) => TypeRef::Map(Box::new(self.lower_type(
                parent,
                synthetic_parent,
                field,
                value,
                hoisted,
            ))),
            TypeRef::Primitive(_) | TypeRef::Any | TypeRef::Reference(_) => type_ref.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::InlineStruct;
    use crate::types::{EnumKind, InlineEnum, PrimitiveKind, Variant};

    fn optional_fields_schema() -> Schema {
        Schema::new("struct_optional_fields").with_definition(
            StructDef::new("SomeStruct")
                .with_field(FieldDef::optional(
                    "fieldRef",
                    TypeRef::reference("SomeOtherStruct"),
                ))
                .with_field(FieldDef::optional(
                    "fieldAnonymousStruct",
                    TypeRef::Struct(InlineStruct::new(vec![FieldDef::optional(
                        "FieldAny",
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
                )),
        )
    }

    #[test]
    fn test_schema_ir_from_schema() {
        let schema = Schema::new("enums").with_definition(
            EnumDef::new("DashboardCursorSync", EnumKind::Integer).with_variant("Off", 0),
        );
        let ir = SchemaIr::from_schema(&schema);

        assert_eq!(ir.package, "enums");
        assert_eq!(ir.len(), 1);
        assert!(ir.get_enum("DashboardCursorSync").is_some());
        assert!(ir.get_struct("DashboardCursorSync").is_none());
        assert!(!ir.definitions[0].is_synthetic());
    }

    #[test]
    fn test_inline_shapes_are_hoisted() {
        let ir = SchemaIr::from_schema(&optional_fields_schema());

        let names: Vec<_> = ir.definitions.iter().map(IrDefinition::name).collect();
        assert_eq!(
            names,
            vec![
                "SomeStruct",
                "StructOptionalFieldsSomeStructFieldAnonymousStruct",
                "SomeStructOperator",
            ]
        );

        let parent = ir.get_struct("SomeStruct").unwrap();
        assert_eq!(
            parent.field("fieldAnonymousStruct").unwrap().type_ref,
            TypeRef::reference("StructOptionalFieldsSomeStructFieldAnonymousStruct")
        );
        assert_eq!(
            parent.field("operator").unwrap().type_ref,
            TypeRef::reference("SomeStructOperator")
        );

        let operator = ir.get_enum("SomeStructOperator").unwrap();
        assert_eq!(operator.kind, EnumKind::String);
        assert_eq!(operator.variants.len(), 2);

        assert_eq!(
            ir.definitions[2].origin,
            Origin::Synthetic {
                parent: "SomeStruct".into(),
                field: "operator".into(),
            }
        );
    }

    #[test]
    fn test_nested_inline_struct_names() {
        let inner = InlineStruct::new(vec![FieldDef::required(
            "value",
            TypeRef::Primitive(PrimitiveKind::Integer),
        )]);
        let outer = InlineStruct::new(vec![FieldDef::optional(
            "inner",
            TypeRef::array(TypeRef::Struct(inner)),
        )]);
        let schema = Schema::new("pkg")
            .with_definition(StructDef::new("Root").with_field(FieldDef::optional(
                "outer",
                TypeRef::Struct(outer),
            )));

        let ir = SchemaIr::from_schema(&schema);
        let names: Vec<_> = ir.definitions.iter().map(IrDefinition::name).collect();
        assert_eq!(names, vec!["Root", "PkgRootOuter", "PkgRootOuterInner"]);

        let outer = ir.get_struct("PkgRootOuter").unwrap();
        assert_eq!(
            outer.fields[0].type_ref,
            TypeRef::array(TypeRef::reference("PkgRootOuterInner"))
        );
    }

    #[test]
    fn test_enums_and_structs_iterators() {
        let ir = SchemaIr::from_schema(&optional_fields_schema());
        assert_eq!(ir.enums().count(), 1);
        assert_eq!(ir.structs().count(), 2);
        assert!(!ir.is_empty());
    }
}
