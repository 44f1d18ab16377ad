//! Schema type definitions.
//!
//! This module contains the data structures representing one generation unit:
//! the package, its enum and struct definitions, and the type references
//! fields use to point at primitives, dynamic values or other definitions.

use crate::structs::{InlineStruct, StructDef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A generation unit: every definition of one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Package name (namespace).
    pub package: String,
    /// Definitions in declaration order.
    #[serde(default)]
    pub definitions: Vec<Definition>,
    /// Definition lookup map (built on insertion and after loading).
    #[serde(skip)]
    definition_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            definitions: Vec::new(),
            definition_map: HashMap::new(),
        }
    }

    /// Adds a definition to the schema.
    pub fn add_definition(&mut self, definition: impl Into<Definition>) {
        let definition = definition.into();
        let index = self.definitions.len();
        self.definition_map
            .entry(definition.name().to_string())
            .or_insert(index);
        self.definitions.push(definition);
    }

    /// Adds a definition and returns the schema, for chained construction.
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<Definition>) -> Self {
        self.add_definition(definition);
        self
    }

    /// Looks up a definition by name.
    ///
    /// When two definitions share a name the first one wins; validation
    /// reports the duplicate.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.definition_map
            .get(name)
            .map(|&idx| &self.definitions[idx])
    }

    /// Returns true if a definition with the given name exists.
    #[must_use]
    pub fn has_definition(&self, name: &str) -> bool {
        self.definition_map.contains_key(name)
    }

    /// Builds the definition lookup map from the definitions vector.
    pub fn build_definition_map(&mut self) {
        self.definition_map.clear();
        for (idx, definition) in self.definitions.iter().enumerate() {
            self.definition_map
                .entry(definition.name().to_string())
                .or_insert(idx);
        }
    }
}

/// Top-level definition variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "definition", rename_all = "snake_case")]
pub enum Definition {
    /// Enumeration backed by a primitive.
    Enum(EnumDef),
    /// Record type.
    Struct(StructDef),
}

impl Definition {
    /// Returns the name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => &e.name,
            Self::Struct(s) => &s.name,
        }
    }

    /// Returns the documentation lines attached to the definition.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        match self {
            Self::Enum(e) => &e.comments,
            Self::Struct(s) => &s.comments,
        }
    }

    /// Returns true if this is an enum definition.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this is a struct definition.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns the enum definition, if this is one.
    #[must_use]
    pub const fn as_enum(&self) -> Option<&EnumDef> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Struct(_) => None,
        }
    }

    /// Returns the struct definition, if this is one.
    #[must_use]
    pub const fn as_struct(&self) -> Option<&StructDef> {
        match self {
            Self::Struct(s) => Some(s),
            Self::Enum(_) => None,
        }
    }
}

impl From<EnumDef> for Definition {
    fn from(value: EnumDef) -> Self {
        Self::Enum(value)
    }
}

impl From<StructDef> for Definition {
    fn from(value: StructDef) -> Self {
        Self::Struct(value)
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Documentation lines.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Underlying primitive kind of every variant.
    pub kind: EnumKind,
    /// Variants in declaration order.
    pub variants: Vec<Variant>,
}

impl EnumDef {
    /// Creates a new enum definition without variants.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EnumKind) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            kind,
            variants: Vec::new(),
        }
    }

    /// Appends a variant.
    #[must_use]
    pub fn with_variant(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.variants.push(Variant::new(name, value));
        self
    }

    /// Appends a documentation line.
    #[must_use]
    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    /// Finds a variant by name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Finds a variant by raw value.
    #[must_use]
    pub fn variant_by_value(&self, value: &RawValue) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.value == value)
    }
}

/// Primitive kind backing an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumKind {
    /// Integer-backed enum.
    Integer,
    /// String-backed enum.
    String,
}

impl EnumKind {
    /// Returns the schema-level name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named, valued case of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant name, schema-identifier cased.
    pub name: String,
    /// Literal the variant serializes to.
    pub value: RawValue,
}

impl Variant {
    /// Creates a new variant.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Raw primitive value of an enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Integer literal.
    Integer(i64),
    /// String literal.
    String(String),
}

impl RawValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> EnumKind {
        match self {
            Self::Integer(_) => EnumKind::Integer,
            Self::String(_) => EnumKind::String,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Primitive scalar kinds a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// UTF-8 string.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
}

impl PrimitiveKind {
    /// Returns the schema-level name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// Reference from a field to the type it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Primitive scalar.
    Primitive(PrimitiveKind),
    /// Unconstrained dynamic value.
    Any,
    /// Named reference to another definition of the same unit.
    Reference(String),
    /// List of elements.
    Array(Box<TypeRef>),
    /// String-keyed map.
    Map(Box<TypeRef>),
    /// Anonymous struct shape, hoisted into a synthetic definition.
    Struct(InlineStruct),
    /// Anonymous enum shape, hoisted into a synthetic definition.
    Enum(InlineEnum),
}

impl TypeRef {
    /// Creates a reference to a named definition.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Creates an array of the given element type.
    #[must_use]
    pub fn array(elem: TypeRef) -> Self {
        Self::Array(Box::new(elem))
    }

    /// Creates a string-keyed map of the given value type.
    #[must_use]
    pub fn map(value: TypeRef) -> Self {
        Self::Map(Box::new(value))
    }

    /// Returns true for the dynamic `Any` type.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns true for anonymous struct and enum shapes.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self, Self::Struct(_) | Self::Enum(_))
    }

    /// Returns the referenced definition name, if this is a reference.
    #[must_use]
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            Self::Reference(name) => Some(name),
            _ => None,
        }
    }
}

/// Anonymous enum shape declared inline on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineEnum {
    /// Underlying primitive kind.
    pub kind: EnumKind,
    /// Variants in declaration order.
    pub variants: Vec<Variant>,
}

/// Explicit default value supplied by the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    String(String),
}

impl Literal {
    /// Returns the literal as an enum raw value, if it can be one.
    #[must_use]
    pub fn as_raw_value(&self) -> Option<RawValue> {
        match self {
            Self::Integer(v) => Some(RawValue::Integer(*v)),
            Self::String(v) => Some(RawValue::String(v.clone())),
            Self::Bool(_) | Self::Float(_) => None,
        }
    }

    /// Returns true if the literal can initialize a field of the given kind.
    #[must_use]
    pub const fn fits(&self, kind: PrimitiveKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), PrimitiveKind::Bool)
                | (Self::Integer(_), PrimitiveKind::Integer)
                | (Self::Integer(_) | Self::Float(_), PrimitiveKind::Float)
                | (Self::String(_), PrimitiveKind::String)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::FieldDef;

    fn cursor_sync() -> EnumDef {
        EnumDef::new("DashboardCursorSync", EnumKind::Integer)
            .with_variant("Off", 0)
            .with_variant("Crosshair", 1)
            .with_variant("Tooltip", 2)
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new("enums").with_definition(cursor_sync());

        assert!(schema.has_definition("DashboardCursorSync"));
        assert!(!schema.has_definition("Missing"));
        let def = schema.get_definition("DashboardCursorSync").unwrap();
        assert!(def.is_enum());
        assert_eq!(def.as_enum().unwrap().variants.len(), 3);
    }

    #[test]
    fn test_schema_lookup_first_duplicate_wins() {
        let schema = Schema::new("pkg")
            .with_definition(EnumDef::new("Dup", EnumKind::Integer).with_variant("A", 1))
            .with_definition(StructDef::new("Dup"));

        assert!(schema.get_definition("Dup").unwrap().is_enum());
        assert_eq!(schema.definitions.len(), 2);
    }

    #[test]
    fn test_build_definition_map() {
        let mut schema = Schema::new("pkg");
        schema.definitions.push(StructDef::new("Foo").into());
        assert!(!schema.has_definition("Foo"));

        schema.build_definition_map();
        assert!(schema.has_definition("Foo"));
    }

    #[test]
    fn test_enum_variant_lookup() {
        let def = cursor_sync();
        assert_eq!(def.variant("Tooltip").unwrap().value, RawValue::Integer(2));
        assert_eq!(
            def.variant_by_value(&RawValue::Integer(1)).unwrap().name,
            "Crosshair"
        );
        assert!(def.variant("Hidden").is_none());
    }

    #[test]
    fn test_raw_value_display() {
        assert_eq!(RawValue::Integer(0).to_string(), "0");
        assert_eq!(RawValue::Integer(-12).to_string(), "-12");
        assert_eq!(RawValue::from(">").to_string(), ">");
        assert_eq!(RawValue::from("<").kind(), EnumKind::String);
    }

    #[test]
    fn test_literal_fits() {
        assert!(Literal::Integer(3).fits(PrimitiveKind::Integer));
        assert!(Literal::Integer(3).fits(PrimitiveKind::Float));
        assert!(!Literal::Float(1.5).fits(PrimitiveKind::Integer));
        assert!(!Literal::String("x".into()).fits(PrimitiveKind::Bool));
        assert_eq!(
            Literal::String(">".into()).as_raw_value(),
            Some(RawValue::from(">"))
        );
        assert_eq!(Literal::Bool(true).as_raw_value(), None);
    }

    #[test]
    fn test_definition_accessors() {
        let def: Definition = StructDef::new("SomeStruct")
            .with_comment("A struct.")
            .with_field(FieldDef::optional("fieldAny", TypeRef::Any))
            .into();

        assert!(def.is_struct());
        assert_eq!(def.name(), "SomeStruct");
        assert_eq!(def.comments(), ["A struct.".to_string()]);
        assert!(def.as_enum().is_none());
    }

    #[test]
    fn test_type_ref_helpers() {
        assert!(TypeRef::Any.is_any());
        assert_eq!(TypeRef::reference("Foo").referenced_name(), Some("Foo"));
        assert!(TypeRef::array(TypeRef::Any).referenced_name().is_none());
        let inline = TypeRef::Enum(InlineEnum {
            kind: EnumKind::String,
            variants: vec![Variant::new("GreaterThan", ">")],
        });
        assert!(inline.is_inline());
    }
}
