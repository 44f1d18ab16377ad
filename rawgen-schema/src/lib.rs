//! # rawgen Schema
//!
//! Intermediate representation of data-model definitions.
//!
//! This crate provides:
//! - The IR model: packages, enums, structs, fields and type references
//! - Flattening of anonymous shapes into synthetic definitions
//! - Validation run before any code is emitted
//! - Case conversion helpers shared by every target
//! - A JSON loader for IR documents

pub mod error;
pub mod ir;
pub mod loader;
pub mod naming;
pub mod structs;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{IrDefinition, Origin, SchemaIr};
pub use loader::{parse_schema, parse_schema_file};
pub use structs::{FieldDef, InlineStruct, StructDef};
pub use types::{
    Definition, EnumDef, EnumKind, InlineEnum, Literal, PrimitiveKind, RawValue, Schema, TypeRef,
    Variant,
};
pub use validation::{validate_ir, validate_schema};
