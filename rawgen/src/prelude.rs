//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use rawgen::prelude::*;
//! ```

// Schema types
pub use rawgen_schema::{
    Definition, EnumDef, EnumKind, FieldDef, InlineEnum, InlineStruct, Literal, ParseError,
    PrimitiveKind, Schema, SchemaError, SchemaIr, StructDef, TypeRef, Variant,
};

// Codegen types
pub use rawgen_codegen::{
    CodegenError, DefaultingPolicy, Generator, GeneratorConfig, RenderedUnit, TargetKind,
    UnitSource, generate_from_file, generate_from_json, write_units,
};

// Runtime types
pub use rawgen_runtime::{
    DynamicEnum, EnumInstance, Error as RuntimeError, Falsy, RawEnum, RawValue, coalesce,
    coalesce_or,
};

pub use crate::dynamic::instantiate_enum;
