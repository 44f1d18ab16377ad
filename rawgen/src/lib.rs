//! # rawgen
//!
//! Schema-driven code generation for enums and structs.
//!
//! rawgen takes a language-neutral description of enums and structs and
//! emits source code in which every enum is a closed type with
//! identity-stable variants that serialize to their raw value, and every
//! struct serializes every field, absent ones as `null`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rawgen::prelude::*;
//!
//! let config = GeneratorConfig::new().namespace_root("Grafana\\Foundation");
//! let units = generate_from_file(Path::new("schema.json"), &config)?;
//! write_units(&units, Path::new("out"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - IR model, flattening, validation and loading
//! - [`codegen`] - Identifier resolution, generators and targets
//! - [`runtime`] - Support code linked by generated Rust

pub mod dynamic;
pub mod prelude;

/// IR model, validation and loading.
pub mod schema {
    pub use rawgen_schema::*;
}

/// Code generation from IR.
pub mod codegen {
    pub use rawgen_codegen::*;
}

/// Runtime support for generated code.
pub mod runtime {
    pub use rawgen_runtime::*;
}

// Re-export commonly used items at the crate root
pub use dynamic::instantiate_enum;
pub use rawgen_codegen::{
    CodegenError, GeneratorConfig, RenderedUnit, generate_from_file, generate_from_json,
    write_units,
};
pub use rawgen_runtime::{DynamicEnum, EnumInstance, RawEnum};
pub use rawgen_schema::{Schema, SchemaIr};
