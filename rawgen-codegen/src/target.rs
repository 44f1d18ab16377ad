//! Target language backends.

use crate::config::{GeneratorConfig, TargetKind};
use crate::error::CodegenError;
use crate::naming::{Conventions, NameTable};
use crate::php::PhpTarget;
use crate::rust::RustTarget;
use rawgen_schema::{EnumDef, SchemaIr, StructDef};
use std::path::PathBuf;

/// Everything a renderer may read while rendering one definition.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Flattened schema.
    pub ir: &'a SchemaIr,
    /// Resolved identifiers.
    pub names: &'a NameTable,
    /// Generator configuration.
    pub config: &'a GeneratorConfig,
}

/// A target language the generator can emit.
pub trait Target: Send + Sync {
    /// Returns the target name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the file extension of generated units.
    fn extension(&self) -> &'static str;

    /// Returns the naming conventions of the target.
    fn conventions(&self) -> &dyn Conventions;

    /// Returns the path of the unit holding a definition, relative to the
    /// output root.
    fn unit_path(&self, ctx: &RenderContext<'_>, file_stem: &str) -> PathBuf;

    /// Renders an enum definition.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type cannot be rendered.
    fn render_enum(&self, ctx: &RenderContext<'_>, def: &EnumDef) -> Result<String, CodegenError>;

    /// Renders a struct definition.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type cannot be rendered.
    fn render_struct(
        &self,
        ctx: &RenderContext<'_>,
        def: &StructDef,
    ) -> Result<String, CodegenError>;

    /// Renders a unit tying the package together, if the target needs one.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name cannot be resolved.
    fn index_unit(
        &self,
        _ctx: &RenderContext<'_>,
    ) -> Result<Option<(PathBuf, String)>, CodegenError> {
        Ok(None)
    }
}

/// Returns the built-in backend for a target kind.
#[must_use]
pub fn target_for(kind: TargetKind) -> Box<dyn Target> {
    match kind {
        TargetKind::Php => Box::new(PhpTarget::new()),
        TargetKind::Rust => Box::new(RustTarget::new()),
    }
}
