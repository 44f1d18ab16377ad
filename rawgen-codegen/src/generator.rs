//! Emission driver.
//!
//! Walks a flattened schema in declaration order, dispatches every
//! definition to its target's enum or struct renderer and collects one
//! source unit per definition. A unit set is returned whole or not at all.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::naming::NameTable;
use crate::target::{RenderContext, Target, target_for};
use rawgen_schema::{Definition, IrDefinition, SchemaIr, validate_ir};
use rayon::prelude::*;
use std::path::PathBuf;

/// Where a rendered unit came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSource {
    /// Rendering of one definition.
    Definition {
        /// Schema name of the definition.
        name: String,
        /// Generated type identifier.
        type_name: String,
    },
    /// Package index emitted by the target.
    Index,
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    /// Path relative to the output root.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
    /// Origin of the unit.
    pub source: UnitSource,
}

impl RenderedUnit {
    /// Returns the schema name of the rendered definition.
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        match &self.source {
            UnitSource::Definition { name, .. } => Some(name),
            UnitSource::Index => None,
        }
    }

    /// Returns the generated type identifier.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match &self.source {
            UnitSource::Definition { type_name, .. } => Some(type_name),
            UnitSource::Index => None,
        }
    }
}

/// Main code generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
    target: Box<dyn Target>,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the configured target.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self::with_target(ir, config, target_for(config.target))
    }

    /// Creates a new generator for a custom target.
    #[must_use]
    pub fn with_target(
        ir: &'a SchemaIr,
        config: &'a GeneratorConfig,
        target: Box<dyn Target>,
    ) -> Self {
        Self { ir, config, target }
    }

    /// Generates every unit of the package.
    ///
    /// # Returns
    /// One unit per definition in declaration order, followed by the
    /// target's index unit if it has one.
    ///
    /// # Errors
    /// Returns `CodegenError` for the first invalid definition, name
    /// collision or rendering failure, in declaration order.
    pub fn generate(&self) -> Result<Vec<RenderedUnit>, CodegenError> {
        validate_ir(self.ir)?;

        let names = NameTable::build(self.ir, self.target.conventions())?;
        tracing::debug!(
            "Resolved names for {} definitions of package '{}'",
            names.len(),
            self.ir.package
        );

        let ctx = RenderContext {
            ir: self.ir,
            names: &names,
            config: self.config,
        };

        let rendered: Vec<Result<RenderedUnit, CodegenError>> = if self.config.parallel {
            self.ir
                .definitions
                .par_iter()
                .map(|def| self.render_definition(&ctx, def))
                .collect()
        } else {
            self.ir
                .definitions
                .iter()
                .map(|def| self.render_definition(&ctx, def))
                .collect()
        };
        let mut units = rendered.into_iter().collect::<Result<Vec<_>, _>>()?;

        if let Some((path, contents)) = self.target.index_unit(&ctx)? {
            units.push(RenderedUnit {
                path,
                contents,
                source: UnitSource::Index,
            });
        }

        tracing::info!(
            "Generated {} {} units for package '{}'",
            units.len(),
            self.target.name(),
            self.ir.package
        );

        Ok(units)
    }

    fn render_definition(
        &self,
        ctx: &RenderContext<'_>,
        def: &IrDefinition,
    ) -> Result<RenderedUnit, CodegenError> {
        let name = def.name();
        let contents = match &def.definition {
            Definition::Enum(enum_def) => self.target.render_enum(ctx, enum_def)?,
            Definition::Struct(struct_def) => self.target.render_struct(ctx, struct_def)?,
        };
        let path = self.target.unit_path(ctx, ctx.names.file_stem(name)?);

        tracing::debug!("Rendered '{}' to {}", name, path.display());

        Ok(RenderedUnit {
            path,
            contents,
            source: UnitSource::Definition {
                name: name.to_string(),
                type_name: ctx.names.type_name(name)?.to_string(),
            },
        })
    }
}
