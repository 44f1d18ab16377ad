//! PHP code generation.
//!
//! Every definition becomes one class in its own file under
//! `src/Types/{Package}/`, in the namespace `{root}\Types\{Package}`.

pub mod enums;
pub mod naming;
pub mod structs;
pub mod types;

pub use enums::EnumGenerator;
pub use naming::PhpConventions;
pub use structs::StructGenerator;

use crate::error::CodegenError;
use crate::naming::Conventions;
use crate::target::{RenderContext, Target};
use rawgen_schema::naming::to_pascal_case;
use rawgen_schema::{EnumDef, StructDef};
use std::path::PathBuf;

/// PHP backend.
#[derive(Debug, Default)]
pub struct PhpTarget {
    conventions: PhpConventions,
}

impl PhpTarget {
    /// Creates a new PHP backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Target for PhpTarget {
    fn name(&self) -> &'static str {
        "php"
    }

    fn extension(&self) -> &'static str {
        "php"
    }

    fn conventions(&self) -> &dyn Conventions {
        &self.conventions
    }

    fn unit_path(&self, ctx: &RenderContext<'_>, file_stem: &str) -> PathBuf {
        PathBuf::from("src")
            .join("Types")
            .join(to_pascal_case(&ctx.ir.package))
            .join(format!("{}.{}", file_stem, self.extension()))
    }

    fn render_enum(&self, ctx: &RenderContext<'_>, def: &EnumDef) -> Result<String, CodegenError> {
        EnumGenerator::new(ctx).generate(def)
    }

    fn render_struct(
        &self,
        ctx: &RenderContext<'_>,
        def: &StructDef,
    ) -> Result<String, CodegenError> {
        StructGenerator::new(ctx).generate(def)
    }
}

/// Returns the namespace generated classes of the package live in.
#[must_use]
pub fn namespace(ctx: &RenderContext<'_>) -> String {
    let package = to_pascal_case(&ctx.ir.package);
    if ctx.config.namespace_root.is_empty() {
        format!("Types\\{package}")
    } else {
        format!("{}\\Types\\{}", ctx.config.namespace_root, package)
    }
}

/// Renders the file preamble up to and including the class docblock.
pub(crate) fn preamble(ctx: &RenderContext<'_>, comments: &[String]) -> String {
    let mut output = String::new();
    output.push_str("<?php\n\n");
    output.push_str(&format!("namespace {};\n\n", namespace(ctx)));
    output.push_str(&docblock("", comments));
    output
}

/// Renders a `/** */` block, or nothing if there are no lines.
pub(crate) fn docblock(indent: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut output = format!("{indent}/**\n");
    for line in lines {
        let line = line.replace("*/", "*\\/");
        if line.is_empty() {
            output.push_str(&format!("{indent} *\n"));
        } else {
            output.push_str(&format!("{indent} * {line}\n"));
        }
    }
    output.push_str(&format!("{indent} */\n"));
    output
}
