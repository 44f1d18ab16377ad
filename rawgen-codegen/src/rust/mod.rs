//! Rust code generation.
//!
//! Every definition becomes one module file under `src/{package}/`; a
//! `mod.rs` index declares the modules and re-exports their types, so
//! generated types refer to each other as `super::Type`.

pub mod enums;
pub mod naming;
pub mod structs;
pub mod types;

pub use enums::EnumGenerator;
pub use naming::RustConventions;
pub use structs::StructGenerator;

use crate::error::CodegenError;
use crate::naming::Conventions;
use crate::target::{RenderContext, Target};
use rawgen_schema::naming::to_snake_case;
use rawgen_schema::{EnumDef, StructDef};
use std::path::PathBuf;

/// First line of every generated Rust file.
pub const HEADER: &str = "// Code generated by rawgen. DO NOT EDIT.\n";

/// Rust backend.
#[derive(Debug, Default)]
pub struct RustTarget {
    conventions: RustConventions,
}

impl RustTarget {
    /// Creates a new Rust backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn package_dir(ctx: &RenderContext<'_>) -> PathBuf {
        PathBuf::from("src").join(to_snake_case(&ctx.ir.package))
    }
}

impl Target for RustTarget {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn conventions(&self) -> &dyn Conventions {
        &self.conventions
    }

    fn unit_path(&self, ctx: &RenderContext<'_>, file_stem: &str) -> PathBuf {
        Self::package_dir(ctx).join(format!("{}.{}", file_stem, self.extension()))
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

    fn index_unit(
        &self,
        ctx: &RenderContext<'_>,
    ) -> Result<Option<(PathBuf, String)>, CodegenError> {
        let mut output = String::from(HEADER);
        output.push_str(&format!("\n//! Types of the `{}` package.\n", ctx.ir.package));

        let mut modules = Vec::with_capacity(ctx.ir.len());
        for def in &ctx.ir.definitions {
            let module = naming::escape_keyword(ctx.names.file_stem(def.name())?);
            modules.push((module, ctx.names.type_name(def.name())?));
        }

        if !modules.is_empty() {
            output.push('\n');
        }
        for (module, _) in &modules {
            output.push_str(&format!("pub mod {module};\n"));
        }
        if !modules.is_empty() {
            output.push('\n');
        }
        for (module, type_name) in &modules {
            output.push_str(&format!("pub use {module}::{type_name};\n"));
        }

        Ok(Some((Self::package_dir(ctx).join("mod.rs"), output)))
    }
}

/// Renders `///` doc lines, falling back to `fallback` when there are none.
pub(crate) fn doc_comments(indent: &str, lines: &[String], fallback: &str) -> String {
    let mut output = String::new();
    if lines.is_empty() {
        output.push_str(&format!("{indent}/// {fallback}\n"));
    }
    for line in lines {
        if line.is_empty() {
            output.push_str(&format!("{indent}///\n"));
        } else {
            output.push_str(&format!("{indent}/// {line}\n"));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, TargetKind};
    use crate::generator::Generator;
    use rawgen_schema::{EnumKind, FieldDef, Schema, SchemaIr, TypeRef};

    #[test]
    fn test_index_unit() {
        let schema = Schema::new("enums")
            .with_definition(EnumDef::new("DashboardCursorSync", EnumKind::Integer).with_variant("Off", 0))
            .with_definition(
                StructDef::new("Type").with_field(FieldDef::optional("value", TypeRef::Any)),
            );
        let ir = SchemaIr::from_schema(&schema);
        let config = GeneratorConfig::new().target(TargetKind::Rust);
        let units = Generator::new(&ir, &config).generate().unwrap();

        assert_eq!(units[0].path, PathBuf::from("src/enums/dashboard_cursor_sync.rs"));
        assert_eq!(units[1].path, PathBuf::from("src/enums/type.rs"));
        assert_eq!(
            units[2].contents,
            "// Code generated by rawgen. DO NOT EDIT.\n\
             \n\
             //! Types of the `enums` package.\n\
             \n\
             pub mod dashboard_cursor_sync;\n\
             pub mod r#type;\n\
             \n\
             pub use dashboard_cursor_sync::DashboardCursorSync;\n\
             pub use r#type::Type;\n"
        );
        assert!(syn::parse_file(&units[2].contents).is_ok());
    }

    #[test]
    fn test_doc_comments() {
        assert_eq!(doc_comments("", &[], "Panel struct."), "/// Panel struct.\n");
        assert_eq!(
            doc_comments("    ", &["a".to_string(), String::new()], "unused"),
            "    /// a\n    ///\n"
        );
    }
}
