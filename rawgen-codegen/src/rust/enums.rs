//! Enum code generation.
//!
//! Enums become native Rust enums. Variants are unit values, so every
//! accessor call yields the same value and identity comes for free; the raw
//! value lives in a `match` table.

use super::{HEADER, doc_comments};
use crate::error::CodegenError;
use crate::target::RenderContext;
use rawgen_schema::{EnumDef, EnumKind, RawValue};

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates an enum definition and its impls.
    ///
    /// # Errors
    /// Returns `CodegenError` if the enum's names were not resolved.
    pub fn generate(&self, def: &EnumDef) -> Result<String, CodegenError> {
        let name = self.ctx.names.type_name(&def.name)?;
        let variants = self.ctx.names.variants(&def.name)?;
        let (raw_type, param_type) = match def.kind {
            EnumKind::Integer => ("i64", "i64"),
            EnumKind::String => ("&'static str", "&str"),
        };

        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str(&doc_comments("", &def.comments, &format!("{name} enum.")));
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
        output.push_str(&format!("pub enum {name} {{\n"));
        for (variant, names) in def.variants.iter().zip(variants) {
            output.push_str(&format!(
                "    /// Raw value `{}`.\n",
                raw_literal(&variant.value)
            ));
            output.push_str(&format!("    {},\n", names.ident));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {name} {{\n"));
        output.push_str("    /// All variants in declaration order.\n");
        output.push_str(&format!(
            "    pub const VARIANTS: [Self; {}] = [{}];\n\n",
            variants.len(),
            variants
                .iter()
                .map(|v| format!("Self::{}", v.ident))
                .collect::<Vec<_>>()
                .join(", ")
        ));

        for names in variants {
            output.push_str(&format!("    /// Returns the `{}` variant.\n", names.ident));
            output.push_str("    #[must_use]\n");
            output.push_str(&format!(
                "    pub const fn {}() -> Self {{\n",
                names.accessor
            ));
            output.push_str(&format!("        Self::{}\n", names.ident));
            output.push_str("    }\n\n");
        }

        output.push_str("    /// Returns the raw value of the variant.\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub const fn raw_value(&self) -> {raw_type} {{\n"
        ));
        output.push_str("        match self {\n");
        for (variant, names) in def.variants.iter().zip(variants) {
            output.push_str(&format!(
                "            Self::{} => {},\n",
                names.ident,
                raw_literal(&variant.value)
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output.push_str("    /// Looks up the variant holding a raw value.\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn from_raw_value(value: {param_type}) -> Option<Self> {{\n"
        ));
        output.push_str("        match value {\n");
        for (variant, names) in def.variants.iter().zip(variants) {
            output.push_str(&format!(
                "            {} => Some(Self::{}),\n",
                raw_literal(&variant.value),
                names.ident
            ));
        }
        output.push_str("            _ => None,\n");
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl std::fmt::Display for {name} {{\n"));
        output.push_str(
            "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n",
        );
        output.push_str("        write!(f, \"{}\", self.raw_value())\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        let serialize = match def.kind {
            EnumKind::Integer => "serialize_i64",
            EnumKind::String => "serialize_str",
        };
        output.push_str(&format!("impl serde::Serialize for {name} {{\n"));
        output.push_str(
            "    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {\n",
        );
        output.push_str(&format!(
            "        serializer.{serialize}(self.raw_value())\n"
        ));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl rawgen_runtime::RawEnum for {name} {{\n"));
        output.push_str("    fn raw(&self) -> rawgen_runtime::RawValue {\n");
        output.push_str("        rawgen_runtime::RawValue::from(self.raw_value())\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        Ok(output)
    }
}

fn raw_literal(value: &RawValue) -> String {
    match value {
        RawValue::Integer(v) => v.to_string(),
        RawValue::String(v) => format!("{v:?}"),
    }
}
