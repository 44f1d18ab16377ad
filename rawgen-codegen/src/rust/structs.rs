//! Struct code generation.

use super::{HEADER, doc_comments, types};
use crate::config::DefaultingPolicy;
use crate::error::CodegenError;
use crate::naming::FieldNames;
use crate::target::RenderContext;
use rawgen_schema::{FieldDef, StructDef, TypeRef};

/// Generator for struct definitions.
pub struct StructGenerator<'a> {
    ctx: &'a RenderContext<'a>,
}

/// How a field is stored and accepted by `new`.
struct FieldPlan<'f> {
    field: &'f FieldDef,
    names: &'f FieldNames,
    field_type: String,
    param_type: String,
    init: String,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates a struct definition and its constructor.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or field type cannot be rendered.
    pub fn generate(&self, def: &StructDef) -> Result<String, CodegenError> {
        let name = self.ctx.names.type_name(&def.name)?;
        let plans = def
            .fields
            .iter()
            .zip(self.ctx.names.fields(&def.name)?)
            .map(|(field, names)| self.plan_field(def, field, names))
            .collect::<Result<Vec<_>, CodegenError>>()?;

        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str(&doc_comments("", &def.comments, &format!("{name} struct.")));
        output.push_str("#[derive(Debug, Clone, PartialEq, serde::Serialize)]\n");
        output.push_str(&format!("pub struct {name} {{\n"));
        for plan in &plans {
            for line in &plan.field.comments {
                output.push_str(&format!("    /// {line}\n"));
            }
            output.push_str(&format!(
                "    #[serde(rename = \"{}\")]\n",
                plan.names.json_key.escape_default()
            ));
            output.push_str(&format!(
                "    pub {}: {},\n",
                plan.names.property, plan.field_type
            ));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {name} {{\n"));
        output.push_str(&format!("    /// Creates a new `{name}`.\n"));
        output.push_str("    #[must_use]\n");
        if plans.len() > 7 {
            output.push_str("    #[allow(clippy::too_many_arguments)]\n");
        }
        output.push_str(&format!(
            "    pub fn new({}) -> Self {{\n",
            plans
                .iter()
                .map(|p| format!("{}: {}", p.names.property, p.param_type))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output.push_str("        Self {\n");
        for plan in &plans {
            if plan.init == plan.names.property {
                output.push_str(&format!("            {},\n", plan.init));
            } else {
                output.push_str(&format!(
                    "            {}: {},\n",
                    plan.names.property, plan.init
                ));
            }
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        Ok(output)
    }

    fn plan_field<'f>(
        &self,
        def: &StructDef,
        field: &'f FieldDef,
        names: &'f FieldNames,
    ) -> Result<FieldPlan<'f>, CodegenError> {
        let base = types::rust_type(self.ctx, &field.type_ref)?;
        let boxed = types::needs_box(self.ctx.ir, &def.name, &field.type_ref);
        let stored = if boxed { format!("Box<{base}>") } else { base.clone() };
        let coalesce = self.ctx.config.defaulting == DefaultingPolicy::CoalesceFalsy
            && types::is_falsy_capable(&field.type_ref);
        let param = &names.property;

        let default = field
            .default
            .as_ref()
            .map(|value| types::literal(self.ctx, &field.type_ref, value))
            .transpose()?;

        let (field_type, param_type, init) = match (&field.type_ref, default) {
            (TypeRef::Any, None) => {
                let init = if coalesce && field.is_optional() {
                    format!("rawgen_runtime::coalesce({param})")
                } else {
                    param.clone()
                };
                (format!("Option<{base}>"), format!("Option<{base}>"), init)
            }
            (TypeRef::Any, Some(default)) => {
                let init = if coalesce {
                    format!("Some(rawgen_runtime::coalesce_or({param}, {default}))")
                } else {
                    format!("Some({param}.unwrap_or({default}))")
                };
                (format!("Option<{base}>"), format!("Option<{base}>"), init)
            }
            (_, Some(default)) => {
                let init = if coalesce {
                    format!("rawgen_runtime::coalesce_or({param}, {default})")
                } else {
                    format!("{param}.unwrap_or({default})")
                };
                (base.clone(), format!("Option<{base}>"), init)
            }
            (_, None) if field.is_optional() => {
                let init = if coalesce {
                    format!("rawgen_runtime::coalesce({param})")
                } else if boxed {
                    format!("{param}.map(Box::new)")
                } else {
                    param.clone()
                };
                (format!("Option<{stored}>"), format!("Option<{base}>"), init)
            }
            (_, None) => {
                let init = if boxed {
                    format!("Box::new({param})")
                } else {
                    param.clone()
                };
                (stored, base, init)
            }
        };

        Ok(FieldPlan {
            field,
            names,
            field_type,
            param_type,
            init,
        })
    }
}
