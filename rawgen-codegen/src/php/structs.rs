//! PHP struct generation.

use super::{docblock, preamble, types};
use crate::config::DefaultingPolicy;
use crate::error::CodegenError;
use crate::naming::FieldNames;
use crate::target::RenderContext;
use rawgen_schema::{FieldDef, StructDef};

/// Generator for struct classes.
pub struct StructGenerator<'a> {
    ctx: &'a RenderContext<'a>,
}

/// Field together with its resolved names and rendered types.
struct FieldView<'f> {
    field: &'f FieldDef,
    names: &'f FieldNames,
    hint: String,
    doc: String,
}

impl FieldView<'_> {
    fn nullable(&self) -> bool {
        self.field.is_optional() && self.field.default.is_none()
    }
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the class file of a struct.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or field type cannot be rendered.
    pub fn generate(&self, def: &StructDef) -> Result<String, CodegenError> {
        let class = self.ctx.names.type_name(&def.name)?;
        let names = self.ctx.names.fields(&def.name)?;
        let fields = def
            .fields
            .iter()
            .zip(names)
            .map(|(field, names)| {
                Ok(FieldView {
                    field,
                    names,
                    hint: types::type_hint(self.ctx, &field.type_ref)?,
                    doc: types::doc_type(self.ctx, &field.type_ref)?,
                })
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;

        let mut output = preamble(self.ctx, &def.comments);
        output.push_str(&format!(
            "class {class} implements \\JsonSerializable {{\n"
        ));

        for view in &fields {
            output.push_str(&self.generate_property(view));
        }
        output.push_str(&self.generate_constructor(&fields)?);
        output.push('\n');
        output.push_str(&self.generate_json_serialize(&fields));
        output.push_str("}\n");

        Ok(output)
    }

    /// Generates a property declaration and its docblock.
    fn generate_property(&self, view: &FieldView<'_>) -> String {
        let mut doc_lines = view.field.comments.clone();
        let var = if view.field.type_ref.is_any() || !view.nullable() {
            view.doc.clone()
        } else {
            format!("{}|null", view.doc)
        };
        doc_lines.push(format!("@var {var}"));

        let mut output = docblock("    ", &doc_lines);
        let property = &view.names.property;
        if view.hint.is_empty() {
            output.push_str(&format!("    public ${property};\n\n"));
        } else if view.nullable() {
            output.push_str(&format!("    public ?{} ${};\n\n", view.hint, property));
        } else {
            output.push_str(&format!("    public {} ${};\n\n", view.hint, property));
        }
        output
    }

    /// Generates the constructor, which accepts every field.
    fn generate_constructor(&self, fields: &[FieldView<'_>]) -> Result<String, CodegenError> {
        let params_doc: Vec<String> = fields
            .iter()
            .map(|view| format!("@param {}|null ${}", view.doc, view.names.property))
            .collect();
        let params: Vec<String> = fields
            .iter()
            .map(|view| {
                let hint = if view.hint.is_empty() {
                    String::new()
                } else {
                    format!("?{}", view.hint)
                };
                format!("{} ${} = null", hint, view.names.property)
            })
            .collect();

        let mut output = docblock("    ", &params_doc);
        output.push_str(&format!(
            "    public function __construct({})\n",
            params.join(", ")
        ));
        output.push_str("    {\n");
        for view in fields {
            output.push_str(&format!(
                "        $this->{} = {};\n",
                view.names.property,
                self.initializer(view)?
            ));
        }
        output.push_str("    }\n");
        Ok(output)
    }

    /// Returns the expression a field is initialized with.
    fn initializer(&self, view: &FieldView<'_>) -> Result<String, CodegenError> {
        let param = format!("${}", view.names.property);
        let operator = match self.ctx.config.defaulting {
            DefaultingPolicy::CoalesceFalsy => "?:",
            DefaultingPolicy::Strict => "??",
        };

        Ok(match &view.field.default {
            Some(default) => format!(
                "{} {} {}",
                param,
                operator,
                types::literal(self.ctx, &view.field.type_ref, default)?
            ),
            None if view.field.is_optional()
                && self.ctx.config.defaulting == DefaultingPolicy::CoalesceFalsy =>
            {
                format!("{param} ?: null")
            }
            None => param,
        })
    }

    /// Generates `jsonSerialize()`, listing every field in declaration order.
    fn generate_json_serialize(&self, fields: &[FieldView<'_>]) -> String {
        let mut output = String::new();
        output.push_str("    /**\n");
        output.push_str("     * @return array<string, mixed>\n");
        output.push_str("     */\n");
        output.push_str("    public function jsonSerialize(): array\n");
        output.push_str("    {\n");

        if fields.is_empty() {
            output.push_str("        $data = [];\n");
        } else {
            output.push_str("        $data = [\n");
            for view in fields {
                output.push_str(&format!(
                    "            {} => $this->{},\n",
                    types::string_literal(&view.names.json_key),
                    view.names.property
                ));
            }
            output.push_str("        ];\n");
        }

        output.push_str("        return $data;\n");
        output.push_str("    }\n");
        output
    }
}
