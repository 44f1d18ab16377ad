//! PHP enum generation.
//!
//! Enums become final classes with a private constructor. Each variant has a
//! static accessor that builds its instance on first call and interns it in
//! `self::$instances`, so repeated calls return the same object.

use super::{preamble, types};
use crate::error::CodegenError;
use crate::target::RenderContext;
use rawgen_schema::EnumDef;

/// Generator for enum classes.
pub struct EnumGenerator<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the class file of an enum.
    ///
    /// # Errors
    /// Returns `CodegenError` if the enum's names were not resolved.
    pub fn generate(&self, def: &EnumDef) -> Result<String, CodegenError> {
        let class = self.ctx.names.type_name(&def.name)?;
        let variants = self.ctx.names.variants(&def.name)?;
        let mut output = preamble(self.ctx, &def.comments);

        output.push_str(&format!(
            "final class {class} implements \\JsonSerializable, \\Stringable {{\n"
        ));
        output.push_str("    /**\n");
        output.push_str("     * @var string|int\n");
        output.push_str("     */\n");
        output.push_str("    private $value;\n\n");

        output.push_str("    /**\n");
        output.push_str(&format!("     * @var array<string, {class}>\n"));
        output.push_str("     */\n");
        output.push_str("    private static $instances = [];\n\n");

        output.push_str("    private function __construct(string|int $value)\n");
        output.push_str("    {\n");
        output.push_str("        $this->value = $value;\n");
        output.push_str("    }\n\n");

        for (variant, names) in def.variants.iter().zip(variants) {
            let key = types::string_literal(&names.singleton_key);
            output.push_str(&format!(
                "    public static function {}(): self\n",
                names.accessor
            ));
            output.push_str("    {\n");
            output.push_str(&format!(
                "        if (!isset(self::$instances[{key}])) {{\n"
            ));
            output.push_str(&format!(
                "            self::$instances[{}] = new self({});\n",
                key,
                types::raw_value(&variant.value)
            ));
            output.push_str("        }\n\n");
            output.push_str(&format!("        return self::$instances[{key}];\n"));
            output.push_str("    }\n\n");
        }

        output.push_str("    public function jsonSerialize(): string|int\n");
        output.push_str("    {\n");
        output.push_str("        return $this->value;\n");
        output.push_str("    }\n\n");

        output.push_str("    public function __toString(): string\n");
        output.push_str("    {\n");
        output.push_str("        return (string) $this->value;\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::naming::NameTable;
    use crate::php::PhpConventions;
    use rawgen_schema::{EnumKind, Schema, SchemaIr};

    fn render(schema: &Schema) -> String {
        let ir = SchemaIr::from_schema(schema);
        let names = NameTable::build(&ir, &PhpConventions).unwrap();
        let config = GeneratorConfig::new().namespace_root("Grafana\\Foundation");
        let ctx = RenderContext {
            ir: &ir,
            names: &names,
            config: &config,
        };
        let def = ir.enums().next().unwrap();
        EnumGenerator::new(&ctx).generate(def).unwrap()
    }

    #[test]
    fn test_integer_enum_matches_fixture() {
        let schema = Schema::new("enums").with_definition(
            EnumDef::new("DashboardCursorSync", EnumKind::Integer)
                .with_comment("0 for no shared crosshair or tooltip (default).")
                .with_comment("1 for shared crosshair.")
                .with_comment("2 for shared crosshair AND shared tooltip.")
                .with_variant("Off", 0)
                .with_variant("Crosshair", 1)
                .with_variant("Tooltip", 2),
        );

        assert_eq!(
            render(&schema),
            include_str!("../../testdata/php/Enums/DashboardCursorSync.php")
        );
    }

    #[test]
    fn test_string_enum_matches_fixture() {
        let schema = Schema::new("struct_optional_fields").with_definition(
            EnumDef::new("SomeStructOperator", EnumKind::String)
                .with_variant("GreaterThan", ">")
                .with_variant("LessThan", "<"),
        );

        assert_eq!(
            render(&schema),
            include_str!("../../testdata/php/StructOptionalFields/SomeStructOperator.php")
        );
    }

    #[test]
    fn test_single_variant_keeps_singleton_machinery() {
        let schema = Schema::new("pkg")
            .with_definition(EnumDef::new("Only", EnumKind::String).with_variant("one", "1"));
        let output = render(&schema);

        assert!(output.contains("private function __construct(string|int $value)"));
        assert!(output.contains("public static function one(): self"));
        assert!(output.contains("if (!isset(self::$instances[\"One\"])) {"));
        assert!(output.contains("self::$instances[\"One\"] = new self(\"1\");"));
    }
}
