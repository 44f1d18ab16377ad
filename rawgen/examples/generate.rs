//! Example generating PHP and Rust sources for a small dashboard package.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate -- [out_dir]`

use anyhow::Context;
use rawgen::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn dashboard_schema() -> Schema {
    Schema::new("dashboard")
        .with_definition(
            EnumDef::new("DashboardCursorSync", EnumKind::Integer)
                .with_comment("0 for no shared crosshair or tooltip (default).")
                .with_comment("1 for shared crosshair.")
                .with_comment("2 for shared crosshair AND shared tooltip.")
                .with_variant("Off", 0)
                .with_variant("Crosshair", 1)
                .with_variant("Tooltip", 2),
        )
        .with_definition(
            StructDef::new("Panel")
                .with_comment("A single dashboard panel.")
                .with_field(FieldDef::required(
                    "title",
                    TypeRef::Primitive(PrimitiveKind::String),
                ))
                .with_field(
                    FieldDef::optional("cursorSync", TypeRef::reference("DashboardCursorSync"))
                        .with_default(Literal::Integer(0)),
                )
                .with_field(FieldDef::optional(
                    "options",
                    TypeRef::Struct(InlineStruct::new(vec![FieldDef::optional(
                        "FieldAny",
                        TypeRef::Any,
                    )])),
                ))
                .with_field(FieldDef::optional(
                    "operator",
                    TypeRef::Enum(InlineEnum {
                        kind: EnumKind::String,
                        variants: vec![
                            Variant::new("GreaterThan", ">"),
                            Variant::new("LessThan", "<"),
                        ],
                    }),
                )),
        )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("rawgen-demo"));

    let ir = SchemaIr::from_schema(&dashboard_schema());

    for target in [TargetKind::Php, TargetKind::Rust] {
        let config = GeneratorConfig::new()
            .target(target)
            .namespace_root("Grafana\\Foundation")
            .parallel(true);
        let units = Generator::new(&ir, &config)
            .generate()
            .with_context(|| format!("generating {target:?} sources"))?;

        let root = out_dir.join(format!("{target:?}").to_lowercase());
        write_units(&units, &root).with_context(|| format!("writing to {}", root.display()))?;

        for unit in &units {
            tracing::info!("{}", root.join(&unit.path).display());
        }
    }

    // The same enum, interned at runtime.
    let sync = instantiate_enum(ir.get_enum("DashboardCursorSync").context("enum missing")?)?;
    let off = sync.get("Off")?;
    println!(
        "Off serializes to {} and prints as \"{}\"",
        off.json_serialize(),
        off
    );

    Ok(())
}
