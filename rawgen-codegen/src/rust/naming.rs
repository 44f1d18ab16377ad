//! Rust naming conventions.

use crate::naming::{Conventions, Role};
use rawgen_schema::naming::{ensure_identifier_start, to_pascal_case, to_snake_case};

/// Strict and reserved keywords of the 2024 edition.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Type names generated code relies on from the prelude.
const PRELUDE_TYPES: &[&str] = &[
    "Self", "Option", "Some", "None", "Result", "Ok", "Err", "String", "Vec", "Box",
];

/// Inherent functions every generated enum declares.
const ENUM_MEMBERS: &[&str] = &["raw_value", "from_raw_value"];

/// Rust naming conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustConventions;

impl Conventions for RustConventions {
    fn target_identifier(&self, role: Role, name: &str) -> String {
        match role {
            Role::TypeName | Role::VariantName => {
                let ident = ensure_identifier_start(to_pascal_case(name));
                if PRELUDE_TYPES.contains(&ident.as_str()) {
                    format!("{ident}_")
                } else {
                    ident
                }
            }
            Role::Accessor | Role::Property => {
                escape_keyword(&ensure_identifier_start(to_snake_case(name)))
            }
            Role::FileStem => {
                let stem = ensure_identifier_start(to_snake_case(name));
                if NON_RAW.contains(&stem.as_str()) {
                    format!("{stem}_")
                } else {
                    stem
                }
            }
            Role::JsonKey | Role::SingletonKey => to_pascal_case(name),
        }
    }

    fn reserved(&self, role: Role) -> &'static [&'static str] {
        match role {
            Role::Accessor => ENUM_MEMBERS,
            Role::FileStem => &["mod"],
            _ => &[],
        }
    }
}

/// Makes an identifier usable in Rust source, using a raw identifier for
/// keywords that allow one.
#[must_use]
pub fn escape_keyword(ident: &str) -> String {
    if NON_RAW.contains(&ident) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}
