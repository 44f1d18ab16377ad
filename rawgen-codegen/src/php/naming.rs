//! PHP naming conventions.

use crate::naming::{Conventions, Role};
use rawgen_schema::naming::{ensure_identifier_start, to_camel_case, to_pascal_case};

/// Words PHP does not accept as class names, lowercase.
const RESERVED_CLASS_NAMES: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "false", "final", "finally", "float", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "instanceof", "insteadof", "int",
    "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never", "new",
    "null", "object", "or", "parent", "print", "private", "protected", "public", "readonly",
    "require", "return", "self", "static", "string", "switch", "throw", "trait", "true", "try",
    "unset", "use", "var", "void", "while", "xor", "yield",
];

/// Methods every generated enum class declares.
const ENUM_MEMBERS: &[&str] = &["__construct", "jsonSerialize", "__toString"];

/// PHP naming conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpConventions;

impl Conventions for PhpConventions {
    fn target_identifier(&self, role: Role, name: &str) -> String {
        match role {
            Role::TypeName | Role::FileStem => class_name(name),
            Role::Accessor => ensure_identifier_start(to_camel_case(name)),
            Role::Property => {
                let property = ensure_identifier_start(to_camel_case(name));
                // `$this` cannot be a constructor parameter.
                if property == "this" {
                    "this_".to_string()
                } else {
                    property
                }
            }
            Role::VariantName | Role::JsonKey | Role::SingletonKey => to_pascal_case(name),
        }
    }

    fn folds_case(&self, role: Role) -> bool {
        matches!(role, Role::TypeName | Role::FileStem | Role::Accessor)
    }

    fn reserved(&self, role: Role) -> &'static [&'static str] {
        match role {
            Role::Accessor => ENUM_MEMBERS,
            _ => &[],
        }
    }
}

fn class_name(name: &str) -> String {
    let class = ensure_identifier_start(to_pascal_case(name));
    if RESERVED_CLASS_NAMES.contains(&class.to_lowercase().as_str()) {
        format!("{class}_")
    } else {
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_php_roles() {
        let php = PhpConventions;
        assert_eq!(php.resolve(Role::TypeName, "dashboard_cursor_sync"), "DashboardCursorSync");
        assert_eq!(php.resolve(Role::Accessor, "GreaterThan"), "greaterThan");
        assert_eq!(php.resolve(Role::Property, "FieldAny"), "fieldAny");
        assert_eq!(php.resolve(Role::JsonKey, "fieldAny"), "FieldAny");
        assert_eq!(php.resolve(Role::SingletonKey, "crosshair"), "Crosshair");
        assert_eq!(php.resolve(Role::FileStem, "SomeStructOperator"), "SomeStructOperator");
    }

    #[test]
    fn test_reserved_class_names() {
        let php = PhpConventions;
        assert_eq!(php.resolve(Role::TypeName, "list"), "List_");
        assert_eq!(php.resolve(Role::TypeName, "String"), "String_");
        assert_eq!(php.resolve(Role::TypeName, "Listing"), "Listing");
    }

    #[test]
    fn test_invalid_starts() {
        let php = PhpConventions;
        assert_eq!(php.resolve(Role::Accessor, "1h"), "_1h");
        assert_eq!(php.resolve(Role::Property, "this"), "this_");
    }
}
