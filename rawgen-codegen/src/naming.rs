//! Identifier resolution.
//!
//! Every identifier a target emits is resolved once, up front, into a
//! [`NameTable`]. Each identifier is claimed in its scope with a single
//! check-and-insert, so a clash is always reported against the name that was
//! declared first, whatever order definitions are later rendered in.

use crate::error::CodegenError;
use rawgen_schema::naming::to_pascal_case;
use rawgen_schema::{Definition, EnumDef, SchemaIr, StructDef};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Role a schema name plays in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Name of a generated type.
    TypeName,
    /// Name of an enum variant in targets with native enums.
    VariantName,
    /// Name of a per-variant accessor.
    Accessor,
    /// Name of a struct field in source.
    Property,
    /// Key of a struct field in serialized output.
    JsonKey,
    /// Key a variant's instance is interned under.
    SingletonKey,
    /// File name of a generated unit, without extension.
    FileStem,
}

impl Role {
    /// Returns a human-readable name for the role.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::TypeName => "type names",
            Self::VariantName => "variants",
            Self::Accessor => "accessors",
            Self::Property => "properties",
            Self::JsonKey => "JSON keys",
            Self::SingletonKey => "singleton keys",
            Self::FileStem => "file names",
        }
    }
}

/// Naming conventions of a target language.
pub trait Conventions: Send + Sync {
    /// Renders `name` for a role whose casing the target decides.
    fn target_identifier(&self, role: Role, name: &str) -> String;

    /// Returns true if identifiers of this role compare case-insensitively.
    fn folds_case(&self, _role: Role) -> bool {
        false
    }

    /// Identifiers of this role already taken by generated members.
    fn reserved(&self, _role: Role) -> &'static [&'static str] {
        &[]
    }

    /// Resolves a schema name for the given role.
    ///
    /// JSON keys and singleton keys are PascalCase for every target, so the
    /// interchange format does not depend on the target language.
    fn resolve(&self, role: Role, name: &str) -> String {
        match role {
            Role::JsonKey | Role::SingletonKey => to_pascal_case(name),
            _ => self.target_identifier(role, name),
        }
    }
}

/// Resolved names of one enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantNames {
    /// Native variant identifier.
    pub ident: String,
    /// Accessor identifier.
    pub accessor: String,
    /// Interning key.
    pub singleton_key: String,
}

/// Resolved names of one struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Property identifier.
    pub property: String,
    /// Serialized key.
    pub json_key: String,
}

/// Precomputed, read-only identifier table for one generation unit.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    types: HashMap<String, String>,
    files: HashMap<String, String>,
    variants: HashMap<String, Vec<VariantNames>>,
    fields: HashMap<String, Vec<FieldNames>>,
}

impl NameTable {
    /// Resolves every identifier of a unit.
    ///
    /// # Arguments
    /// * `ir` - Flattened schema
    /// * `conventions` - Naming conventions of the target
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if two schema names resolve to
    /// the same identifier within one scope.
    pub fn build(ir: &SchemaIr, conventions: &dyn Conventions) -> Result<Self, CodegenError> {
        let mut table = Self::default();
        let package = &ir.package;
        let mut types = Scope::new(format!("package '{package}'"), Role::TypeName, conventions);
        let mut files = Scope::new(format!("package '{package}'"), Role::FileStem, conventions);

        for def in &ir.definitions {
            let name = def.name();
            table.types.insert(name.to_string(), types.claim(name)?);
            table.files.insert(name.to_string(), files.claim(name)?);

            match &def.definition {
                Definition::Enum(enum_def) => {
                    table
                        .variants
                        .insert(name.to_string(), resolve_variants(enum_def, conventions)?);
                }
                Definition::Struct(struct_def) => {
                    table
                        .fields
                        .insert(name.to_string(), resolve_fields(struct_def, conventions)?);
                }
            }
        }

        Ok(table)
    }

    /// Returns the type identifier of a definition.
    ///
    /// # Errors
    /// Returns a generation error if the definition is not part of the unit.
    pub fn type_name(&self, definition: &str) -> Result<&str, CodegenError> {
        lookup(&self.types, definition).map(String::as_str)
    }

    /// Returns the file stem of a definition.
    ///
    /// # Errors
    /// Returns a generation error if the definition is not part of the unit.
    pub fn file_stem(&self, definition: &str) -> Result<&str, CodegenError> {
        lookup(&self.files, definition).map(String::as_str)
    }

    /// Returns the variant names of an enum, in declaration order.
    ///
    /// # Errors
    /// Returns a generation error if the enum is not part of the unit.
    pub fn variants(&self, enum_name: &str) -> Result<&[VariantNames], CodegenError> {
        lookup(&self.variants, enum_name).map(Vec::as_slice)
    }

    /// Returns the field names of a struct, in declaration order.
    ///
    /// # Errors
    /// Returns a generation error if the struct is not part of the unit.
    pub fn fields(&self, struct_name: &str) -> Result<&[FieldNames], CodegenError> {
        lookup(&self.fields, struct_name).map(Vec::as_slice)
    }

    /// Returns the number of resolved definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no definition was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn lookup<'t, T>(map: &'t HashMap<String, T>, name: &str) -> Result<&'t T, CodegenError> {
    map.get(name)
        .ok_or_else(|| CodegenError::generation(format!("no resolved names for '{name}'")))
}

fn resolve_variants(
    enum_def: &EnumDef,
    conventions: &dyn Conventions,
) -> Result<Vec<VariantNames>, CodegenError> {
    let scope = format!("enum '{}'", enum_def.name);
    let mut idents = Scope::new(scope.clone(), Role::VariantName, conventions);
    let mut accessors = Scope::new(scope.clone(), Role::Accessor, conventions);
    let mut keys = Scope::new(scope, Role::SingletonKey, conventions);

    enum_def
        .variants
        .iter()
        .map(|variant| {
            Ok(VariantNames {
                ident: idents.claim(&variant.name)?,
                accessor: accessors.claim(&variant.name)?,
                singleton_key: keys.claim(&variant.name)?,
            })
        })
        .collect()
}

fn resolve_fields(
    struct_def: &StructDef,
    conventions: &dyn Conventions,
) -> Result<Vec<FieldNames>, CodegenError> {
    let scope = format!("struct '{}'", struct_def.name);
    let mut properties = Scope::new(scope.clone(), Role::Property, conventions);
    let mut keys = Scope::new(scope, Role::JsonKey, conventions);

    struct_def
        .fields
        .iter()
        .map(|field| {
            Ok(FieldNames {
                property: properties.claim(&field.name)?,
                json_key: keys.claim(&field.name)?,
            })
        })
        .collect()
}

/// One collision scope: resolved identifier (case-folded if the target
/// requires) to the schema name that claimed it.
struct Scope<'c> {
    label: String,
    role: Role,
    conventions: &'c dyn Conventions,
    claimed: HashMap<String, String>,
}

const RESERVED_OWNER: &str = "<generated member>";

impl<'c> Scope<'c> {
    fn new(owner: String, role: Role, conventions: &'c dyn Conventions) -> Self {
        let mut scope = Self {
            label: format!("{} of {}", role.describe(), owner),
            role,
            conventions,
            claimed: HashMap::new(),
        };
        for reserved in conventions.reserved(role) {
            let key = scope.key(reserved);
            scope.claimed.insert(key, RESERVED_OWNER.to_string());
        }
        scope
    }

    fn key(&self, identifier: &str) -> String {
        if self.conventions.folds_case(self.role) {
            identifier.to_lowercase()
        } else {
            identifier.to_string()
        }
    }

    fn claim(&mut self, name: &str) -> Result<String, CodegenError> {
        let identifier = self.conventions.resolve(self.role, name);
        let key = self.key(&identifier);
        match self.claimed.entry(key) {
            Entry::Occupied(entry) => Err(CodegenError::collision(
                &self.label,
                identifier,
                entry.get(),
                name,
            )),
            Entry::Vacant(entry) => {
                entry.insert(name.to_string());
                Ok(identifier)
            }
        }
    }
}
