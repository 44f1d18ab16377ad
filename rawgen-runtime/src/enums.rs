//! Enum contracts.
//!
//! Generated Rust enums are native enums and get identity for free; they only
//! implement [`RawEnum`]. [`DynamicEnum`] covers enums only known at runtime:
//! each variant is constructed at most once per process and handed out as a
//! shared [`Arc`], so two accessor calls for the same variant return
//! pointer-equal instances.

use crate::error::{Error, Result};
use crate::value::RawValue;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Enum whose variants serialize to a raw primitive.
pub trait RawEnum {
    /// Returns the raw value of this variant.
    fn raw(&self) -> RawValue;

    /// Returns the JSON encoding of this variant: the bare raw value.
    fn json_serialize(&self) -> serde_json::Value {
        self.raw().to_json()
    }
}

/// One interned variant of a [`DynamicEnum`].
#[derive(Debug, PartialEq, Eq)]
pub struct EnumInstance {
    enum_name: Arc<str>,
    variant: String,
    value: RawValue,
}

impl EnumInstance {
    /// Returns the name of the owning enum.
    #[must_use]
    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    /// Returns the variant name.
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> &RawValue {
        &self.value
    }
}

impl RawEnum for EnumInstance {
    fn raw(&self) -> RawValue {
        self.value.clone()
    }
}

impl fmt::Display for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl serde::Serialize for EnumInstance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Enum with lazily interned, identity-stable variants.
pub struct DynamicEnum {
    name: Arc<str>,
    variants: Vec<(String, RawValue)>,
    instances: Mutex<HashMap<String, Arc<EnumInstance>>>,
}

impl DynamicEnum {
    /// Creates a new enum from its variants, keyed by variant name.
    ///
    /// # Errors
    /// Returns an error if there are no variants, or if a name or raw value
    /// is declared twice.
    pub fn new<I, K, V>(name: impl Into<String>, variants: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        let name: String = name.into();
        let variants: Vec<(String, RawValue)> = variants
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if variants.is_empty() {
            return Err(Error::EmptyEnum { enum_name: name });
        }

        let mut seen_names = HashSet::new();
        let mut seen_values = HashSet::new();
        for (variant, value) in &variants {
            if !seen_names.insert(variant.as_str()) {
                return Err(Error::DuplicateVariant {
                    enum_name: name,
                    variant: variant.clone(),
                });
            }
            if !seen_values.insert(value) {
                return Err(Error::DuplicateRawValue {
                    enum_name: name,
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            name: Arc::from(name),
            variants,
            instances: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the enum name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the variant names in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the shared instance for `variant`, creating it on first access.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVariant`] if the enum does not declare `variant`.
    pub fn get(&self, variant: &str) -> Result<Arc<EnumInstance>> {
        let value = self
            .variants
            .iter()
            .find(|(name, _)| name == variant)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::UnknownVariant {
                enum_name: self.name.to_string(),
                variant: variant.to_string(),
            })?;

        let mut instances = self.instances.lock();
        let instance = instances.entry(variant.to_string()).or_insert_with(|| {
            Arc::new(EnumInstance {
                enum_name: Arc::clone(&self.name),
                variant: variant.to_string(),
                value: value.clone(),
            })
        });
        Ok(Arc::clone(instance))
    }

    /// Returns the shared instance whose raw value is `value`.
    #[must_use]
    pub fn from_raw(&self, value: &RawValue) -> Option<Arc<EnumInstance>> {
        let (variant, _) = self.variants.iter().find(|(_, v)| v == value)?;
        self.get(variant).ok()
    }

    /// Returns how many variants have been constructed so far.
    #[must_use]
    pub fn interned(&self) -> usize {
        self.instances.lock().len()
    }
}

impl fmt::Debug for DynamicEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicEnum")
            .field("name", &self.name)
            .field("variants", &self.variants)
            .field("interned", &self.interned())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn cursor_sync() -> DynamicEnum {
        DynamicEnum::new(
            "DashboardCursorSync",
            [("Off", 0), ("Crosshair", 1), ("Tooltip", 2)],
        )
        .expect("valid enum")
    }

    #[test]
    fn test_accessor_is_identity_stable() {
        let sync = cursor_sync();
        assert_eq!(sync.interned(), 0);

        let first = sync.get("Crosshair").unwrap();
        let second = sync.get("Crosshair").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(sync.interned(), 1);

        let off = sync.get("Off").unwrap();
        assert!(!Arc::ptr_eq(&first, &off));
        assert_eq!(sync.interned(), 2);
    }

    #[test]
    fn test_integer_variant_contract() {
        let sync = cursor_sync();
        let off = sync.get("Off").unwrap();

        assert_eq!(off.json_serialize(), serde_json::json!(0));
        assert_eq!(off.to_string(), "0");
        assert_eq!(serde_json::to_string(&*off).unwrap(), "0");
        assert_eq!(off.enum_name(), "DashboardCursorSync");
        assert_eq!(off.variant(), "Off");
    }

    #[test]
    fn test_string_variant_contract() {
        let operator =
            DynamicEnum::new("SomeStructOperator", [("GreaterThan", ">"), ("LessThan", "<")])
                .unwrap();
        let gt = operator.get("GreaterThan").unwrap();

        assert_eq!(gt.json_serialize(), serde_json::json!(">"));
        assert_eq!(gt.to_string(), ">");
        assert_eq!(gt.value().as_str(), Some(">"));
    }

    #[test]
    fn test_single_variant_enum_interns() {
        let only = DynamicEnum::new("Only", [("One", 1)]).unwrap();
        assert!(Arc::ptr_eq(&only.get("One").unwrap(), &only.get("One").unwrap()));
    }

    #[test]
    fn test_from_raw_shares_instance() {
        let sync = cursor_sync();
        let tooltip = sync.get("Tooltip").unwrap();
        let by_raw = sync.from_raw(&RawValue::from(2)).unwrap();
        assert!(Arc::ptr_eq(&tooltip, &by_raw));
        assert!(sync.from_raw(&RawValue::from(9)).is_none());
    }

    #[test]
    fn test_unknown_variant() {
        let err = cursor_sync().get("Hidden").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownVariant {
                enum_name: "DashboardCursorSync".into(),
                variant: "Hidden".into(),
            }
        );
    }

    #[test]
    fn test_invalid_declarations() {
        let empty = DynamicEnum::new("Empty", Vec::<(String, i64)>::new());
        assert!(matches!(empty, Err(Error::EmptyEnum { .. })));

        let dup_value = DynamicEnum::new("Dup", [("A", 0), ("B", 0)]);
        assert!(matches!(dup_value, Err(Error::DuplicateRawValue { .. })));

        let dup_name = DynamicEnum::new("Dup", [("A", 0), ("A", 1)]);
        assert!(matches!(dup_name, Err(Error::DuplicateVariant { .. })));
    }

    #[test]
    fn test_concurrent_access_interns_once() {
        let sync = Arc::new(cursor_sync());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sync = Arc::clone(&sync);
                thread::spawn(move || sync.get("Tooltip").unwrap())
            })
            .collect();

        let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for instance in &instances {
            assert!(Arc::ptr_eq(instance, &instances[0]));
        }
        assert_eq!(sync.interned(), 1);
    }
}
