//! Falsy-coalescing constructor defaults.
//!
//! Generated constructors collapse a supplied-but-falsy argument to the
//! field's default, exactly like the absent case. Falsiness follows the
//! loose truthiness rules of dynamic targets: `false`, zero, the empty string,
//! the string `"0"`, empty collections and JSON `null` are all falsy.

use std::collections::{BTreeMap, HashMap};

/// Values that can be judged falsy.
pub trait Falsy {
    /// Returns true if the value collapses to the default.
    fn is_falsy(&self) -> bool;
}

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

macro_rules! impl_falsy_int {
    ($($ty:ty),*) => {
        $(
            impl Falsy for $ty {
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Falsy for f32 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for f64 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.is_empty() || self == "0"
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.as_str().is_falsy()
    }
}

impl<T> Falsy for Vec<T> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Falsy for BTreeMap<K, V> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Falsy for HashMap<K, V, S> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for serde_json::Value {
    fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => b.is_falsy(),
            Self::Number(n) => n.as_f64().is_some_and(|v| v == 0.0),
            Self::String(s) => s.is_falsy(),
            Self::Array(a) => a.is_empty(),
            Self::Object(o) => o.is_empty(),
        }
    }
}

/// Collapses a missing or falsy argument to absence.
#[must_use]
pub fn coalesce<T: Falsy>(value: Option<T>) -> Option<T> {
    value.filter(|v| !v.is_falsy())
}

/// Collapses a missing or falsy argument to `default`.
#[must_use]
pub fn coalesce_or<T: Falsy>(value: Option<T>, default: T) -> T {
    coalesce(value).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct AnonymousStruct {
        #[serde(rename = "FieldAny")]
        field_any: Option<serde_json::Value>,
    }

    impl AnonymousStruct {
        fn new(field_any: Option<serde_json::Value>) -> Self {
            Self {
                field_any: coalesce(field_any),
            }
        }
    }

    #[test]
    fn test_scalars() {
        assert!(false.is_falsy());
        assert!(!true.is_falsy());
        assert!(0i64.is_falsy());
        assert!(!(-1i64).is_falsy());
        assert!(0.0f64.is_falsy());
        assert!("".is_falsy());
        assert!("0".is_falsy());
        assert!(!"00".is_falsy());
        assert!(String::new().is_falsy());
        assert!(Vec::<u8>::new().is_falsy());
        assert!(BTreeMap::<String, i64>::new().is_falsy());
    }

    #[test]
    fn test_json_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(falsy.is_falsy(), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!(" "), json!([0]), json!({"a": null})] {
            assert!(!truthy.is_falsy(), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_coalesce() {
        assert_eq!(coalesce(Some(5i64)), Some(5));
        assert_eq!(coalesce(Some(0i64)), None);
        assert_eq!(coalesce::<String>(None), None);
        assert_eq!(coalesce_or(Some(String::new()), "x".to_string()), "x");
        assert_eq!(coalesce_or(None, 3i64), 3);
        assert_eq!(coalesce_or(Some(4i64), 3), 4);
    }

    #[test]
    fn test_absent_and_falsy_any_serialize_as_null() {
        let absent = serde_json::to_value(AnonymousStruct::new(None)).unwrap();
        let zero = serde_json::to_value(AnonymousStruct::new(Some(json!(0)))).unwrap();
        let set = serde_json::to_value(AnonymousStruct::new(Some(json!("on")))).unwrap();

        assert_eq!(absent, json!({ "FieldAny": null }));
        assert_eq!(zero, json!({ "FieldAny": null }));
        assert_eq!(set, json!({ "FieldAny": "on" }));
    }
}
