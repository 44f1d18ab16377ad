// Code generated by rawgen. DO NOT EDIT.

/// SomeStructOperator enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SomeStructOperator {
    /// Raw value `">"`.
    GreaterThan,
    /// Raw value `"<"`.
    LessThan,
}

impl SomeStructOperator {
    /// All variants in declaration order.
    pub const VARIANTS: [Self; 2] = [Self::GreaterThan, Self::LessThan];

    /// Returns the `GreaterThan` variant.
    #[must_use]
    pub const fn greater_than() -> Self {
        Self::GreaterThan
    }

    /// Returns the `LessThan` variant.
    #[must_use]
    pub const fn less_than() -> Self {
        Self::LessThan
    }

    /// Returns the raw value of the variant.
    #[must_use]
    pub const fn raw_value(&self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }

    /// Looks up the variant holding a raw value.
    #[must_use]
    pub fn from_raw_value(value: &str) -> Option<Self> {
        match value {
            ">" => Some(Self::GreaterThan),
            "<" => Some(Self::LessThan),
            _ => None,
        }
    }
}

impl std::fmt::Display for SomeStructOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

impl serde::Serialize for SomeStructOperator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.raw_value())
    }
}

impl rawgen_runtime::RawEnum for SomeStructOperator {
    fn raw(&self) -> rawgen_runtime::RawValue {
        rawgen_runtime::RawValue::from(self.raw_value())
    }
}
