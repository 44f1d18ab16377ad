// Code generated by rawgen. DO NOT EDIT.

/// 0 for no shared crosshair or tooltip (default).
/// 1 for shared crosshair.
/// 2 for shared crosshair AND shared tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardCursorSync {
    /// Raw value `0`.
    Off,
    /// Raw value `1`.
    Crosshair,
    /// Raw value `2`.
    Tooltip,
}

impl DashboardCursorSync {
    /// All variants in declaration order.
    pub const VARIANTS: [Self; 3] = [Self::Off, Self::Crosshair, Self::Tooltip];

    /// Returns the `Off` variant.
    #[must_use]
    pub const fn off() -> Self {
        Self::Off
    }

    /// Returns the `Crosshair` variant.
    #[must_use]
    pub const fn crosshair() -> Self {
        Self::Crosshair
    }

    /// Returns the `Tooltip` variant.
    #[must_use]
    pub const fn tooltip() -> Self {
        Self::Tooltip
    }

    /// Returns the raw value of the variant.
    #[must_use]
    pub const fn raw_value(&self) -> i64 {
        match self {
            Self::Off => 0,
            Self::Crosshair => 1,
            Self::Tooltip => 2,
        }
    }

    /// Looks up the variant holding a raw value.
    #[must_use]
    pub fn from_raw_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Crosshair),
            2 => Some(Self::Tooltip),
            _ => None,
        }
    }
}

impl std::fmt::Display for DashboardCursorSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

impl serde::Serialize for DashboardCursorSync {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw_value())
    }
}

impl rawgen_runtime::RawEnum for DashboardCursorSync {
    fn raw(&self) -> rawgen_runtime::RawValue {
        rawgen_runtime::RawValue::from(self.raw_value())
    }
}
