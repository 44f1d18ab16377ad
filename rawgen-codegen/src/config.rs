//! Generator configuration.

/// Target language of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    /// PHP classes, one file per definition.
    #[default]
    Php,
    /// Rust modules, one file per definition plus a `mod.rs` index.
    Rust,
}

/// How generated constructors treat supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultingPolicy {
    /// Any falsy argument (`null`, `false`, `0`, `""`, empty collection)
    /// collapses to the field default.
    #[default]
    CoalesceFalsy,
    /// Only an absent argument falls back to the field default.
    Strict,
}

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Target language.
    pub target: TargetKind,
    /// Root namespace generated types live under (PHP only).
    pub namespace_root: String,
    /// Constructor defaulting policy.
    pub defaulting: DefaultingPolicy,
    /// Render definitions on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: TargetKind::default(),
            namespace_root: "Rawgen".to_string(),
            defaulting: DefaultingPolicy::default(),
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target language.
    #[must_use]
    pub fn target(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }

    /// Sets the root namespace, e.g. `Grafana\Foundation`.
    #[must_use]
    pub fn namespace_root(mut self, root: impl Into<String>) -> Self {
        self.namespace_root = root.into().trim_matches('\\').to_string();
        self
    }

    /// Sets the constructor defaulting policy.
    #[must_use]
    pub fn defaulting(mut self, policy: DefaultingPolicy) -> Self {
        self.defaulting = policy;
        self
    }

    /// Enables or disables parallel rendering.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
