//! Registry configuration.

/// How repeated `(base, extending)` pairs are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionPolicy {
    /// Every call appends, so a repeated pair appears more than once.
    #[default]
    Append,
    /// A pair already present for the base is not stored again.
    Dedup,
}

/// Options for constructing a [`TypeRegistry`](crate::TypeRegistry).
///
/// ```
/// use graph_types_registry::{ExtensionPolicy, RegistryOptions, TypeRegistry};
///
/// let options = RegistryOptions::new().with_extension_policy(ExtensionPolicy::Dedup);
/// let registry = TypeRegistry::with_options(options);
/// assert_eq!(registry.options().extension_policy(), ExtensionPolicy::Dedup);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryOptions {
    extension_policy: ExtensionPolicy,
}

impl RegistryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for repeated extension pairs.
    pub fn with_extension_policy(mut self, policy: ExtensionPolicy) -> Self {
        self.extension_policy = policy;
        self
    }

    pub fn extension_policy(&self) -> ExtensionPolicy {
        self.extension_policy
    }
}
