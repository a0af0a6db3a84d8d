//! TypeRegistry - host type to schema descriptor mappings.
//!
//! [`TypeRegistry`] holds two independent stores:
//!
//! - **Direct mappings**: host type → descriptor, one entry per host type.
//!   Registering the same host type twice is a [`RegistrationError`].
//! - **Extensions**: base type → types that contribute extra members to it.
//!
//! Direct lookups fall back to the [builtin table](crate::builtins) for
//! primitives, and nullable wrappers (`Option<T>`) are normalized to `T`
//! before any store is consulted.
//!
//! # Thread Safety
//!
//! The registry does no internal locking. It is populated by a single owner
//! during startup and is read-only afterwards; shared reads through `&self`
//! are safe once population has finished.
//!
//! # Example
//!
//! ```
//! use graph_types_registry::TypeRegistry;
//! use graph_types_core::{Host, Scalar, SchemaType};
//!
//! struct Article;
//! impl Host for Article {}
//!
//! struct ArticleGraphType;
//! impl SchemaType for ArticleGraphType {}
//!
//! let mut registry = TypeRegistry::new();
//! registry.add_type::<Article, ArticleGraphType>()?;
//!
//! assert_eq!(registry.get_type::<Article>(), Some(ArticleGraphType::descriptor()));
//! assert_eq!(registry.get_type::<Option<u32>>(), Some(Scalar::Int.descriptor()));
//! # Ok::<(), graph_types_core::RegistrationError>(())
//! ```

use graph_types_core::{Descriptor, Host, HostType, RegistrationError, SchemaType, TypeHash};
use rustc_hash::FxHashMap;

use crate::builtins;
use crate::extensions::ExtensionMap;
use crate::options::RegistryOptions;

#[derive(Debug, Clone, Copy)]
struct Mapping {
    host: HostType,
    descriptor: Descriptor,
}

/// Registry of host type mappings and the extension relation.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// User mappings keyed by the unwrapped host type hash.
    mappings: FxHashMap<TypeHash, Mapping>,

    extensions: ExtensionMap,

    options: RegistryOptions,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry with the given options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            mappings: FxHashMap::default(),
            extensions: ExtensionMap::new(options.extension_policy()),
            options,
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    // ==========================================================================
    // Direct mappings
    // ==========================================================================

    /// Map `host` to `descriptor`.
    ///
    /// Nullable wrappers are keyed by their underlying type, so mapping
    /// `Option<T>` claims `T` as well. The builtin table is not consulted:
    /// a user mapping for a primitive overrides its builtin scalar.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateRegistration`] if `host` is
    /// already mapped. The existing mapping is left untouched.
    pub fn add(&mut self, host: HostType, descriptor: Descriptor) -> Result<(), RegistrationError> {
        let key = host.unwrapped();

        if let Some(existing) = self.mappings.get(&key) {
            tracing::debug!(
                host = %host,
                existing = %existing.descriptor,
                rejected = %descriptor,
                "rejected duplicate type mapping"
            );
            return Err(RegistrationError::DuplicateRegistration {
                type_name: host.name().to_string(),
                existing: existing.descriptor.name().to_string(),
            });
        }

        self.mappings.insert(key, Mapping { host, descriptor });
        tracing::debug!(host = %host, descriptor = %descriptor, "registered type mapping");
        Ok(())
    }

    /// Map `T` to `G`.
    pub fn add_type<T, G>(&mut self) -> Result<(), RegistrationError>
    where
        T: Host + ?Sized,
        G: SchemaType + ?Sized,
    {
        self.add(T::host_type(), G::descriptor())
    }

    /// Resolve the descriptor for `host`.
    ///
    /// Resolution unwraps nullable wrappers, then checks user mappings, then
    /// the builtin table. A miss is `None`; whether that is fatal is up to
    /// the caller.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn get(&self, host: HostType) -> Option<Descriptor> {
        let key = host.unwrapped();

        if let Some(mapping) = self.mappings.get(&key) {
            return Some(mapping.descriptor);
        }

        let scalar = builtins::lookup(key)?;
        tracing::trace!(host = %host, scalar = %scalar, "resolved through builtin table");
        Some(scalar.descriptor())
    }

    /// Resolve the descriptor for `T`.
    pub fn get_type<T: Host + ?Sized>(&self) -> Option<Descriptor> {
        self.get(T::host_type())
    }

    /// Resolve `host` against the builtin table only.
    pub fn builtin(host: HostType) -> Option<Descriptor> {
        builtins::lookup(host.unwrapped()).map(|scalar| scalar.descriptor())
    }

    /// Check if `host` has a user mapping. Builtins do not count.
    pub fn contains(&self, host: HostType) -> bool {
        self.mappings.contains_key(&host.unwrapped())
    }

    /// Number of user mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if there are no user mappings.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterate over user mappings as registered.
    pub fn entries(&self) -> impl Iterator<Item = (HostType, Descriptor)> + '_ {
        self.mappings.values().map(|m| (m.host, m.descriptor))
    }

    // ==========================================================================
    // Extensions
    // ==========================================================================

    /// Record that `extending` contributes members to `base`.
    ///
    /// Never fails. Repeated pairs are handled per
    /// [`ExtensionPolicy`](crate::ExtensionPolicy).
    pub fn extend(&mut self, base: HostType, extending: HostType) {
        if self.extensions.insert(base, extending) {
            tracing::debug!(base = %base, extending = %extending, "registered type extension");
        }
    }

    /// Record that `E` extends `B`.
    pub fn extend_type<B, E>(&mut self)
    where
        B: Host + ?Sized,
        E: Host + ?Sized,
    {
        self.extend(B::host_type(), E::host_type());
    }

    /// Types registered as extending `base`, in insertion order.
    ///
    /// Returns an empty slice when nothing extends `base`.
    pub fn get_extending(&self, base: HostType) -> &[HostType] {
        self.extensions.get(base.type_hash())
    }

    /// Types registered as extending `B`.
    pub fn extending<B: Host + ?Sized>(&self) -> &[HostType] {
        self.get_extending(B::host_type())
    }

    /// Base types with at least one extension.
    pub fn extended_bases(&self) -> impl Iterator<Item = HostType> + '_ {
        self.extensions.bases()
    }
}
