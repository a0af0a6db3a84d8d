//! Host type to schema descriptor registry.
//!
//! This crate re-exports the identity types from `graph-types-core` and the
//! [`TypeRegistry`] from `graph-types-registry`. A schema builder constructs
//! one registry during startup, registers its mappings and extensions, and
//! then reads from it while assembling the type graph.
//!
//! ```
//! use graph_types::prelude::*;
//!
//! struct Article;
//! impl Host for Article {}
//!
//! struct ArticleGraphType;
//! impl SchemaType for ArticleGraphType {}
//!
//! struct Publishing;
//! impl Host for Publishing {}
//!
//! let mut registry = TypeRegistry::new();
//! registry.add_type::<Article, ArticleGraphType>()?;
//! registry.extend_type::<Article, Publishing>();
//!
//! assert_eq!(registry.get_type::<Article>(), Some(ArticleGraphType::descriptor()));
//! assert_eq!(registry.get_type::<Option<bool>>(), Some(Scalar::Boolean.descriptor()));
//! assert_eq!(registry.extending::<Article>(), &[Publishing::host_type()]);
//! # Ok::<(), RegistrationError>(())
//! ```

pub use graph_types_core::{
    Descriptor, Host, HostType, RegistrationError, Scalar, SchemaType, TypeHash, hash_constants,
    primitives,
};
pub use graph_types_registry::{
    ExtensionMap, ExtensionPolicy, RegistryOptions, TypeRegistry, builtins,
};

pub mod prelude {
    pub use crate::{
        Descriptor, ExtensionPolicy, Host, HostType, RegistrationError, RegistryOptions, Scalar,
        SchemaType, TypeRegistry,
    };
}
