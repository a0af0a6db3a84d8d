//! Schema descriptor identity.
//!
//! A [`Descriptor`] refers to a schema type definition, never an instance of
//! one. User schema types implement [`SchemaType`]; the builtin scalars are
//! listed in [`Scalar`].

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::TypeHash;

/// Identifies a schema type descriptor.
///
/// Equality and hashing use the hash only.
#[derive(Clone, Copy)]
pub struct Descriptor {
    hash: TypeHash,
    name: &'static str,
}

impl Descriptor {
    /// Descriptor identity derived from a Rust schema type.
    pub fn of<G: ?Sized + 'static>() -> Self {
        Self {
            hash: TypeHash::of::<G>(),
            name: std::any::type_name::<G>(),
        }
    }

    /// Descriptor identity derived from a name, usable in `const` context.
    pub const fn builtin(name: &'static str) -> Self {
        Self {
            hash: TypeHash::from_descriptor_name(name),
            name,
        }
    }

    #[inline]
    pub const fn type_hash(&self) -> TypeHash {
        self.hash
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Descriptor {}

impl Hash for Descriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor({}, {:?})", self.name, self.hash)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Trait for schema types that can be the target of a mapping.
///
/// ```
/// use graph_types_core::{Descriptor, SchemaType};
///
/// struct ArticleGraphType;
/// impl SchemaType for ArticleGraphType {}
///
/// assert_eq!(ArticleGraphType::descriptor(), Descriptor::of::<ArticleGraphType>());
/// ```
pub trait SchemaType: 'static {
    fn descriptor() -> Descriptor {
        Descriptor::of::<Self>()
    }
}

/// Builtin scalar descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Int,
    Decimal,
    Float,
    Boolean,
    Guid,
    DateTime,
    DateTimeOffset,
    /// Durations, serialized as a millisecond count.
    Milliseconds,
    Uri,
}

impl Scalar {
    /// Every builtin scalar.
    pub const ALL: [Scalar; 10] = [
        Scalar::String,
        Scalar::Int,
        Scalar::Decimal,
        Scalar::Float,
        Scalar::Boolean,
        Scalar::Guid,
        Scalar::DateTime,
        Scalar::DateTimeOffset,
        Scalar::Milliseconds,
        Scalar::Uri,
    ];

    /// Get the schema name of this scalar.
    pub const fn name(self) -> &'static str {
        match self {
            Scalar::String => "String",
            Scalar::Int => "Int",
            Scalar::Decimal => "Decimal",
            Scalar::Float => "Float",
            Scalar::Boolean => "Boolean",
            Scalar::Guid => "Guid",
            Scalar::DateTime => "DateTime",
            Scalar::DateTimeOffset => "DateTimeOffset",
            Scalar::Milliseconds => "Milliseconds",
            Scalar::Uri => "Uri",
        }
    }

    /// Get the descriptor for this scalar.
    pub const fn descriptor(self) -> Descriptor {
        Descriptor::builtin(self.name())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Scalar> for Descriptor {
    fn from(scalar: Scalar) -> Self {
        scalar.descriptor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ArticleGraphType;
    impl SchemaType for ArticleGraphType {}

    #[test]
    fn user_descriptor_identity() {
        let d = ArticleGraphType::descriptor();
        assert_eq!(d, Descriptor::of::<ArticleGraphType>());
        assert!(d.name().ends_with("ArticleGraphType"));
    }

    #[test]
    fn scalar_descriptors_are_unique() {
        use std::collections::HashSet;

        let unique: HashSet<_> = Scalar::ALL.iter().map(|s| s.descriptor()).collect();
        assert_eq!(unique.len(), Scalar::ALL.len());
    }

    #[test]
    fn scalar_descriptor_matches_builtin_name() {
        assert_eq!(Scalar::Int.descriptor(), Descriptor::builtin("Int"));
        assert_eq!(Descriptor::from(Scalar::Uri).name(), "Uri");
        assert_eq!(Scalar::Milliseconds.to_string(), "Milliseconds");
    }
}
