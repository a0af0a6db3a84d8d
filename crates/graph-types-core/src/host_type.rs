//! Host type identity.
//!
//! [`HostType`] is the key the registry stores and looks up. It carries a
//! [`TypeHash`], a display name, and, for nullable wrappers, the hash of the
//! wrapped type so lookups can normalize `Option<T>` to `T` before consulting
//! any store.
//!
//! Types opt in through the [`Host`] trait. The default body derives identity
//! from the Rust type itself, so user types only need an empty impl:
//!
//! ```
//! use graph_types_core::{Host, HostType};
//!
//! struct Article;
//! impl Host for Article {}
//!
//! let plain = Article::host_type();
//! let nullable = <Option<Article>>::host_type();
//!
//! assert!(!plain.is_nullable());
//! assert!(nullable.is_nullable());
//! assert_eq!(nullable.unwrapped(), plain.type_hash());
//! assert_eq!(plain, HostType::of::<Article>());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{TypeHash, primitives};

/// Identifies a host data type.
///
/// Equality and hashing use the type hash only; the name is for display and
/// error messages.
#[derive(Clone, Copy)]
pub struct HostType {
    hash: TypeHash,
    name: &'static str,
    underlying: Option<TypeHash>,
}

impl HostType {
    /// Identity of `T`, as reported by its [`Host`] impl.
    ///
    /// Builtins keep their canonical hash and `Option<T>` stays nullable.
    pub fn of<T: Host + ?Sized>() -> Self {
        T::host_type()
    }

    /// Identity derived from the Rust `TypeId`. Only the default
    /// [`Host::host_type`] body uses this.
    pub(crate) fn from_type_id<T: ?Sized + 'static>() -> Self {
        Self {
            hash: TypeHash::of::<T>(),
            name: std::any::type_name::<T>(),
            underlying: None,
        }
    }

    /// Identity derived from a canonical name.
    ///
    /// Two calls with the same name denote the same host type.
    pub const fn named(name: &'static str) -> Self {
        Self {
            hash: TypeHash::from_name(name),
            name,
            underlying: None,
        }
    }

    /// Identity with a precomputed hash. Reserved for builtin rows.
    pub(crate) const fn with_hash(hash: TypeHash, name: &'static str) -> Self {
        Self {
            hash,
            name,
            underlying: None,
        }
    }

    /// The nullable wrapper around `inner`.
    ///
    /// Wrapping an already nullable type keeps the innermost type as the
    /// underlying one, so `Option<Option<T>>` still normalizes to `T`.
    pub fn nullable(inner: HostType, name: &'static str) -> Self {
        Self {
            hash: TypeHash::from_nullable(inner.hash),
            name,
            underlying: Some(inner.unwrapped()),
        }
    }

    /// The hash identifying this exact type.
    #[inline]
    pub const fn type_hash(&self) -> TypeHash {
        self.hash
    }

    /// Display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is a nullable wrapper.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.underlying.is_some()
    }

    /// The hash of the wrapped type for nullable wrappers, otherwise this
    /// type's own hash.
    #[inline]
    pub const fn unwrapped(&self) -> TypeHash {
        match self.underlying {
            Some(inner) => inner,
            None => self.hash,
        }
    }
}

impl PartialEq for HostType {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for HostType {}

impl Hash for HostType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostType({}, {:?})", self.name, self.hash)
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Trait for host types that can be mapped to schema descriptors.
pub trait Host: 'static {
    /// Get the identity of this type.
    fn host_type() -> HostType {
        HostType::from_type_id::<Self>()
    }
}

impl<T: Host> Host for Option<T> {
    fn host_type() -> HostType {
        HostType::nullable(T::host_type(), std::any::type_name::<Self>())
    }
}

macro_rules! builtin_host {
    ($($ty:ty => $hash:expr, $name:literal;)*) => {
        $(
            impl Host for $ty {
                fn host_type() -> HostType {
                    HostType::with_hash($hash, $name)
                }
            }
        )*
    };
}

builtin_host! {
    String => primitives::STRING, "String";
    str => primitives::STR, "str";
    i8 => primitives::I8, "i8";
    u8 => primitives::U8, "u8";
    i16 => primitives::I16, "i16";
    u16 => primitives::U16, "u16";
    i32 => primitives::I32, "i32";
    u32 => primitives::U32, "u32";
    i64 => primitives::I64, "i64";
    u64 => primitives::U64, "u64";
    rust_decimal::Decimal => primitives::DECIMAL, "rust_decimal::Decimal";
    f32 => primitives::F32, "f32";
    f64 => primitives::F64, "f64";
    bool => primitives::BOOL, "bool";
    uuid::Uuid => primitives::UUID, "uuid::Uuid";
    chrono::NaiveDateTime => primitives::NAIVE_DATE_TIME, "chrono::NaiveDateTime";
    chrono::DateTime<chrono::FixedOffset> => primitives::DATE_TIME_FIXED, "chrono::DateTime<FixedOffset>";
    chrono::DateTime<chrono::Utc> => primitives::DATE_TIME_UTC, "chrono::DateTime<Utc>";
    std::time::Duration => primitives::DURATION, "std::time::Duration";
    chrono::TimeDelta => primitives::TIME_DELTA, "chrono::TimeDelta";
    url::Url => primitives::URL, "url::Url";
}
