//! Deterministic hash-based identity for host types and schema descriptors.
//!
//! [`TypeHash`] is the single key type used by every store in the registry.
//! Hashes come from one of two sources:
//!
//! - A canonical name (`TypeHash::from_name`), computed with XXHash64 at
//!   compile time. Builtin primitives and builtin scalar descriptors use this
//!   so their identities are `const` and can be matched on.
//! - A Rust `TypeId` (`TypeHash::of`), used for user types that never need a
//!   stable name.
//!
//! Domain-specific mixing constants keep a host type and a descriptor that
//! happen to share a name from ever producing the same hash.
//!
//! # Examples
//!
//! ```
//! use graph_types_core::TypeHash;
//!
//! let a = TypeHash::from_name("i32");
//! let b = TypeHash::from_name("i32");
//! assert_eq!(a, b);
//!
//! let nullable = TypeHash::from_nullable(a);
//! assert_ne!(a, nullable);
//! ```

use std::fmt;
use xxhash_rust::const_xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant used when folding one hash into another.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for host type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for schema descriptor hashes.
    pub const DESCRIPTOR: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for nullable wrapper hashes.
    pub const NULLABLE: u64 = 0x7d3c8b4a92e15f6d;
}

/// A deterministic 64-bit hash identifying a host type or a schema descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a host type hash from a canonical type name.
    ///
    /// The same name always produces the same hash, and the computation is
    /// usable in `const` context.
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a descriptor hash from a descriptor name.
    #[inline]
    pub const fn from_descriptor_name(name: &str) -> Self {
        TypeHash(hash_constants::DESCRIPTOR ^ xxh64(name.as_bytes(), 0))
    }

    /// Create the hash of the nullable wrapper around `inner`.
    ///
    /// Wrapping is not commutative with the inner hash, so
    /// `from_nullable(x) != x` for every non-empty `x`.
    #[inline]
    pub const fn from_nullable(inner: TypeHash) -> Self {
        TypeHash((inner.0 ^ hash_constants::NULLABLE).wrapping_mul(hash_constants::SEP))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Create a TypeHash from a Rust type's TypeId.
    ///
    /// This produces a different hash than `from_name()` since it's based on
    /// Rust's internal type representation rather than a canonical name.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::of_type_id(std::any::TypeId::of::<T>())
    }

    /// Create a TypeHash from an existing TypeId.
    #[inline]
    pub fn of_type_id(type_id: std::any::TypeId) -> Self {
        use std::hash::{Hash, Hasher};

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        type_id.hash(&mut hasher);
        TypeHash(hasher.finish())
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Well-known constant hashes for the builtin host primitives.
///
/// Every value is `TypeHash::from_name` over the Rust spelling of the type.
pub mod primitives {
    use super::TypeHash;

    /// `String`
    pub const STRING: TypeHash = TypeHash::from_name("String");
    /// `str`
    pub const STR: TypeHash = TypeHash::from_name("str");

    pub const I8: TypeHash = TypeHash::from_name("i8");
    pub const U8: TypeHash = TypeHash::from_name("u8");
    pub const I16: TypeHash = TypeHash::from_name("i16");
    pub const U16: TypeHash = TypeHash::from_name("u16");
    pub const I32: TypeHash = TypeHash::from_name("i32");
    pub const U32: TypeHash = TypeHash::from_name("u32");
    pub const I64: TypeHash = TypeHash::from_name("i64");
    pub const U64: TypeHash = TypeHash::from_name("u64");

    /// `rust_decimal::Decimal`
    pub const DECIMAL: TypeHash = TypeHash::from_name("rust_decimal::Decimal");

    pub const F32: TypeHash = TypeHash::from_name("f32");
    pub const F64: TypeHash = TypeHash::from_name("f64");

    pub const BOOL: TypeHash = TypeHash::from_name("bool");

    /// `uuid::Uuid`
    pub const UUID: TypeHash = TypeHash::from_name("uuid::Uuid");

    /// `chrono::NaiveDateTime` (no offset)
    pub const NAIVE_DATE_TIME: TypeHash = TypeHash::from_name("chrono::NaiveDateTime");
    /// `chrono::DateTime<FixedOffset>`
    pub const DATE_TIME_FIXED: TypeHash = TypeHash::from_name("chrono::DateTime<FixedOffset>");
    /// `chrono::DateTime<Utc>`
    pub const DATE_TIME_UTC: TypeHash = TypeHash::from_name("chrono::DateTime<Utc>");

    /// `std::time::Duration`
    pub const DURATION: TypeHash = TypeHash::from_name("std::time::Duration");
    /// `chrono::TimeDelta`
    pub const TIME_DELTA: TypeHash = TypeHash::from_name("chrono::TimeDelta");

    /// `url::Url`
    pub const URL: TypeHash = TypeHash::from_name("url::Url");

    /// Every builtin primitive hash, in declaration order.
    pub const ALL: [TypeHash; 21] = [
        STRING,
        STR,
        I8,
        U8,
        I16,
        U16,
        I32,
        U32,
        I64,
        U64,
        DECIMAL,
        F32,
        F64,
        BOOL,
        UUID,
        NAIVE_DATE_TIME,
        DATE_TIME_FIXED,
        DATE_TIME_UTC,
        DURATION,
        TIME_DELTA,
        URL,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        assert_eq!(TypeHash::from_name("i32"), TypeHash::from_name("i32"));
        assert_eq!(
            TypeHash::from_name("app::Article"),
            TypeHash::from_name("app::Article")
        );
    }

    #[test]
    fn type_hash_uniqueness() {
        let int_hash = TypeHash::from_name("i32");
        let float_hash = TypeHash::from_name("f32");
        let string_hash = TypeHash::from_name("String");

        assert_ne!(int_hash, float_hash);
        assert_ne!(int_hash, string_hash);
        assert_ne!(float_hash, string_hash);
    }

    #[test]
    fn descriptor_domain_is_separate() {
        assert_ne!(
            TypeHash::from_name("String"),
            TypeHash::from_descriptor_name("String")
        );
    }

    #[test]
    fn nullable_hash_differs_from_inner() {
        let inner = TypeHash::from_name("i32");
        let nullable = TypeHash::from_nullable(inner);
        assert_ne!(inner, nullable);
        assert_eq!(nullable, TypeHash::from_nullable(inner));
        assert_ne!(nullable, TypeHash::from_nullable(nullable));
    }

    #[test]
    fn type_id_hash_is_stable_within_process() {
        struct Local;
        assert_eq!(TypeHash::of::<Local>(), TypeHash::of::<Local>());
        assert_ne!(TypeHash::of::<Local>(), TypeHash::of::<i32>());
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!TypeHash::from_name("i32").is_empty());
    }

    #[test]
    fn hash_display() {
        let hash = TypeHash::from_name("i32");
        assert!(format!("{}", hash).starts_with("0x"));
        assert!(format!("{:?}", hash).starts_with("TypeHash(0x"));
    }

    #[test]
    fn primitive_constants_are_unique() {
        use std::collections::HashSet;

        let unique: HashSet<_> = primitives::ALL.iter().collect();
        assert_eq!(
            unique.len(),
            primitives::ALL.len(),
            "All primitive hashes should be unique"
        );
        assert!(primitives::ALL.iter().all(|h| !h.is_empty()));
    }

    #[test]
    fn primitive_constants_match_from_name() {
        assert_eq!(primitives::I32, TypeHash::from_name("i32"));
        assert_eq!(primitives::STRING, TypeHash::from_name("String"));
        assert_eq!(primitives::URL, TypeHash::from_name("url::Url"));
    }
}
