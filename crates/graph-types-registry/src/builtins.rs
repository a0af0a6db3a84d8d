//! Builtin resolution table.
//!
//! Maps every builtin host primitive to its scalar descriptor. The table is
//! built once on first use from [`BUILTINS`] and never mutated afterwards.

use std::sync::LazyLock;

use graph_types_core::{Scalar, TypeHash, primitives};
use rustc_hash::FxHashMap;

/// Rows of the builtin table.
pub const BUILTINS: [(TypeHash, Scalar); 21] = [
    (primitives::STRING, Scalar::String),
    (primitives::STR, Scalar::String),
    (primitives::I8, Scalar::Int),
    (primitives::U8, Scalar::Int),
    (primitives::I16, Scalar::Int),
    (primitives::U16, Scalar::Int),
    (primitives::I32, Scalar::Int),
    (primitives::U32, Scalar::Int),
    (primitives::I64, Scalar::Int),
    (primitives::U64, Scalar::Int),
    (primitives::DECIMAL, Scalar::Decimal),
    (primitives::F32, Scalar::Float),
    (primitives::F64, Scalar::Float),
    (primitives::BOOL, Scalar::Boolean),
    (primitives::UUID, Scalar::Guid),
    (primitives::NAIVE_DATE_TIME, Scalar::DateTime),
    (primitives::DATE_TIME_FIXED, Scalar::DateTimeOffset),
    (primitives::DATE_TIME_UTC, Scalar::DateTimeOffset),
    (primitives::DURATION, Scalar::Milliseconds),
    (primitives::TIME_DELTA, Scalar::Milliseconds),
    (primitives::URL, Scalar::Uri),
];

static TABLE: LazyLock<FxHashMap<TypeHash, Scalar>> =
    LazyLock::new(|| BUILTINS.iter().copied().collect());

/// Look up the scalar for a host type hash.
///
/// The hash must already be unwrapped; nullable wrappers are never keys.
#[inline]
pub fn lookup(hash: TypeHash) -> Option<Scalar> {
    TABLE.get(&hash).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_primitive() {
        for hash in primitives::ALL {
            assert!(lookup(hash).is_some(), "no builtin for {hash:?}");
        }
        assert_eq!(TABLE.len(), BUILTINS.len());
    }

    #[test]
    fn integers_share_one_scalar() {
        for hash in [
            primitives::I8,
            primitives::U8,
            primitives::I16,
            primitives::U16,
            primitives::I32,
            primitives::U32,
            primitives::I64,
            primitives::U64,
        ] {
            assert_eq!(lookup(hash), Some(Scalar::Int));
        }
    }

    #[test]
    fn nullable_hash_is_not_a_key() {
        assert_eq!(lookup(TypeHash::from_nullable(primitives::I32)), None);
    }

    #[test]
    fn unknown_hash_misses() {
        assert_eq!(lookup(TypeHash::from_name("app::Article")), None);
        assert_eq!(lookup(TypeHash::EMPTY), None);
    }
}
