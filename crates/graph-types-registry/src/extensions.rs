//! Extension relation storage.
//!
//! Each base type owns an insertion-ordered list of the types that extend
//! it. Lists only grow.

use graph_types_core::{HostType, TypeHash};
use rustc_hash::FxHashMap;

use crate::ExtensionPolicy;

#[derive(Debug, Clone)]
struct ExtensionEntry {
    base: HostType,
    extending: Vec<HostType>,
}

/// Base type → extending types.
#[derive(Debug, Clone, Default)]
pub struct ExtensionMap {
    entries: FxHashMap<TypeHash, ExtensionEntry>,
    policy: ExtensionPolicy,
}

impl ExtensionMap {
    pub fn new(policy: ExtensionPolicy) -> Self {
        Self {
            entries: FxHashMap::default(),
            policy,
        }
    }

    /// Record that `extending` extends `base`.
    ///
    /// Returns `false` only when the policy is [`ExtensionPolicy::Dedup`]
    /// and the pair was already present.
    pub fn insert(&mut self, base: HostType, extending: HostType) -> bool {
        let entry = self
            .entries
            .entry(base.type_hash())
            .or_insert_with(|| ExtensionEntry {
                base,
                extending: Vec::new(),
            });

        if self.policy == ExtensionPolicy::Dedup && entry.extending.contains(&extending) {
            return false;
        }

        entry.extending.push(extending);
        true
    }

    /// Types extending `base`, in insertion order. Empty when none.
    pub fn get(&self, base: TypeHash) -> &[HostType] {
        self.entries
            .get(&base)
            .map(|entry| entry.extending.as_slice())
            .unwrap_or(&[])
    }

    /// Base types with at least one extension.
    pub fn bases(&self) -> impl Iterator<Item = HostType> + '_ {
        self.entries.values().map(|entry| entry.base)
    }

    /// Number of base types with at least one extension.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
