//! Runtime capability registry.
//!
//! Maps a view's declared type name to the capabilities registered for it.
//! Entries are only ever added, so a poisoned lock still holds a consistent
//! map and is recovered rather than propagated.

use std::collections::{BTreeMap, HashMap};
use std::sync::{OnceLock, PoisonError, RwLock};

use super::{Capability, CapabilityId};
use crate::view::View;

/// Process-wide table of `type name -> capabilities`.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    entries: RwLock<HashMap<&'static str, BTreeMap<CapabilityId, &'static str>>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `capability` for `type_name`. Returns `false` if already present.
    pub fn register_name(
        &self,
        type_name: &'static str,
        id: CapabilityId,
        capability: &'static str,
    ) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let caps = entries.entry(type_name).or_default();
        let added = caps.insert(id, capability).is_none();
        if added {
            tracing::trace!(type_name, capability, "capability registered");
        }
        added
    }

    pub fn contains_name(&self, type_name: &str, id: CapabilityId) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(type_name).is_some_and(|caps| caps.contains_key(&id))
    }

    /// Full names of the capabilities registered for `type_name`, ordered by id.
    pub fn capabilities_of_name(&self, type_name: &str) -> Vec<&'static str> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(type_name)
            .map(|caps| caps.values().copied().collect())
            .unwrap_or_default()
    }

    pub fn register<V: View + ?Sized, C: Capability>(&self) -> bool {
        self.register_name(V::TYPE_NAME, C::ID, C::NAME)
    }

    pub fn contains<V: View + ?Sized, C: Capability>(&self) -> bool {
        self.contains_name(V::TYPE_NAME, C::ID)
    }
}

/// The process-wide registry.
pub fn global() -> &'static CapabilityRegistry {
    static GLOBAL: OnceLock<CapabilityRegistry> = OnceLock::new();
    GLOBAL.get_or_init(CapabilityRegistry::new)
}

/// Registers view type `V` as satisfying `C` in the global registry.
pub fn register<V: View + ?Sized, C: Capability>() -> bool {
    global().register::<V, C>()
}

pub fn is_registered<V: View + ?Sized, C: Capability>() -> bool {
    global().contains::<V, C>()
}

/// Lookup by declared type name, for callers that only hold the name.
pub fn is_registered_name(type_name: &str, id: CapabilityId) -> bool {
    global().contains_name(type_name, id)
}

pub fn capabilities_of<V: View + ?Sized>() -> Vec<&'static str> {
    global().capabilities_of_name(V::TYPE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{GenuineSet, SetOfPairs};
    use crate::view::{ItemsView, KeysView, PairList, ValuesView};

    type Items = ItemsView<'static, PairList<String, i32>>;
    type Keys = KeysView<'static, PairList<String, i32>>;
    type Values = ValuesView<'static, PairList<String, i32>>;

    #[test]
    fn test_register_is_idempotent() {
        let reg = CapabilityRegistry::new();
        assert!(reg.register::<Items, SetOfPairs>());
        assert!(!reg.register::<Items, SetOfPairs>());
        assert!(reg.contains::<Items, SetOfPairs>());
        assert!(!reg.contains::<Items, GenuineSet>());
    }

    #[test]
    fn test_entries_are_per_view_kind() {
        let reg = CapabilityRegistry::new();
        reg.register::<Keys, GenuineSet>();
        assert!(reg.contains::<Keys, GenuineSet>());
        assert!(!reg.contains::<Values, GenuineSet>());
        assert!(reg.capabilities_of_name("ValuesView").is_empty());
    }

    #[test]
    fn test_mapping_type_does_not_matter() {
        let reg = CapabilityRegistry::new();
        reg.register::<ItemsView<'static, PairList<u8, u8>>, SetOfPairs>();
        assert!(reg.contains::<Items, SetOfPairs>());
        assert!(reg.contains_name("ItemsView", SetOfPairs::ID));
    }

    #[test]
    fn test_capabilities_listing() {
        let reg = CapabilityRegistry::new();
        reg.register::<Items, SetOfPairs>();
        reg.register::<Items, GenuineSet>();
        let mut caps = reg.capabilities_of_name("ItemsView");
        caps.sort_unstable();
        let mut expected = vec![SetOfPairs::NAME, GenuineSet::NAME];
        expected.sort_unstable();
        assert_eq!(caps, expected);
    }
}
