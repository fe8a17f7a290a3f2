use multidict_views::capability::{self, Capability, CapabilityRegistry, GenuineSet, SetOfPairs};
use multidict_views::{ItemsView, KeysView, PairList, ValuesView, View};

/// Capability defined outside the crate.
#[derive(Capability)]
pub struct Ordered;

type Md = PairList<&'static str, i32>;

#[test]
fn test_derived_capability_uses_definition_site_path() {
    assert_eq!(Ordered::LABEL, "Ordered");
    assert_eq!(Ordered::NAME, "capability::Ordered");
    assert_ne!(Ordered::ID, SetOfPairs::ID);
}

#[test]
fn test_register_items_view() {
    capability::register_items_view();
    capability::register_items_view();

    assert!(capability::is_registered::<ItemsView<'_, Md>, SetOfPairs>());
    assert!(!capability::is_registered::<KeysView<'_, Md>, SetOfPairs>());
    assert!(capability::is_registered_name("ItemsView", SetOfPairs::ID));
    assert_eq!(
        capability::capabilities_of::<ItemsView<'_, Md>>()
            .iter()
            .filter(|name| **name == SetOfPairs::NAME)
            .count(),
        1
    );
}

#[test]
fn test_registration_is_by_declared_type_name() {
    // every mapping's items view shares the same declared name
    capability::register_items_view();
    assert!(capability::is_registered::<ItemsView<'_, PairList<u64, Vec<u8>>>, SetOfPairs>());
    assert_eq!(ItemsView::<'_, Md>::TYPE_NAME, "ItemsView");
}

#[test]
fn test_local_registry() {
    let registry = CapabilityRegistry::new();
    assert!(registry.register::<ValuesView<'_, Md>, Ordered>());
    assert!(!registry.register::<ValuesView<'_, Md>, Ordered>());
    assert!(registry.contains::<ValuesView<'_, Md>, Ordered>());
    assert!(!registry.contains::<ValuesView<'_, Md>, GenuineSet>());
    assert_eq!(registry.capabilities_of_name("ValuesView"), vec![Ordered::NAME]);
}

#[cfg(feature = "detect")]
#[test]
fn test_compile_time_declarations() {
    use multidict_views::has_capability;

    const ITEMS_ARE_PAIRS: bool = has_capability!(ItemsView<'static, Md>: SetOfPairs);
    assert!(ITEMS_ARE_PAIRS);
    assert!(has_capability!(KeysView<'static, Md>: GenuineSet));
    assert!(!has_capability!(ValuesView<'static, Md>: GenuineSet));
    assert!(!has_capability!(ItemsView<'static, Md>: Ordered));
}
