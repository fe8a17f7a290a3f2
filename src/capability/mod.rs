//! # Capability Registration
//!
//! Structural capability checks without inheritance.
//!
//! A capability is a zero-sized marker implementing [`Capability`]
//! (`#[derive(Capability)]`). A type declares that it satisfies one in two
//! independent ways:
//!
//! 1. **Compile time**: `impl Implements<SetOfPairs> for MyView {}`. The
//!    trait has no methods; nothing is inherited through it. Generic code
//!    bounds on it, concrete code probes it with `has_capability!`.
//! 2. **Runtime**: an explicit entry in the process-wide
//!    [`CapabilityRegistry`], keyed by the view's declared type name.
//!
//! ```
//! use multidict_views::capability::{self, SetOfPairs};
//! use multidict_views::{ItemsView, PairList};
//!
//! capability::register_items_view();
//! assert!(capability::is_registered::<ItemsView<'_, PairList<u8, u8>>, SetOfPairs>());
//! ```

#[cfg(feature = "detect")]
pub mod detect;
pub mod registry;

use std::sync::Once;

pub use macros::Capability;
pub use registry::{
    CapabilityRegistry, capabilities_of, is_registered, is_registered_name, register,
};

use crate::view::ViewKind;

// =============================================================================
// Capability markers
// =============================================================================

/// Stable identifier of a capability: FNV-1a 64 of its full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapabilityId(u64);

impl CapabilityId {
    pub const fn of(name: &str) -> Self {
        Self(fnv1a_64(name))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

const fn fnv1a_64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Capability marker trait.
///
/// Implemented by unit structs through `#[derive(Capability)]`.
pub trait Capability: 'static {
    /// Bare marker name, e.g. `SetOfPairs`.
    const LABEL: &'static str;

    /// `module::path::Label`.
    const NAME: &'static str;

    const ID: CapabilityId;
}

/// Compile-time declaration that `Self` satisfies capability `C`.
///
/// Carries no methods: the implementor must satisfy the contract on its own.
pub trait Implements<C: Capability> {}

/// Set of key-value pairs: unique `(key, value)` elements compared by both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Capability)]
pub struct SetOfPairs;

/// Unique elements with unordered equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Capability)]
pub struct GenuineSet;

// =============================================================================
// Items view registration
// =============================================================================

/// Registers the items view as a [`SetOfPairs`] in the global registry.
///
/// Runs once per process; later calls return immediately.
pub fn register_items_view() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let name = ViewKind::Items.type_name();
        let backend = crate::config::current().backend;
        registry::global().register_name(name, SetOfPairs::ID, SetOfPairs::NAME);
        tracing::debug!(
            view = name,
            capability = SetOfPairs::NAME,
            ?backend,
            "registered items view"
        );
    });
}
