//! # multidict-views
//!
//! Set comparison and set algebra for the live views of an ordered
//! multi-value mapping.
//!
//! A multi-value mapping may hold several values for one key. Its views are
//! read-only projections over the keys, the values, or the `(key, value)`
//! pairs. This crate lets those views take part in set operations against
//! std sets, sequences, fallible iterators and other views.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Protocol                                                |
//! |  - Outcome (Applicable / NotApplicable), Relation, ViewError      |
//! |  - Operand / SetCapable capability queries                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Views                                                   |
//! |  - Mapping boundary, PairList backing store                       |
//! |  - KeysView, ValuesView, ItemsView                                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Set Protocol                                            |
//! |  - coerce, compare (6 relations), algebra (& | - ^, disjoint)     |
//! |  - Capability registration, representation                        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Not-applicable
//!
//! Comparing a view with something that is not a genuine set, or combining
//! it with something that cannot be iterated, is not an error. The call
//! returns [`Outcome::NotApplicable`] and the caller decides whether to try
//! the mirrored operation or report a type mismatch.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashSet;
//! use multidict_views::prelude::*;
//!
//! let md = PairList::from_pairs([("x", 1), ("y", 2)]);
//! let keys = md.keys();
//! let other: HashSet<&&str> = [&"x", &"y", &"z"].into_iter().collect();
//!
//! assert_eq!(keys.is_subset(&other), Outcome::Applicable(true));
//! assert_eq!(keys.is_superset(&other), Outcome::Applicable(false));
//! assert!(keys.is_subset(&vec![&"x"]).is_not_applicable());
//!
//! let diff = keys.difference(&other).unwrap().applicable().unwrap();
//! assert!(diff.is_empty());
//!
//! assert_eq!(format!("{:?}", md.items()), r#"ItemsView("x": 1, "y": 2)"#);
//! ```

// Allow `::multidict_views` paths emitted by the derives to work inside the crate itself
extern crate self as multidict_views;

// =============================================================================
// Layer 0: Protocol
// =============================================================================
pub mod config;
pub mod error;
pub mod operand;
pub mod outcome;

// =============================================================================
// Layer 1: Views
// =============================================================================
pub mod view;

// =============================================================================
// Layer 2: Set Protocol
// =============================================================================
pub mod capability;
pub mod repr;
pub mod set;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::ViewError;
pub use operand::{OneShot, Operand, SetCapable};
pub use outcome::{Comparison, Outcome, Relation};
pub use set::{ResultSet, SetView};
pub use view::{ItemsView, KeysView, Mapping, PairList, ValuesView, View, ViewKind};

pub use macros::ViewOperand;

// =============================================================================
// Declarative Macro Bridge for #[derive(Capability)]
// =============================================================================
//
// #[derive(Capability)] only sees the type's identifier. It emits a call to
// this bridge so that `module_path!()` expands at the definition site.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Capability)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_capability {
    ($ty:ty, $label:literal) => {
        impl $crate::capability::Capability for $ty {
            const LABEL: &'static str = $label;
            const NAME: &'static str = concat!(module_path!(), "::", $label);
            const ID: $crate::capability::CapabilityId =
                $crate::capability::CapabilityId::of(concat!(module_path!(), "::", $label));
        }
    };
}

/// Common items for working with views.
pub mod prelude {
    pub use crate::capability::{Capability, GenuineSet, Implements, SetOfPairs};
    pub use crate::operand::{OneShot, Operand, SetCapable};
    pub use crate::outcome::{Comparison, Outcome, Relation};
    pub use crate::set::{ResultSet, SetView};
    pub use crate::view::{ItemsView, KeysView, Mapping, PairList, ValuesView, View};
    pub use crate::ViewError;
}
