//! Human-readable rendering of views.
//!
//! Every element goes through its `Debug` impl, so strings are quoted and
//! nested containers are rendered recursively. The view is walked exactly
//! once and nothing is deduplicated:
//!
//! ```
//! use multidict_views::PairList;
//! use multidict_views::repr::repr_items;
//!
//! let md = PairList::from_pairs([("a", 1), ("a", 2)]);
//! assert_eq!(repr_items(&md.items()), r#"ItemsView("a": 1, "a": 2)"#);
//! ```

use core::fmt::{self, Debug, Write};

use crate::view::{ItemsView, Mapping, View};

/// Writes `TypeName(k1: v1, k2: v2, ...)` in a single pass over `pairs`.
pub fn format_items<K, V, I>(type_name: &str, pairs: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: Debug,
    V: Debug,
    I: IntoIterator<Item = (K, V)>,
{
    f.write_str(type_name)?;
    f.write_char('(')?;
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key:?}: {value:?}")?;
    }
    f.write_char(')')
}

/// Writes `TypeName(e1, e2, ...)` in a single pass over `elements`.
pub fn format_elements<T, I>(
    type_name: &str,
    elements: I,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    T: Debug,
    I: IntoIterator<Item = T>,
{
    f.write_str(type_name)?;
    f.write_char('(')?;
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element:?}")?;
    }
    f.write_char(')')
}

/// Representation of an items view as an owned string.
pub fn repr_items<M>(view: &ItemsView<'_, M>) -> String
where
    M: Mapping + ?Sized,
    M::Key: PartialEq + Debug,
    M::Value: PartialEq + Debug,
{
    tracing::trace!(len = view.len(), "formatting items view");
    format!("{view:?}")
}
