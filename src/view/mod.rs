//! # Views
//!
//! Live, read-only projections over a [`Mapping`]:
//!
//! | View | Element | Genuine set |
//! |------|---------|-------------|
//! | [`KeysView`] | `&K` | yes |
//! | [`ValuesView`] | `&V` | no, values may repeat |
//! | [`ItemsView`] | `(&K, &V)` | yes, and a set of pairs |
//!
//! A view borrows its mapping and walks it again on every [`View::iter`]
//! call; nothing is cached. While the borrow is held the mapping cannot
//! change, so a single comparison or algebra call always sees one consistent
//! state.

pub mod mapping;
mod items;
mod keys;
mod values;

pub use items::ItemsView;
pub use keys::KeysView;
pub use mapping::{Mapping, PairList};
pub use values::ValuesView;

/// The three view variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Keys,
    Values,
    Items,
}

impl ViewKind {
    /// Declared type name, as used in representations and the registry.
    pub const fn type_name(self) -> &'static str {
        match self {
            ViewKind::Keys => "KeysView",
            ViewKind::Values => "ValuesView",
            ViewKind::Items => "ItemsView",
        }
    }
}

/// Contract every view satisfies.
pub trait View {
    type Item;

    const KIND: ViewKind;

    /// Declared type name; identity used by the formatter and the registry.
    const TYPE_NAME: &'static str = Self::KIND.type_name();

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restartable iteration over the mapping's current elements.
    fn iter(&self) -> impl Iterator<Item = Self::Item> + '_;

    /// True iff `item` is currently produced by [`View::iter`].
    fn contains(&self, item: &Self::Item) -> bool;
}
