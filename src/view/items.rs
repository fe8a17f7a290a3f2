use core::fmt;

use super::{Mapping, View, ViewKind};
use crate::capability::{GenuineSet, Implements, SetOfPairs};
use crate::repr;

/// Key-value pairs of a mapping in insertion order, repeated keys included.
///
/// Declared as a [`SetOfPairs`] through [`Implements`] and, at runtime,
/// through [`register_items_view`](crate::capability::register_items_view).
#[derive(macros::ViewOperand)]
#[view_operand(set)]
pub struct ItemsView<'a, M: Mapping + ?Sized> {
    mapping: &'a M,
}

impl<'a, M: Mapping + ?Sized> ItemsView<'a, M> {
    pub fn new(mapping: &'a M) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &'a M {
        self.mapping
    }
}

impl<M> ItemsView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq,
    M::Value: PartialEq,
{
    /// True iff some pair has an equal key and an equal value.
    pub fn contains_pair(&self, key: &M::Key, value: &M::Value) -> bool {
        self.iter().any(|(k, v)| k == key && v == value)
    }
}

impl<M: Mapping + ?Sized> Clone for ItemsView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Mapping + ?Sized> Copy for ItemsView<'_, M> {}

impl<'a, M> View for ItemsView<'a, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq,
    M::Value: PartialEq,
{
    type Item = (&'a M::Key, &'a M::Value);

    const KIND: ViewKind = ViewKind::Items;

    fn len(&self) -> usize {
        self.mapping.len()
    }

    fn iter(&self) -> impl Iterator<Item = Self::Item> + '_ {
        let mapping: &'a M = self.mapping;
        mapping.pairs()
    }

    fn contains(&self, item: &Self::Item) -> bool {
        let (key, value) = *item;
        self.contains_pair(key, value)
    }
}

impl<M> Implements<SetOfPairs> for ItemsView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq,
    M::Value: PartialEq,
{
}

impl<M> Implements<GenuineSet> for ItemsView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq,
    M::Value: PartialEq,
{
}

impl<M> fmt::Debug for ItemsView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq + fmt::Debug,
    M::Value: PartialEq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        repr::format_items(Self::TYPE_NAME, self.iter(), f)
    }
}

#[cfg(feature = "serde")]
impl<M> serde::Serialize for ItemsView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq + serde::Serialize,
    M::Value: PartialEq + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
