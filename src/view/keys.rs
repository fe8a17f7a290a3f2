use core::fmt;

use super::{Mapping, View, ViewKind};
use crate::capability::{GenuineSet, Implements};
use crate::repr;

/// Keys of a mapping, repeated keys included.
#[derive(macros::ViewOperand)]
#[view_operand(set)]
pub struct KeysView<'a, M: Mapping + ?Sized> {
    mapping: &'a M,
}

impl<'a, M: Mapping + ?Sized> KeysView<'a, M> {
    pub fn new(mapping: &'a M) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &'a M {
        self.mapping
    }
}

impl<M: Mapping + ?Sized> Clone for KeysView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Mapping + ?Sized> Copy for KeysView<'_, M> {}

impl<'a, M> View for KeysView<'a, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq,
{
    type Item = &'a M::Key;

    const KIND: ViewKind = ViewKind::Keys;

    fn len(&self) -> usize {
        self.mapping.len()
    }

    fn iter(&self) -> impl Iterator<Item = Self::Item> + '_ {
        let mapping: &'a M = self.mapping;
        mapping.pairs().map(|(key, _)| key)
    }

    fn contains(&self, item: &Self::Item) -> bool {
        self.iter().any(|key| key == *item)
    }
}

impl<M> Implements<GenuineSet> for KeysView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq,
{
}

impl<M> fmt::Debug for KeysView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        repr::format_elements(Self::TYPE_NAME, self.iter(), f)
    }
}

#[cfg(feature = "serde")]
impl<M> serde::Serialize for KeysView<'_, M>
where
    M: Mapping + ?Sized,
    M::Key: PartialEq + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
