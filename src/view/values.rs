use core::fmt;

use super::{Mapping, View, ViewKind};
use crate::repr;

/// Values of a mapping in pair order. Not a set: values may repeat.
#[derive(macros::ViewOperand)]
pub struct ValuesView<'a, M: Mapping + ?Sized> {
    mapping: &'a M,
}

impl<'a, M: Mapping + ?Sized> ValuesView<'a, M> {
    pub fn new(mapping: &'a M) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &'a M {
        self.mapping
    }
}

impl<M: Mapping + ?Sized> Clone for ValuesView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Mapping + ?Sized> Copy for ValuesView<'_, M> {}

impl<'a, M> View for ValuesView<'a, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq,
{
    type Item = &'a M::Value;

    const KIND: ViewKind = ViewKind::Values;

    fn len(&self) -> usize {
        self.mapping.len()
    }

    fn iter(&self) -> impl Iterator<Item = Self::Item> + '_ {
        let mapping: &'a M = self.mapping;
        mapping.pairs().map(|(_, value)| value)
    }

    fn contains(&self, item: &Self::Item) -> bool {
        self.iter().any(|value| value == *item)
    }
}

impl<M> fmt::Debug for ValuesView<'_, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        repr::format_elements(Self::TYPE_NAME, self.iter(), f)
    }
}

#[cfg(feature = "serde")]
impl<M> serde::Serialize for ValuesView<'_, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
