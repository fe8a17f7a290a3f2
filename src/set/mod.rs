//! # Set protocol for views
//!
//! - [`coerce`]: views and operands into plain sets
//! - [`compare`]: the six rich comparisons
//! - [`algebra`]: `&`, `|`, `-`, `^` and disjointness
//!
//! [`SetView`] exposes all of them as methods on any [`View`]:
//!
//! ```
//! use std::collections::HashSet;
//! use multidict_views::{PairList, SetView};
//!
//! let md = PairList::from_pairs([("x", 1), ("y", 2)]);
//! let other: HashSet<&&str> = [&"x", &"y", &"z"].into_iter().collect();
//!
//! assert_eq!(md.keys().is_proper_subset(&other).applicable(), Some(true));
//! let union = md.keys().union(&other).unwrap().applicable().unwrap();
//! assert_eq!(union.len(), 3);
//! ```

pub mod algebra;
pub mod coerce;
pub mod compare;

use core::hash::Hash;
use std::collections::HashSet;

use crate::error::ViewError;
use crate::operand::Operand;
use crate::outcome::{Comparison, Relation};
use crate::view::View;

pub use algebra::AlgebraResult;
pub use coerce::Coerced;

/// Generic result set returned by every algebra operator.
pub type ResultSet<T> = HashSet<T>;

/// Method syntax for comparison and algebra on views.
pub trait SetView: View {
    fn compare<O>(&self, operand: &O, relation: Relation) -> Comparison
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::compare(self, operand, relation)
    }

    fn is_proper_subset<O>(&self, operand: &O) -> Comparison
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::is_proper_subset(self, operand)
    }

    fn is_subset<O>(&self, operand: &O) -> Comparison
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::is_subset(self, operand)
    }

    fn is_equal<O>(&self, operand: &O) -> Comparison
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::is_equal(self, operand)
    }

    fn is_not_equal<O>(&self, operand: &O) -> bool
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::is_not_equal(self, operand)
    }

    fn is_proper_superset<O>(&self, operand: &O) -> Comparison
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::is_proper_superset(self, operand)
    }

    fn is_superset<O>(&self, operand: &O) -> Comparison
    where
        O: Operand<Self::Item> + ?Sized,
    {
        compare::is_superset(self, operand)
    }

    fn intersection<O>(&self, operand: &O) -> AlgebraResult<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
        O: Operand<Self::Item> + ?Sized,
    {
        algebra::intersection(self, operand)
    }

    fn union<O>(&self, operand: &O) -> AlgebraResult<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
        O: Operand<Self::Item> + ?Sized,
    {
        algebra::union(self, operand)
    }

    fn difference<O>(&self, operand: &O) -> AlgebraResult<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
        O: Operand<Self::Item> + ?Sized,
    {
        algebra::difference(self, operand)
    }

    fn symmetric_difference<O>(&self, operand: &O) -> AlgebraResult<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
        O: Operand<Self::Item> + ?Sized,
    {
        algebra::symmetric_difference(self, operand)
    }

    fn is_disjoint<O>(&self, operand: &O) -> Result<bool, ViewError>
    where
        O: Operand<Self::Item> + ?Sized,
    {
        algebra::is_disjoint(self, operand)
    }

    /// Fresh set of the view's current elements.
    fn to_set(&self) -> ResultSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        coerce::coerce_view(self)
    }
}

impl<V: View + ?Sized> SetView for V {}
