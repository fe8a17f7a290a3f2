//! Coercion of views and operands into plain unordered sets.

use core::hash::Hash;

use super::ResultSet;
use crate::error::ViewError;
use crate::operand::{Operand, SetCapable};
use crate::outcome::Outcome;
use crate::view::View;

/// An operand ready for set algebra.
pub enum Coerced<'o, T> {
    /// Already a genuine set; read in place.
    Borrowed(&'o dyn SetCapable<T>),
    /// Built from a plain iterable; duplicates collapsed.
    Owned(ResultSet<T>),
}

impl<T: Hash + Eq + Clone> Coerced<'_, T> {
    /// Declared size of a borrowed operand, element count of an owned one.
    pub fn len(&self) -> usize {
        match self {
            Coerced::Borrowed(set) => set.set_len(),
            Coerced::Owned(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, item: &T) -> bool {
        match self {
            Coerced::Borrowed(set) => set.set_contains(item),
            Coerced::Owned(set) => set.contains(item),
        }
    }

    /// Operand elements; a borrowed view may repeat elements.
    pub fn elements(&self) -> Box<dyn Iterator<Item = T> + '_> {
        match self {
            Coerced::Borrowed(set) => set.set_elements(),
            Coerced::Owned(set) => Box::new(set.iter().cloned()),
        }
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, Coerced::Borrowed(_))
    }

    /// Materializes a fresh, independent set.
    pub fn into_set(self) -> ResultSet<T> {
        match self {
            Coerced::Borrowed(set) => set.set_elements().collect(),
            Coerced::Owned(set) => set,
        }
    }
}

/// Collects the view's current elements into a fresh set in one pass.
pub fn coerce_view<V>(view: &V) -> ResultSet<V::Item>
where
    V: View + ?Sized,
    V::Item: Hash + Eq,
{
    view.iter().collect()
}

/// Prepares `operand` for set algebra.
///
/// Genuine sets are borrowed. Plain iterables are iterated once and
/// collected. Anything else is `NotApplicable`. An error raised while
/// iterating is returned unchanged.
pub fn coerce_operand<T, O>(operand: &O) -> Result<Outcome<Coerced<'_, T>>, ViewError>
where
    T: Hash + Eq,
    O: Operand<T> + ?Sized,
{
    if let Some(set) = operand.as_set() {
        return Ok(Outcome::Applicable(Coerced::Borrowed(set)));
    }
    let Some(elements) = operand.iterate() else {
        tracing::trace!(operand = operand.operand_name(), "operand is not iterable");
        return Ok(Outcome::NotApplicable);
    };
    let set = elements.collect::<Result<ResultSet<T>, ViewError>>()?;
    Ok(Outcome::Applicable(Coerced::Owned(set)))
}
