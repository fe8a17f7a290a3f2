//! Operand capabilities.
//!
//! The right-hand side of every comparison or algebra call is anything that
//! implements [`Operand<T>`]. The trait is a capability query with two
//! questions:
//!
//! | Query | `Some` means |
//! |-------|--------------|
//! | [`Operand::as_set`] | genuine set: unique elements, unordered equality |
//! | [`Operand::iterate`] | plain iterable: elements may repeat |
//!
//! Both answering `None` marks an opaque value (a number, a `bool`, ...):
//! every view operation on it yields `NotApplicable`.
//!
//! | Type | as_set | iterate |
//! |------|--------|---------|
//! | `HashSet`, `BTreeSet` | yes | yes |
//! | `KeysView`, `ItemsView` | yes | yes |
//! | `Vec`, `[T]`, `[T; N]`, `VecDeque`, `ValuesView` | no | yes |
//! | [`OneShot`] | no | yes, once |
//! | integers, floats, `bool`, `char`, `()` | no | no |

use core::cell::RefCell;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::error::{BoxError, ViewError};

/// Element stream of an operand; items fail only for fallible sources.
pub type Elements<'o, T> = Box<dyn Iterator<Item = Result<T, ViewError>> + 'o>;

// =============================================================================
// Traits
// =============================================================================

/// A collection with set semantics: membership by equality, declared size.
pub trait SetCapable<T> {
    /// Declared size; for views this is the view length.
    fn set_len(&self) -> usize;

    fn set_contains(&self, item: &T) -> bool;

    /// Elements in no particular order.
    ///
    /// Std sets yield each element once. Keys and items views yield their
    /// current elements, so repeated keys repeat here and `set_len` counts
    /// them.
    fn set_elements(&self) -> Box<dyn Iterator<Item = T> + '_>;
}

/// Capability query for the right operand of a view operation.
pub trait Operand<T> {
    /// `Some` only for genuine set-capable operands.
    fn as_set(&self) -> Option<&dyn SetCapable<T>> {
        None
    }

    /// `Some` for anything that can be iterated.
    fn iterate(&self) -> Option<Elements<'_, T>> {
        None
    }

    /// Type name used in diagnostics.
    fn operand_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<T, O: Operand<T> + ?Sized> Operand<T> for &O {
    fn as_set(&self) -> Option<&dyn SetCapable<T>> {
        (**self).as_set()
    }

    fn iterate(&self) -> Option<Elements<'_, T>> {
        (**self).iterate()
    }

    fn operand_name(&self) -> &'static str {
        (**self).operand_name()
    }
}

// =============================================================================
// Genuine sets
// =============================================================================

impl<T, S> SetCapable<T> for HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn set_len(&self) -> usize {
        self.len()
    }

    fn set_contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn set_elements(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl<T, S> Operand<T> for HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn as_set(&self) -> Option<&dyn SetCapable<T>> {
        Some(self)
    }

    fn iterate(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl<T: Ord + Clone> SetCapable<T> for BTreeSet<T> {
    fn set_len(&self) -> usize {
        self.len()
    }

    fn set_contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn set_elements(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl<T: Ord + Clone> Operand<T> for BTreeSet<T> {
    fn as_set(&self) -> Option<&dyn SetCapable<T>> {
        Some(self)
    }

    fn iterate(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter().cloned().map(Ok)))
    }
}

// =============================================================================
// Plain iterables
// =============================================================================

impl<T: Clone> Operand<T> for [T] {
    fn iterate(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl<T: Clone, const N: usize> Operand<T> for [T; N] {
    fn iterate(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl<T: Clone> Operand<T> for Vec<T> {
    fn iterate(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl<T: Clone> Operand<T> for VecDeque<T> {
    fn iterate(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter().cloned().map(Ok)))
    }
}

/// Single-pass fallible source.
///
/// The wrapped iterator is handed out on the first [`Operand::iterate`]
/// call; later calls see an exhausted stream. Item errors surface as
/// [`ViewError::Operand`].
///
/// ```
/// use multidict_views::operand::{Operand, OneShot};
///
/// let src = OneShot::new([Ok::<_, std::io::Error>(1), Ok(2)].into_iter());
/// assert_eq!(src.iterate().unwrap().count(), 2);
/// assert_eq!(src.iterate().unwrap().count(), 0);
/// ```
pub struct OneShot<I> {
    inner: RefCell<Option<I>>,
}

impl<I> OneShot<I> {
    pub fn new(iter: I) -> Self {
        Self {
            inner: RefCell::new(Some(iter)),
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

impl<I, T, E> Operand<T> for OneShot<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    fn iterate(&self) -> Option<Elements<'_, T>> {
        match self.inner.borrow_mut().take() {
            Some(iter) => Some(Box::new(iter.map(|item| item.map_err(ViewError::operand)))),
            // exhausted
            None => Some(Box::new(core::iter::from_fn(|| None))),
        }
    }
}

// =============================================================================
// Opaque scalars
// =============================================================================

/// Scalars answer `None` to both capability queries.
macro_rules! impl_opaque_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> Operand<T> for $ty {}
        )*
    };
}

impl_opaque_operand!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, (),
);

// =============================================================================
// Tests
// =============================================================================
