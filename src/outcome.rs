//! Not-applicable protocol values.
//!
//! Core types: [`Outcome`] (`Applicable` / `NotApplicable`) and [`Relation`]
//! (the six rich-comparison tags).
//!
//! A binary operation between a view and an operand may be declined by the
//! view side. The caller then decides whether to try the mirrored operation
//! on the operand or to report a type mismatch:
//!
//! ```
//! use multidict_views::outcome::{Outcome, Relation};
//!
//! let forward: Outcome<bool> = Outcome::NotApplicable;
//! let resolved = forward
//!     .or_else(|| Outcome::Applicable(true)) // mirrored attempt
//!     .ok_or_unsupported(Relation::Subset);
//! assert!(resolved.unwrap());
//! ```

use core::fmt;

use crate::error::ViewError;

// =============================================================================
// Outcome
// =============================================================================

/// Result of an operation that the view side may decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T> {
    /// The operation is defined for this operand.
    Applicable(T),
    /// The operand lacks the capability the operation needs.
    NotApplicable,
}

/// Outcome of a rich comparison.
pub type Comparison = Outcome<bool>;

impl<T> Outcome<T> {
    #[inline]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Outcome::Applicable(_))
    }

    #[inline]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Outcome::NotApplicable)
    }

    /// Converts to `Option`, dropping the not-applicable marker.
    #[inline]
    pub fn applicable(self) -> Option<T> {
        match self {
            Outcome::Applicable(v) => Some(v),
            Outcome::NotApplicable => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Applicable(v) => Outcome::Applicable(v),
            Outcome::NotApplicable => Outcome::NotApplicable,
        }
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Applicable(v) => Outcome::Applicable(f(v)),
            Outcome::NotApplicable => Outcome::NotApplicable,
        }
    }

    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Applicable(v) => f(v),
            Outcome::NotApplicable => Outcome::NotApplicable,
        }
    }

    /// Tries `f` (usually the mirrored operation) when this side declined.
    #[inline]
    pub fn or_else<F: FnOnce() -> Outcome<T>>(self, f: F) -> Outcome<T> {
        match self {
            Outcome::Applicable(v) => Outcome::Applicable(v),
            Outcome::NotApplicable => f(),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Applicable(v) => v,
            Outcome::NotApplicable => default,
        }
    }

    /// Surfaces a final `NotApplicable` as [`ViewError::Unsupported`].
    pub fn ok_or_unsupported(self, relation: Relation) -> Result<T, ViewError> {
        match self {
            Outcome::Applicable(v) => Ok(v),
            Outcome::NotApplicable => Err(ViewError::Unsupported { relation }),
        }
    }
}

impl<T, E> Outcome<Result<T, E>> {
    /// `Outcome<Result<T, E>>` -> `Result<Outcome<T>, E>`.
    pub fn transpose(self) -> Result<Outcome<T>, E> {
        match self {
            Outcome::Applicable(Ok(v)) => Ok(Outcome::Applicable(v)),
            Outcome::Applicable(Err(e)) => Err(e),
            Outcome::NotApplicable => Ok(Outcome::NotApplicable),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Applicable(v),
            None => Outcome::NotApplicable,
        }
    }
}

// =============================================================================
// Relation
// =============================================================================

/// The six rich-comparison relations, numbered `0..=5` in operator order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Relation {
    /// `<`
    ProperSubset = 0,
    /// `<=`
    Subset = 1,
    /// `==`
    Equal = 2,
    /// `!=`
    NotEqual = 3,
    /// `>`
    ProperSuperset = 4,
    /// `>=`
    Superset = 5,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::ProperSubset,
        Relation::Subset,
        Relation::Equal,
        Relation::NotEqual,
        Relation::ProperSuperset,
        Relation::Superset,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::ProperSubset => "<",
            Relation::Subset => "<=",
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::ProperSuperset => ">",
            Relation::Superset => ">=",
        }
    }

    /// The relation to try on the right operand when the left one declines.
    pub const fn reflected(self) -> Relation {
        match self {
            Relation::ProperSubset => Relation::ProperSuperset,
            Relation::Subset => Relation::Superset,
            Relation::ProperSuperset => Relation::ProperSubset,
            Relation::Superset => Relation::Subset,
            Relation::Equal => Relation::Equal,
            Relation::NotEqual => Relation::NotEqual,
        }
    }
}

impl TryFrom<u8> for Relation {
    type Error = ViewError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Relation::ALL
            .get(code as usize)
            .copied()
            .ok_or(ViewError::UnknownRelation(code))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Tests
// =============================================================================
