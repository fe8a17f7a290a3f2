//! Error type for view operations.
//!
//! "Operation not applicable" is not an error: it is reported through
//! [`Outcome::NotApplicable`](crate::outcome::Outcome). `ViewError` covers the
//! failures that must reach the caller unchanged.

use crate::outcome::Relation;

/// Boxed error raised by a fallible operand while it is being iterated.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by view comparison, algebra and dispatch helpers.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// A method-style call needed to iterate an operand that cannot be iterated.
    #[error("'{operand}' object is not iterable")]
    NotIterable { operand: &'static str },

    /// The operand failed part-way through iteration.
    #[error("operand failed during iteration")]
    Operand(#[source] BoxError),

    /// Numeric relation code outside `0..=5`.
    #[error("unknown relation code {0}")]
    UnknownRelation(u8),

    /// Neither side of a comparison accepted the relation.
    #[error("'{}' not supported between the given operands", relation.symbol())]
    Unsupported { relation: Relation },
}

impl ViewError {
    /// Wrap an arbitrary operand failure.
    pub fn operand<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        ViewError::Operand(err.into())
    }
}
