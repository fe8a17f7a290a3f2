//! Compile-time capability probe for concrete types.
//!
//! Uses the "Inherent Const Fallback" pattern:
//! 1. A fallback trait provides `const IMPLEMENTS: bool = false` for every
//!    `Detect<T, C>`.
//! 2. An inherent impl provides `const IMPLEMENTS: bool = true` when
//!    `T: Implements<C>`.
//!
//! Resolving `Detect::<Concrete, Cap>::IMPLEMENTS` picks the inherent const
//! when its bound holds and the trait const otherwise.
//!
//! ## Limitation
//!
//! Only works for concrete types known at the call site. Inside
//! `fn foo<T>()` the bound is unknown and the fallback always wins; bound on
//! `T: Implements<C>` there instead.

use core::marker::PhantomData;

use super::{Capability, Implements};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized, C>(PhantomData<(fn() -> *const T, C)>);

#[doc(hidden)]
pub trait ImplementsFallback {
    const IMPLEMENTS: bool = false;
}

impl<T: ?Sized, C> ImplementsFallback for Detect<T, C> {}

impl<T, C> Detect<T, C>
where
    T: ?Sized + Implements<C>,
    C: Capability,
{
    pub const IMPLEMENTS: bool = true;
}

/// Whether a concrete type declares a capability, as a `const bool`.
///
/// ```
/// use multidict_views::has_capability;
/// use multidict_views::capability::{GenuineSet, SetOfPairs};
/// use multidict_views::{ItemsView, KeysView, PairList};
///
/// type Items = ItemsView<'static, PairList<&'static str, i32>>;
/// type Keys = KeysView<'static, PairList<&'static str, i32>>;
///
/// assert!(has_capability!(Items: SetOfPairs));
/// assert!(has_capability!(Keys: GenuineSet));
/// assert!(!has_capability!(Keys: SetOfPairs));
/// ```
#[macro_export]
macro_rules! has_capability {
    ($T:ty : $Cap:ty) => {{
        #[allow(unused_imports)]
        use $crate::capability::detect::ImplementsFallback as _;
        $crate::capability::detect::Detect::<$T, $Cap>::IMPLEMENTS
    }};
}
