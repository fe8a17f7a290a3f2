//! Procedural macros for multidict-views
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Capability)]` | unit struct | Define a capability marker |
//! | `#[derive(ViewOperand)]` | view struct | Let a view be an operand of set operations |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Capability)]
//! pub struct SetOfPairs;
//!
//! #[derive(ViewOperand)]
//! #[view_operand(set)]
//! pub struct KeysView<'a, M: Mapping + ?Sized> {
//!     mapping: &'a M,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod user;

// =============================================================================
// Derive Macros
// =============================================================================

/// Derive macro for capability markers.
///
/// Expands to `::multidict_views::__impl_capability!`, which fills in
/// `Capability::NAME` and `Capability::ID` from the module path of the
/// definition site.
#[proc_macro_derive(Capability)]
pub fn derive_capability(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_capability(input).into()
}

/// Derive macro that implements `Operand<Self::Item>` for a view.
///
/// Add `#[view_operand(set)]` when the view's elements are unique; the view
/// then also reports itself as `SetCapable`.
#[proc_macro_derive(ViewOperand, attributes(view_operand))]
pub fn derive_view_operand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_view_operand(input).into()
}
