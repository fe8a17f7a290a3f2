use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// #[derive(Capability)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded at the definition site.
///
/// The two-layer architecture:
/// 1. #[derive(Capability)] (proc-macro) -> generates __impl_capability! call
/// 2. __impl_capability! (decl-macro) -> builds NAME and ID from concat!(module_path!(), ...)
pub fn expand_derive_capability(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "Capability markers cannot be generic",
        )
        .to_compile_error();
    }

    let is_unit = matches!(&input.data, Data::Struct(s) if matches!(s.fields, Fields::Unit));
    if !is_unit {
        return syn::Error::new_spanned(ident, "Capability can only be derived for unit structs")
            .to_compile_error();
    }

    let label = syn::LitStr::new(&ident.to_string(), ident.span());

    quote! {
        ::multidict_views::__impl_capability!(#ident, #label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_struct_expands_to_bridge() {
        let input: DeriveInput = syn::parse_quote! { pub struct SetOfPairs; };
        let out = expand_derive_capability(input).to_string();
        assert!(out.contains("__impl_capability"));
        assert!(out.contains("\"SetOfPairs\""));
    }

    #[test]
    fn test_rejects_fields() {
        let input: DeriveInput = syn::parse_quote! { struct Bad { x: u8 } };
        let out = expand_derive_capability(input).to_string();
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_rejects_generics() {
        let input: DeriveInput = syn::parse_quote! { struct Bad<T>; };
        let out = expand_derive_capability(input).to_string();
        assert!(out.contains("compile_error"));
    }
}
