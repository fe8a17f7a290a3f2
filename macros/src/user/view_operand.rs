use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_quote};

/// Options read from `#[view_operand(...)]`.
#[derive(Debug, Default)]
pub struct ViewOperandArgs {
    /// Report the view as set-capable; `set_len` is the view length.
    pub set: bool,
}

impl ViewOperandArgs {
    pub fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut args = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("view_operand")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("set") {
                    args.set = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `set`"))
                }
            })?;
        }
        Ok(args)
    }
}

/// #[derive(ViewOperand)] lets a view be the right operand of view operations.
///
/// Always generates `Operand<Item>` with `iterate` backed by `View::iter`.
/// With `#[view_operand(set)]` it also generates `SetCapable<Item>` and makes
/// `as_set` return the view itself.
pub fn expand_derive_view_operand(input: DeriveInput) -> TokenStream2 {
    let args = match ViewOperandArgs::from_attrs(&input.attrs) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    let (_, ty_generics, _) = input.generics.split_for_impl();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { #ident #ty_generics: ::multidict_views::view::View });
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let view = quote! { ::multidict_views::view::View };
    let item = quote! { <#ident #ty_generics as #view>::Item };

    let set_impl = args.set.then(|| {
        quote! {
            impl #impl_generics ::multidict_views::operand::SetCapable<#item>
                for #ident #ty_generics #where_clause
            {
                fn set_len(&self) -> usize {
                    <Self as #view>::len(self)
                }

                fn set_contains(&self, item: &#item) -> bool {
                    <Self as #view>::contains(self, item)
                }

                fn set_elements(
                    &self,
                ) -> ::std::boxed::Box<dyn ::core::iter::Iterator<Item = #item> + '_> {
                    ::std::boxed::Box::new(<Self as #view>::iter(self))
                }
            }
        }
    });

    let as_set = args.set.then(|| {
        quote! {
            fn as_set(
                &self,
            ) -> ::core::option::Option<&dyn ::multidict_views::operand::SetCapable<#item>> {
                ::core::option::Option::Some(self)
            }
        }
    });

    quote! {
        #set_impl

        impl #impl_generics ::multidict_views::operand::Operand<#item>
            for #ident #ty_generics #where_clause
        {
            #as_set

            fn iterate(
                &self,
            ) -> ::core::option::Option<::multidict_views::operand::Elements<'_, #item>> {
                ::core::option::Option::Some(::std::boxed::Box::new(
                    <Self as #view>::iter(self).map(::core::result::Result::Ok),
                ))
            }

            fn operand_name(&self) -> &'static str {
                <Self as #view>::TYPE_NAME
            }
        }
    }
}
