//! `impl Immutable` generation.

use crate::parse::ImmutableInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

/// Generate the `Immutable` trait implementation.
pub fn generate(input: &ImmutableInput, table: &Ident) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let default_instance = match &input.default {
        Some(default) => {
            let expr: syn::Expr = syn::parse_str(default).map_err(|e| {
                syn::Error::new_spanned(struct_name, format!("invalid default expression: {}", e))
            })?;
            quote! { #expr }
        }
        None => quote! { <Self as ::core::default::Default>::default() },
    };

    Ok(quote! {
        impl #impl_generics ::tirea_value::Immutable for #struct_name #ty_generics #where_clause {
            fn slots(&self) -> &::tirea_value::SlotTable {
                &self.#table
            }

            fn slots_mut(&mut self) -> &mut ::tirea_value::SlotTable {
                &mut self.#table
            }

            fn default_instance() -> Self {
                #default_instance
            }
        }
    })
}
