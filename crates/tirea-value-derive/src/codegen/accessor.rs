//! Accessor method generation.
//!
//! One inherent method per slot handle field, named after the field:
//! `Val<T>` fields yield `ValRef<'_, Self, T>`, `Var<T>` fields yield
//! `VarRef<'_, Self, T>`.

use super::AnalyzedField;
use crate::field_kind::FieldKind;
use crate::parse::ImmutableInput;
use proc_macro2::TokenStream;
use quote::quote;

/// Generate the inherent accessor impl block.
pub fn generate(input: &ImmutableInput, fields: &[AnalyzedField<'_>]) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut methods = TokenStream::new();
    for field in fields.iter().filter(|f| !f.input.skip) {
        methods.extend(generate_accessor(vis, field)?);
    }

    if methods.is_empty() {
        return Ok(TokenStream::new());
    }

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #methods
        }
    })
}

/// Generate the accessor for a single field.
fn generate_accessor(vis: &syn::Visibility, field: &AnalyzedField<'_>) -> syn::Result<TokenStream> {
    let field_name = field.input.ident();
    let method_name = field.input.accessor_name()?;

    let method = match &field.kind {
        FieldKind::ReadOnly(inner) => {
            let doc = format!("Read-only slot `{}`.", field_name);
            quote! {
                #[doc = #doc]
                #[inline]
                #vis fn #method_name(&self) -> ::tirea_value::ValRef<'_, Self, #inner> {
                    self.#field_name.bind(self)
                }
            }
        }
        FieldKind::Mutable(inner) => {
            let doc = format!("Mutable slot `{}`; `set` returns a new instance.", field_name);
            quote! {
                #[doc = #doc]
                #[inline]
                #vis fn #method_name(&self) -> ::tirea_value::VarRef<'_, Self, #inner> {
                    self.#field_name.bind(self)
                }
            }
        }
        FieldKind::Table | FieldKind::Other => quote! {},
    };

    Ok(method)
}
