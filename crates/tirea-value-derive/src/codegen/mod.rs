//! Code generation for Immutable derive macro.

mod accessor;
mod immutable_impl;

use crate::field_kind::FieldKind;
use crate::parse::{FieldInput, ImmutableInput};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use syn::DeriveInput;

/// A field together with its analyzed kind.
pub struct AnalyzedField<'a> {
    pub input: &'a FieldInput,
    pub kind: FieldKind,
}

/// Main entry point for code generation.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = ImmutableInput::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;

    let fields: Vec<AnalyzedField<'_>> = parsed
        .fields()
        .into_iter()
        .map(|field| AnalyzedField {
            kind: FieldKind::from_type(&field.ty, field.slots),
            input: field,
        })
        .collect();

    // Validate field attributes
    for field in &fields {
        if !field.kind.is_slot() && (field.input.skip || field.input.rename.is_some()) {
            return Err(syn::Error::new_spanned(
                field.input.ident(),
                "#[tirea(skip)] and #[tirea(rename)] only apply to `Val<T>` and `Var<T>` fields.",
            ));
        }
    }

    let mut tables = fields.iter().filter(|f| f.kind.is_table());
    let table = match (tables.next(), tables.next()) {
        (Some(table), None) => table.input.ident(),
        (None, _) => {
            return Err(syn::Error::new_spanned(
                &parsed.ident,
                "#[derive(Immutable)] requires a `SlotTable` field \
                 (or a field marked #[tirea(slots)]).",
            ));
        }
        (Some(_), Some(second)) => {
            return Err(syn::Error::new_spanned(
                second.input.ident(),
                "#[derive(Immutable)] supports exactly one slot table field.",
            ));
        }
    };

    let impl_tokens = immutable_impl::generate(&parsed, table)?;
    let accessor_tokens = accessor::generate(&parsed, &fields)?;

    Ok(quote::quote! {
        #impl_tokens
        #accessor_tokens
    })
}
