//! Parsing logic for the Immutable derive macro.

use darling::{ast, FromDeriveInput, FromField};
use syn::{Generics, Ident, Type, Visibility};

/// Parsed struct-level options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(tirea), supports(struct_named))]
pub struct ImmutableInput {
    /// The struct identifier.
    pub ident: Ident,

    /// The struct visibility.
    pub vis: Visibility,

    /// Generic parameters.
    pub generics: Generics,

    /// Struct data (fields).
    pub data: ast::Data<(), FieldInput>,

    /// Expression building the default instance (e.g., `#[tirea(default = "Car::new(-1)")]`).
    /// Falls back to `Default::default()`.
    #[darling(default)]
    pub default: Option<String>,
}

impl ImmutableInput {
    /// Get the fields as a vector.
    pub fn fields(&self) -> Vec<&FieldInput> {
        self.data
            .as_ref()
            .take_struct()
            .map(|s| s.fields.to_vec())
            .unwrap_or_default()
    }
}

/// Parsed field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(tirea))]
pub struct FieldInput {
    /// Field identifier.
    pub ident: Option<Ident>,

    /// Field type.
    pub ty: Type,

    /// Accessor method name, if different from the field name.
    #[darling(default)]
    pub rename: Option<String>,

    /// Do not generate an accessor for this slot.
    #[darling(default)]
    pub skip: bool,

    /// Mark this field as the slot table regardless of its type name.
    #[darling(default)]
    pub slots: bool,
}

impl FieldInput {
    /// Get the field identifier (panics if None).
    pub fn ident(&self) -> &Ident {
        self.ident.as_ref().expect("named field required")
    }

    /// Name of the generated accessor method.
    pub fn accessor_name(&self) -> syn::Result<Ident> {
        match &self.rename {
            Some(name) => syn::parse_str(name).map_err(|e| {
                syn::Error::new_spanned(self.ident(), format!("invalid accessor name: {}", e))
            }),
            None => Ok(self.ident().clone()),
        }
    }
}
