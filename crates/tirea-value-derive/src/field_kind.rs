//! Field type analysis for code generation.

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// The kind of a field, determining what the macro generates for it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// The instance's `SlotTable`.
    Table,

    /// A `Val<T>` handle; carries `T`.
    ReadOnly(Type),

    /// A `Var<T>` handle; carries `T`.
    Mutable(Type),

    /// Anything else. Rebuilt by the default instance, never copied.
    Other,
}

impl FieldKind {
    /// Analyze a field type.
    ///
    /// Only the last path segment is inspected, so `tirea_value::Var<T>` and
    /// an imported `Var<T>` are treated alike. `is_slots_attr` forces
    /// `Table` for renamed or aliased table types.
    pub fn from_type(ty: &Type, is_slots_attr: bool) -> Self {
        if is_slots_attr {
            return FieldKind::Table;
        }
        match ty {
            Type::Path(type_path) => Self::from_type_path(type_path),
            _ => FieldKind::Other,
        }
    }

    fn from_type_path(type_path: &TypePath) -> Self {
        let Some(segment) = type_path.path.segments.last() else {
            return FieldKind::Other;
        };

        match segment.ident.to_string().as_str() {
            "SlotTable" => FieldKind::Table,
            "Val" => extract_single_generic_arg(&segment.arguments)
                .map(|inner| FieldKind::ReadOnly(inner.clone()))
                .unwrap_or(FieldKind::Other),
            "Var" => extract_single_generic_arg(&segment.arguments)
                .map(|inner| FieldKind::Mutable(inner.clone()))
                .unwrap_or(FieldKind::Other),
            _ => FieldKind::Other,
        }
    }

    /// Check if this is the slot table.
    pub fn is_table(&self) -> bool {
        matches!(self, FieldKind::Table)
    }

    /// Check if this is a slot handle.
    pub fn is_slot(&self) -> bool {
        matches!(self, FieldKind::ReadOnly(_) | FieldKind::Mutable(_))
    }
}

/// Extract a single generic type argument from path arguments.
fn extract_single_generic_arg(args: &PathArguments) -> Option<&Type> {
    match args {
        PathArguments::AngleBracketed(ab) => {
            if ab.args.len() == 1 {
                if let GenericArgument::Type(ty) = ab.args.first()? {
                    return Some(ty);
                }
            }
            None
        }
        _ => None,
    }
}
