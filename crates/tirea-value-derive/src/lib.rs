//! Derive macro for tirea-value `Immutable` trait.
//!
//! This crate provides the `#[derive(Immutable)]` macro that generates:
//! - `impl Immutable for {Name}`: slot table access and the default instance
//! - One accessor method per `Val<T>` / `Var<T>` field
//!
//! # Usage
//!
//! ```ignore
//! use tirea_value::{Immutable, SlotTable, Val, Var};
//!
//! #[derive(Immutable)]
//! #[tirea(default = "Engine::new(0)")]
//! struct Engine {
//!     slots: SlotTable,
//!     cylinders: Val<u32>,
//!     tuning_kit: Var<Option<TuningKit>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod field_kind;
mod parse;

/// Derive the `Immutable` trait for a struct.
///
/// This macro generates:
/// - `impl Immutable for {StructName}`
/// - An inherent accessor per slot handle field, returning `ValRef` for
///   `Val<T>` fields and `VarRef` for `Var<T>` fields
///
/// The struct must have exactly one `SlotTable` field. Fields that are
/// neither the table nor a handle are left alone; structural replace takes
/// them from the default instance.
///
/// # Attributes
///
/// ## Struct Attributes
///
/// - `#[tirea(default = "expr")]`: Expression building the default instance.
///   Without it, the struct must implement `Default`.
///
/// ## Field Attributes
///
/// - `#[tirea(slots)]`: Mark the slot table field when its type is aliased
/// - `#[tirea(rename = "name")]`: Use a different accessor method name
/// - `#[tirea(skip)]`: Do not generate an accessor for this slot
///
/// # Examples
///
/// ```ignore
/// use tirea_value::{Immutable, SlotTable, Val, Var};
///
/// #[derive(Immutable)]
/// #[tirea(default = "Car::new(-1)")]
/// pub struct Car {
///     slots: SlotTable,
///     model_number: Val<i64>,
///     #[tirea(rename = "paint")]
///     color: Var<Color>,
/// }
///
/// let car = Car::new(1);
///
/// // Read
/// let model = *car.model_number().get();
///
/// // Replace (returns a new car)
/// let yellow = car.paint().set(Color::Yellow)?;
/// ```
#[proc_macro_derive(Immutable, attributes(tirea))]
pub fn derive_immutable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
