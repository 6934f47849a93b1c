//! Immutable value objects with typed slots and copy-on-write updates.
//!
//! `tirea-value` lets a struct keep its state in an indexed slot table and
//! exposes that state through typed accessors. Replacing a slot never
//! mutates the instance: it builds a new instance of the same type that
//! differs only in that slot.
//!
//! # Core Concepts
//!
//! - **SlotTable**: Frozen, ordered storage owned by one instance
//! - **SlotBuilder**: Append-only declaration used inside constructors
//! - **Val / Var**: Typed handles to read-only and mutable slots
//! - **ValRef / VarRef**: Handles bound to an instance (read, replace)
//! - **Immutable**: Trait providing the slot table and the default instance
//!
//! # Structural Replace
//!
//! ```text
//! v' = default_instance() with slots(v), except slots'[i] = x
//! ```
//!
//! - `v` is never modified; `v'` shares the untouched slot values with `v`
//! - Slot layouts are checked before copying; a non-deterministic
//!   constructor fails fast instead of corrupting data
//!
//! # Quick Start
//!
//! ```
//! # #[cfg(feature = "derive")]
//! # {
//! use tirea_value::{Immutable, SlotTable, Val, Var};
//!
//! #[derive(Immutable)]
//! #[tirea(default = "Engine::new(0)")]
//! struct Engine {
//!     slots: SlotTable,
//!     cylinders: Val<u32>,
//!     boost: Var<u32>,
//! }
//!
//! impl Engine {
//!     fn new(cylinders: u32) -> Self {
//!         let mut slots = SlotTable::builder::<Self>();
//!         let cylinders = slots.val(cylinders);
//!         let boost = slots.var(0);
//!         Self { slots: slots.finish(), cylinders, boost }
//!     }
//! }
//!
//! let engine = Engine::new(6);
//! let tuned = engine.boost().set(15).unwrap();
//!
//! assert_eq!(*engine.boost().get(), 0);
//! assert_eq!(*tuned.boost().get(), 15);
//! assert_eq!(*tuned.cylinders().get(), 6);
//! # }
//! ```

mod accessor;
mod error;
mod immutable;
mod slot;
mod table;

pub use accessor::{ValRef, VarRef};
pub use error::{SlotError, SlotResult};
pub use immutable::{Immutable, ImmutableExt};
pub use slot::{SlotDescriptor, SlotKind, Val, Var};
pub use table::{SlotBuilder, SlotCell, SlotTable};

// Re-export derive macro when feature is enabled
#[cfg(feature = "derive")]
pub use tirea_value_derive::Immutable;
