//! Slot descriptors and typed slot handles.
//!
//! A handle (`Val<T>` or `Var<T>`) is what a value type stores in its struct
//! fields. It only remembers the slot index and the slot's value type; the
//! value itself lives in the instance's [`SlotTable`](crate::SlotTable).
//! Binding a handle to its owner yields an accessor.

use crate::accessor::{ValRef, VarRef};
use crate::Immutable;
use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;

/// Whether a slot can be structurally replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Declared with [`SlotBuilder::val`](crate::SlotBuilder::val).
    ReadOnly,
    /// Declared with [`SlotBuilder::var`](crate::SlotBuilder::var).
    Mutable,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::ReadOnly => f.write_str("val"),
            SlotKind::Mutable => f.write_str("var"),
        }
    }
}

/// Static description of one slot: position, kind and value type.
///
/// Two instances of the same value type must produce identical descriptor
/// sequences; structural replace checks this before copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotDescriptor {
    /// Position in declaration order.
    pub index: usize,
    /// Read-only or mutable.
    pub kind: SlotKind,
    /// `TypeId` of the stored value.
    pub type_id: TypeId,
    /// Human-readable name of the stored value type.
    pub type_name: &'static str,
}

impl SlotDescriptor {
    pub(crate) fn of<T: 'static>(index: usize, kind: SlotKind) -> Self {
        Self {
            index,
            kind,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Whether this slot stores values of type `T`.
    #[inline]
    pub fn holds<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl fmt::Display for SlotDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.index, self.kind, self.type_name)
    }
}

/// Handle to a read-only slot holding a `T`.
pub struct Val<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Val<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Slot index in declaration order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bind this handle to the instance that declared it.
    #[inline]
    pub fn bind<O: Immutable>(self, owner: &O) -> ValRef<'_, O, T> {
        ValRef::new(owner, self.index)
    }
}

/// Handle to a mutable slot holding a `T`.
pub struct Var<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Var<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Slot index in declaration order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Narrow to a read-only handle for the same slot.
    #[inline]
    pub fn read_only(self) -> Val<T> {
        Val::new(self.index)
    }

    /// Bind this handle to the instance that declared it.
    #[inline]
    pub fn bind<O: Immutable>(self, owner: &O) -> VarRef<'_, O, T> {
        VarRef::new(owner, self.index)
    }
}

// Manual impls: derives would demand `T: Clone` and friends.
macro_rules! handle_impls {
    ($handle:ident, $label:literal) => {
        impl<T> Clone for $handle<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $handle<T> {}

        impl<T> PartialEq for $handle<T> {
            fn eq(&self, other: &Self) -> bool {
                self.index == other.index
            }
        }

        impl<T> Eq for $handle<T> {}

        impl<T> fmt::Debug for $handle<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!($label, "<{}>#{}"),
                    std::any::type_name::<T>(),
                    self.index
                )
            }
        }
    };
}

handle_impls!(Val, "Val");
handle_impls!(Var, "Var");
