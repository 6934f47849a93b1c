//! Accessors bound to a value instance.
//!
//! `ValRef` reads a slot. `VarRef` reads a slot and produces new instances
//! with that slot replaced. Both borrow the owner, so they can never outlive
//! the instance they read from.

use crate::immutable::structural_replace;
use crate::{Immutable, SlotError, SlotResult};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Read accessor for one slot of `owner`.
pub struct ValRef<'a, O, T> {
    owner: &'a O,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, O: Immutable, T> ValRef<'a, O, T> {
    #[doc(hidden)]
    pub fn new(owner: &'a O, index: usize) -> Self {
        Self {
            owner,
            index,
            _marker: PhantomData,
        }
    }

    /// Slot index in declaration order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The bound instance.
    #[inline]
    pub fn owner(&self) -> &'a O {
        self.owner
    }
}

impl<'a, O: Immutable, T: Send + Sync + 'static> ValRef<'a, O, T> {
    /// Read the slot value.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to the owner's table, which can
    /// only happen when a handle is bound to an instance it was not
    /// declared for.
    pub fn get(&self) -> &'a T {
        read(self.owner, self.index)
    }

    /// Read the slot value, reporting contract violations as errors.
    pub fn try_get(&self) -> SlotResult<&'a T> {
        self.owner.slots().get(self.index)
    }

    /// Shared handle to the stored value.
    pub fn shared(&self) -> SlotResult<Arc<T>> {
        self.owner.slots().get_shared(self.index)
    }
}

/// Read and structural-replace accessor for one mutable slot of `owner`.
pub struct VarRef<'a, O, T> {
    owner: &'a O,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, O: Immutable, T> VarRef<'a, O, T> {
    #[doc(hidden)]
    pub fn new(owner: &'a O, index: usize) -> Self {
        Self {
            owner,
            index,
            _marker: PhantomData,
        }
    }

    /// Slot index in declaration order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The bound instance.
    #[inline]
    pub fn owner(&self) -> &'a O {
        self.owner
    }

    /// Drop the write capability.
    #[inline]
    pub fn read_only(self) -> ValRef<'a, O, T> {
        ValRef::new(self.owner, self.index)
    }
}

impl<'a, O: Immutable, T: Send + Sync + 'static> VarRef<'a, O, T> {
    /// Read the slot value.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ValRef::get`].
    pub fn get(&self) -> &'a T {
        read(self.owner, self.index)
    }

    /// Read the slot value, reporting contract violations as errors.
    pub fn try_get(&self) -> SlotResult<&'a T> {
        self.owner.slots().get(self.index)
    }

    /// Shared handle to the stored value.
    pub fn shared(&self) -> SlotResult<Arc<T>> {
        self.owner.slots().get_shared(self.index)
    }

    /// New instance with this slot set to `value`.
    ///
    /// The bound instance is left untouched.
    pub fn set(self, value: T) -> SlotResult<O> {
        self.set_shared(Arc::new(value))
    }

    /// New instance with this slot pointing at an already shared value.
    pub fn set_shared(self, value: Arc<T>) -> SlotResult<O> {
        structural_replace(self.owner, self.index, value)
    }

    /// New instance with this slot set to `f(current)`.
    ///
    /// `f` runs exactly once. Returning the `Arc` it was handed means no
    /// change was made, which is rejected with
    /// [`SlotError::UnchangedReplacement`]. A distinct allocation succeeds
    /// even when it compares equal to the current value.
    pub fn replace_with<F>(self, f: F) -> SlotResult<O>
    where
        F: FnOnce(Arc<T>) -> Arc<T>,
    {
        let current = self.shared()?;
        let next = f(Arc::clone(&current));
        if Arc::ptr_eq(&current, &next) {
            return Err(SlotError::unchanged_replacement(
                self.owner.slots().owner(),
                self.index,
            ));
        }
        self.set_shared(next)
    }

    /// New instance with this slot set to a value computed from the current
    /// one.
    pub fn update<F>(self, f: F) -> SlotResult<O>
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(self.try_get()?);
        self.set(next)
    }

    /// Like [`update`](Self::update) with a fallible transform, typically a
    /// nested structural update of the slot's own value.
    pub fn try_update<F>(self, f: F) -> SlotResult<O>
    where
        F: FnOnce(&T) -> SlotResult<T>,
    {
        let next = f(self.try_get()?)?;
        self.set(next)
    }
}

fn read<'a, O: Immutable, T: 'static>(owner: &'a O, index: usize) -> &'a T {
    match owner.slots().get(index) {
        Ok(value) => value,
        Err(err) => panic!("{err} (programming error)"),
    }
}

macro_rules! accessor_impls {
    ($accessor:ident) => {
        impl<O, T> Clone for $accessor<'_, O, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<O, T> Copy for $accessor<'_, O, T> {}

        impl<O, T> fmt::Debug for $accessor<'_, O, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($accessor))
                    .field("owner", &std::any::type_name::<O>())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

accessor_impls!(ValRef);
accessor_impls!(VarRef);
