//! Slot tables and the builder used while a value type is constructed.
//!
//! A `SlotBuilder` is append-only and lives only inside a constructor.
//! `SlotBuilder::finish` freezes it into a `SlotTable`, which has no
//! in-place mutation API. Structural replace builds a fresh table instead.

use crate::slot::{SlotDescriptor, SlotKind, Val, Var};
use crate::{SlotError, SlotResult};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased, shared storage for one slot value.
pub type SlotCell = Arc<dyn Any + Send + Sync>;

#[derive(Clone)]
struct SlotEntry {
    descriptor: SlotDescriptor,
    value: SlotCell,
}

/// Frozen, ordered slot storage owned by one value instance.
///
/// Cloning is cheap and shares the underlying entries; that is sound because
/// a published table is never written again.
#[derive(Clone)]
pub struct SlotTable {
    owner: &'static str,
    entries: Arc<[SlotEntry]>,
}

impl SlotTable {
    /// Start declaring slots for value type `O`.
    pub fn builder<O: 'static>() -> SlotBuilder {
        SlotBuilder::new(std::any::type_name::<O>())
    }

    /// Name of the value type that declared this table.
    #[inline]
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Number of declared slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot was declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptor of the slot at `index`.
    pub fn descriptor(&self, index: usize) -> Option<&SlotDescriptor> {
        self.entries.get(index).map(|entry| &entry.descriptor)
    }

    /// Descriptors of every slot in declaration order.
    pub fn descriptors(&self) -> impl ExactSizeIterator<Item = &SlotDescriptor> + '_ {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    /// Whether both tables are the very same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &SlotTable) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Borrow the value stored at `index` as a `T`.
    pub fn get<T: 'static>(&self, index: usize) -> SlotResult<&T> {
        let entry = self.typed_entry::<T>(index)?;
        (*entry.value).downcast_ref::<T>().ok_or_else(|| {
            SlotError::type_mismatch(
                self.owner,
                index,
                std::any::type_name::<T>(),
                entry.descriptor.type_name,
            )
        })
    }

    /// Get a shared handle to the value stored at `index`.
    pub fn get_shared<T: Send + Sync + 'static>(&self, index: usize) -> SlotResult<Arc<T>> {
        let entry = self.typed_entry::<T>(index)?;
        Arc::clone(&entry.value).downcast::<T>().map_err(|_| {
            SlotError::type_mismatch(
                self.owner,
                index,
                std::any::type_name::<T>(),
                entry.descriptor.type_name,
            )
        })
    }

    /// Verify that `source` has exactly this table's slot layout.
    ///
    /// `self` is the layout a freshly constructed instance declares. Any
    /// difference means the value type's constructor is not deterministic.
    pub fn check_shape(&self, source: &SlotTable) -> SlotResult<()> {
        if self.len() != source.len() {
            return Err(SlotError::shape_mismatch(
                self.owner,
                self.len(),
                source.len(),
            ));
        }

        for (expected, found) in self.descriptors().zip(source.descriptors()) {
            if expected.kind != found.kind {
                return Err(SlotError::kind_mismatch(
                    self.owner,
                    expected.index,
                    expected.kind,
                    found.kind,
                ));
            }
            if expected.type_id != found.type_id {
                return Err(SlotError::type_mismatch(
                    self.owner,
                    expected.index,
                    expected.type_name,
                    found.type_name,
                ));
            }
        }

        Ok(())
    }

    /// Build a new table holding every entry of `self` except `index`,
    /// which receives `value`.
    pub(crate) fn with_replaced<T: Send + Sync + 'static>(
        &self,
        index: usize,
        value: Arc<T>,
    ) -> SlotResult<SlotTable> {
        self.typed_entry::<T>(index)?;

        let value: SlotCell = value;
        let entries: Vec<SlotEntry> = self
            .entries
            .iter()
            .map(|entry| {
                if entry.descriptor.index == index {
                    SlotEntry {
                        descriptor: entry.descriptor,
                        value: Arc::clone(&value),
                    }
                } else {
                    entry.clone()
                }
            })
            .collect();

        Ok(SlotTable {
            owner: self.owner,
            entries: entries.into(),
        })
    }

    fn typed_entry<T: 'static>(&self, index: usize) -> SlotResult<&SlotEntry> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| SlotError::index_out_of_bounds(self.owner, index, self.len()))?;
        if !entry.descriptor.holds::<T>() {
            return Err(SlotError::type_mismatch(
                self.owner,
                index,
                std::any::type_name::<T>(),
                entry.descriptor.type_name,
            ));
        }
        Ok(entry)
    }
}

impl fmt::Debug for SlotTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Slots<'a>(&'a [SlotEntry]);

        impl fmt::Debug for Slots<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries(self.0.iter().map(|entry| entry.descriptor.to_string()))
                    .finish()
            }
        }

        f.debug_struct("SlotTable")
            .field("owner", &self.owner)
            .field("slots", &Slots(&self.entries))
            .finish()
    }
}

/// Append-only slot declaration, used inside a value type's constructor.
///
/// Slots get sequential indices starting at 0, in call order. Constructors
/// must declare the same slots in the same order on every run.
///
/// ```
/// use tirea_value::{SlotTable, Val, Var};
///
/// struct Point;
///
/// let mut slots = SlotTable::builder::<Point>();
/// let x: Val<i32> = slots.val(1);
/// let y: Var<i32> = slots.var(2);
/// let table = slots.finish();
///
/// assert_eq!((x.index(), y.index()), (0, 1));
/// assert_eq!(*table.get::<i32>(1).unwrap(), 2);
/// ```
pub struct SlotBuilder {
    owner: &'static str,
    entries: Vec<SlotEntry>,
}

impl SlotBuilder {
    fn new(owner: &'static str) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// Declare a read-only slot with its initial value.
    pub fn val<T: Send + Sync + 'static>(&mut self, value: T) -> Val<T> {
        Val::new(self.push(SlotKind::ReadOnly, Arc::new(value)))
    }

    /// Declare a mutable slot with its initial value.
    pub fn var<T: Send + Sync + 'static>(&mut self, value: T) -> Var<T> {
        Var::new(self.push(SlotKind::Mutable, Arc::new(value)))
    }

    /// Number of slots declared so far (the next index to assign).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was declared yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the declared slots.
    pub fn finish(self) -> SlotTable {
        SlotTable {
            owner: self.owner,
            entries: self.entries.into(),
        }
    }

    fn push<T: Send + Sync + 'static>(&mut self, kind: SlotKind, value: Arc<T>) -> usize {
        let index = self.entries.len();
        self.entries.push(SlotEntry {
            descriptor: SlotDescriptor::of::<T>(index, kind),
            value,
        });
        index
    }
}

impl fmt::Debug for SlotBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBuilder")
            .field("owner", &self.owner)
            .field("len", &self.entries.len())
            .finish()
    }
}
