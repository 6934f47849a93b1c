//! The `Immutable` trait and the generic clone-and-replace procedure.

use crate::slot::SlotDescriptor;
use crate::{SlotResult, SlotTable};
use std::sync::Arc;

/// Trait for value types whose state lives in a [`SlotTable`].
///
/// Instances never change after construction. "Setting" a mutable slot
/// produces a new instance of the same type; see [`VarRef::set`].
///
/// This trait is typically derived using `#[derive(Immutable)]`, which
/// also generates one accessor method per slot field.
///
/// # Contract
///
/// - `default_instance()` returns a fresh instance of the implementing type.
///   It is the virtual constructor used by structural replace.
/// - Every constructor declares the same slots, in the same order, with the
///   same value types. Replace checks this and fails with a shape error
///   otherwise.
///
/// # Example
///
/// ```
/// use tirea_value::{Immutable, SlotTable, Val, Var, ValRef, VarRef};
///
/// struct Engine {
///     slots: SlotTable,
///     cylinders: Val<u32>,
///     label: Var<String>,
/// }
///
/// impl Engine {
///     fn new(cylinders: u32) -> Self {
///         let mut slots = SlotTable::builder::<Self>();
///         let cylinders = slots.val(cylinders);
///         let label = slots.var(String::from("stock"));
///         Self { slots: slots.finish(), cylinders, label }
///     }
///
///     fn cylinders(&self) -> ValRef<'_, Self, u32> {
///         self.cylinders.bind(self)
///     }
///
///     fn label(&self) -> VarRef<'_, Self, String> {
///         self.label.bind(self)
///     }
/// }
///
/// impl Immutable for Engine {
///     fn slots(&self) -> &SlotTable {
///         &self.slots
///     }
///
///     fn slots_mut(&mut self) -> &mut SlotTable {
///         &mut self.slots
///     }
///
///     fn default_instance() -> Self {
///         Engine::new(0)
///     }
/// }
///
/// let engine = Engine::new(6);
/// let tuned = engine.label().set("tuned".to_string()).unwrap();
///
/// assert_eq!(engine.label().get(), "stock");
/// assert_eq!(tuned.label().get(), "tuned");
/// assert_eq!(*tuned.cylinders().get(), 6);
/// ```
///
/// [`VarRef::set`]: crate::VarRef::set
pub trait Immutable: Sized + 'static {
    /// The instance's frozen slot table.
    fn slots(&self) -> &SlotTable;

    /// Install a new slot table into a freshly constructed default instance.
    ///
    /// Only structural replace calls this.
    #[doc(hidden)]
    fn slots_mut(&mut self) -> &mut SlotTable;

    /// Construct a fresh instance with placeholder slot values.
    fn default_instance() -> Self;
}

/// Extension trait providing introspection for `Immutable` types.
pub trait ImmutableExt: Immutable {
    /// Number of slots this instance declares.
    fn slot_count(&self) -> usize {
        self.slots().len()
    }

    /// Slot layout in declaration order.
    fn shape(&self) -> Vec<SlotDescriptor> {
        self.slots().descriptors().copied().collect()
    }

    /// Whether `other` holds the very same slot table allocation.
    ///
    /// Structural replace always allocates a new table, so this is `false`
    /// for any instance produced from `self` by a replace.
    fn shares_slots_with(&self, other: &Self) -> bool {
        self.slots().ptr_eq(other.slots())
    }
}

impl<T: Immutable> ImmutableExt for T {}

/// Produce a new `O` equal to `source` except at slot `index`.
///
/// The default instance's own slot values are discarded; only its layout is
/// used to validate `source` before copying.
pub(crate) fn structural_replace<O, T>(source: &O, index: usize, value: Arc<T>) -> SlotResult<O>
where
    O: Immutable,
    T: Send + Sync + 'static,
{
    let mut fresh = O::default_instance();

    if let Err(err) = fresh.slots().check_shape(source.slots()) {
        tracing::debug!(
            owner = source.slots().owner(),
            error = %err,
            "structural replace rejected: slot shape mismatch"
        );
        return Err(err);
    }

    let table = source.slots().with_replaced(index, value)?;

    tracing::trace!(
        owner = table.owner(),
        index,
        slots = table.len(),
        "structural replace"
    );

    *fresh.slots_mut() = table;
    Ok(fresh)
}
