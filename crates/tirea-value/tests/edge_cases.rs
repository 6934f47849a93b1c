//! Edge case tests for tirea-value.

#![cfg(feature = "derive")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tirea_value::{Immutable, SlotError, SlotKind, SlotTable, Val, Var};

// ============================================================================
// Absent values
// ============================================================================

#[derive(Debug, Immutable)]
#[tirea(default = "Note::new(None)")]
struct Note {
    slots: SlotTable,
    title: Var<Option<String>>,
    marker: Val<()>,
}

impl Note {
    fn new(title: Option<&str>) -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let title = slots.var(title.map(str::to_string));
        let marker = slots.val(());
        Self {
            slots: slots.finish(),
            title,
            marker,
        }
    }
}

#[test]
fn test_absent_initial_value_reads_back() {
    let note = Note::new(None);
    assert_eq!(*note.title().get(), None);
    assert_eq!(*note.marker().get(), ());
}

#[test]
fn test_replace_absent_with_present_and_back() {
    let empty = Note::new(None);
    let titled = empty.title().set(Some("hello".to_string())).unwrap();
    let cleared = titled.title().set(None).unwrap();

    assert_eq!(titled.title().get().as_deref(), Some("hello"));
    assert_eq!(*cleared.title().get(), None);
    assert_eq!(*empty.title().get(), None);
}

// ============================================================================
// Non-deterministic construction
// ============================================================================

static RUNS: AtomicUsize = AtomicUsize::new(0);

/// Declares an extra slot on every other construction.
#[derive(Debug, Immutable)]
#[tirea(default = "Drifting::new()")]
struct Drifting {
    slots: SlotTable,
    value: Var<u8>,
}

impl Drifting {
    fn new() -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let value = slots.var(1);
        if RUNS.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
            slots.val(0_u8);
        }
        Self {
            slots: slots.finish(),
            value,
        }
    }
}

#[test]
fn test_slot_count_drift_fails_fast() {
    RUNS.store(0, Ordering::SeqCst);
    let source = Drifting::new();

    let err = source.value().set(2).unwrap_err();
    assert!(err.is_shape_error());
    assert!(matches!(
        err,
        SlotError::ShapeMismatch {
            expected: 2,
            found: 1,
            ..
        }
    ));
    assert_eq!(*source.value().get(), 1);
}

static SWAPS: AtomicUsize = AtomicUsize::new(0);

/// Swaps declaration order between runs.
#[derive(Debug, Immutable)]
#[tirea(default = "Swapping::new()")]
struct Swapping {
    slots: SlotTable,
    first: Var<u32>,
}

impl Swapping {
    fn new() -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let swapped = SWAPS.fetch_add(1, Ordering::SeqCst) % 2 == 1;
        let first = if swapped {
            slots.var(String::new());
            slots.var(0_u32)
        } else {
            let first = slots.var(0_u32);
            slots.var(String::new());
            first
        };
        Self {
            slots: slots.finish(),
            first,
        }
    }
}

#[test]
fn test_slot_order_drift_fails_fast() {
    SWAPS.store(0, Ordering::SeqCst);
    let source = Swapping::new();

    let err = source.first().set(5).unwrap_err();
    assert!(matches!(err, SlotError::TypeMismatch { index: 0, .. }));
}

static KINDS: AtomicUsize = AtomicUsize::new(0);

/// Declares its only slot as `val` on every other construction.
#[derive(Debug, Immutable)]
#[tirea(default = "Rekinding::new()")]
struct Rekinding {
    slots: SlotTable,
    value: Var<u32>,
}

impl Rekinding {
    fn new() -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let value = if KINDS.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
            let mut scratch = SlotTable::builder::<Self>();
            slots.val(0_u32);
            scratch.var(0_u32)
        } else {
            slots.var(0_u32)
        };
        Self {
            slots: slots.finish(),
            value,
        }
    }
}

#[test]
fn test_slot_kind_drift_fails_fast() {
    KINDS.store(0, Ordering::SeqCst);
    let source = Rekinding::new();

    let err = source.value().set(1).unwrap_err();
    assert_eq!(
        err,
        SlotError::kind_mismatch(
            std::any::type_name::<Rekinding>(),
            0,
            SlotKind::ReadOnly,
            SlotKind::Mutable
        )
    );
}

// ============================================================================
// Errors propagate through nested updates
// ============================================================================

#[derive(Debug, Immutable)]
#[tirea(default = "Shelf::new()")]
struct Shelf {
    slots: SlotTable,
    note: Var<Note>,
}

impl Shelf {
    fn new() -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let note = slots.var(Note::new(Some("first")));
        Self {
            slots: slots.finish(),
            note,
        }
    }
}

#[test]
fn test_nested_identity_error_propagates() {
    let shelf = Shelf::new();
    let err = shelf
        .note()
        .try_update(|note| note.title().replace_with(|title| title))
        .unwrap_err();

    assert_eq!(
        err,
        SlotError::unchanged_replacement(std::any::type_name::<Note>(), 0)
    );
}

#[test]
fn test_nested_update_success() {
    let shelf = Shelf::new();
    let next = shelf
        .note()
        .try_update(|note| {
            note.title()
                .replace_with(|_| Arc::new(Some("second".to_string())))
        })
        .unwrap();

    assert_eq!(next.note().get().title().get().as_deref(), Some("second"));
    assert_eq!(shelf.note().get().title().get().as_deref(), Some("first"));
}

// ============================================================================
// Foreign handles
// ============================================================================

#[test]
fn test_handle_bound_to_wrong_instance() {
    let note = Note::new(None);
    let shelf = Shelf::new();

    // `Note::title` is slot 0 holding Option<String>; Shelf slot 0 holds a Note.
    let misused = Note::default_instance().title;
    let err = misused.bind(&shelf).try_get().unwrap_err();
    assert!(matches!(err, SlotError::TypeMismatch { index: 0, .. }));

    let err = misused.bind(&shelf).set(None).unwrap_err();
    assert!(matches!(err, SlotError::TypeMismatch { index: 0, .. }));

    assert_eq!(*misused.bind(&note).get(), None);
}
