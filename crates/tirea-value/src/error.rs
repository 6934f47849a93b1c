//! Error types for tirea-value operations.

use crate::SlotKind;
use thiserror::Error;

/// Result type alias for tirea-value operations.
pub type SlotResult<T> = Result<T, SlotError>;

/// Errors that can occur while reading or structurally replacing slots.
///
/// Every variant is a contract violation by the value type or its caller.
/// None of them are transient, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// A function-based replace returned the very value it was given.
    #[error("replacement for slot {index} of {owner} returned the same instance")]
    UnchangedReplacement {
        /// Concrete value type that owns the slot.
        owner: &'static str,
        /// Index of the slot being replaced.
        index: usize,
    },

    /// The default instance and the source instance declare a different
    /// number of slots.
    #[error("slot shape mismatch for {owner}: default instance has {expected} slots, source has {found}")]
    ShapeMismatch {
        /// Concrete value type.
        owner: &'static str,
        /// Slot count of the freshly constructed default instance.
        expected: usize,
        /// Slot count of the source instance.
        found: usize,
    },

    /// A slot was declared read-only in one instance and mutable in another.
    #[error("slot kind mismatch at {owner}#{index}: expected {expected}, found {found}")]
    KindMismatch {
        /// Concrete value type.
        owner: &'static str,
        /// Offending slot index.
        index: usize,
        /// Kind declared by the default instance.
        expected: SlotKind,
        /// Kind found in the source instance.
        found: SlotKind,
    },

    /// A slot holds a value of a different type than expected.
    #[error("slot type mismatch at {owner}#{index}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Concrete value type.
        owner: &'static str,
        /// Offending slot index.
        index: usize,
        /// Type the caller or the default instance expects.
        expected: &'static str,
        /// Type actually declared at that index.
        found: &'static str,
    },

    /// A slot handle points past the end of the table it is used with.
    #[error("slot index {index} out of bounds for {owner} (len: {len})")]
    IndexOutOfBounds {
        /// Concrete value type.
        owner: &'static str,
        /// The index that was accessed.
        index: usize,
        /// The number of slots in the table.
        len: usize,
    },
}

impl SlotError {
    /// Create an unchanged replacement error.
    #[inline]
    pub fn unchanged_replacement(owner: &'static str, index: usize) -> Self {
        SlotError::UnchangedReplacement { owner, index }
    }

    /// Create a shape mismatch error.
    #[inline]
    pub fn shape_mismatch(owner: &'static str, expected: usize, found: usize) -> Self {
        SlotError::ShapeMismatch {
            owner,
            expected,
            found,
        }
    }

    /// Create a kind mismatch error.
    #[inline]
    pub fn kind_mismatch(
        owner: &'static str,
        index: usize,
        expected: SlotKind,
        found: SlotKind,
    ) -> Self {
        SlotError::KindMismatch {
            owner,
            index,
            expected,
            found,
        }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(
        owner: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        SlotError::TypeMismatch {
            owner,
            index,
            expected,
            found,
        }
    }

    /// Create an index out of bounds error.
    #[inline]
    pub fn index_out_of_bounds(owner: &'static str, index: usize, len: usize) -> Self {
        SlotError::IndexOutOfBounds { owner, index, len }
    }

    /// Whether the error means two instances of one type disagree on their
    /// slot layout (non-deterministic construction).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            SlotError::ShapeMismatch { .. }
                | SlotError::KindMismatch { .. }
                | SlotError::TypeMismatch { .. }
        )
    }
}
