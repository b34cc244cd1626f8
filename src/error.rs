//! Errors returned by tree operations.

use std::fmt as StdFmt;

use crate::node::Key;

/// Errors that can occur during tree operations.
///
/// None of these are faults: an absent or duplicate key leaves the tree
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key is already stored. Insertion was rejected.
    DuplicateKey(Key),

    /// The key is not stored, so it has no predecessor or successor.
    KeyNotFound(Key),

    /// Deletion was asked for a key that is not stored.
    CannotDelete(Key),
}

impl TreeError {
    /// The key the failed operation was called with.
    #[must_use]
    pub const fn key(&self) -> Key {
        match *self {
            Self::DuplicateKey(key) | Self::KeyNotFound(key) | Self::CannotDelete(key) => key,
        }
    }
}

impl StdFmt::Display for TreeError {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "key {key} is already present"),

            Self::KeyNotFound(key) => write!(f, "key {key} is not found"),

            Self::CannotDelete(key) => {
                write!(f, "key {key} could not be deleted: not present")
            }
        }
    }
}

impl std::error::Error for TreeError {}
