//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Precondition violations reported by the checked array operations.
///
/// The unchecked counterparts (`insert`, `pop_back`, indexing) panic with
/// the same message instead of returning the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An insertion position or element index past the live range.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A removal was requested from an array with no live elements.
    Empty,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for array of length {len}")
            }
            Self::Empty => write!(f, "array is empty"),
        }
    }
}

impl Error for ArrayError {}
