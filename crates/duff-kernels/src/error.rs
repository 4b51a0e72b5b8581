//! Kernel error types.

use std::error::Error;
use std::fmt;

/// Errors returned by the copy-and-increment kernels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Source and destination slices differ in length.
    LengthMismatch {
        /// Number of elements in the source slice.
        source_len: usize,
        /// Number of elements in the destination slice.
        destination_len: usize,
    },
    /// The scratch buffer could not be reserved.
    ScratchAllocation {
        /// Number of `i32` elements requested.
        requested: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                source_len,
                destination_len,
            } => {
                write!(
                    f,
                    "length mismatch: source has {source_len} elements, destination has {destination_len}"
                )
            }
            Self::ScratchAllocation { requested } => {
                write!(f, "failed to allocate scratch buffer of {requested} elements")
            }
        }
    }
}

impl Error for KernelError {}

/// Reject slices of unequal length before any element is written.
pub(crate) fn check_lengths(to: &[i32], from: &[i32]) -> Result<(), KernelError> {
    if to.len() == from.len() {
        Ok(())
    } else {
        Err(KernelError::LengthMismatch {
            source_len: from.len(),
            destination_len: to.len(),
        })
    }
}
