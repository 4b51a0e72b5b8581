//! The [`IncrementKernel`] trait and the [`Variant`] enum.

use std::fmt;

use crate::bulk_copy::BulkCopy;
use crate::error::KernelError;
use crate::transform::IterTransform;
use crate::unrolled::DuffsDevice;

/// One of the three interchangeable copy-and-increment strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Remainder-first loop unrolled into groups of eight.
    Unrolled,
    /// Element-wise iterator map, the equivalent of `std::transform`.
    Transform,
    /// Bulk copy into a scratch buffer, then increment into the destination.
    BulkCopy,
}

impl Variant {
    /// All variants in benchmark execution order.
    pub const ALL: [Variant; 3] = [Variant::Unrolled, Variant::Transform, Variant::BulkCopy];

    /// Human-readable label used in benchmark output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unrolled => "Duff's device",
            Self::Transform => "Iterator transform",
            Self::BulkCopy => "memcpy + increment",
        }
    }

    /// The kernel implementing this variant.
    pub fn kernel(self) -> &'static dyn IncrementKernel {
        match self {
            Self::Unrolled => &DuffsDevice,
            Self::Transform => &IterTransform,
            Self::BulkCopy => &BulkCopy,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A copy-and-increment kernel.
///
/// # Contract
///
/// - On success `to[i] == from[i].wrapping_add(1)` for every index.
/// - `to.len() != from.len()` is rejected with
///   [`KernelError::LengthMismatch`] before anything is written.
/// - `from` is never modified; repeated runs over the same input give the
///   same output.
///
/// # Examples
///
/// ```
/// use duff_kernels::{IncrementKernel, Variant};
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 3];
/// Variant::Unrolled.kernel().run(&mut dst, &src).unwrap();
/// assert_eq!(dst, [2, 3, 4]);
/// ```
pub trait IncrementKernel: Send + Sync {
    /// Which variant this kernel implements.
    fn variant(&self) -> Variant;

    /// Write `from[i] + 1` into `to[i]` for every index.
    fn run(&self, to: &mut [i32], from: &[i32]) -> Result<(), KernelError>;
}
