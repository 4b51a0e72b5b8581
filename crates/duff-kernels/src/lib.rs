//! Copy-and-increment kernels for the duff benchmark.
//!
//! Every kernel writes `to[i] = from[i] + 1` for each `i` in
//! `0..from.len()`. They differ only in how the loop is structured:
//!
//! ```text
//! Variant::Unrolled   → duffs_device         (remainder first, then groups of 8)
//! Variant::Transform  → iter_transform       (iterator zip + map)
//! Variant::BulkCopy   → bulk_copy_increment  (memcpy into ScratchBuffer, then increment)
//! ```
//!
//! All three produce bit-identical output for identical input. The
//! increment wraps on overflow in every kernel, so `i32::MAX` maps to
//! `i32::MIN` regardless of build profile.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bulk_copy;
pub mod error;
pub mod kernel;
pub mod scratch;
pub mod transform;
pub mod unrolled;

pub use bulk_copy::{bulk_copy_increment, BulkCopy};
pub use error::KernelError;
pub use kernel::{IncrementKernel, Variant};
pub use scratch::ScratchBuffer;
pub use transform::{iter_transform, IterTransform};
pub use unrolled::{duffs_device, DuffsDevice, LANES};

/// The increment applied by every kernel.
#[inline(always)]
pub(crate) fn bump(value: i32) -> i32 {
    value.wrapping_add(1)
}
