//! Owned scratch space for the bulk-copy kernel.
//!
//! [`ScratchBuffer`] holds a private copy of the kernel input for the
//! duration of one call. It owns its allocation outright and frees it in
//! `Drop`, so the buffer is released exactly once on every exit path,
//! including early returns through `?`.

use crate::error::KernelError;

/// A single-owner copy of a source slice.
///
/// Construction reserves exactly `src.len()` elements with
/// [`Vec::try_reserve_exact`] and fills them with a bulk memory copy.
/// Reservation failure surfaces as [`KernelError::ScratchAllocation`]
/// instead of aborting inside the allocator.
#[derive(Debug)]
pub struct ScratchBuffer {
    data: Vec<i32>,
}

impl ScratchBuffer {
    /// Allocate a scratch buffer holding a copy of `src`.
    pub fn copy_of(src: &[i32]) -> Result<Self, KernelError> {
        let mut data = Vec::new();
        data.try_reserve_exact(src.len())
            .map_err(|_| KernelError::ScratchAllocation {
                requested: src.len(),
            })?;
        // Within the reserved capacity: a single memcpy, no reallocation.
        data.extend_from_slice(src);
        Ok(Self { data })
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The copied elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Heap bytes owned by this buffer.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<i32>()
    }
}
