//! Bulk copy into scratch space, then increment into the destination.

use crate::bump;
use crate::error::{check_lengths, KernelError};
use crate::kernel::{IncrementKernel, Variant};
use crate::scratch::ScratchBuffer;

/// [`IncrementKernel`] for [`Variant::BulkCopy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BulkCopy;

impl IncrementKernel for BulkCopy {
    fn variant(&self) -> Variant {
        Variant::BulkCopy
    }

    fn run(&self, to: &mut [i32], from: &[i32]) -> Result<(), KernelError> {
        bulk_copy_increment(to, from)
    }
}

/// Copy `from` into a fresh [`ScratchBuffer`], then write each scratch
/// element plus one into `to`.
///
/// The scratch buffer is dropped before this function returns, on both the
/// success and the error path.
pub fn bulk_copy_increment(to: &mut [i32], from: &[i32]) -> Result<(), KernelError> {
    check_lengths(to, from)?;
    let scratch = ScratchBuffer::copy_of(from)?;
    for (dst, src) in to.iter_mut().zip(scratch.as_slice()) {
        *dst = bump(*src);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_through_scratch() {
        let mut dst = [0; 10];
        bulk_copy_increment(&mut dst, &[9; 10]).unwrap();
        assert_eq!(dst, [10; 10]);
    }

    #[test]
    fn mismatch_is_rejected_before_allocation() {
        let mut dst = [0; 1];
        let err = bulk_copy_increment(&mut dst, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            KernelError::LengthMismatch {
                source_len: 2,
                destination_len: 1,
            }
        );
    }
}
