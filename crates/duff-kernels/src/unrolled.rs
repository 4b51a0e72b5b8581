//! Duff's device: a manually unrolled copy-and-increment loop.
//!
//! The classic construction jumps into the middle of an eight-way unrolled
//! body to handle `count % 8` leftovers, then loops over full groups. Here
//! the leftovers are handled first as a short head, followed by
//! straight-line blocks of [`LANES`] elements. The loop count comes from the
//! slice iterators themselves, so an empty input runs neither part.

use crate::bump;
use crate::error::{check_lengths, KernelError};
use crate::kernel::{IncrementKernel, Variant};

/// Number of elements processed per unrolled block.
pub const LANES: usize = 8;

/// [`IncrementKernel`] for [`Variant::Unrolled`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DuffsDevice;

impl IncrementKernel for DuffsDevice {
    fn variant(&self) -> Variant {
        Variant::Unrolled
    }

    fn run(&self, to: &mut [i32], from: &[i32]) -> Result<(), KernelError> {
        duffs_device(to, from)
    }
}

/// Copy `from` into `to`, incrementing each element, eight at a time.
pub fn duffs_device(to: &mut [i32], from: &[i32]) -> Result<(), KernelError> {
    check_lengths(to, from)?;

    let head = from.len() % LANES;
    let (to_head, to_body) = to.split_at_mut(head);
    let (from_head, from_body) = from.split_at(head);

    for (dst, src) in to_head.iter_mut().zip(from_head) {
        *dst = bump(*src);
    }

    for (dst, src) in to_body
        .chunks_exact_mut(LANES)
        .zip(from_body.chunks_exact(LANES))
    {
        block(dst, src);
    }

    Ok(())
}

/// One unrolled group. Both slices are exactly [`LANES`] long.
#[inline(always)]
fn block(dst: &mut [i32], src: &[i32]) {
    dst[0] = bump(src[0]);
    dst[1] = bump(src[1]);
    dst[2] = bump(src[2]);
    dst[3] = bump(src[3]);
    dst[4] = bump(src[4]);
    dst[5] = bump(src[5]);
    dst[6] = bump(src[6]);
    dst[7] = bump(src[7]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<i32> {
        (0..len as i32).collect()
    }

    #[test]
    fn zero_count_touches_nothing() {
        let mut dst: [i32; 0] = [];
        duffs_device(&mut dst, &[]).unwrap();
    }

    #[test]
    fn every_remainder_class_is_covered() {
        for len in 0..=(3 * LANES) {
            let src = ramp(len);
            let mut dst = vec![-99; len];
            duffs_device(&mut dst, &src).unwrap();
            let expected: Vec<i32> = src.iter().map(|v| v + 1).collect();
            assert_eq!(dst, expected, "len {len} (remainder {})", len % LANES);
        }
    }

    #[test]
    fn head_and_body_meet_without_gap() {
        // 9 = one leftover + one full block; the seam is at index 1.
        let src = ramp(9);
        let mut dst = vec![0; 9];
        duffs_device(&mut dst, &src).unwrap();
        assert_eq!(dst, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn large_odd_length() {
        let len = 1_000_003;
        let src = vec![1; len];
        let mut dst = vec![0; len];
        duffs_device(&mut dst, &src).unwrap();
        assert!(dst.iter().all(|&v| v == 2));
    }
}
