//! Element-wise iterator transform, the standard-library baseline.

use crate::bump;
use crate::error::{check_lengths, KernelError};
use crate::kernel::{IncrementKernel, Variant};

/// [`IncrementKernel`] for [`Variant::Transform`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IterTransform;

impl IncrementKernel for IterTransform {
    fn variant(&self) -> Variant {
        Variant::Transform
    }

    fn run(&self, to: &mut [i32], from: &[i32]) -> Result<(), KernelError> {
        iter_transform(to, from)
    }
}

/// Map the increment over `from` into `to`.
pub fn iter_transform(to: &mut [i32], from: &[i32]) -> Result<(), KernelError> {
    check_lengths(to, from)?;
    to.iter_mut()
        .zip(from.iter().map(|&v| bump(v)))
        .for_each(|(dst, value)| *dst = value);
    Ok(())
}
