//! The sequential benchmark driver.
//!
//! `run` is a fixed linear sequence: validate → allocate buffers → time
//! each variant in [`Variant::ALL`] order → return the report. The
//! destination is zeroed before each variant and verified after it, both
//! outside the timed region.

use std::time::Instant;

use duff_kernels::{IncrementKernel, Variant};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::report::{BenchReport, TimingSample};

/// Source and destination buffers shared by every variant in a run.
#[derive(Clone, Debug)]
pub struct Buffers {
    source: Vec<i32>,
    destination: Vec<i32>,
}

impl Buffers {
    /// Allocate a filled source and a zeroed destination of `config.len`.
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            source: vec![config.fill; config.len],
            destination: vec![0; config.len],
        }
    }

    /// Build buffers around an existing source.
    pub fn from_source(source: Vec<i32>) -> Self {
        let destination = vec![0; source.len()];
        Self {
            source,
            destination,
        }
    }

    /// The immutable input.
    pub fn source(&self) -> &[i32] {
        &self.source
    }

    /// The output of the most recent kernel run.
    pub fn destination(&self) -> &[i32] {
        &self.destination
    }

    fn clear_destination(&mut self) {
        self.destination.fill(0);
    }

    /// First index where `destination[i] != source[i] + 1`.
    fn first_mismatch(&self) -> Option<(usize, i32, i32)> {
        self.source
            .iter()
            .zip(&self.destination)
            .enumerate()
            .find_map(|(index, (&src, &dst))| {
                let expected = src.wrapping_add(1);
                (dst != expected).then_some((index, expected, dst))
            })
    }
}

/// Time `repeats` consecutive invocations of `kernel` over `buffers`.
///
/// The destination is zeroed first and verified afterwards so a kernel
/// cannot pass on a previous kernel's output.
pub fn time_variant(
    kernel: &dyn IncrementKernel,
    buffers: &mut Buffers,
    repeats: u32,
) -> Result<TimingSample, BenchError> {
    let variant = kernel.variant();
    buffers.clear_destination();

    let start = Instant::now();
    for _ in 0..repeats {
        kernel
            .run(&mut buffers.destination, &buffers.source)
            .map_err(|source| BenchError::Kernel { variant, source })?;
    }
    let elapsed = start.elapsed();

    // Zero repeats leaves the destination zeroed, which fails here unless empty.
    if let Some((index, expected, actual)) = buffers.first_mismatch() {
        return Err(BenchError::Mismatch {
            variant,
            index,
            expected,
            actual,
        });
    }

    debug!(
        variant = %variant,
        repeats,
        elapsed_us = elapsed.as_micros() as u64,
        "variant timed"
    );

    Ok(TimingSample {
        variant,
        elapsed,
        repeats,
    })
}

/// Run every variant in [`Variant::ALL`] order.
///
/// `on_sample` is called after each variant finishes, so callers can
/// stream results in execution order.
pub fn run(
    config: &BenchConfig,
    mut on_sample: impl FnMut(&TimingSample),
) -> Result<BenchReport, BenchError> {
    config.validate()?;

    debug!(
        len = config.len,
        repeats = config.repeats,
        fill = config.fill,
        bytes = config.buffer_bytes(),
        "allocating buffers"
    );
    let mut buffers = Buffers::new(config);
    let mut report = BenchReport::default();

    for variant in Variant::ALL {
        let sample = time_variant(variant.kernel(), &mut buffers, config.repeats)?;
        on_sample(&sample);
        report.push(sample);
    }

    if let Some(fastest) = report.fastest() {
        info!(
            fastest = %fastest.variant,
            total_ms = report.total().as_millis() as u64,
            "benchmark complete"
        );
    }

    Ok(report)
}
