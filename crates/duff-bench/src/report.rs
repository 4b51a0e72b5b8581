//! Timing samples and the per-run report.

use std::fmt;
use std::time::Duration;

use duff_kernels::Variant;

/// Wall-clock time for one variant across all of its repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingSample {
    /// Which kernel was timed.
    pub variant: Variant,
    /// Total elapsed time for every repeat combined.
    pub elapsed: Duration,
    /// Number of kernel invocations inside the timed region.
    pub repeats: u32,
}

impl TimingSample {
    /// Elapsed time in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Mean time for a single invocation. Zero when no repeats ran.
    pub fn per_repeat(&self) -> Duration {
        self.elapsed
            .checked_div(self.repeats)
            .unwrap_or(Duration::ZERO)
    }
}

/// Formats as `"<label> time: <seconds>s"`.
impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} time: {:.6}s", self.variant.label(), self.secs())
    }
}

/// All samples from one run, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchReport {
    samples: Vec<TimingSample>,
}

impl BenchReport {
    pub(crate) fn push(&mut self, sample: TimingSample) {
        self.samples.push(sample);
    }

    /// Samples in the order the variants ran.
    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    /// The sample for `variant`, if it ran.
    pub fn get(&self, variant: Variant) -> Option<&TimingSample> {
        self.samples.iter().find(|s| s.variant == variant)
    }

    /// The sample with the smallest elapsed time.
    pub fn fastest(&self) -> Option<&TimingSample> {
        self.samples.iter().min_by_key(|s| s.elapsed)
    }

    /// Sum of every sample's elapsed time.
    pub fn total(&self) -> Duration {
        self.samples.iter().map(|s| s.elapsed).sum()
    }
}

/// One sample per line.
impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            writeln!(f, "{sample}")?;
        }
        Ok(())
    }
}
