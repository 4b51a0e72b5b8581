//! Benchmark configuration.

use std::error::Error;
use std::fmt;

/// Parameters for one benchmark run.
///
/// Passed explicitly to [`run`](crate::run) so tests can drive other sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in the source and destination buffers.
    pub len: usize,
    /// How many times each kernel is invoked inside its timed region.
    pub repeats: u32,
    /// Value every source element is initialised to.
    pub fill: i32,
}

impl BenchConfig {
    /// Reference buffer length.
    pub const REFERENCE_LEN: usize = 1_000_000;

    /// Reference repeat count.
    pub const REFERENCE_REPEATS: u32 = 100;

    /// Default source fill value.
    pub const DEFAULT_FILL: i32 = 1;

    /// A config for `len` elements and `repeats` invocations per kernel,
    /// filled with [`DEFAULT_FILL`](Self::DEFAULT_FILL).
    pub fn new(len: usize, repeats: u32) -> Self {
        Self {
            len,
            repeats,
            fill: Self::DEFAULT_FILL,
        }
    }

    /// The reference profile: 1M elements of value 1, 100 repeats.
    pub fn reference() -> Self {
        Self::new(Self::REFERENCE_LEN, Self::REFERENCE_REPEATS)
    }

    /// Override the source fill value.
    pub fn with_fill(mut self, fill: i32) -> Self {
        self.fill = fill;
        self
    }

    /// Check the config before any buffer is allocated.
    ///
    /// A zero-length buffer is valid; zero repeats is not, since the timed
    /// region would never write the destination.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeats == 0 {
            return Err(ConfigError::ZeroRepeats);
        }
        Ok(())
    }

    /// Heap bytes held by the source and destination buffers together.
    pub fn buffer_bytes(&self) -> usize {
        self.len.saturating_mul(2 * std::mem::size_of::<i32>())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::reference()
    }
}

/// Invalid [`BenchConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `repeats` was zero.
    ZeroRepeats,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRepeats => write!(f, "repeat count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
