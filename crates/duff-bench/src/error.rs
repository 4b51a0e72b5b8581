//! Driver error types.

use std::error::Error;
use std::fmt;

use duff_kernels::{KernelError, Variant};

use crate::config::ConfigError;

/// Errors that abort a benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The config failed validation.
    Config(ConfigError),
    /// A kernel returned an error during its timed region.
    Kernel {
        /// The kernel that failed.
        variant: Variant,
        /// The underlying kernel error.
        source: KernelError,
    },
    /// A kernel finished but wrote the wrong value.
    Mismatch {
        /// The kernel whose output was wrong.
        variant: Variant,
        /// First index that differs.
        index: usize,
        /// `source[index] + 1`.
        expected: i32,
        /// `destination[index]`.
        actual: i32,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid config: {err}"),
            Self::Kernel { variant, source } => {
                write!(f, "kernel '{variant}' failed: {source}")
            }
            Self::Mismatch {
                variant,
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "kernel '{variant}' wrote {actual} at index {index}, expected {expected}"
                )
            }
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Kernel { source, .. } => Some(source),
            Self::Mismatch { .. } => None,
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
