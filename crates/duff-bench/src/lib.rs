//! Timing driver for the duff copy-and-increment kernels.
//!
//! Provides the benchmark profile and the sequential driver:
//!
//! - [`BenchConfig::reference`]: 1,000,000 elements of value 1, 100 repeats
//! - [`run`]: time [`Variant::ALL`](duff_kernels::Variant::ALL) in order and
//!   collect a [`BenchReport`]
//! - [`time_variant`]: time a single kernel over shared [`Buffers`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod driver;
pub mod error;
pub mod report;

pub use config::{BenchConfig, ConfigError};
pub use driver::{run, time_variant, Buffers};
pub use error::BenchError;
pub use report::{BenchReport, TimingSample};
