//! Test utilities for duff development.
//!
//! - [`fixtures`]: input generators and expected outputs for the kernels.
//! - [`alloc_track`]: a [`GlobalAlloc`](std::alloc::GlobalAlloc) wrapper
//!   that records per-thread live and peak heap bytes, for checking that
//!   scratch buffers are released.

#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc_track;
pub mod fixtures;

pub use alloc_track::TrackingAllocator;
