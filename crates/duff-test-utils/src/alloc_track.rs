//! Per-thread heap accounting.
//!
//! Install [`TrackingAllocator`] as the global allocator in a test binary:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: duff_test_utils::TrackingAllocator = duff_test_utils::TrackingAllocator;
//! ```
//!
//! Counters are thread-local so concurrently running tests do not see each
//! other's allocations. A block freed on a different thread than the one
//! that allocated it skews both threads' counts; tests should allocate and
//! free on the thread that measures.

#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    // Const-initialised and drop-free: touching these never allocates.
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static PEAK_BYTES: Cell<isize> = const { Cell::new(0) };
}

/// [`System`] allocator wrapper that counts live and peak bytes per thread.
pub struct TrackingAllocator;

// SAFETY: every call is forwarded unchanged to `System`; the bookkeeping
// only touches thread-local `Cell`s and never allocates.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

fn record(delta: isize) {
    // `try_with` fails only during thread teardown; those frees are not ours.
    let _ = LIVE_BYTES.try_with(|live| {
        let now = live.get().wrapping_add(delta);
        live.set(now);
        let _ = PEAK_BYTES.try_with(|peak| {
            if now > peak.get() {
                peak.set(now);
            }
        });
    });
}

/// Bytes currently allocated (net) by the calling thread.
pub fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

/// Highest value of [`live_bytes`] since the last [`reset_peak`].
pub fn peak_bytes() -> isize {
    PEAK_BYTES.with(Cell::get)
}

/// Set the peak to the current live count.
pub fn reset_peak() {
    let live = live_bytes();
    PEAK_BYTES.with(|peak| peak.set(live));
}
