//! The bulk-copy kernel must release its scratch buffer before returning.

use duff_kernels::{bulk_copy_increment, KernelError};
use duff_test_utils::alloc_track::{live_bytes, peak_bytes, reset_peak};
use duff_test_utils::fixtures;
use duff_test_utils::TrackingAllocator;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

const LEN: usize = 64 * 1024;

#[test]
fn scratch_is_freed_on_success() {
    let src = fixtures::filled(LEN, 1);
    let mut dst = fixtures::fresh_destination(LEN);

    let before = live_bytes();
    reset_peak();
    bulk_copy_increment(&mut dst, &src).unwrap();
    let after = live_bytes();

    assert_eq!(after, before, "scratch bytes leaked past return");
    let scratch_bytes = (LEN * std::mem::size_of::<i32>()) as isize;
    assert!(
        peak_bytes() >= before + scratch_bytes,
        "scratch buffer was never allocated: peak {} before {}",
        peak_bytes(),
        before
    );
    assert_eq!(dst, fixtures::expected_incremented(&src));
}

#[test]
fn repeated_calls_do_not_accumulate() {
    let src = fixtures::ramp(4097);
    let mut dst = fixtures::fresh_destination(4097);

    let before = live_bytes();
    for _ in 0..50 {
        bulk_copy_increment(&mut dst, &src).unwrap();
    }
    assert_eq!(live_bytes(), before);
}

#[test]
fn error_path_allocates_nothing() {
    let src = fixtures::filled(16, 1);
    let mut dst = fixtures::fresh_destination(8);

    let before = live_bytes();
    reset_peak();
    let result = bulk_copy_increment(&mut dst, &src);
    let after = live_bytes();
    let peak = peak_bytes();

    assert!(matches!(result, Err(KernelError::LengthMismatch { .. })));
    assert_eq!(after, before);
    assert_eq!(peak, before);
}
