//! Reusable kernel inputs and expected outputs.

/// Lengths covering every `len % 8` class plus the boundary sizes the
/// unrolled kernel is most likely to get wrong.
pub const REMAINDER_LENGTHS: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 15, 16, 17, 63, 64, 65, 1_000_003,
];

/// A buffer of `len` copies of `value`.
pub fn filled(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}

/// `0, 1, 2, ...` wrapping at `i32::MAX`, so every position is distinct
/// for any realistic length.
pub fn ramp(len: usize) -> Vec<i32> {
    (0..len).map(|i| i as i32).collect()
}

/// A zeroed destination of `len` elements.
pub fn fresh_destination(len: usize) -> Vec<i32> {
    vec![0; len]
}

/// What every kernel must produce for `input`.
pub fn expected_incremented(input: &[i32]) -> Vec<i32> {
    input.iter().map(|v| v.wrapping_add(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_lengths_cover_every_class() {
        let classes: std::collections::HashSet<usize> =
            REMAINDER_LENGTHS.iter().map(|len| len % 8).collect();
        assert_eq!(classes.len(), 8);
    }

    #[test]
    fn expected_wraps() {
        assert_eq!(expected_incremented(&[i32::MAX, 1]), vec![i32::MIN, 2]);
    }

    #[test]
    fn ramp_is_distinct() {
        assert_eq!(ramp(4), vec![0, 1, 2, 3]);
    }
}
