//! Power-of-two rounding for ring-buffer capacities.

/// Returns the smallest power of two that is `>= v`.
///
/// Computed by smearing the highest set bit of `v - 1` into every lower bit and adding
/// one, so the cost does not depend on the bit width of `v`.
///
/// Edge cases follow the wrapping arithmetic:
/// * `next_pow2(0) == 0`, so an empty capacity hint stays empty.
/// * Values above the largest representable power of two wrap to `0`.  Use
///   [`checked_next_pow2`] when the input is not already known to be in range.
///
/// ```
/// use ring_deque::utils::next_pow2;
///
/// assert_eq!(next_pow2(0), 0);
/// assert_eq!(next_pow2(1), 1);
/// assert_eq!(next_pow2(5), 8);
/// assert_eq!(next_pow2(64), 64);
/// ```
#[inline]
pub const fn next_pow2(v: usize) -> usize {
    let mut v = v.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    #[cfg(target_pointer_width = "64")]
    {
        v |= v >> 32;
    }
    v.wrapping_add(1)
}

/// Like [`next_pow2`], but returns `None` when the result does not fit in a `usize`.
///
/// `checked_next_pow2(0)` is `Some(0)`.
#[inline]
pub const fn checked_next_pow2(v: usize) -> Option<usize> {
    match next_pow2(v) {
        0 if v != 0 => None,
        p => Some(p),
    }
}
