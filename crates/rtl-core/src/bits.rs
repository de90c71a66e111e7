//! Bit arithmetic helpers, as used by allocators and hash tables.

/// Rounds `d` up to the next multiple of `a`.
///
/// Returns `None` if `a` is not a non-zero power of two or the result does
/// not fit in a `usize`.
///
/// ```rust
/// use rtl_core::bits::align;
/// assert_eq!(align(13, 8), Some(16));
/// assert_eq!(align(16, 8), Some(16));
/// assert_eq!(align(13, 6), None);
/// ```
pub const fn align(d: usize, a: usize) -> Option<usize> {
    if !a.is_power_of_two() {
        return None;
    }
    let mask = a - 1;
    match d.checked_add(mask) {
        Some(v) => Some(v & !mask),
        None => None,
    }
}

/// Returns the low five bits of `v` (`v mod 32` for non-negative values).
pub const fn mod32(v: u64) -> u64 {
    v & 0x1f
}

/// Isolates the lowest set bit of `v`; `0` stays `0`.
pub const fn lowest_one_bit(v: u64) -> u64 {
    v & v.wrapping_neg()
}

/// Isolates the highest set bit of `v`; `0` stays `0`.
pub const fn highest_one_bit(v: u64) -> u64 {
    if v == 0 {
        0
    } else {
        1 << (u64::BITS - 1 - v.leading_zeros())
    }
}
