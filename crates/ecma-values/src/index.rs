//! Index arithmetic shared by every range operation
//!
//! All requested offsets are signed. A negative offset counts back from the
//! end of the receiver; every result is clamped into `[0, len]`.

use std::ops::Range;

/// An optional, possibly negative, index argument.
///
/// Lets callers write `arr.slice(1, None)` or `arr.slice(-2, 4)` where the
/// ECMAScript surface has trailing optional arguments.
pub trait IndexArg {
    /// The requested offset, or `None` when the argument is absent
    fn into_offset(self) -> Option<i64>;
}

impl IndexArg for i64 {
    fn into_offset(self) -> Option<i64> {
        Some(self)
    }
}

impl IndexArg for i32 {
    fn into_offset(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IndexArg for u32 {
    fn into_offset(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IndexArg for usize {
    fn into_offset(self) -> Option<i64> {
        Some(i64::try_from(self).unwrap_or(i64::MAX))
    }
}

impl IndexArg for Option<i64> {
    fn into_offset(self) -> Option<i64> {
        self
    }
}

/// Convert a relative offset into an absolute position in `[0, len]`.
///
/// Negative offsets count from the end: `max(len + r, 0)`; everything else
/// is capped at `len`.
#[inline]
pub fn relative_index(requested: i64, len: usize) -> usize {
    if requested < 0 {
        let back = requested.unsigned_abs();
        usize::try_from(back).map_or(0, |back| len.saturating_sub(back))
    } else {
        usize::try_from(requested).map_or(len, |r| r.min(len))
    }
}

/// Like [`relative_index`] but with a default for an absent argument.
#[inline]
pub fn relative_or(requested: Option<i64>, default: usize, len: usize) -> usize {
    requested.map_or(default.min(len), |r| relative_index(r, len))
}

/// Clamp both bounds independently and return `[from, to)`.
///
/// `start` defaults to 0 and `end` to `len`. When `from >= to` the range is
/// empty (`from..from`).
pub fn relative_range(start: Option<i64>, end: Option<i64>, len: usize) -> Range<usize> {
    let from = relative_or(start, 0, len);
    let to = relative_or(end, len, len);
    if from >= to { from..from } else { from..to }
}

/// Clamp to `[0, len]` without negative-offset semantics.
///
/// Used by `substring`, `startsWith`, `includes` and friends where a
/// negative position simply means 0.
#[inline]
pub fn clamp_position(requested: i64, len: usize) -> usize {
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(len, |r| r.min(len))
    }
}

/// An absolute slot index, if `requested` addresses one (`>= 0`).
#[inline]
pub fn slot_index(requested: i64) -> Option<usize> {
    usize::try_from(requested).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_index_negative() {
        assert_eq!(relative_index(-1, 5), 4);
        assert_eq!(relative_index(-5, 5), 0);
        assert_eq!(relative_index(-10, 5), 0);
        assert_eq!(relative_index(i64::MIN, 5), 0);
    }

    #[test]
    fn test_relative_index_positive() {
        assert_eq!(relative_index(0, 5), 0);
        assert_eq!(relative_index(3, 5), 3);
        assert_eq!(relative_index(5, 5), 5);
        assert_eq!(relative_index(99, 5), 5);
        assert_eq!(relative_index(i64::MAX, 0), 0);
    }

    #[test]
    fn test_relative_range() {
        assert_eq!(relative_range(None, None, 4), 0..4);
        assert_eq!(relative_range(Some(1), Some(-1), 4), 1..3);
        assert_eq!(relative_range(Some(-2), None, 4), 2..4);
        // Inverted bounds collapse to an empty range
        assert_eq!(relative_range(Some(3), Some(1), 4), 3..3);
        assert!(relative_range(Some(10), Some(20), 4).is_empty());
    }

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(-3, 4), 0);
        assert_eq!(clamp_position(2, 4), 2);
        assert_eq!(clamp_position(8, 4), 4);
    }

    #[test]
    fn test_index_arg_variants() {
        assert_eq!(3i32.into_offset(), Some(3));
        assert_eq!((-1i64).into_offset(), Some(-1));
        assert_eq!(7usize.into_offset(), Some(7));
        assert_eq!(None::<i64>.into_offset(), None);
        assert_eq!(slot_index(-1), None);
        assert_eq!(slot_index(2), Some(2));
    }
}
