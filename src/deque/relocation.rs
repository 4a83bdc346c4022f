//! Placement of live elements inside freshly grown storage.

/// Where [`RingDeque::grow`](crate::RingDeque::grow) places the preserved elements inside
/// the new, larger buffer.
///
/// | Option | First live slot | Free room |
/// |--------|-----------------|-----------|
/// | `LeftBound` | `0` | all at the back |
/// | `RightBound` | `capacity - len` | all at the front |
/// | `Center` | `capacity / 2 - len / 2` | split between both ends |
///
/// `push_back` and `push_front` always grow with `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelocationOption {
    /// Expect future growth at the back.
    LeftBound,
    /// Expect future growth at the front.
    RightBound,
    /// No preferred end.
    #[default]
    Center,
}

impl RelocationOption {
    /// Physical slot of the first live element after relocating `len` elements into a
    /// buffer of `capacity` slots.  Requires `len <= capacity`.
    #[inline]
    pub const fn offset(self, capacity: usize, len: usize) -> usize {
        debug_assert!(len <= capacity);
        match self {
            RelocationOption::LeftBound => 0,
            RelocationOption::RightBound => capacity - len,
            RelocationOption::Center => capacity / 2 - len / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocation_offsets() {
        assert_eq!(RelocationOption::LeftBound.offset(16, 8), 0);
        assert_eq!(RelocationOption::RightBound.offset(16, 8), 8);
        assert_eq!(RelocationOption::Center.offset(16, 8), 4);
        // odd counts round the front gap up
        assert_eq!(RelocationOption::Center.offset(8, 3), 3);
        assert_eq!(RelocationOption::Center.offset(1, 0), 0);
    }

    #[test]
    fn test_relocation_window_fits() {
        for cap in [1usize, 2, 4, 8, 64] {
            for len in 0..cap {
                for opt in [
                    RelocationOption::LeftBound,
                    RelocationOption::RightBound,
                    RelocationOption::Center,
                ] {
                    assert!(opt.offset(cap, len) + len <= cap, "{opt:?} cap={cap} len={len}");
                }
            }
        }
    }

    #[test]
    fn test_relocation_default_is_center() {
        assert_eq!(RelocationOption::default(), RelocationOption::Center);
    }
}
