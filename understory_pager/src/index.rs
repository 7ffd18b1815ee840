// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padded ↔ real index arithmetic for wrap-around pagers.
//!
//! A circular pager exposes a *padded* strip of `real_count + 2 * extra_count`
//! pages to its container. The first and last `extra_count` padded slots are
//! sentinels that duplicate pages from the opposite end of the real sequence,
//! so a swipe past either edge lands on a page that looks like its wrapped
//! neighbor:
//!
//! ```text
//! real_count = 5, extra_count = 2, count = 9
//!
//! padded:  0  1 | 2  3  4  5  6 | 7  8
//! real:    3  4 | 0  1  2  3  4 | 0  1
//!          ^^^^                   ^^^^ sentinels
//! ```
//!
//! ## Minimal example
//!
//! ```
//! use understory_pager::{PaddedLayout, to_real_position};
//!
//! let layout = PaddedLayout::new(5, 2);
//! assert_eq!(layout.count(), 9);
//!
//! assert_eq!(to_real_position(0, 9, 2), 3);
//! assert_eq!(to_real_position(8, 9, 2), 1);
//!
//! // Sentinel slot 8 shows the same page as padded slot 3.
//! assert!(layout.is_sentinel(8));
//! assert_eq!(layout.canonical_position(8), 3);
//! ```

use core::fmt;
use core::ops::Range;

/// Maps a padded position to its real position.
///
/// `count` is the padded length (`real_count + 2 * extra_count`) and
/// `padded_position` must lie in `0..count`. The mapping is a three-way split:
///
/// - Low sentinels (`padded_position < extra_count`) mirror the tail of the
///   real sequence.
/// - High sentinels (`padded_position >= count - extra_count`) wrap to the
///   head of the real sequence.
/// - Interior slots are offset by `extra_count`.
///
/// When `extra_count` exceeds the real length the sentinel results wrap
/// modulo `real_count`, so the returned value always lies in
/// `0..count - 2 * extra_count`.
///
/// Preconditions are checked with `debug_assert!` only; callers validate the
/// layout when wiring (see [`PaddedLayout::try_new`]).
#[must_use]
pub fn to_real_position(padded_position: usize, count: usize, extra_count: usize) -> usize {
    debug_assert!(
        count > extra_count * 2,
        "padded count {count} must exceed twice the extra count {extra_count}"
    );
    debug_assert!(
        padded_position < count,
        "padded position {padded_position} out of range for count {count}"
    );
    let real_count = count - extra_count * 2;
    if padded_position < extra_count {
        // Distance back from the first real slot, in `1..=extra_count`.
        let back = extra_count - padded_position;
        real_count - 1 - (back - 1) % real_count
    } else if padded_position >= count - extra_count {
        (padded_position - (count - extra_count)) % real_count
    } else {
        padded_position - extra_count
    }
}

/// Maps a real position to the padded slot that holds it outside the sentinels.
#[must_use]
pub const fn to_padded_position(real_position: usize, extra_count: usize) -> usize {
    real_position + extra_count
}

/// Error returned when a page layout cannot hold any real page.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// The padded count does not exceed twice the sentinel count.
    TooFewPages {
        /// Padded page count reported by the source.
        count: usize,
        /// Sentinel pages per edge reported by the source.
        extra_count: usize,
    },
}

impl fmt::Debug for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPages { count, extra_count } => write!(
                f,
                "TooFewPages {{ count: {count:?}, extra_count: {extra_count:?} }}"
            ),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPages { count, extra_count } => write!(
                f,
                "padded count {count} leaves no real pages with {extra_count} sentinel pages per edge"
            ),
        }
    }
}

impl core::error::Error for LayoutError {}

/// A validated `(real_count, extra_count)` pair.
///
/// Construction guarantees at least one real page, so every method is total
/// over `0..count()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaddedLayout {
    real_count: usize,
    extra_count: usize,
}

impl PaddedLayout {
    /// Creates a layout from a real page count and per-edge sentinel count.
    ///
    /// # Panics
    ///
    /// Panics if `real_count` is zero.
    #[must_use]
    #[track_caller]
    pub fn new(real_count: usize, extra_count: usize) -> Self {
        match Self::from_padded(real_count + extra_count * 2, extra_count) {
            Ok(layout) => layout,
            Err(err) => panic!("invalid page layout: {err}"),
        }
    }

    /// Creates a layout from a real page count, rejecting empty content.
    pub fn try_new(real_count: usize, extra_count: usize) -> Result<Self, LayoutError> {
        Self::from_padded(real_count + extra_count * 2, extra_count)
    }

    /// Creates a layout from the padded count a source reports.
    pub fn from_padded(count: usize, extra_count: usize) -> Result<Self, LayoutError> {
        if count <= extra_count * 2 {
            return Err(LayoutError::TooFewPages { count, extra_count });
        }
        Ok(Self {
            real_count: count - extra_count * 2,
            extra_count,
        })
    }

    /// Number of unique pages.
    #[must_use]
    pub const fn real_count(&self) -> usize {
        self.real_count
    }

    /// Number of sentinel pages mirrored at each edge.
    #[must_use]
    pub const fn extra_count(&self) -> usize {
        self.extra_count
    }

    /// Padded length exposed to the container.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.real_count + self.extra_count * 2
    }

    /// All valid padded positions.
    #[must_use]
    pub const fn padded_range(&self) -> Range<usize> {
        0..self.count()
    }

    /// Padded positions that hold real (non-sentinel) pages.
    #[must_use]
    pub const fn real_range(&self) -> Range<usize> {
        self.extra_count..self.extra_count + self.real_count
    }

    /// Returns `true` if `padded_position` is a sentinel duplicate.
    #[must_use]
    pub const fn is_sentinel(&self, padded_position: usize) -> bool {
        padded_position < self.extra_count
            || padded_position >= self.extra_count + self.real_count
    }

    /// See [`to_real_position`].
    #[must_use]
    pub fn to_real(&self, padded_position: usize) -> usize {
        to_real_position(padded_position, self.count(), self.extra_count)
    }

    /// See [`to_padded_position`].
    ///
    /// `real_position` is wrapped into `0..real_count` first.
    #[must_use]
    pub fn to_padded(&self, real_position: usize) -> usize {
        to_padded_position(real_position % self.real_count, self.extra_count)
    }

    /// Non-sentinel padded slot showing the same page as `padded_position`.
    ///
    /// Interior positions map to themselves.
    #[must_use]
    pub fn canonical_position(&self, padded_position: usize) -> usize {
        self.extra_count + self.to_real(padded_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_pages_two_extra_matches_table() {
        let expected = [3, 4, 0, 1, 2, 3, 4, 0, 1];
        for (padded, real) in expected.iter().enumerate() {
            assert_eq!(to_real_position(padded, 9, 2), *real, "padded {padded}");
        }
    }

    #[test]
    fn first_real_page_sits_after_sentinels() {
        assert_eq!(to_real_position(2, 9, 2), 0);
        assert_eq!(to_padded_position(0, 2), 2);
    }

    #[test]
    fn low_sentinels_match_reduced_form() {
        for real_count in 1..12 {
            for extra in 0..=real_count {
                let count = real_count + extra * 2;
                for padded in 0..extra {
                    assert_eq!(
                        to_real_position(padded, count, extra),
                        real_count - extra + padded,
                        "real_count {real_count}, extra {extra}, padded {padded}"
                    );
                }
            }
        }
    }

    #[test]
    fn mapping_is_offset_modulo_real_count() {
        for real_count in 1..10 {
            for extra in 0..15 {
                let count = real_count + extra * 2;
                for padded in 0..count {
                    let expected = (padded + real_count * extra - extra) % real_count;
                    let real = to_real_position(padded, count, extra);
                    assert!(
                        real < real_count,
                        "real_count {real_count}, extra {extra}, padded {padded}"
                    );
                    assert_eq!(
                        real, expected,
                        "real_count {real_count}, extra {extra}, padded {padded}"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_extra_is_identity() {
        for padded in 0..7 {
            assert_eq!(to_real_position(padded, 7, 0), padded, "padded {padded}");
        }
    }

    #[test]
    fn single_page_always_maps_to_zero() {
        for padded in 0..3 {
            assert_eq!(to_real_position(padded, 3, 1), 0, "padded {padded}");
        }
    }

    #[test]
    fn layout_rejects_empty_content() {
        assert_eq!(
            PaddedLayout::from_padded(4, 2),
            Err(LayoutError::TooFewPages {
                count: 4,
                extra_count: 2
            })
        );
        assert!(PaddedLayout::try_new(0, 1).is_err());
        assert!(PaddedLayout::from_padded(0, 0).is_err());
        assert_eq!(PaddedLayout::from_padded(5, 2), Ok(PaddedLayout::new(1, 2)));
    }

    #[test]
    #[should_panic(expected = "invalid page layout")]
    fn layout_new_panics_without_pages() {
        let _ = PaddedLayout::new(0, 3);
    }

    #[test]
    fn sentinel_and_real_ranges() {
        let layout = PaddedLayout::new(5, 2);
        assert_eq!(layout.padded_range(), 0..9);
        assert_eq!(layout.real_range(), 2..7);
        let sentinels: [bool; 9] = core::array::from_fn(|p| layout.is_sentinel(p));
        assert_eq!(
            sentinels,
            [true, true, false, false, false, false, false, true, true]
        );
    }

    #[test]
    fn canonical_position_is_a_fixed_point() {
        let layout = PaddedLayout::new(5, 2);
        for padded in layout.padded_range() {
            let canonical = layout.canonical_position(padded);
            assert!(
                layout.real_range().contains(&canonical),
                "padded {padded} -> {canonical}"
            );
            assert_eq!(
                layout.canonical_position(canonical),
                canonical,
                "padded {padded}"
            );
        }
        assert_eq!(layout.canonical_position(8), 3);
        assert_eq!(layout.canonical_position(0), 5);
    }

    #[test]
    fn to_padded_wraps_real_index() {
        let layout = PaddedLayout::new(5, 2);
        assert_eq!(layout.to_padded(4), 6);
        assert_eq!(layout.to_padded(6), 3);
    }

    #[test]
    fn error_display_mentions_counts() {
        use alloc::string::ToString;

        let err = LayoutError::TooFewPages {
            count: 2,
            extra_count: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("padded count 2"), "{msg}");
        assert!(msg.contains("1 sentinel"), "{msg}");
    }
}
