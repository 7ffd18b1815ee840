// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page sources: the data side of a circular pager.

use crate::index::{LayoutError, PaddedLayout, to_real_position};

/// A data source for a circular pager.
///
/// Implementors report the *padded* page count and how many sentinel pages
/// they mirror at each edge. Hosts render padded slot `p` with the content of
/// [`PageSource::real_position`]`(p)`.
pub trait PageSource {
    /// Total padded length, `real_count + 2 * extra_count`.
    fn count(&self) -> usize;

    /// Sentinel pages duplicated at each edge.
    ///
    /// Defaults to a single sentinel per edge.
    fn extra_count(&self) -> usize {
        1
    }

    /// Real page shown at `padded_position`.
    ///
    /// Hosts render padded slot `padded_position` with this page. The pager
    /// itself corrects positions with the layout wired from
    /// [`PageSource::layout`].
    ///
    /// See [`to_real_position`].
    fn real_position(&self, padded_position: usize) -> usize {
        to_real_position(padded_position, self.count(), self.extra_count())
    }

    /// Validates and returns the source's layout.
    fn layout(&self) -> Result<PaddedLayout, LayoutError> {
        PaddedLayout::from_padded(self.count(), self.extra_count())
    }
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn extra_count(&self) -> usize {
        (**self).extra_count()
    }

    fn real_position(&self, padded_position: usize) -> usize {
        (**self).real_position(padded_position)
    }

    fn layout(&self) -> Result<PaddedLayout, LayoutError> {
        (**self).layout()
    }
}

/// A [`PageSource`] with a fixed number of real pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedPageSource {
    real_count: usize,
    extra_count: usize,
}

impl FixedPageSource {
    /// Creates a source with `real_count` pages and one sentinel per edge.
    #[must_use]
    pub const fn new(real_count: usize) -> Self {
        Self::with_extra(real_count, 1)
    }

    /// Creates a source with `real_count` pages and `extra_count` sentinels per edge.
    #[must_use]
    pub const fn with_extra(real_count: usize, extra_count: usize) -> Self {
        Self {
            real_count,
            extra_count,
        }
    }

    /// Number of unique pages.
    #[must_use]
    pub const fn real_count(&self) -> usize {
        self.real_count
    }

    /// Changes the number of unique pages.
    ///
    /// Hosts attached to a pager should swap sources through
    /// [`AttachedPager::set_source`](crate::AttachedPager::set_source) so the
    /// container is repositioned.
    pub fn set_real_count(&mut self, real_count: usize) {
        self.real_count = real_count;
    }
}

impl PageSource for FixedPageSource {
    fn count(&self) -> usize {
        self.real_count + self.extra_count * 2
    }

    fn extra_count(&self) -> usize {
        self.extra_count
    }
}
