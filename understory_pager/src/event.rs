// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events a page container emits and the commands a pager sends back.

/// Scroll state reported by a swipeable page container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// No gesture or animation in progress.
    #[default]
    Idle,
    /// The user is dragging pages.
    Dragging,
    /// A fling or programmatic scroll is animating to its final page.
    Settling,
}

/// One event in a page container's event stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// The strip scrolled.
    ///
    /// `position` is the padded index of the leftmost visible page and
    /// `offset` is the fraction in `[0, 1)` by which the next page is visible.
    Scrolled {
        /// Padded index of the leftmost visible page.
        position: usize,
        /// Fraction of the following page that is visible.
        offset: f32,
    },
    /// A new padded page became selected.
    Selected(usize),
    /// The scroll state changed.
    StateChanged(ScrollState),
}

/// A command to move the container to another padded position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reposition {
    /// Target padded position.
    pub position: usize,
    /// Whether the container should animate the move.
    pub animated: bool,
}

impl Reposition {
    /// A move the user should not see.
    #[must_use]
    pub const fn silent(position: usize) -> Self {
        Self {
            position,
            animated: false,
        }
    }
}
