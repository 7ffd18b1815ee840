// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle correction state machine for circular pagers.
//!
//! ## Usage
//!
//! 1) Wire a [`CircularPager`] to a [`PageSource`] with [`CircularPager::new`]
//!    (fail-fast) or [`CircularPager::try_new`].
//! 2) Place the container at [`CircularPager::initial_position`].
//! 3) Feed every container event to [`CircularPager::handle_event`] along
//!    with the container's current padded position.
//! 4) Apply any returned [`Reposition`] to the container.
//!
//! [`CircularPager::attach`] performs steps 2 and 4 for hosts that implement
//! [`PageContainer`](crate::PageContainer).
//!
//! ## Minimal example
//!
//! ```
//! use understory_pager::{CircularPager, FixedPageSource, PageEvent, Reposition, ScrollState};
//!
//! // Five pages, two sentinels per edge: padded positions 0..9.
//! let mut pager = CircularPager::new(FixedPageSource::with_extra(5, 2));
//! assert_eq!(pager.initial_position(), 2);
//!
//! // The user swipes past the last real page and the fling lands on slot 8.
//! pager.handle_event(PageEvent::StateChanged(ScrollState::Dragging), 6);
//! pager.handle_event(PageEvent::StateChanged(ScrollState::Settling), 6);
//! pager.handle_event(PageEvent::Selected(8), 8);
//!
//! // On settle the pager asks for a silent jump to the real copy of that page.
//! let fix = pager.handle_event(PageEvent::StateChanged(ScrollState::Idle), 8);
//! assert_eq!(fix, Some(Reposition::silent(3)));
//! ```

use log::{debug, trace};

use crate::event::{PageEvent, Reposition, ScrollState};
use crate::index::{LayoutError, PaddedLayout};
use crate::source::PageSource;

/// Hides the wrap seam of a circular pager.
///
/// The pager tracks the container's last reported [`ScrollState`]. When the
/// container comes to rest on a sentinel page it emits a silent
/// [`Reposition`] to the non-sentinel slot showing the same content, so the
/// user never sees the jump.
///
/// The layout validated when the source is wired is the authority for all
/// placement and correction arithmetic. Sources must not change their counts
/// while wired; swap them through [`CircularPager::replace_source`] instead.
#[derive(Clone, Debug)]
pub struct CircularPager<S> {
    source: S,
    layout: PaddedLayout,
    state: ScrollState,
    selected: Option<usize>,
    initial_page: usize,
    correct_while_dragging: bool,
}

impl<S: PageSource> CircularPager<S> {
    /// Wires a pager to `source`.
    ///
    /// # Panics
    ///
    /// Panics if the source reports a padded count that leaves no real pages.
    #[must_use]
    #[track_caller]
    pub fn new(source: S) -> Self {
        match Self::try_new(source) {
            Ok(pager) => pager,
            Err(err) => panic!("circular pager wired to an invalid source: {err}"),
        }
    }

    /// Wires a pager to `source`, returning an error if its layout is invalid.
    pub fn try_new(source: S) -> Result<Self, LayoutError> {
        let layout = source.layout()?;
        Ok(Self {
            source,
            layout,
            state: ScrollState::Idle,
            selected: None,
            initial_page: 0,
            correct_while_dragging: true,
        })
    }

    /// Sets the real page the container starts on.
    ///
    /// Out-of-range pages wrap into the real range.
    #[must_use]
    pub fn with_initial_page(mut self, real_position: usize) -> Self {
        self.initial_page = real_position;
        self
    }

    /// Real page the container starts on.
    #[must_use]
    pub fn initial_page(&self) -> usize {
        self.initial_page % self.layout.real_count()
    }

    /// Padded position the container should start on.
    #[must_use]
    pub fn initial_position(&self) -> usize {
        self.layout.to_padded(self.initial_page)
    }

    /// Returns the data source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Layout validated when the source was wired.
    #[must_use]
    pub fn layout(&self) -> PaddedLayout {
        self.layout
    }

    /// Last scroll state reported by the container.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.state
    }

    /// Last padded position reported through [`PageEvent::Selected`].
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a drag resting exactly on a page also triggers correction.
    #[must_use]
    pub fn correct_while_dragging(&self) -> bool {
        self.correct_while_dragging
    }

    /// Enables or disables correction while a drag rests exactly on a page.
    ///
    /// Enabled by default. Without it, a user who drags onto a sentinel and
    /// keeps holding can drag past the end of the padded strip.
    pub fn set_correct_while_dragging(&mut self, enabled: bool) {
        self.correct_while_dragging = enabled;
    }

    /// Replaces the data source, returning the previous one.
    ///
    /// The scroll state is kept; the selection and initial page are cleared,
    /// so [`CircularPager::initial_position`] becomes the new source's first
    /// real slot. The container should be moved there afterwards.
    pub fn replace_source(&mut self, source: S) -> Result<S, LayoutError> {
        let layout = source.layout()?;
        debug!(
            "circular pager: source replaced ({} real pages, {} extra)",
            layout.real_count(),
            layout.extra_count()
        );
        self.layout = layout;
        self.selected = None;
        self.initial_page = 0;
        Ok(core::mem::replace(&mut self.source, source))
    }

    /// Resets the scroll state to idle and clears the selection.
    pub fn reset(&mut self) {
        self.state = ScrollState::Idle;
        self.selected = None;
    }

    /// Feeds one container event, returning a reposition to apply, if any.
    ///
    /// `current` is the container's padded position at the time of the event.
    pub fn handle_event(&mut self, event: PageEvent, current: usize) -> Option<Reposition> {
        match event {
            PageEvent::Scrolled { position, offset } => {
                if self.correct_while_dragging
                    && position == current
                    && offset == 0.0
                    && self.state == ScrollState::Dragging
                {
                    self.correction(current)
                } else {
                    None
                }
            }
            PageEvent::Selected(position) => {
                self.selected = Some(position);
                None
            }
            PageEvent::StateChanged(state) => {
                let fix = if state == ScrollState::Idle {
                    self.correction(current)
                } else {
                    None
                };
                if state != self.state {
                    trace!("circular pager: {:?} -> {:?}", self.state, state);
                }
                self.state = state;
                fix
            }
        }
    }

    /// Returns the silent jump that moves `current` off a sentinel, if needed.
    ///
    /// Applying the result and calling this again yields `None`.
    #[must_use]
    pub fn correction(&self, current: usize) -> Option<Reposition> {
        debug_assert_eq!(
            self.source.layout(),
            Ok(self.layout),
            "page source changed its layout without being re-wired"
        );
        let target = self.layout.canonical_position(current);
        if target == current {
            return None;
        }
        debug!("circular pager: snapping padded position {current} -> {target}");
        Some(Reposition::silent(target))
    }
}
