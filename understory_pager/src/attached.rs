// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring a [`CircularPager`] to a concrete page container.
//!
//! [`CircularPager::attach`] places the container on its first real page and
//! returns an [`AttachedPager`]. The attachment is the subscription: every
//! container event goes through [`AttachedPager::dispatch`] until
//! [`AttachedPager::detach`] hands the pager and the container back.
//!
//! `dispatch` borrows the container mutably while it applies a reposition, so
//! the pager can never run inside its own callback. Containers that raise
//! events synchronously from [`PageContainer::set_current_position`] must
//! queue them and dispatch them afterwards.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pager::{CircularPager, FixedPageSource, PageContainer, PageEvent, ScrollState};
//!
//! #[derive(Default)]
//! struct Strip {
//!     current: usize,
//! }
//!
//! impl PageContainer for Strip {
//!     fn current_position(&self) -> usize {
//!         self.current
//!     }
//!
//!     fn set_current_position(&mut self, position: usize, _animated: bool) {
//!         self.current = position;
//!     }
//! }
//!
//! let mut pager = CircularPager::new(FixedPageSource::new(3)).attach(Strip::default());
//! assert_eq!(pager.container().current, 1);
//!
//! // A swipe back from the first page lands on the leading sentinel.
//! pager.container_mut().current = 0;
//! pager.dispatch(PageEvent::StateChanged(ScrollState::Idle));
//! assert_eq!(pager.container().current, 3);
//! assert_eq!(pager.current_real_position(), 2);
//!
//! let (_pager, strip) = pager.detach();
//! assert_eq!(strip.current, 3);
//! ```

use log::debug;

use crate::event::{PageEvent, Reposition};
use crate::index::LayoutError;
use crate::pager::CircularPager;
use crate::source::PageSource;

/// A horizontally swipeable host for padded pages.
pub trait PageContainer {
    /// Padded position currently shown.
    fn current_position(&self) -> usize;

    /// Moves to `position`, animating the transition if `animated` is set.
    fn set_current_position(&mut self, position: usize, animated: bool);
}

impl<C: PageContainer + ?Sized> PageContainer for &mut C {
    fn current_position(&self) -> usize {
        (**self).current_position()
    }

    fn set_current_position(&mut self, position: usize, animated: bool) {
        (**self).set_current_position(position, animated);
    }
}

/// A [`CircularPager`] subscribed to a container's event stream.
#[derive(Debug)]
pub struct AttachedPager<S, C> {
    pager: CircularPager<S>,
    container: C,
}

impl<S: PageSource> CircularPager<S> {
    /// Attaches to `container`, moving it silently to the initial page.
    pub fn attach<C: PageContainer>(self, mut container: C) -> AttachedPager<S, C> {
        let position = self.initial_position();
        debug!("circular pager: attached at padded position {position}");
        container.set_current_position(position, false);
        AttachedPager {
            pager: self,
            container,
        }
    }
}

impl<S: PageSource, C: PageContainer> AttachedPager<S, C> {
    /// Feeds one container event and applies any resulting reposition.
    ///
    /// Returns the reposition that was applied.
    pub fn dispatch(&mut self, event: PageEvent) -> Option<Reposition> {
        let current = self.container.current_position();
        let fix = self.pager.handle_event(event, current)?;
        self.container.set_current_position(fix.position, fix.animated);
        Some(fix)
    }

    /// Feeds a sequence of events in order.
    ///
    /// Returns the number of repositions applied.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = PageEvent>) -> usize {
        events
            .into_iter()
            .filter_map(|event| self.dispatch(event))
            .count()
    }

    /// Moves the container to the padded slot of `real_position`.
    ///
    /// Out-of-range pages wrap into the real range.
    pub fn scroll_to_real(&mut self, real_position: usize, animated: bool) {
        let position = self.pager.layout().to_padded(real_position);
        self.container.set_current_position(position, animated);
    }

    /// Real page shown by the container.
    #[must_use]
    pub fn current_real_position(&self) -> usize {
        self.pager
            .layout()
            .to_real(self.container.current_position())
    }

    /// Swaps the data source and moves the container to its first real slot.
    ///
    /// Any initial page set with [`CircularPager::with_initial_page`] applies
    /// to the first attach only. On error the previous source stays wired and the container is not moved.
    pub fn set_source(&mut self, source: S) -> Result<S, LayoutError> {
        let old = self.pager.replace_source(source)?;
        let position = self.pager.layout().to_padded(0);
        self.container.set_current_position(position, false);
        Ok(old)
    }

    /// Returns the pager.
    #[must_use]
    pub fn pager(&self) -> &CircularPager<S> {
        &self.pager
    }

    /// Returns the pager mutably, for configuration.
    pub fn pager_mut(&mut self) -> &mut CircularPager<S> {
        &mut self.pager
    }

    /// Returns the container.
    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Returns the container mutably.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Ends the subscription, returning the pager (reset to idle) and container.
    #[must_use]
    pub fn detach(self) -> (CircularPager<S>, C) {
        let Self {
            mut pager,
            container,
        } = self;
        pager.reset();
        debug!("circular pager: detached");
        (pager, container)
    }
}
