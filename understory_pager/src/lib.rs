// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: wrap-around paging primitives.
//!
//! A circular pager lets the user swipe past the last page onto the first (and
//! back) without a visible snap. The container is handed a *padded* strip: the
//! real pages plus `extra_count` sentinel duplicates mirrored from the opposite
//! end at each edge. When a gesture comes to rest on a sentinel, the container
//! is moved silently to the real slot that shows the same content.
//!
//! The core pieces are:
//!
//! - [`to_real_position`] and [`PaddedLayout`]: pure padded ↔ real index
//!   arithmetic.
//! - [`PageSource`]: the capability a data source implements (`count`,
//!   `extra_count`, `real_position`), with [`FixedPageSource`] as a simple
//!   implementation.
//! - [`CircularPager`]: a small state machine that consumes [`PageEvent`]s and
//!   emits silent [`Reposition`] commands.
//! - [`PageContainer`] and [`AttachedPager`]: wiring to a concrete container,
//!   scoped from [`CircularPager::attach`] to [`AttachedPager::detach`].
//!
//! This crate does not know about widgets, rendering, or animation. Host
//! frameworks are responsible for:
//!
//! - Rendering padded slot `p` with the content of real page
//!   [`PageSource::real_position`]`(p)`.
//! - Forwarding scroll, selection, and scroll-state events from their
//!   swipeable container.
//! - Honoring `animated: false` on a [`Reposition`] so the jump is invisible.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_pager::{
//!     CircularPager, FixedPageSource, PageContainer, PageEvent, ScrollState,
//! };
//!
//! struct Strip(usize);
//!
//! impl PageContainer for Strip {
//!     fn current_position(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn set_current_position(&mut self, position: usize, _animated: bool) {
//!         self.0 = position;
//!     }
//! }
//!
//! // Five real pages with two sentinels per edge: padded positions 0..9.
//! let mut pager = CircularPager::new(FixedPageSource::with_extra(5, 2)).attach(Strip(0));
//! assert_eq!(pager.current_real_position(), 0);
//!
//! // A swipe forward from the last real page lands on sentinel slot 7.
//! pager.container_mut().0 = 7;
//! pager.dispatch(PageEvent::StateChanged(ScrollState::Idle));
//!
//! // The container was moved to the real copy of page 0.
//! assert_eq!(pager.container().0, 2);
//! ```
//!
//! All operations are synchronous and expected to run on the UI thread.
//! Invalid layouts (a padded count of at most `2 * extra_count`) are rejected
//! when a source is wired; see [`LayoutError`].
//!
//! Diagnostics go through the [`log`] facade: silent repositions and wiring
//! changes at `debug`, scroll-state transitions at `trace`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod attached;
mod event;
mod index;
mod pager;
mod source;

pub use attached::{AttachedPager, PageContainer};
pub use event::{PageEvent, Reposition, ScrollState};
pub use index::{LayoutError, PaddedLayout, to_padded_position, to_real_position};
pub use pager::CircularPager;
pub use source::{FixedPageSource, PageSource};
