// SPDX-License-Identifier: MPL-2.0
//! Per-notification state owned by the banner state machine.

use super::scheduler::{Scheduler, TimerToken};
use crate::gesture::{CollapsedPan, ExpandedPan, GestureTuning};
use crate::notification::{
    AutoHide, BannerStyle, CompletionHandler, NotifyAction, RequestParts, SoundCue,
};
use std::fmt;

/// Identifies one presentation. Never reused within a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a shown banner is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Thin bar at the top of the surface.
    Collapsed,
    /// Full card with the action list over a dimmed backdrop.
    Expanded,
}

/// Lifecycle of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Created, waiting for a surface.
    Queued,
    Shown(Presentation),
    /// Terminal. Teardown may still be animating.
    Dismissed,
}

impl BannerPhase {
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, BannerPhase::Queued | BannerPhase::Shown(_))
    }
}

/// Timers a session may own. At most one of each kind.
#[derive(Debug, Default)]
pub(crate) struct SessionTimers {
    pub deferred: Option<TimerToken>,
    pub arm: Option<TimerToken>,
    pub auto_hide: Option<TimerToken>,
    /// The arm delay has passed; later delay changes restart the countdown.
    pub armed: bool,
}

impl SessionTimers {
    pub fn cancel_auto_hide(&mut self, scheduler: &mut impl Scheduler) {
        for token in [self.arm.take(), self.auto_hide.take()].into_iter().flatten() {
            scheduler.cancel(token);
        }
    }

    pub fn cancel_all(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(token) = self.deferred.take() {
            scheduler.cancel(token);
        }
        self.cancel_auto_hide(scheduler);
    }
}

pub(crate) struct BannerSession {
    pub id: SessionId,
    pub title: String,
    pub body: String,
    pub style: BannerStyle,
    pub auto_hide: AutoHide,
    pub sound: Option<SoundCue>,
    pub completion: Option<CompletionHandler>,
    /// Actions registered so far, in insertion order. Sorted on expansion.
    pub pending: Vec<NotifyAction>,
    /// Rendered action rows once expanded.
    pub rows: Vec<NotifyAction>,
    /// Action whose text field is showing. Replaces the rows while set.
    pub text_entry: Option<NotifyAction>,
    pub phase: BannerPhase,
    pub timers: SessionTimers,
    /// Whether the presenter currently holds a view for this session.
    pub attached: bool,
    pub collapsed_pan: CollapsedPan,
    pub expanded_pan: ExpandedPan,
}

impl BannerSession {
    pub fn new(id: SessionId, parts: RequestParts, tuning: GestureTuning) -> Self {
        Self {
            id,
            title: parts.title,
            body: parts.body,
            style: parts.style,
            auto_hide: parts.auto_hide,
            sound: parts.sound,
            completion: parts.completion,
            pending: parts.actions,
            rows: Vec::new(),
            text_entry: None,
            phase: BannerPhase::Queued,
            timers: SessionTimers::default(),
            attached: false,
            collapsed_pan: CollapsedPan::new(tuning),
            expanded_pan: ExpandedPan::new(tuning),
        }
    }

    /// Drops every action. Handlers are released without running.
    pub fn clear_actions(&mut self) {
        self.pending.clear();
        self.rows.clear();
        self.text_entry = None;
    }

    pub fn action_count(&self) -> usize {
        self.pending.len() + self.rows.len() + usize::from(self.text_entry.is_some())
    }
}

impl fmt::Debug for BannerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerSession")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("style", &self.style)
            .field("phase", &self.phase)
            .field("actions", &self.action_count())
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}
