// SPDX-License-Identifier: MPL-2.0
//! The banner state machine.
//!
//! At most one banner is live at a time. Presenting a new one tears the old
//! one down on the spot, without animation and without calling its completion
//! handler. A banner moves `Queued -> Shown(Collapsed) [-> Shown(Expanded)]
//! -> Dismissed`; teardown side effects run exactly once no matter how many
//! dismiss paths race.

use super::presenter::{
    play_cue, Animation, AnimationKind, BannerView, ExpandedView, Presenter, ResourceLookup,
    SoundService, StaticResources, Surface,
};
use super::scheduler::{ManualScheduler, Scheduler, TimerEvent};
use super::session::{BannerPhase, BannerSession, Presentation, SessionId};
use crate::config::{
    AUTO_HIDE_ARM_DELAY_SECS, CONTENT_OUT_MS, DEFAULT_SURFACE_RETRY_SECS, DISMISS_PULSE_MS,
    EXPAND_POP_MS, SLIDE_ANIMATION_MS,
};
use crate::gesture::{
    route_tap, Commit, GestureEffect, GestureTuning, Orientation, PanEvent, TapDecision, TapTarget,
};
use crate::notification::{
    sort_actions, ActionRow, ActionStyle, AutoHide, NotificationRequest, NotifyAction,
};
use std::time::Duration;

/// Delays and animation durations used by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerTimings {
    /// Wait before retrying presentation when no surface was available.
    pub surface_retry: Duration,
    /// Wait between showing the banner and arming the auto-hide countdown.
    pub arm_delay: Duration,
    pub slide: Duration,
    pub expand_pop: Duration,
    pub dismiss_pulse: Duration,
    pub content_out: Duration,
}

impl Default for BannerTimings {
    fn default() -> Self {
        Self {
            surface_retry: Duration::from_secs_f64(DEFAULT_SURFACE_RETRY_SECS),
            arm_delay: Duration::from_secs_f64(AUTO_HIDE_ARM_DELAY_SECS),
            slide: Duration::from_millis(SLIDE_ANIMATION_MS),
            expand_pop: Duration::from_millis(EXPAND_POP_MS),
            dismiss_pulse: Duration::from_millis(DISMISS_PULSE_MS),
            content_out: Duration::from_millis(CONTENT_OUT_MS),
        }
    }
}

/// Returned by [`BannerStateMachine::present`]. Used to add actions and change
/// the auto-hide delay of that presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerHandle {
    id: SessionId,
}

impl BannerHandle {
    #[must_use]
    pub fn id(self) -> SessionId {
        self.id
    }
}

pub struct BannerStateMachine<P, S> {
    presenter: P,
    scheduler: S,
    sound: Option<Box<dyn SoundService>>,
    resources: Box<dyn ResourceLookup>,
    timings: BannerTimings,
    tuning: GestureTuning,
    mirrored_landscape: bool,
    session: Option<BannerSession>,
    next_id: u64,
}

impl<P: Presenter, S: Scheduler> BannerStateMachine<P, S> {
    pub fn new(presenter: P, scheduler: S) -> Self {
        Self {
            presenter,
            scheduler,
            sound: None,
            resources: Box::new(StaticResources::default()),
            timings: BannerTimings::default(),
            tuning: GestureTuning::default(),
            mirrored_landscape: false,
            session: None,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn with_sound(mut self, sound: impl SoundService + 'static) -> Self {
        self.sound = Some(Box::new(sound));
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: impl ResourceLookup + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    #[must_use]
    pub fn with_timings(mut self, timings: BannerTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Tuning applies to banners presented afterwards.
    #[must_use]
    pub fn with_tuning(mut self, tuning: GestureTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Treat landscape surfaces as rotated the mirrored way.
    #[must_use]
    pub fn with_mirrored_landscape(mut self, mirrored: bool) -> Self {
        self.mirrored_landscape = mirrored;
        self
    }

    // ---------------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------------

    /// Presents a notification, replacing the live one if any.
    ///
    /// When the presenter has no surface yet, presentation is retried once
    /// after [`BannerTimings::surface_retry`]. If the surface is still missing
    /// then, the banner is dropped without calling anything.
    pub fn present(&mut self, request: NotificationRequest) -> BannerHandle {
        self.teardown_current();

        let id = SessionId::from_raw(self.next_id);
        self.next_id += 1;
        self.session = Some(BannerSession::new(id, request.into_parts(), self.tuning));
        tracing::debug!(session = %id, "banner queued");

        match self.presenter.surface() {
            Some(surface) => self.show(surface),
            None => {
                if let Some(session) = self.session.as_mut() {
                    let token = self.scheduler.schedule_once(
                        self.timings.surface_retry,
                        TimerEvent::DeferredPresent(id),
                    );
                    session.timers.deferred = Some(token);
                }
                tracing::info!(session = %id, "no surface yet, deferring presentation");
            }
        }

        BannerHandle { id }
    }

    /// Registers an action on a banner that has not expanded yet.
    ///
    /// Returns `false`, dropping the action, when the handle is stale or the
    /// banner already expanded or went away.
    pub fn add_action(&mut self, handle: BannerHandle, action: NotifyAction) -> bool {
        let Some(session) = self.session_for(handle) else {
            tracing::debug!(session = %handle.id, "action for stale banner dropped");
            return false;
        };
        match session.phase {
            BannerPhase::Queued | BannerPhase::Shown(Presentation::Collapsed) => {
                session.pending.push(action);
                true
            }
            phase => {
                tracing::debug!(session = %handle.id, ?phase, "action added too late, dropped");
                false
            }
        }
    }

    /// Changes the auto-hide delay of a live banner.
    ///
    /// Once the arm delay has passed the countdown restarts with the new
    /// delay, even if it was disabled before; [`AutoHide::DISABLED`] stops it.
    pub fn set_auto_hide_duration(&mut self, handle: BannerHandle, auto_hide: AutoHide) -> bool {
        let Some(session) = self.session_for(handle) else {
            return false;
        };
        if !session.phase.is_live() {
            return false;
        }
        session.auto_hide = auto_hide;
        if session.timers.armed {
            self.arm_auto_hide();
        }
        true
    }

    fn show(&mut self, surface: Surface) {
        let app = self.resources.app_identity();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let id = session.id;

        session.phase = BannerPhase::Shown(Presentation::Collapsed);
        session.attached = true;
        self.presenter.attach(
            surface,
            BannerView {
                session: id,
                app,
                title: session.title.clone(),
                body: session.body.clone(),
                style: session.style,
                top: self.tuning.resting_y,
            },
        );
        self.presenter
            .animate(Animation::new(id, AnimationKind::SlideIn, self.timings.slide));

        if let (Some(sound), Some(cue)) = (self.sound.as_mut(), session.sound.as_ref()) {
            play_cue(sound.as_mut(), cue);
        }

        session.timers.arm = Some(
            self.scheduler
                .schedule_once(self.timings.arm_delay, TimerEvent::ArmAutoHide(id)),
        );
        tracing::debug!(session = %id, style = ?session.style, "banner shown");
    }

    /// Dispatches a timer that came due.
    pub fn on_timer(&mut self, event: TimerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.id != event.session() {
            tracing::trace!(?event, "stale timer ignored");
            return;
        }

        match event {
            TimerEvent::DeferredPresent(id) => {
                session.timers.deferred = None;
                if session.phase != BannerPhase::Queued {
                    return;
                }
                match self.presenter.surface() {
                    Some(surface) => self.show(surface),
                    None => {
                        tracing::warn!(session = %id, "still no surface, banner dropped");
                        self.session = None;
                    }
                }
            }
            TimerEvent::ArmAutoHide(_) => {
                session.timers.arm = None;
                session.timers.armed = true;
                self.arm_auto_hide();
            }
            TimerEvent::AutoHide(_) => {
                session.timers.auto_hide = None;
                self.auto_hide_elapsed();
            }
        }
    }

    /// Starts (or restarts) the auto-hide countdown of a collapsed banner.
    fn arm_auto_hide(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(token) = session.timers.auto_hide.take() {
            self.scheduler.cancel(token);
        }
        if session.phase != BannerPhase::Shown(Presentation::Collapsed) {
            return;
        }
        if session.auto_hide.is_disabled() {
            tracing::debug!(session = %session.id, "auto-hide disabled");
            return;
        }

        let delay = session.auto_hide.remaining_after_arm();
        session.timers.auto_hide = Some(
            self.scheduler
                .schedule_once(delay, TimerEvent::AutoHide(session.id)),
        );
        tracing::trace!(session = %session.id, ?delay, "auto-hide armed");
    }

    /// The auto-hide countdown ran out. Dismisses without calling the
    /// completion handler.
    pub fn auto_hide_elapsed(&mut self) {
        if self.is_live() {
            tracing::debug!("auto-hide elapsed");
            self.dismiss();
        }
    }

    // ---------------------------------------------------------------------
    // Expansion and actions
    // ---------------------------------------------------------------------

    /// Turns a collapsed detailed banner into the expanded card.
    ///
    /// Stops the auto-hide countdown and sorts the registered actions.
    pub fn expand(&mut self) -> bool {
        let app = self.resources.app_identity();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.phase != BannerPhase::Shown(Presentation::Collapsed)
            || !session.style.can_expand()
        {
            tracing::debug!(session = %session.id, phase = ?session.phase, "expand ignored");
            return false;
        }

        session.timers.cancel_auto_hide(&mut self.scheduler);
        let sorted = sort_actions(std::mem::take(&mut session.pending));
        session.rows = sorted.rows;
        session.text_entry = sorted.text_entry;
        session.phase = BannerPhase::Shown(Presentation::Expanded);
        session.collapsed_pan.reset();
        session.expanded_pan.reset();

        let id = session.id;
        let prompt = session.text_entry.as_ref().map(|a| a.title().to_string());
        self.presenter.expand(ExpandedView {
            session: id,
            app,
            title: session.title.clone(),
            body: session.body.clone(),
            rows: session.rows.iter().map(NotifyAction::row).collect(),
            text_entry: prompt.clone(),
        });
        self.presenter
            .animate(Animation::new(id, AnimationKind::ExpandPop, self.timings.expand_pop));
        if let Some(prompt) = prompt {
            self.presenter.open_text_input(id, &prompt);
        }
        tracing::debug!(session = %id, rows = session.rows.len(), "banner expanded");
        true
    }

    /// The user pressed the action row at `index`.
    ///
    /// A text-input row opens the text field instead of responding; the
    /// action runs once the text is submitted.
    pub fn activate_row(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != BannerPhase::Shown(Presentation::Expanded)
            || session.text_entry.is_some()
            || index >= session.rows.len()
        {
            return;
        }

        let action = session.rows.remove(index);
        if action.style() == ActionStyle::TextInput {
            let id = session.id;
            let prompt = action.title().to_string();
            session.text_entry = Some(action);
            self.presenter.open_text_input(id, &prompt);
        } else {
            self.select_action(action);
        }
    }

    /// Submits the text field with `text` attached to its action.
    pub fn submit_text(&mut self, text: impl Into<String>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != BannerPhase::Shown(Presentation::Expanded) {
            return;
        }
        let Some(mut action) = session.text_entry.take() else {
            return;
        };
        action.set_text_response(text);
        self.select_action(action);
    }

    /// Runs an action's handler, then dismisses.
    ///
    /// The completion handler is not called: responding to an action is not
    /// the same as opening the notification.
    pub fn select_action(&mut self, action: NotifyAction) {
        if !self.is_live() {
            return;
        }
        let title = action.title().to_string();
        if !action.respond() {
            tracing::debug!(action = %title, "action has no handler");
        }
        self.dismiss();
    }

    /// The user opened the notification. Calls the completion handler with
    /// `true`, then dismisses.
    pub fn select_banner(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.phase.is_live() {
            return;
        }
        if let Some(done) = session.completion.take() {
            done(true);
        }
        self.dismiss();
    }

    /// Close button or backdrop tap of the expanded card.
    pub fn close(&mut self) {
        if self.phase() == Some(BannerPhase::Shown(Presentation::Expanded)) {
            self.dismiss();
        }
    }

    /// Closes the banner without calling anything. Safe to call repeatedly.
    ///
    /// The view is detached once the teardown animation reports back through
    /// [`on_animation_finished`](Self::on_animation_finished).
    pub fn dismiss(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.phase.is_live() {
            return;
        }

        session.timers.cancel_all(&mut self.scheduler);
        session.clear_actions();
        let previous = session.phase;
        session.phase = BannerPhase::Dismissed;

        let id = session.id;
        let teardown = match previous {
            BannerPhase::Shown(Presentation::Collapsed) => {
                Some(Animation::new(id, AnimationKind::SlideOut, self.timings.slide))
            }
            BannerPhase::Shown(Presentation::Expanded) => Some(Animation::new(
                id,
                AnimationKind::ContentOut,
                self.timings.content_out,
            )),
            BannerPhase::Queued | BannerPhase::Dismissed => None,
        };
        if let Some(animation) = teardown {
            self.presenter.animate(animation);
        }
        tracing::debug!(session = %id, from = ?previous, "banner dismissed");
    }

    /// Reports that an animation requested through the presenter finished.
    pub fn on_animation_finished(&mut self, animation: Animation) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.id != animation.session {
            return;
        }

        match animation.kind {
            AnimationKind::SlideOut | AnimationKind::ContentOut => {
                if session.phase == BannerPhase::Dismissed && session.attached {
                    session.attached = false;
                    self.presenter.detach(session.id);
                    tracing::trace!(session = %session.id, "banner detached");
                }
            }
            AnimationKind::Settle { .. } => session.collapsed_pan.reset(),
            AnimationKind::ContentReturn => session.expanded_pan.reset(),
            AnimationKind::SlideIn | AnimationKind::ExpandPop | AnimationKind::DismissPulse => {}
        }
    }

    fn teardown_current(&mut self) {
        let Some(mut old) = self.session.take() else {
            return;
        };
        old.timers.cancel_all(&mut self.scheduler);
        if old.attached {
            self.presenter.detach(old.id);
        }
        if old.phase.is_live() {
            tracing::debug!(session = %old.id, "live banner replaced");
        }
    }

    // ---------------------------------------------------------------------
    // Gestures
    // ---------------------------------------------------------------------

    /// Pan sample on the collapsed banner.
    pub fn on_banner_pan(&mut self, event: PanEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != BannerPhase::Shown(Presentation::Collapsed) {
            return;
        }
        let effects = session.collapsed_pan.handle(event, session.style);
        self.apply_effects(effects);
    }

    /// Pan sample on the expanded card.
    pub fn on_content_pan(&mut self, event: PanEvent, orientation: Orientation) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != BannerPhase::Shown(Presentation::Expanded) {
            return;
        }
        let effects = session.expanded_pan.handle(event, orientation);
        self.apply_effects(effects);
    }

    /// Pan sample on the expanded card, with the orientation derived from
    /// the presenter's surface.
    pub fn on_content_pan_auto(&mut self, event: PanEvent) {
        let orientation = self
            .presenter
            .surface()
            .map(|surface| surface.orientation(self.mirrored_landscape))
            .unwrap_or_default();
        self.on_content_pan(event, orientation);
    }

    /// Swipe on the dimmed backdrop of the expanded card. Opens the
    /// notification, like tapping the card.
    pub fn on_backdrop_swipe(&mut self) {
        if self.phase() == Some(BannerPhase::Shown(Presentation::Expanded)) {
            self.select_banner();
        }
    }

    pub fn on_tap(&mut self, target: TapTarget) {
        let Some(BannerPhase::Shown(presentation)) = self.phase() else {
            return;
        };
        match route_tap(target, presentation) {
            Some(TapDecision::SelectBanner) => self.select_banner(),
            Some(TapDecision::Dismiss) => self.dismiss(),
            None => {}
        }
    }

    fn apply_effects(&mut self, effects: Vec<GestureEffect>) {
        for effect in effects {
            let Some(id) = self.session.as_ref().map(|s| s.id) else {
                return;
            };
            match effect {
                GestureEffect::MoveBanner { top } => self.presenter.set_banner_offset(id, top),
                GestureEffect::SettleBanner { top } => self.presenter.animate(Animation::new(
                    id,
                    AnimationKind::Settle { top },
                    self.timings.slide,
                )),
                GestureEffect::MoveContent { offset } => {
                    self.presenter.set_content_offset(id, offset);
                }
                GestureEffect::ReturnContent => self.presenter.animate(Animation::new(
                    id,
                    AnimationKind::ContentReturn,
                    self.timings.slide,
                )),
                GestureEffect::SetDismissOpacity(opacity) => {
                    self.presenter.set_dismiss_opacity(id, opacity);
                }
                GestureEffect::PulseDismissLabel => self.presenter.animate(Animation::new(
                    id,
                    AnimationKind::DismissPulse,
                    self.timings.dismiss_pulse,
                )),
                GestureEffect::Commit(Commit::Expand) => {
                    self.expand();
                }
                GestureEffect::Commit(Commit::Dismiss) => self.dismiss(),
            }
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    fn session_for(&mut self, handle: BannerHandle) -> Option<&mut BannerSession> {
        self.session.as_mut().filter(|s| s.id == handle.id)
    }

    /// Phase of the most recent banner, `None` if there never was one or it
    /// was dropped.
    #[must_use]
    pub fn phase(&self) -> Option<BannerPhase> {
        self.session.as_ref().map(|s| s.phase)
    }

    /// Phase of the banner behind `handle`. `None` once it was replaced.
    #[must_use]
    pub fn phase_of(&self, handle: BannerHandle) -> Option<BannerPhase> {
        self.session
            .as_ref()
            .filter(|s| s.id == handle.id)
            .map(|s| s.phase)
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.phase().is_some_and(BannerPhase::is_live)
    }

    /// Handle of the most recent banner.
    #[must_use]
    pub fn current(&self) -> Option<BannerHandle> {
        self.session.as_ref().map(|s| BannerHandle { id: s.id })
    }

    /// Action rows of the expanded banner.
    #[must_use]
    pub fn rows(&self) -> Vec<ActionRow> {
        self.session
            .as_ref()
            .map(|s| s.rows.iter().map(NotifyAction::row).collect())
            .unwrap_or_default()
    }

    /// Placeholder of the open text field, if any.
    #[must_use]
    pub fn text_entry_prompt(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.text_entry.as_ref())
            .map(NotifyAction::title)
    }

    /// Number of actions still held by the current banner.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.session.as_ref().map_or(0, BannerSession::action_count)
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn timings(&self) -> BannerTimings {
        self.timings
    }

    #[must_use]
    pub fn tuning(&self) -> GestureTuning {
        self.tuning
    }
}

impl<P: Presenter> BannerStateMachine<P, ManualScheduler> {
    /// Moves the clock by `dt`, firing due timers in order, including the
    /// ones scheduled by earlier timers within the same window.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(event) = self.scheduler.pop_due(until) {
            self.on_timer(event);
        }
        self.scheduler.set_now(until);
    }
}

impl<P, S> std::fmt::Debug for BannerStateMachine<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerStateMachine")
            .field("session", &self.session)
            .field("timings", &self.timings)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::recording::{PresenterCall, RecordingPresenter, RecordingSound, SoundEvent};
    use crate::gesture::Vector;
    use crate::notification::{BannerStyle, SoundCue};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Machine = BannerStateMachine<RecordingPresenter, ManualScheduler>;

    fn machine() -> Machine {
        BannerStateMachine::new(
            RecordingPresenter::with_surface(Surface::new(390.0, 844.0)),
            ManualScheduler::new(),
        )
    }

    fn completion_log() -> (Rc<RefCell<Vec<bool>>>, impl FnOnce(bool) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |opened| sink.borrow_mut().push(opened))
    }

    fn finish_teardown(machine: &mut Machine) {
        if let Some(animation) = machine.presenter().last_animation() {
            machine.on_animation_finished(animation);
        }
    }

    #[test]
    fn present_with_surface_shows_collapsed() {
        let mut m = machine();
        let handle = m.present(NotificationRequest::simple("Hi", "there"));

        assert_eq!(m.phase_of(handle), Some(BannerPhase::Shown(Presentation::Collapsed)));
        let calls = m.presenter().calls();
        assert!(matches!(
            &calls[0],
            PresenterCall::Attach(view) if view.title == "Hi" && view.top == 10.0
        ));
        assert_eq!(m.presenter().last_animation().map(|a| a.kind), Some(AnimationKind::SlideIn));
    }

    #[test]
    fn missing_surface_defers_then_shows() {
        let mut m = BannerStateMachine::new(
            RecordingPresenter::without_surface(),
            ManualScheduler::new(),
        );
        let handle = m.present(NotificationRequest::simple("Later", ""));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Queued));

        m.presenter_mut().set_surface(Some(Surface::new(390.0, 844.0)));
        m.advance(Duration::from_millis(4999));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Queued));
        m.advance(Duration::from_millis(1));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Shown(Presentation::Collapsed)));
    }

    #[test]
    fn missing_surface_after_retry_drops_silently() {
        let (log, done) = completion_log();
        let mut m = BannerStateMachine::new(
            RecordingPresenter::without_surface(),
            ManualScheduler::new(),
        );
        let handle = m.present(NotificationRequest::simple("Never", "").on_complete(done));

        m.advance(Duration::from_secs(10));
        assert_eq!(m.phase_of(handle), None);
        assert!(m.presenter().calls().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn auto_hide_dismisses_after_configured_delay() {
        let mut m = machine();
        let handle = m.present(NotificationRequest::simple("t", "b"));

        m.advance(Duration::from_millis(4900));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Shown(Presentation::Collapsed)));
        m.advance(Duration::from_millis(100));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Dismissed));
        assert_eq!(m.presenter().last_animation().map(|a| a.kind), Some(AnimationKind::SlideOut));
    }

    #[test]
    fn disabled_auto_hide_keeps_banner() {
        let mut m = machine();
        let handle =
            m.present(NotificationRequest::simple("t", "b").with_auto_hide(AutoHide::DISABLED));

        m.advance(Duration::from_secs(60));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Shown(Presentation::Collapsed)));
        assert_eq!(m.scheduler().pending_count(), 0);
    }

    #[test]
    fn auto_hide_change_after_arming_restarts_countdown() {
        let mut m = machine();
        let handle = m.present(NotificationRequest::simple("t", "b"));
        m.advance(Duration::from_secs(2));

        assert!(m.set_auto_hide_duration(handle, AutoHide::from_secs(11.0)));
        m.advance(Duration::from_secs(9));
        assert!(m.is_live());
        m.advance(Duration::from_secs(1));
        assert!(!m.is_live());
    }

    #[test]
    fn enabling_auto_hide_after_arm_delay_starts_countdown() {
        let mut m = machine();
        let handle =
            m.present(NotificationRequest::simple("t", "b").with_auto_hide(AutoHide::DISABLED));
        m.advance(Duration::from_secs(2));
        assert_eq!(m.scheduler().pending_count(), 0);

        assert!(m.set_auto_hide_duration(handle, AutoHide::from_secs(3.0)));
        m.advance(Duration::from_millis(1900));
        assert!(m.is_live());
        m.advance(Duration::from_millis(100));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Dismissed));
    }

    #[test]
    fn enabling_auto_hide_before_arm_delay_waits_for_arm() {
        let mut m = machine();
        let handle =
            m.present(NotificationRequest::simple("t", "b").with_auto_hide(AutoHide::DISABLED));

        assert!(m.set_auto_hide_duration(handle, AutoHide::from_secs(3.0)));
        m.advance(Duration::from_millis(2900));
        assert!(m.is_live());
        m.advance(Duration::from_millis(100));
        assert!(!m.is_live());
    }

    #[test]
    fn infinite_auto_hide_is_capped_instead_of_panicking() {
        let mut m = machine();
        let forever = AutoHide::from_secs(f64::INFINITY);
        let handle = m.present(NotificationRequest::simple("t", "b").with_auto_hide(forever));

        m.advance(Duration::from_secs(2));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Shown(Presentation::Collapsed)));
        assert_eq!(m.scheduler().pending_count(), 1);
        m.advance(Duration::from_secs_f64(crate::config::MAX_AUTO_HIDE_SECS));
        assert_eq!(m.phase_of(handle), Some(BannerPhase::Dismissed));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut m = machine();
        m.present(NotificationRequest::simple("t", "b"));

        m.dismiss();
        m.dismiss();
        m.auto_hide_elapsed();

        let slide_outs = m.presenter().count(|c| {
            matches!(c, PresenterCall::Animate(a) if a.kind == AnimationKind::SlideOut)
        });
        assert_eq!(slide_outs, 1);

        finish_teardown(&mut m);
        finish_teardown(&mut m);
        assert_eq!(m.presenter().count(|c| matches!(c, PresenterCall::Detach(_))), 1);
    }

    #[test]
    fn replacing_live_banner_skips_old_completion() {
        let (log, done) = completion_log();
        let mut m = machine();
        let first = m.present(NotificationRequest::simple("one", "").on_complete(done));
        let second = m.present(NotificationRequest::simple("two", ""));

        assert_eq!(m.phase_of(first), None);
        assert_eq!(m.phase_of(second), Some(BannerPhase::Shown(Presentation::Collapsed)));
        assert!(m.presenter().calls().contains(&PresenterCall::Detach(first.id())));
        assert!(log.borrow().is_empty());

        // Timers of the replaced banner never fire.
        m.on_timer(TimerEvent::AutoHide(first.id()));
        assert!(m.is_live());
    }

    #[test]
    fn tap_on_banner_completes_once() {
        let (log, done) = completion_log();
        let mut m = machine();
        m.present(NotificationRequest::simple("t", "b").on_complete(done));

        m.on_tap(TapTarget::BannerBody);
        m.on_tap(TapTarget::BannerBody);
        m.select_banner();

        assert_eq!(*log.borrow(), vec![true]);
        assert_eq!(m.phase(), Some(BannerPhase::Dismissed));
    }

    #[test]
    fn expand_sorts_actions_and_stops_auto_hide() {
        let mut m = machine();
        let handle = m.present(NotificationRequest::detailed("t", "b"));
        assert!(m.add_action(handle, NotifyAction::without_handler("A", ActionStyle::Default)));
        assert!(m.add_action(handle, NotifyAction::without_handler("X", ActionStyle::Cancel)));
        assert!(m.add_action(handle, NotifyAction::without_handler("B", ActionStyle::Destructive)));

        assert!(m.expand());
        let titles: Vec<_> = m.rows().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, ["A", "B", "X"]);

        m.advance(Duration::from_secs(30));
        assert_eq!(m.phase(), Some(BannerPhase::Shown(Presentation::Expanded)));
        assert!(!m.add_action(handle, NotifyAction::without_handler("late", ActionStyle::Default)));
    }

    #[test]
    fn simple_banner_never_expands() {
        let mut m = machine();
        m.present(NotificationRequest::simple("t", "b"));
        assert!(!m.expand());
        assert_eq!(m.phase(), Some(BannerPhase::Shown(Presentation::Collapsed)));
    }

    #[test]
    fn action_row_runs_handler_without_completion() {
        let (log, done) = completion_log();
        let pressed = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&pressed);

        let mut m = machine();
        let handle = m.present(NotificationRequest::detailed("t", "b").on_complete(done));
        m.add_action(handle, NotifyAction::plain("Open", move |_| *counter.borrow_mut() += 1));
        m.expand();

        m.activate_row(0);
        m.activate_row(0);
        assert_eq!(*pressed.borrow(), 1);
        assert!(log.borrow().is_empty());
        assert_eq!(m.presenter().last_animation().map(|a| a.kind), Some(AnimationKind::ContentOut));
        assert_eq!(m.action_count(), 0);
    }

    #[test]
    fn text_input_row_opens_field_and_submits_text() {
        let reply = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&reply);

        let mut m = machine();
        let handle = m.present(NotificationRequest::detailed("t", "b"));
        m.add_action(
            handle,
            NotifyAction::text_input("Reply", move |a| {
                *sink.borrow_mut() = a.text_response().map(str::to_string);
            }),
        );
        m.expand();
        m.activate_row(0);

        assert_eq!(m.text_entry_prompt(), Some("Reply"));
        assert!(m.is_live());
        m.submit_text("on my way");
        assert_eq!(reply.borrow().as_deref(), Some("on my way"));
        assert!(!m.is_live());
    }

    #[test]
    fn only_text_input_replaces_rows_on_expand() {
        let mut m = machine();
        let handle = m.present(NotificationRequest::detailed("t", "b"));
        m.add_action(handle, NotifyAction::without_handler("Note", ActionStyle::OnlyTextInput));
        m.add_action(handle, NotifyAction::without_handler("Close", ActionStyle::Cancel));
        m.expand();

        assert_eq!(m.text_entry_prompt(), Some("Note"));
        assert!(m.presenter().calls().iter().any(|c| matches!(
            c,
            PresenterCall::OpenTextInput { prompt, .. } if prompt == "Note"
        )));
        // Rows stay computed underneath the text field, but cannot be pressed.
        assert_eq!(m.rows().len(), 1);
        m.activate_row(0);
        assert!(m.is_live());
    }

    #[test]
    fn backdrop_tap_dismisses_expanded_without_completion() {
        let (log, done) = completion_log();
        let mut m = machine();
        m.present(NotificationRequest::detailed("t", "b").on_complete(done));

        m.on_tap(TapTarget::Backdrop);
        assert!(m.is_live());

        m.expand();
        m.on_tap(TapTarget::ActionList);
        assert!(m.is_live());
        m.on_tap(TapTarget::Backdrop);
        assert!(!m.is_live());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn backdrop_swipe_opens_notification() {
        let (log, done) = completion_log();
        let mut m = machine();
        m.present(NotificationRequest::detailed("t", "b").on_complete(done));
        m.expand();

        m.on_backdrop_swipe();
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn downward_pan_expands_detailed_banner() {
        let mut m = machine();
        m.present(NotificationRequest::detailed("t", "b"));

        m.on_banner_pan(PanEvent::began(Vector::new(0.0, 50.0), Vector::new(0.0, 400.0)));
        m.on_banner_pan(PanEvent::changed(Vector::new(0.0, 50.0), Vector::new(0.0, 400.0)));
        assert_eq!(m.phase(), Some(BannerPhase::Shown(Presentation::Expanded)));

        // The rest of the drag no longer reaches the collapsed recognizer.
        m.on_banner_pan(PanEvent::ended(Vector::ZERO));
        assert_eq!(m.phase(), Some(BannerPhase::Shown(Presentation::Expanded)));
    }

    #[test]
    fn upward_fling_dismisses_collapsed_banner() {
        let (log, done) = completion_log();
        let mut m = machine();
        m.present(NotificationRequest::simple("t", "b").on_complete(done));

        m.on_banner_pan(PanEvent::changed(Vector::new(0.0, -40.0), Vector::new(0.0, -900.0)));
        m.on_banner_pan(PanEvent::ended(Vector::new(0.0, -900.0)));

        assert_eq!(m.phase(), Some(BannerPhase::Dismissed));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn short_pan_settles_and_recognizer_resets() {
        let mut m = machine();
        m.present(NotificationRequest::simple("t", "b"));

        m.on_banner_pan(PanEvent::changed(Vector::new(0.0, -5.0), Vector::new(0.0, -50.0)));
        m.on_banner_pan(PanEvent::ended(Vector::ZERO));
        let settle = m.presenter().last_animation();
        assert_eq!(settle.map(|a| a.kind), Some(AnimationKind::Settle { top: 10.0 }));

        if let Some(animation) = settle {
            m.on_animation_finished(animation);
        }
        assert!(m.is_live());
    }

    #[test]
    fn latched_content_pan_release_dismisses() {
        let (log, done) = completion_log();
        let mut m = machine();
        m.present(NotificationRequest::detailed("t", "b").on_complete(done));
        m.expand();

        m.on_content_pan(
            PanEvent::changed(Vector::new(0.0, 60.0), Vector::new(0.0, 2400.0)),
            Orientation::Portrait,
        );
        assert!(m.presenter().calls().iter().any(|c| matches!(
            c,
            PresenterCall::Animate(a) if a.kind == AnimationKind::DismissPulse
        )));
        m.on_content_pan(PanEvent::ended(Vector::ZERO), Orientation::Portrait);

        assert_eq!(m.phase(), Some(BannerPhase::Dismissed));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn sound_cue_plays_on_show_with_fallback() {
        let sound = RecordingSound::default();
        let log = sound.log();
        let mut m = machine().with_sound(sound);

        m.present(
            NotificationRequest::simple("t", "b").with_sound(SoundCue::new("chime", "wav", false)),
        );
        assert_eq!(*log.borrow(), vec![SoundEvent::SystemAlert]);
    }

    #[test]
    fn actions_added_while_queued_survive_presentation() {
        let mut m = BannerStateMachine::new(
            RecordingPresenter::without_surface(),
            ManualScheduler::new(),
        );
        let handle = m.present(NotificationRequest::new("t", "b", BannerStyle::DetailedBanner));
        assert!(m.add_action(handle, NotifyAction::without_handler("Later", ActionStyle::Default)));

        m.presenter_mut().set_surface(Some(Surface::new(390.0, 844.0)));
        m.advance(Duration::from_secs(5));
        assert!(m.expand());
        assert_eq!(m.rows().len(), 1);
    }

    #[test]
    fn dismissing_queued_banner_never_attaches() {
        let mut m = BannerStateMachine::new(
            RecordingPresenter::without_surface(),
            ManualScheduler::new(),
        );
        m.present(NotificationRequest::simple("t", "b"));
        m.dismiss();

        m.presenter_mut().set_surface(Some(Surface::new(390.0, 844.0)));
        m.advance(Duration::from_secs(10));
        assert!(m.presenter().calls().is_empty());
        assert_eq!(m.phase(), Some(BannerPhase::Dismissed));
    }
}
