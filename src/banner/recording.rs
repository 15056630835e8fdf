// SPDX-License-Identifier: MPL-2.0
//! Headless collaborators that record what the banner asked for.
//!
//! Used by the test suites and by hosts that drive banners without a window.

use super::presenter::{Animation, BannerView, ExpandedView, Presenter, SoundService, Surface};
use super::session::SessionId;
use crate::error::SoundError;
use crate::notification::SoundCue;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// One call made on a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Attach(BannerView),
    Detach(SessionId),
    Animate(Animation),
    BannerOffset { session: SessionId, top: f32 },
    Expand(ExpandedView),
    OpenTextInput { session: SessionId, prompt: String },
    ContentOffset { session: SessionId, offset: f32 },
    DismissOpacity { session: SessionId, opacity: f32 },
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    surface: Option<Surface>,
    calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn with_surface(surface: Surface) -> Self {
        Self {
            surface: Some(surface),
            calls: Vec::new(),
        }
    }

    /// A presenter whose host has no surface yet.
    #[must_use]
    pub fn without_surface() -> Self {
        Self::default()
    }

    pub fn set_surface(&mut self, surface: Option<Surface>) {
        self.surface = surface;
    }

    #[must_use]
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<PresenterCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&PresenterCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn animations(&self) -> impl Iterator<Item = &Animation> {
        self.calls.iter().filter_map(|call| match call {
            PresenterCall::Animate(animation) => Some(animation),
            _ => None,
        })
    }

    /// The most recent animation request, if any.
    #[must_use]
    pub fn last_animation(&self) -> Option<Animation> {
        self.animations().last().copied()
    }
}

impl Presenter for RecordingPresenter {
    fn surface(&self) -> Option<Surface> {
        self.surface
    }

    fn attach(&mut self, _surface: Surface, view: BannerView) {
        self.calls.push(PresenterCall::Attach(view));
    }

    fn detach(&mut self, session: SessionId) {
        self.calls.push(PresenterCall::Detach(session));
    }

    fn animate(&mut self, animation: Animation) {
        self.calls.push(PresenterCall::Animate(animation));
    }

    fn set_banner_offset(&mut self, session: SessionId, top: f32) {
        self.calls.push(PresenterCall::BannerOffset { session, top });
    }

    fn expand(&mut self, view: ExpandedView) {
        self.calls.push(PresenterCall::Expand(view));
    }

    fn open_text_input(&mut self, session: SessionId, prompt: &str) {
        self.calls.push(PresenterCall::OpenTextInput {
            session,
            prompt: prompt.to_string(),
        });
    }

    fn set_content_offset(&mut self, session: SessionId, offset: f32) {
        self.calls.push(PresenterCall::ContentOffset { session, offset });
    }

    fn set_dismiss_opacity(&mut self, session: SessionId, opacity: f32) {
        self.calls.push(PresenterCall::DismissOpacity { session, opacity });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundEvent {
    /// A resource played, as `name.kind`.
    Played(String),
    SystemAlert,
    Vibrated,
}

/// Sound service that knows a fixed set of resources and logs every request.
///
/// The log is shared so it stays readable after the service was boxed into a
/// state machine.
#[derive(Debug, Default)]
pub struct RecordingSound {
    resources: HashSet<String>,
    log: Rc<RefCell<Vec<SoundEvent>>>,
}

impl RecordingSound {
    /// Resources are given as `name.kind`.
    pub fn with_resources<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resources: resources.into_iter().map(Into::into).collect(),
            log: Rc::default(),
        }
    }

    #[must_use]
    pub fn log(&self) -> Rc<RefCell<Vec<SoundEvent>>> {
        Rc::clone(&self.log)
    }
}

impl SoundService for RecordingSound {
    fn play(&mut self, cue: &SoundCue) -> Result<(), SoundError> {
        let file = format!("{}.{}", cue.name, cue.kind);
        if !self.resources.contains(&file) {
            return Err(SoundError::ResourceNotFound {
                name: cue.name.clone(),
                kind: cue.kind.clone(),
            });
        }
        self.log.borrow_mut().push(SoundEvent::Played(file));
        Ok(())
    }

    fn play_system_alert(&mut self) {
        self.log.borrow_mut().push(SoundEvent::SystemAlert);
    }

    fn vibrate(&mut self) {
        self.log.borrow_mut().push(SoundEvent::Vibrated);
    }
}
