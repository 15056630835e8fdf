// SPDX-License-Identifier: MPL-2.0
//! Boundary between the banner core and whatever draws it.
//!
//! The state machine never touches widgets. It describes what should be on
//! screen through a [`Presenter`], asks a [`SoundService`] for feedback and a
//! [`ResourceLookup`] for the host app's name and icon.

use super::session::SessionId;
use crate::config::DEFAULT_APP_NAME;
use crate::error::SoundError;
use crate::gesture::Orientation;
use crate::notification::{ActionRow, BannerStyle, SoundCue};
use std::time::Duration;

/// Size of the host surface the banner is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn orientation(&self, mirrored_landscape: bool) -> Orientation {
        Orientation::from_bounds(self.width, self.height, mirrored_landscape)
    }
}

/// Encoded icon bytes (PNG or similar), decoded by the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage(pub Vec<u8>);

/// Name and icon shown in the banner header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub name: String,
    pub icon: Option<IconImage>,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            icon: None,
        }
    }
}

/// Content of the collapsed banner.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerView {
    pub session: SessionId,
    pub app: AppIdentity,
    pub title: String,
    pub body: String,
    pub style: BannerStyle,
    /// Top edge once the slide-in finished.
    pub top: f32,
}

/// Content of the expanded card.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedView {
    pub session: SessionId,
    pub app: AppIdentity,
    pub title: String,
    pub body: String,
    /// Sorted action rows. Cancel, if any, is last.
    pub rows: Vec<ActionRow>,
    /// Placeholder of the text field that replaces the rows, if any.
    pub text_entry: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// Collapsed banner slides down from above the surface.
    SlideIn,
    /// Collapsed banner slides back up; the view is detached afterwards.
    SlideOut,
    /// Collapsed banner returns to `top` after an uncommitted drag.
    Settle { top: f32 },
    /// Expanded card pops in.
    ExpandPop,
    /// Dismiss hint scales up and back once.
    DismissPulse,
    /// Expanded content returns to its origin after an uncommitted drag.
    ContentReturn,
    /// Expanded card and backdrop fade out; the view is detached afterwards.
    ContentOut,
}

/// An animation request. The presenter reports completion by handing the
/// same value to
/// [`BannerStateMachine::on_animation_finished`](super::BannerStateMachine::on_animation_finished).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub session: SessionId,
    pub kind: AnimationKind,
    pub duration: Duration,
}

impl Animation {
    #[must_use]
    pub const fn new(session: SessionId, kind: AnimationKind, duration: Duration) -> Self {
        Self {
            session,
            kind,
            duration,
        }
    }

    /// Whether the view goes away once this animation finishes.
    #[must_use]
    pub fn is_teardown(&self) -> bool {
        matches!(self.kind, AnimationKind::SlideOut | AnimationKind::ContentOut)
    }
}

/// Draws banners. Implementations are driven from the UI thread only.
pub trait Presenter {
    /// The surface banners attach to, or `None` while the host has none yet.
    fn surface(&self) -> Option<Surface>;

    /// Shows the collapsed banner above the top edge of `surface`.
    fn attach(&mut self, surface: Surface, view: BannerView);

    /// Removes everything belonging to `session` at once.
    fn detach(&mut self, session: SessionId);

    fn animate(&mut self, animation: Animation);

    /// Moves the collapsed banner while it is being dragged.
    fn set_banner_offset(&mut self, session: SessionId, top: f32);

    /// Replaces the collapsed banner by the expanded card.
    fn expand(&mut self, view: ExpandedView);

    /// Hides the action rows and shows a text field with a send button.
    fn open_text_input(&mut self, session: SessionId, prompt: &str);

    /// Moves the expanded content while it is being dragged.
    fn set_content_offset(&mut self, session: SessionId, offset: f32);

    fn set_dismiss_opacity(&mut self, session: SessionId, opacity: f32);
}

/// Audio and haptic feedback.
pub trait SoundService {
    /// Plays a named sound resource.
    ///
    /// # Errors
    ///
    /// Returns [`SoundError::ResourceNotFound`] when the resource does not
    /// exist and [`SoundError::Playback`] when it could not be played.
    fn play(&mut self, cue: &SoundCue) -> Result<(), SoundError>;

    fn play_system_alert(&mut self);

    fn vibrate(&mut self);
}

/// Host application metadata.
pub trait ResourceLookup {
    fn app_identity(&self) -> AppIdentity;
}

/// Fixed identity, for hosts that know their name up front.
#[derive(Debug, Clone, Default)]
pub struct StaticResources(pub AppIdentity);

impl ResourceLookup for StaticResources {
    fn app_identity(&self) -> AppIdentity {
        self.0.clone()
    }
}

/// Vibrates if the cue asks for it, then plays `cue`. Falls back to the
/// system alert when the named resource cannot be played.
pub fn play_cue(service: &mut dyn SoundService, cue: &SoundCue) {
    if cue.vibrate {
        service.vibrate();
    }
    if let Err(err) = service.play(cue) {
        tracing::warn!(error = %err, "falling back to system alert");
        service.play_system_alert();
    }
}
