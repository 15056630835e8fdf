// SPDX-License-Identifier: MPL-2.0
//! Render scene driven by the banner state machine.
//!
//! [`IcedPresenter`] implements [`Presenter`] by keeping a [`Scene`]: what is
//! attached, where it sits and which animations run. The view reads the scene
//! every frame and the tick subscription advances its animations, handing
//! finished ones back to the state machine.

use crate::banner::{
    Animation, AnimationKind, AppIdentity, BannerView, ExpandedView, Presenter, SessionId, Surface,
};
use crate::config::{BANNER_HEIGHT, DISMISS_PULSE_SCALE};
use crate::gesture::{Orientation, Rect, Vector};
use crate::notification::{ActionRow, BannerStyle};
use crate::ui::design_tokens::{sizing, spacing};
use std::f32::consts::PI;
use std::time::Duration;

/// Peak scale of the expanded card pop.
const EXPAND_POP_SCALE: f32 = 1.04;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneContent {
    Collapsed,
    Expanded {
        rows: Vec<ActionRow>,
        /// Placeholder of the open text field, if any.
        text_entry: Option<String>,
    },
}

/// Everything the view needs to draw the current banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub session: SessionId,
    pub app: AppIdentity,
    pub title: String,
    pub body: String,
    pub style: BannerStyle,
    pub content: SceneContent,
    /// Current top edge of the collapsed banner.
    pub banner_top: f32,
    /// Top edge the collapsed banner rests at.
    pub resting_top: f32,
    /// Offset of the expanded content along its pan axis.
    pub content_offset: f32,
    pub dismiss_opacity: f32,
    pub dismiss_scale: f32,
    pub card_scale: f32,
    /// Opacity of the expanded card and its backdrop.
    pub card_opacity: f32,
}

/// Screen rectangles of the expanded card, used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub card: Rect,
    pub action_list: Option<Rect>,
}

impl Scene {
    fn new(view: BannerView) -> Self {
        Self {
            session: view.session,
            app: view.app,
            title: view.title,
            body: view.body,
            style: view.style,
            content: SceneContent::Collapsed,
            banner_top: -BANNER_HEIGHT,
            resting_top: view.top,
            content_offset: 0.0,
            dismiss_opacity: 0.0,
            dismiss_scale: 1.0,
            card_scale: 1.0,
            card_opacity: 1.0,
        }
    }

    /// Screen translation of the expanded content.
    #[must_use]
    pub fn content_translation(&self, orientation: Orientation) -> Vector {
        match orientation {
            Orientation::Portrait => Vector::new(0.0, self.content_offset),
            Orientation::LandscapeLeft => Vector::new(self.content_offset, 0.0),
            Orientation::LandscapeRight => Vector::new(-self.content_offset, 0.0),
        }
    }

    /// Geometry of the expanded card on `surface`, `None` while collapsed.
    #[must_use]
    pub fn card_layout(&self, surface: Surface, orientation: Orientation) -> Option<CardLayout> {
        let SceneContent::Expanded { rows, text_entry } = &self.content else {
            return None;
        };
        let shift = self.content_translation(orientation);
        let width = content_width(surface);
        let x = (surface.width - width) / 2.0 + shift.x;
        let y = sizing::CARD_TOP + shift.y;
        let card_height = sizing::CARD_HEADER_HEIGHT + sizing::CARD_MESSAGE_HEIGHT;

        let row_count = if text_entry.is_some() { 1 } else { rows.len() };
        let action_list = (row_count > 0).then(|| {
            Rect::new(
                x,
                y + card_height + sizing::CARD_GAP,
                width,
                row_count as f32 * sizing::ACTION_ROW_HEIGHT,
            )
        });

        Some(CardLayout {
            card: Rect::new(x, y, width, card_height),
            action_list,
        })
    }
}

/// Width of the collapsed banner and of the expanded card.
#[must_use]
pub fn content_width(surface: Surface) -> f32 {
    (surface.width - 2.0 * spacing::MD).clamp(0.0, sizing::BANNER_MAX_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    BannerTop,
    ContentOffset,
    CardScale,
    CardOpacity,
    DismissScale,
}

impl Channel {
    fn of(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::SlideIn | AnimationKind::SlideOut | AnimationKind::Settle { .. } => {
                Channel::BannerTop
            }
            AnimationKind::ContentReturn => Channel::ContentOffset,
            AnimationKind::ExpandPop => Channel::CardScale,
            AnimationKind::ContentOut => Channel::CardOpacity,
            AnimationKind::DismissPulse => Channel::DismissScale,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Running {
    animation: Animation,
    channel: Channel,
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl Running {
    fn progress(&self) -> f32 {
        if self.animation.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.animation.duration.as_secs_f32()).min(1.0)
    }

    fn value(&self) -> f32 {
        let t = self.progress();
        match self.animation.kind {
            AnimationKind::ExpandPop | AnimationKind::DismissPulse => {
                self.from + (self.to - self.from) * (PI * t).sin()
            }
            _ => self.from + (self.to - self.from) * ease_out(t),
        }
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// [`Presenter`] that records a [`Scene`] for the iced view.
#[derive(Debug, Default)]
pub struct IcedPresenter {
    surface: Option<Surface>,
    scene: Option<Scene>,
    running: Vec<Running>,
}

impl IcedPresenter {
    #[must_use]
    pub fn new(surface: Option<Surface>) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Updates the host surface, e.g. after a window resize.
    pub fn set_surface(&mut self, surface: Option<Surface>) {
        self.surface = surface;
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Advances running animations by `dt` and returns those that finished.
    pub fn tick(&mut self, dt: Duration) -> Vec<Animation> {
        let Some(scene) = self.scene.as_mut() else {
            self.running.clear();
            return Vec::new();
        };

        let mut finished = Vec::new();
        for running in &mut self.running {
            running.elapsed += dt;
            apply(scene, running.channel, running.value());
            if running.progress() >= 1.0 {
                finished.push(running.animation);
            }
        }
        self.running.retain(|running| running.progress() < 1.0);
        finished
    }

    fn scene_for(&mut self, session: SessionId) -> Option<&mut Scene> {
        self.scene.as_mut().filter(|scene| scene.session == session)
    }

    fn stop_channel(&mut self, channel: Channel) {
        self.running.retain(|running| running.channel != channel);
    }
}

fn current(scene: &Scene, channel: Channel) -> f32 {
    match channel {
        Channel::BannerTop => scene.banner_top,
        Channel::ContentOffset => scene.content_offset,
        Channel::CardScale => scene.card_scale,
        Channel::CardOpacity => scene.card_opacity,
        Channel::DismissScale => scene.dismiss_scale,
    }
}

fn apply(scene: &mut Scene, channel: Channel, value: f32) {
    match channel {
        Channel::BannerTop => scene.banner_top = value,
        Channel::ContentOffset => scene.content_offset = value,
        Channel::CardScale => scene.card_scale = value,
        Channel::CardOpacity => scene.card_opacity = value,
        Channel::DismissScale => scene.dismiss_scale = value,
    }
}

impl Presenter for IcedPresenter {
    fn surface(&self) -> Option<Surface> {
        self.surface
    }

    fn attach(&mut self, _surface: Surface, view: BannerView) {
        tracing::debug!(session = %view.session, "attaching banner");
        self.running.clear();
        self.scene = Some(Scene::new(view));
    }

    fn detach(&mut self, session: SessionId) {
        if self.scene_for(session).is_some() {
            tracing::debug!(%session, "detaching banner");
            self.scene = None;
            self.running.clear();
        }
    }

    fn animate(&mut self, animation: Animation) {
        let Some(scene) = self.scene_for(animation.session) else {
            return;
        };
        let channel = Channel::of(animation.kind);
        let from = current(scene, channel);
        let (from, to) = match animation.kind {
            AnimationKind::SlideIn => (-BANNER_HEIGHT, scene.resting_top),
            AnimationKind::SlideOut => (from, -BANNER_HEIGHT),
            AnimationKind::Settle { top } => (from, top),
            AnimationKind::ContentReturn => (from, 0.0),
            AnimationKind::ContentOut => (from, 0.0),
            AnimationKind::ExpandPop => (1.0, EXPAND_POP_SCALE),
            AnimationKind::DismissPulse => (1.0, DISMISS_PULSE_SCALE),
        };
        self.stop_channel(channel);
        self.running.push(Running {
            animation,
            channel,
            from,
            to,
            elapsed: Duration::ZERO,
        });
    }

    fn set_banner_offset(&mut self, session: SessionId, top: f32) {
        if let Some(scene) = self.scene_for(session) {
            scene.banner_top = top;
            self.stop_channel(Channel::BannerTop);
        }
    }

    fn expand(&mut self, view: ExpandedView) {
        let Some(scene) = self.scene_for(view.session) else {
            return;
        };
        scene.app = view.app;
        scene.title = view.title;
        scene.body = view.body;
        scene.content = SceneContent::Expanded {
            rows: view.rows,
            text_entry: view.text_entry,
        };
        scene.content_offset = 0.0;
        scene.dismiss_opacity = 0.0;
        scene.card_opacity = 1.0;
        self.running.clear();
    }

    fn open_text_input(&mut self, session: SessionId, prompt: &str) {
        if let Some(scene) = self.scene_for(session) {
            if let SceneContent::Expanded { text_entry, .. } = &mut scene.content {
                *text_entry = Some(prompt.to_string());
            }
        }
    }

    fn set_content_offset(&mut self, session: SessionId, offset: f32) {
        if let Some(scene) = self.scene_for(session) {
            scene.content_offset = offset;
            self.stop_channel(Channel::ContentOffset);
        }
    }

    fn set_dismiss_opacity(&mut self, session: SessionId, opacity: f32) {
        if let Some(scene) = self.scene_for(session) {
            scene.dismiss_opacity = opacity.clamp(0.0, 1.0);
        }
    }
}
