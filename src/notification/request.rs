// SPDX-License-Identifier: MPL-2.0
//! The caller-side description of one notification.

use super::action::NotifyAction;
use crate::config::{DEFAULT_AUTO_HIDE_SECS, MAX_AUTO_HIDE_SECS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a banner may be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BannerStyle {
    /// Single banner; it can be swiped up or tapped, never expanded.
    #[default]
    SimpleBanner,
    /// Banner that opens into a detailed card with actions when swiped down.
    DetailedBanner,
}

impl BannerStyle {
    #[must_use]
    pub fn can_expand(self) -> bool {
        self == BannerStyle::DetailedBanner
    }
}

/// Auto-hide delay in seconds. Zero disables auto-hide.
///
/// The timer is armed one second after the banner shows, so the remaining
/// countdown at that point is one second shorter than the configured value.
///
/// # Example
///
/// ```
/// use iced_banner::notification::AutoHide;
/// use std::time::Duration;
///
/// let hide = AutoHide::from_secs(5.0);
/// assert_eq!(hide.remaining_after_arm(), Duration::from_secs(4));
/// assert!(AutoHide::from_secs(-3.0).is_disabled());
/// assert_eq!(AutoHide::from_secs(f64::INFINITY).secs(), 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AutoHide(f64);

impl AutoHide {
    pub const DISABLED: AutoHide = AutoHide(0.0);

    /// Creates an auto-hide delay. Negative and NaN values disable it; longer
    /// delays, infinity included, are capped at [`MAX_AUTO_HIDE_SECS`].
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::DISABLED;
        }
        Self(secs.clamp(0.0, MAX_AUTO_HIDE_SECS))
    }

    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 == 0.0
    }

    /// Countdown left once the timer is armed.
    #[must_use]
    pub fn remaining_after_arm(self) -> Duration {
        Duration::from_secs_f64((self.0 - 1.0).max(0.0))
    }
}

impl Default for AutoHide {
    fn default() -> Self {
        Self(DEFAULT_AUTO_HIDE_SECS)
    }
}

/// Sound played when the banner appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCue {
    /// Resource name without extension.
    pub name: String,
    /// Resource type, e.g. `wav` or `mp3`.
    pub kind: String,
    /// Also trigger a vibration.
    #[serde(default)]
    pub vibrate: bool,
}

impl SoundCue {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, vibrate: bool) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            vibrate,
        }
    }
}

/// Callback invoked with `true` when the user opens the banner.
pub type CompletionHandler = Box<dyn FnOnce(bool)>;

/// A notification to present.
pub struct NotificationRequest {
    title: String,
    body: String,
    style: BannerStyle,
    actions: Vec<NotifyAction>,
    auto_hide: AutoHide,
    sound: Option<SoundCue>,
    completion: Option<CompletionHandler>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>, style: BannerStyle) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            style,
            actions: Vec::new(),
            auto_hide: AutoHide::default(),
            sound: None,
            completion: None,
        }
    }

    pub fn simple(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, BannerStyle::SimpleBanner)
    }

    pub fn detailed(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, BannerStyle::DetailedBanner)
    }

    /// Appends an action. Order of insertion is preserved.
    #[must_use]
    pub fn with_action(mut self, action: NotifyAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: AutoHide) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    #[must_use]
    pub fn with_sound(mut self, cue: SoundCue) -> Self {
        self.sound = Some(cue);
        self
    }

    #[must_use]
    pub fn on_complete(mut self, handler: impl FnOnce(bool) + 'static) -> Self {
        self.completion = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn style(&self) -> BannerStyle {
        self.style
    }

    #[must_use]
    pub fn auto_hide(&self) -> AutoHide {
        self.auto_hide
    }

    #[must_use]
    pub fn sound(&self) -> Option<&SoundCue> {
        self.sound.as_ref()
    }

    #[must_use]
    pub fn actions(&self) -> &[NotifyAction] {
        &self.actions
    }

    /// Title on the first line, body on the second.
    #[must_use]
    pub fn header_text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }

    /// Splits the request into the parts a session owns.
    pub(crate) fn into_parts(self) -> RequestParts {
        RequestParts {
            title: self.title,
            body: self.body,
            style: self.style,
            actions: self.actions,
            auto_hide: self.auto_hide,
            sound: self.sound,
            completion: self.completion,
        }
    }
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("style", &self.style)
            .field("actions", &self.actions)
            .field("auto_hide", &self.auto_hide)
            .field("sound", &self.sound)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

pub(crate) struct RequestParts {
    pub title: String,
    pub body: String,
    pub style: BannerStyle,
    pub actions: Vec<NotifyAction>,
    pub auto_hide: AutoHide,
    pub sound: Option<SoundCue>,
    pub completion: Option<CompletionHandler>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::ActionStyle;

    #[test]
    fn default_auto_hide_is_five_seconds() {
        let request = NotificationRequest::simple("Title", "Body");
        assert_eq!(request.auto_hide().secs(), 5.0);
        assert_eq!(request.auto_hide().remaining_after_arm(), Duration::from_secs(4));
    }

    #[test]
    fn auto_hide_below_one_second_arms_immediately() {
        assert_eq!(AutoHide::from_secs(0.5).remaining_after_arm(), Duration::ZERO);
        assert!(!AutoHide::from_secs(0.5).is_disabled());
    }

    #[test]
    fn auto_hide_rejects_nan() {
        assert!(AutoHide::from_secs(f64::NAN).is_disabled());
    }

    #[test]
    fn auto_hide_caps_huge_and_infinite_delays() {
        for secs in [f64::INFINITY, 1e20, MAX_AUTO_HIDE_SECS + 1.0] {
            let hide = AutoHide::from_secs(secs);
            assert_eq!(hide.secs(), MAX_AUTO_HIDE_SECS);
            assert_eq!(
                hide.remaining_after_arm(),
                Duration::from_secs_f64(MAX_AUTO_HIDE_SECS - 1.0)
            );
        }
    }

    #[test]
    fn builder_keeps_action_order() {
        let request = NotificationRequest::detailed("Mail", "New message")
            .with_action(NotifyAction::without_handler("A", ActionStyle::Default))
            .with_action(NotifyAction::without_handler("B", ActionStyle::Cancel));

        let titles: Vec<&str> = request.actions().iter().map(NotifyAction::title).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(request.style(), BannerStyle::DetailedBanner);
    }

    #[test]
    fn header_text_joins_title_and_body() {
        let request = NotificationRequest::simple("", "Body only");
        assert_eq!(request.header_text(), "\nBody only");
    }

    #[test]
    fn only_detailed_banners_expand() {
        assert!(BannerStyle::DetailedBanner.can_expand());
        assert!(!BannerStyle::SimpleBanner.can_expand());
    }
}
