// SPDX-License-Identifier: MPL-2.0
//! Application root state: an iced window hosting the banner core.
//!
//! The `App` struct owns the banner state machine, driven by a simulated
//! clock that the tick subscription advances, and a presenter that turns the
//! machine's calls into a scene the view renders. A few demo buttons post
//! banners so every presentation path can be exercised by hand.

mod demo;
mod message;
pub mod resources;
pub mod sound;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::banner::{BannerStateMachine, ManualScheduler, Presenter, Surface};
use crate::config::{self, Config};
use crate::gesture::Orientation;
use crate::i18n::fluent::I18n;
use crate::notification::AutoHide;
use crate::ui::pointer::PointerTracker;
use crate::ui::scene::IcedPresenter;
use demo::{DemoOptions, OutcomeLog};
use iced::{window, Element, Subscription, Task, Theme};
use resources::ConfigResources;
use sound::LogSound;
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    banners: BannerStateMachine<IcedPresenter, ManualScheduler>,
    pointer: PointerTracker,
    mirrored_landscape: bool,
    demo_options: DemoOptions,
    /// Result reported by the handlers of the last banner.
    outcome: OutcomeLog,
    /// Text typed into the reply field.
    reply: String,
    /// Time of the previous tick while ticks are running.
    last_tick: Option<Instant>,
    /// Translation key of a startup warning.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banners", &self.banners)
            .field("warning", &self.warning)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        (Self::with_config(flags, config, warning), Task::none())
    }

    fn with_config(flags: Flags, config: Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, &config);

        let auto_hide = flags
            .auto_hide
            .map(AutoHide::from_secs)
            .unwrap_or_else(|| config.auto_hide());
        let demo_options = DemoOptions {
            style: config.banner.style,
            auto_hide,
            sound: config.sound_cue(),
        };

        let surface = Surface::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let presenter = IcedPresenter::new(Some(surface));
        let banners = BannerStateMachine::new(presenter, ManualScheduler::new())
            .with_sound(LogSound)
            .with_resources(ConfigResources::from_config(&config))
            .with_timings(config.timings())
            .with_tuning(config.gesture_tuning())
            .with_mirrored_landscape(config.gesture.mirrored_landscape);

        if let Some(key) = &warning {
            tracing::warn!(key = %key, "using default configuration");
        }

        Self {
            i18n,
            banners,
            pointer: PointerTracker::default(),
            mirrored_landscape: config.gesture.mirrored_landscape,
            demo_options,
            outcome: OutcomeLog::default(),
            reply: String::new(),
            last_tick: None,
            warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn orientation(&self) -> Orientation {
        self.banners
            .presenter()
            .surface()
            .map(|surface| surface.orientation(self.mirrored_landscape))
            .unwrap_or_default()
    }

    /// Whether timers or animations are pending.
    fn needs_ticks(&self) -> bool {
        self.banners.is_live()
            || self.banners.presenter().is_animating()
            || self.banners.scheduler().pending_count() > 0
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_ticks()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        let presenter = self.banners.presenter();
        let surface = presenter.surface().unwrap_or(Surface::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));
        view::view(view::ViewContext {
            i18n: &self.i18n,
            scene: presenter.scene(),
            surface,
            orientation: self.orientation(),
            reply: &self.reply,
            outcome: self.outcome.borrow().clone(),
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{BannerPhase, Presentation};
    use crate::ui::banner::Event;
    use crate::ui::pointer::PointerTarget;
    use demo::Outcome;
    use iced::Point;
    use std::time::Duration;

    fn app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        };
        App::with_config(flags, Config::default(), None)
    }

    fn tick(app: &mut App, start: Instant, ms: u64) {
        let _ = app.update(Message::Tick(start + Duration::from_millis(ms)));
    }

    #[test]
    fn simple_banner_hides_after_default_delay() {
        let mut app = app();
        let _ = app.update(Message::ShowSimple);
        assert_eq!(app.banners.phase(), Some(BannerPhase::Shown(Presentation::Collapsed)));
        assert!(app.needs_ticks());

        let start = Instant::now();
        tick(&mut app, start, 0);
        for step in 1..=60 {
            tick(&mut app, start, step * 100);
        }
        assert_eq!(app.banners.phase(), Some(BannerPhase::Dismissed));
        assert!(app.banners.presenter().scene().is_none());
        assert!(!app.needs_ticks());
    }

    #[test]
    fn auto_hide_flag_overrides_config() {
        let flags = Flags {
            auto_hide: Some(0.0),
            ..Flags::default()
        };
        let app = App::with_config(flags, Config::default(), None);
        assert!(app.demo_options.auto_hide.is_disabled());
    }

    #[test]
    fn tapping_collapsed_banner_reports_opened() {
        let mut app = app();
        let _ = app.update(Message::ShowSimple);
        let _ = app.update(Message::CursorMoved(Point::new(100.0, 40.0)));
        let _ = app.update(Message::Banner(Event::Pressed(PointerTarget::Banner)));
        let _ = app.update(Message::PointerReleased);

        assert_eq!(*app.outcome.borrow(), Some(Outcome::Opened));
        assert_eq!(app.banners.phase(), Some(BannerPhase::Dismissed));
    }

    #[test]
    fn reply_field_submits_typed_text() {
        let mut app = app();
        let _ = app.update(Message::ShowReply);
        assert!(app.banners.expand());

        let _ = app.update(Message::Banner(Event::ReplyChanged("see you".to_string())));
        let _ = app.update(Message::Banner(Event::ReplySubmitted));

        assert_eq!(*app.outcome.borrow(), Some(Outcome::Reply("see you".to_string())));
        assert!(app.reply.is_empty());
    }

    #[test]
    fn close_button_dismisses_without_outcome() {
        let mut app = app();
        let _ = app.update(Message::ShowDetailed);
        assert!(app.banners.expand());

        let _ = app.update(Message::Banner(Event::ClosePressed));
        assert_eq!(app.banners.phase(), Some(BannerPhase::Dismissed));
        assert_eq!(*app.outcome.borrow(), None);
    }

    #[test]
    fn backdrop_press_inside_action_list_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::ShowDetailed);
        assert!(app.banners.expand());

        let surface = app.banners.presenter().surface().unwrap();
        let layout = app
            .banners
            .presenter()
            .scene()
            .and_then(|scene| scene.card_layout(surface, Orientation::Portrait))
            .unwrap();
        let list = layout.action_list.unwrap();

        let _ = app.update(Message::CursorMoved(Point::new(list.x + 5.0, list.y + 5.0)));
        let _ = app.update(Message::Banner(Event::Pressed(PointerTarget::Backdrop)));
        assert!(!app.pointer.is_pressed());

        let _ = app.update(Message::CursorMoved(Point::new(2.0, surface.height - 2.0)));
        let _ = app.update(Message::Banner(Event::Pressed(PointerTarget::Backdrop)));
        assert!(app.pointer.is_pressed());
        let _ = app.update(Message::PointerReleased);
        assert_eq!(app.banners.phase(), Some(BannerPhase::Dismissed));
    }
}
