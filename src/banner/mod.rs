// SPDX-License-Identifier: MPL-2.0
//! In-app notification banners.
//!
//! [`BannerStateMachine`] owns the lifecycle of the single live banner:
//! presentation (deferred while no surface exists), auto-hide, expansion into
//! the action card, gestures and teardown. Rendering, timers and sound are
//! injected through [`Presenter`], [`Scheduler`] and [`SoundService`], so the
//! machine runs headless in tests and behind the iced shell in the app.
//!
//! ```
//! use iced_banner::banner::{
//!     BannerPhase, BannerStateMachine, ManualScheduler, Presentation, RecordingPresenter, Surface,
//! };
//! use iced_banner::notification::NotificationRequest;
//! use std::time::Duration;
//!
//! let presenter = RecordingPresenter::with_surface(Surface::new(390.0, 844.0));
//! let mut banners = BannerStateMachine::new(presenter, ManualScheduler::new());
//!
//! let handle = banners.present(NotificationRequest::simple("Backup", "Finished in 3 min"));
//! assert_eq!(banners.phase_of(handle), Some(BannerPhase::Shown(Presentation::Collapsed)));
//!
//! banners.advance(Duration::from_secs(5));
//! assert_eq!(banners.phase_of(handle), Some(BannerPhase::Dismissed));
//! ```

mod machine;
mod presenter;
pub mod recording;
mod scheduler;
mod session;

pub use machine::{BannerHandle, BannerStateMachine, BannerTimings};
pub use presenter::{
    play_cue, Animation, AnimationKind, AppIdentity, BannerView, ExpandedView, IconImage,
    Presenter, ResourceLookup, SoundService, StaticResources, Surface,
};
pub use recording::{PresenterCall, RecordingPresenter, RecordingSound, SoundEvent};
pub use scheduler::{ManualScheduler, Scheduler, TimerEvent, TimerToken};
pub use session::{BannerPhase, Presentation, SessionId};
