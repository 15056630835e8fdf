// SPDX-License-Identifier: MPL-2.0
//! Notifications posted by the demo buttons.
//!
//! Handlers cannot reach `App::update` directly, so they record what happened
//! in a shared [`OutcomeLog`] that the view reads back.

use crate::i18n::fluent::I18n;
use crate::notification::{AutoHide, BannerStyle, NotificationRequest, NotifyAction, SoundCue};
use std::cell::RefCell;
use std::rc::Rc;

/// What the user did with the last banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened,
    Action(String),
    Reply(String),
}

pub type OutcomeLog = Rc<RefCell<Option<Outcome>>>;

/// Settings shared by every demo banner.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Style of the plain demo banner.
    pub style: BannerStyle,
    pub auto_hide: AutoHide,
    pub sound: Option<SoundCue>,
}

fn base(
    request: NotificationRequest,
    options: &DemoOptions,
    log: &OutcomeLog,
) -> NotificationRequest {
    let sink = Rc::clone(log);
    let request = request
        .with_auto_hide(options.auto_hide)
        .on_complete(move |selected| {
            if selected {
                *sink.borrow_mut() = Some(Outcome::Opened);
            }
        });
    match &options.sound {
        Some(cue) => request.with_sound(cue.clone()),
        None => request,
    }
}

fn record_action(log: &OutcomeLog) -> impl FnOnce(&NotifyAction) + 'static {
    let sink = Rc::clone(log);
    move |action| *sink.borrow_mut() = Some(Outcome::Action(action.title().to_string()))
}

fn record_reply(log: &OutcomeLog) -> impl FnOnce(&NotifyAction) + 'static {
    let sink = Rc::clone(log);
    move |action| {
        let text = action.text_response().unwrap_or_default().to_string();
        *sink.borrow_mut() = Some(Outcome::Reply(text));
    }
}

/// Banner without actions, in the configured style.
pub fn simple(i18n: &I18n, options: &DemoOptions, log: &OutcomeLog) -> NotificationRequest {
    base(
        NotificationRequest::new(
            i18n.tr("demo-simple-title"),
            i18n.tr("demo-simple-body"),
            options.style,
        ),
        options,
        log,
    )
}

/// Expandable banner with a mixed action list. Actions are added out of
/// order on purpose; the expanded card shows them sorted.
pub fn detailed(i18n: &I18n, options: &DemoOptions, log: &OutcomeLog) -> NotificationRequest {
    base(
        NotificationRequest::detailed(
            i18n.tr("demo-detailed-title"),
            i18n.tr("demo-detailed-body"),
        ),
        options,
        log,
    )
    .with_action(NotifyAction::cancel(i18n.tr("demo-action-cancel"), record_action(log)))
    .with_action(NotifyAction::plain(i18n.tr("demo-action-open"), record_action(log)))
    .with_action(NotifyAction::text_input(i18n.tr("demo-action-reply"), record_reply(log)))
    .with_action(NotifyAction::destructive(i18n.tr("demo-action-delete"), record_action(log)))
}

/// Expandable banner that opens straight into a text field.
pub fn reply(i18n: &I18n, options: &DemoOptions, log: &OutcomeLog) -> NotificationRequest {
    base(
        NotificationRequest::detailed(i18n.tr("demo-reply-title"), i18n.tr("demo-reply-body")),
        options,
        log,
    )
    .with_action(NotifyAction::only_text_input(i18n.tr("demo-action-note"), record_reply(log)))
}

/// Localized description of `outcome` for the status line.
pub fn describe(i18n: &I18n, outcome: Option<&Outcome>) -> String {
    let result = match outcome {
        None => i18n.tr("demo-result-none"),
        Some(Outcome::Opened) => i18n.tr("demo-result-opened"),
        Some(Outcome::Action(action)) => {
            i18n.tr_with_args("demo-result-action", &[("action", action.as_str())])
        }
        Some(Outcome::Reply(text)) => {
            i18n.tr_with_args("demo-result-reply", &[("text", text.as_str())])
        }
    };
    i18n.tr_with_args("demo-last-result", &[("result", result.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{sort_actions, ActionStyle};

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    #[test]
    fn detailed_request_carries_all_actions() {
        let log = OutcomeLog::default();
        let request = detailed(&english(), &DemoOptions::default(), &log);

        assert_eq!(request.style(), BannerStyle::DetailedBanner);
        let styles: Vec<ActionStyle> = request.actions().iter().map(|a| a.style()).collect();
        assert_eq!(styles.len(), 4);
        assert_eq!(styles[0], ActionStyle::Cancel);
    }

    #[test]
    fn plain_banner_uses_configured_style() {
        let options = DemoOptions {
            style: BannerStyle::DetailedBanner,
            ..DemoOptions::default()
        };
        let request = simple(&english(), &options, &OutcomeLog::default());
        assert_eq!(request.style(), BannerStyle::DetailedBanner);
        assert!(request.actions().is_empty());
    }

    #[test]
    fn action_handler_records_title() {
        let log = OutcomeLog::default();
        let handler = record_action(&log);
        handler(&NotifyAction::without_handler("Open", ActionStyle::Default));

        assert_eq!(*log.borrow(), Some(Outcome::Action("Open".to_string())));
    }

    #[test]
    fn reply_request_sorts_into_text_entry() {
        let log = OutcomeLog::default();
        let request = reply(&english(), &DemoOptions::default(), &log);
        let actions: Vec<NotifyAction> = request
            .actions()
            .iter()
            .map(|a| NotifyAction::without_handler(a.title(), a.style()))
            .collect();

        assert!(sort_actions(actions).shows_text_entry());
    }

    #[test]
    fn describe_formats_outcomes() {
        let i18n = english();
        assert_eq!(describe(&i18n, None), "Last result: nothing yet");
        assert_eq!(
            describe(&i18n, Some(&Outcome::Reply("hi".into()))),
            "Last result: reply \"hi\""
        );
    }
}
