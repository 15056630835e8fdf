// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo controls fill the window; the banner layer is stacked on top of
//! them whenever the presenter has a scene.

use super::demo::{self, Outcome};
use super::Message;
use crate::banner::Surface;
use crate::gesture::Orientation;
use crate::i18n::fluent::I18n;
use crate::ui::banner;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::scene::Scene;
use iced::widget::{button, text, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scene: Option<&'a Scene>,
    pub surface: Surface,
    pub orientation: Orientation,
    pub reply: &'a str,
    pub outcome: Option<Outcome>,
    /// Translation key of a startup warning, e.g. an unreadable config.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let demo_button = |key: &str, message: Message| {
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fixed(280.0))
    };

    let mut controls = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(demo_button("demo-show-simple", Message::ShowSimple))
        .push(demo_button("demo-show-detailed", Message::ShowDetailed))
        .push(demo_button("demo-show-reply", Message::ShowReply))
        .push(demo_button("demo-hide-banner", Message::HideBanner))
        .push(Text::new(demo::describe(i18n, ctx.outcome.as_ref())).size(typography::BODY));

    if let Some(key) = ctx.warning {
        controls = controls.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    let base = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    match ctx.scene {
        Some(scene) => {
            let layer = banner::view(banner::ViewContext {
                i18n,
                scene,
                surface: ctx.surface,
                orientation: ctx.orientation,
                reply: ctx.reply,
            })
            .map(Message::Banner);
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(base)
                .push(layer)
                .into()
        }
        None => base.into(),
    }
}
