// SPDX-License-Identifier: MPL-2.0
//! Banner widgets.
//!
//! Renders a [`Scene`] as either the collapsed bar sliding from the top edge
//! or the expanded card over a dimmed backdrop, with the action rows or the
//! reply field below it.

use crate::banner::{AppIdentity, IconImage, Surface};
use crate::config::BANNER_HEIGHT;
use crate::gesture::Orientation;
use crate::i18n::fluent::I18n;
use crate::notification::{ActionRow, ActionStyle};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::pointer::PointerTarget;
use crate::ui::scene::{content_width, Scene, SceneContent};
use iced::font::Weight;
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, container, mouse_area, text, text_input, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, mouse, Color, Element, Font, Length, Theme};

/// Interactions reported by the banner widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A press started on a draggable part of the banner.
    Pressed(PointerTarget),
    /// An action row was pressed; the index is into the sorted rows.
    ActionPressed(usize),
    ClosePressed,
    ReplyChanged(String),
    ReplySubmitted,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scene: &'a Scene,
    pub surface: Surface,
    pub orientation: Orientation,
    /// Text typed into the reply field so far.
    pub reply: &'a str,
}

/// Renders the banner layer. Meant to sit on top of the host content in a
/// [`Stack`].
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Event> {
    let scene = ctx.scene;
    match &scene.content {
        SceneContent::Collapsed => collapsed(&ctx),
        SceneContent::Expanded { rows, text_entry } => {
            expanded(&ctx, rows, text_entry.as_deref())
        }
    }
}

fn collapsed<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    let scene = ctx.scene;
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(header(ctx, false))
        .push(Text::new(&scene.title).size(typography::BODY_LG).font(bold()))
        .push(Text::new(&scene.body).size(typography::BODY));

    let bar = Container::new(content)
        .width(Length::Fixed(content_width(ctx.surface)))
        .height(Length::Fixed(BANNER_HEIGHT))
        .padding(spacing::SM)
        .style(|theme: &Theme| banner_style(theme, opacity::OPAQUE));
    let bar = mouse_area(bar)
        .on_press(Event::Pressed(PointerTarget::Banner))
        .interaction(mouse::Interaction::Grab);

    // Above the surface edge the bar is cut off rather than moved.
    let visible = (BANNER_HEIGHT + scene.banner_top.min(0.0)).max(0.0);
    let clipped = Container::new(bar)
        .height(Length::Fixed(visible))
        .align_y(alignment::Vertical::Bottom)
        .clip(true);

    Column::new()
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(Space::new().height(Length::Fixed(scene.banner_top.max(0.0))))
        .push(clipped)
        .into()
}

fn expanded<'a>(
    ctx: &ViewContext<'a>,
    rows: &'a [ActionRow],
    text_entry: Option<&'a str>,
) -> Element<'a, Event> {
    let scene = ctx.scene;
    let fade = scene.card_opacity;
    let dismiss_opacity = scene.dismiss_opacity;
    let width = content_width(ctx.surface);
    let shift = scene.content_translation(ctx.orientation);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| backdrop_style(fade)),
    )
    .on_press(Event::Pressed(PointerTarget::Backdrop));

    let dismiss_label = Container::new(
        Text::new(ctx.i18n.tr("banner-dismiss-label"))
            .size(typography::TITLE_MD * scene.dismiss_scale)
            .font(bold())
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: dismiss_opacity * fade,
                    ..palette::WHITE
                }),
            }),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(sizing::DISMISS_LABEL_OFFSET))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let message = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(&scene.title).size(typography::BODY_LG).font(bold()))
        .push(Text::new(&scene.body).size(typography::BODY));
    let card = Column::new()
        .push(
            Container::new(header(ctx, true))
                .height(Length::Fixed(sizing::CARD_HEADER_HEIGHT))
                .padding([spacing::XS, spacing::SM])
                .align_y(alignment::Vertical::Center),
        )
        .push(
            Container::new(message)
                .height(Length::Fixed(sizing::CARD_MESSAGE_HEIGHT))
                .padding([spacing::XS, spacing::SM])
                .clip(true),
        );
    let card = Container::new(card)
        .width(Length::Fixed(width * scene.card_scale))
        .style(move |theme: &Theme| banner_style(theme, fade));
    let card = mouse_area(card)
        .on_press(Event::Pressed(PointerTarget::Card))
        .interaction(mouse::Interaction::Grab);

    let mut column = Column::new()
        .push(Space::new().height(Length::Fixed(
            (sizing::CARD_TOP - sizing::DISMISS_LABEL_OFFSET + shift.y).max(0.0),
        )))
        .push(dismiss_label)
        .push(card);

    let actions = match text_entry {
        Some(prompt) => Some(reply_field(ctx, prompt, fade)),
        None if !rows.is_empty() => Some(action_list(rows, fade)),
        None => None,
    };
    if let Some(actions) = actions {
        column = column
            .push(Space::new().height(Length::Fixed(sizing::CARD_GAP)))
            .push(
                Container::new(actions)
                    .width(Length::Fixed(width))
                    .style(move |theme: &Theme| banner_style(theme, fade)),
            );
    }

    let left = ((ctx.surface.width - width) / 2.0 + shift.x).max(0.0);
    let foreground = Row::new()
        .push(Space::new().width(Length::Fixed(left)))
        .push(column.align_x(alignment::Horizontal::Center));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(foreground)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>, with_close: bool) -> Element<'a, Event> {
    let scene: &'a Scene = ctx.scene;
    let fade = scene.card_opacity;
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(app_icon(&scene.app))
        .push(Text::new(&scene.app.name).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("banner-now"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..theme.palette().text
                    }),
                }),
        );
    if with_close {
        row = row.push(
            button(Text::new(ctx.i18n.tr("banner-close-button")).size(typography::CAPTION))
                .on_press(Event::ClosePressed)
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme, status| {
                    action_button_style(theme, status, ActionStyle::Cancel, fade)
                }),
        );
    }
    row.into()
}

fn app_icon<'a>(app: &AppIdentity) -> Element<'a, Event> {
    match &app.icon {
        Some(IconImage(bytes)) => Image::new(Handle::from_bytes(bytes.clone()))
            .width(Length::Fixed(sizing::APP_ICON))
            .height(Length::Fixed(sizing::APP_ICON))
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fixed(sizing::APP_ICON))
            .height(Length::Fixed(sizing::APP_ICON))
            .style(icon_placeholder_style)
            .into(),
    }
}

fn action_list<'a>(rows: &'a [ActionRow], fade: f32) -> Element<'a, Event> {
    let buttons = rows.iter().enumerate().map(|(index, row)| -> Element<'a, Event> {
        let style = row.style;
        let label = Text::new(&row.title).size(typography::BODY_LG).font(
            if style.is_cancel() {
                bold()
            } else {
                Font::default()
            },
        );
        button(
            Container::new(label)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Event::ActionPressed(index))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ACTION_ROW_HEIGHT))
        .style(move |theme, status| action_button_style(theme, status, style, fade))
        .into()
    });
    Column::with_children(buttons).into()
}

fn reply_field<'a>(ctx: &ViewContext<'a>, prompt: &str, fade: f32) -> Element<'a, Event> {
    let input = text_input(prompt, ctx.reply)
        .on_input(Event::ReplyChanged)
        .on_submit(Event::ReplySubmitted)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let send = button(Text::new(ctx.i18n.tr("banner-send-button")).size(typography::BODY_LG))
        .on_press(Event::ReplySubmitted)
        .padding([spacing::XS, spacing::SM])
        .style(move |theme, status| action_button_style(theme, status, ActionStyle::Default, fade));

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(send),
    )
    .height(Length::Fixed(sizing::ACTION_ROW_HEIGHT))
    .padding([spacing::XXS, spacing::XS])
    .align_y(alignment::Vertical::Center)
    .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Text color of an action row.
fn action_text_color(theme: &Theme, style: ActionStyle) -> Color {
    match style {
        ActionStyle::Destructive => palette::ERROR_500,
        ActionStyle::Cancel => theme.palette().text,
        ActionStyle::Default | ActionStyle::TextInput | ActionStyle::OnlyTextInput => {
            palette::PRIMARY_500
        }
    }
}

/// Background of the collapsed bar and the expanded card.
fn banner_style(theme: &Theme, fade: f32) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * fade,
            ..base.color
        })),
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * fade,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: if fade < opacity::OPAQUE {
            shadow::NONE
        } else {
            shadow::LG
        },
        text_color: Some(Color {
            a: fade,
            ..base.text
        }),
        ..Default::default()
    }
}

fn backdrop_style(fade: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::BACKDROP * fade,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn icon_placeholder_style(theme: &Theme) -> container::Style {
    container::Style {
        border: iced::Border {
            color: theme.palette().text,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

fn action_button_style(
    theme: &Theme,
    status: button::Status,
    style: ActionStyle,
    fade: f32,
) -> button::Style {
    let text_color = Color {
        a: fade,
        ..action_text_color(theme, style)
    };
    let separator = iced::Border {
        color: Color {
            a: opacity::OVERLAY_SUBTLE * fade,
            ..palette::GRAY_400
        },
        width: border::WIDTH_SM,
        radius: radius::MD.into(),
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * fade,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * fade,
            ..palette::GRAY_400
        })),
    };

    button::Style {
        background,
        text_color,
        border: separator,
        shadow: shadow::NONE,
        snap: true,
    }
}
