// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notification records: small cards
//! with a kind-coloured accent, optional actions, a dismiss button and a
//! progress indicator. The renderer only reads the manager; hover, dismiss
//! and action presses are reported back as [`NotificationMessage`]s.

use crate::notifications::{
    Manager, NotificationMessage, NotificationRecord, Position, ProgressStyle,
    Size, Variant,
};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, mouse_area, progress_bar, text, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(record: &NotificationRecord) -> Element<'_, NotificationMessage> {
        let request = record.request();
        let id = record.id();
        let accent_color = request.accent_color();
        let text_override = request.colors().text;

        let text_style = move |theme: &Theme| text::Style {
            color: Some(text_override.unwrap_or(theme.palette().text)),
        };

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = request.title() {
            body = body.push(Text::new(title).size(typography::TITLE_SM).style(text_style));
        }
        body = body.push(
            Text::new(request.content().to_plain_text())
                .size(typography::BODY)
                .style(text_style),
        );

        if !request.actions().is_empty() {
            let actions = request.actions().iter().enumerate().fold(
                Row::new().spacing(spacing::XS),
                |row, (index, action)| {
                    let style = action.style();
                    row.push(
                        button(Text::new(action.label()).size(typography::CAPTION))
                            .on_press(NotificationMessage::Action(id, index))
                            .padding(spacing::XXS)
                            .style(move |theme: &Theme, status| {
                                action_button_style(theme, status, style, accent_color)
                            }),
                    )
                },
            );
            body = body.push(actions);
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if request.shows_icon() {
            content = content.push(
                Container::new(
                    Text::new(request.icon_glyph())
                        .size(typography::BODY)
                        .style(move |_theme: &Theme| text::Style {
                            color: Some(accent_color),
                        }),
                )
                .padding(spacing::XXS),
            );
        }

        content = content.push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        if let (ProgressStyle::Circular, Some(fraction)) = (request.progress(), record.progress())
        {
            content = content.push(
                Text::new(progress_label(fraction))
                    .size(typography::CAPTION)
                    .style(text_style),
            );
        }

        if request.is_closable() {
            content = content.push(
                button(Text::new("×").size(typography::BODY))
                    .on_press(NotificationMessage::Dismiss(id))
                    .padding(spacing::XXS)
                    .style(dismiss_button_style),
            );
        }

        let mut card = Column::new().spacing(spacing::XS).push(content);
        if let (ProgressStyle::Linear, Some(fraction)) = (request.progress(), record.progress()) {
            card = card.push(progress_bar(0.0..=1.0, fraction));
        }

        let variant = request.variant();
        let background_override = request.colors().background;
        let toast = Container::new(card)
            .width(Length::Fixed(toast_width(request.size())))
            .padding(spacing::SM)
            .style(move |theme: &Theme| {
                toast_container_style(theme, variant, accent_color, background_override)
            });

        mouse_area(toast)
            .on_enter(NotificationMessage::HoverStart(id))
            .on_exit(NotificationMessage::HoverEnd(id))
            .into()
    }

    /// Renders every non-empty position as a stack anchored to its corner.
    ///
    /// Entries appear in bucket order, separated by the manager's spacing.
    pub fn view_overlay(manager: &Manager) -> Element<'_, NotificationMessage> {
        let gap = manager.spacing().value();

        manager
            .active_buckets()
            .fold(Stack::new(), |stack, bucket| {
                let position = bucket.position();
                let (horizontal, vertical) = alignment_for(position);
                let toasts: Vec<Element<'_, NotificationMessage>> =
                    bucket.iter().map(Self::view).collect();

                let column = Column::with_children(toasts)
                    .spacing(gap)
                    .align_x(horizontal);

                stack.push(
                    Container::new(column)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(horizontal)
                        .align_y(vertical)
                        .padding(spacing::MD),
                )
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Maps a screen anchor to container alignment.
fn alignment_for(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::CenterLeft | Position::BottomLeft => {
            alignment::Horizontal::Left
        }
        Position::TopCenter | Position::Center | Position::BottomCenter => {
            alignment::Horizontal::Center
        }
        Position::TopRight | Position::CenterRight | Position::BottomRight => {
            alignment::Horizontal::Right
        }
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else if position.is_bottom() {
        alignment::Vertical::Bottom
    } else {
        alignment::Vertical::Center
    };
    (horizontal, vertical)
}

fn toast_width(size: Size) -> f32 {
    match size {
        Size::Small => sizing::TOAST_WIDTH_SM,
        Size::Medium => sizing::TOAST_WIDTH,
        Size::Large => sizing::TOAST_WIDTH_LG,
    }
}

fn progress_label(fraction: f32) -> String {
    format!("{:.0}%", (fraction * 100.0).clamp(0.0, 100.0))
}

/// Style function for the toast container.
fn toast_container_style(
    theme: &Theme,
    variant: Variant,
    accent_color: Color,
    background: Option<Color>,
) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let fill = match variant {
        Variant::Filled => base,
        Variant::Soft => Color {
            a: opacity::SOFT_TINT,
            ..accent_color
        },
        Variant::Outlined => Color::TRANSPARENT,
    };
    let border_width = match variant {
        Variant::Soft => border::WIDTH_SM,
        Variant::Filled | Variant::Outlined => border::WIDTH_MD,
    };

    container::Style {
        background: Some(iced::Background::Color(background.unwrap_or(fill))),
        border: iced::Border {
            color: accent_color,
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow: match variant {
            Variant::Outlined => shadow::NONE,
            Variant::Filled | Variant::Soft => shadow::MD,
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn action_button_style(
    theme: &Theme,
    status: button::Status,
    variant: Variant,
    accent_color: Color,
) -> button::Style {
    let text_color = match variant {
        Variant::Filled => palette::WHITE,
        Variant::Outlined | Variant::Soft => accent_color,
    };
    let background = match (variant, status) {
        (Variant::Filled, button::Status::Hovered | button::Status::Pressed) => Some(Color {
            a: 0.85,
            ..accent_color
        }),
        (Variant::Filled, _) => Some(accent_color),
        (_, button::Status::Hovered | button::Status::Pressed) => Some(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent_color
        }),
        _ => None,
    };
    let border_width = if variant == Variant::Outlined {
        border::WIDTH_SM
    } else {
        0.0
    };

    button::Style {
        background: background.map(iced::Background::Color),
        text_color: if status == button::Status::Disabled {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..theme.palette().text
            }
        } else {
            text_color
        },
        border: iced::Border {
            color: accent_color,
            width: border_width,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: if status == button::Status::Pressed {
                    opacity::OVERLAY_MEDIUM
                } else {
                    opacity::OVERLAY_SUBTLE
                },
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
