// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the toast stack.
//!
//! Each visible toast is drawn on its own layer inside a single hover region
//! anchored to the toaster's corner, pushed away from the edge by its stack
//! offset. Collapsed stacks
//! only let the toasts behind the front one peek out; expanded stacks use
//! the full offsets computed by the toaster.

use super::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::config::{TOAST_WIDTH, VIEWPORT_OFFSET};
use crate::toaster::{Toast, ToastId, ToastType, Toaster, XPosition, YPosition};
use iced::widget::{
    button, container, mouse_area, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Interactions reported by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The cursor entered the stack.
    Entered,
    /// The cursor left the stack.
    Exited,
    /// A toast body was pressed; a swipe may follow.
    Pressed(ToastId),
    /// The close button of a toast was clicked.
    Close(ToastId),
}

/// Renders the toast overlay with all visible toasts.
///
/// The stack is one hover region anchored at the toaster's corner and sized
/// to cover every visible toast, including the gaps between expanded ones.
pub fn view_overlay(toaster: &Toaster) -> Element<'_, Event> {
    let options = toaster.options();
    let position = options.position;
    let visible: Vec<&Toast> = toaster.active().filter(|toast| toast.is_visible()).collect();

    let base = Space::new()
        .width(Length::Fixed(TOAST_WIDTH))
        .height(Length::Fixed(stack_extent(&visible, position.y)));

    let region = visible.iter().rev().copied().fold(Stack::new().push(base), |stack, toast| {
        let distance = edge_distance(toast, position.y);
        let padding = match position.y {
            YPosition::Top => Padding::ZERO.top(distance),
            YPosition::Bottom => Padding::ZERO.bottom(distance),
        };

        stack.push(
            Container::new(view_toast(toast, options.close_button, options.rich_colors))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(vertical(position.y))
                .padding(padding),
        )
    });

    Container::new(
        mouse_area(region)
            .on_enter(Event::Entered)
            .on_exit(Event::Exited),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(horizontal(position.x))
    .align_y(vertical(position.y))
    .padding(VIEWPORT_OFFSET)
    .into()
}

/// Renders a single toast card.
fn view_toast(toast: &Toast, close_button: bool, rich_colors: bool) -> Element<'_, Event> {
    let kind = toast.kind();
    let accent = accent_color(kind);

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(glyph) = severity_glyph(kind) {
        content = content.push(
            Container::new(Text::new(glyph).size(sizing::ICON_SM).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent),
                },
            ))
            .padding(spacing::XXS),
        );
    }

    let mut lines = Column::new().spacing(spacing::XXS).push(
        Text::new(toast.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );
    if let Some(description) = toast.description() {
        lines = lines.push(Text::new(description).size(typography::BODY_SM).style(
            |theme: &Theme| text::Style {
                color: Some(Color {
                    a: opacity::STACKED,
                    ..theme.palette().text
                }),
            },
        ));
    }
    content = content.push(Container::new(lines).width(Length::Fill));

    if close_button {
        content = content.push(
            button(Text::new("\u{2715}").size(typography::BODY_SM))
                .on_press(Event::Close(toast.id().clone()))
                .padding(spacing::XXS)
                .style(close_button_style),
        );
    }

    let dimmed = !toast.is_front() && !toast.is_expanded();
    let card = Container::new(content)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, kind, rich_colors, dimmed));

    mouse_area(card)
        .on_press(Event::Pressed(toast.id().clone()))
        .into()
}

/// Height needed to cover every visible toast from the anchored edge.
fn stack_extent(visible: &[&Toast], edge: YPosition) -> f32 {
    visible
        .iter()
        .map(|toast| edge_distance(toast, edge) + card_height(toast))
        .fold(0.0, f32::max)
}

fn card_height(toast: &Toast) -> f32 {
    if toast.initial_height() > 0.0 {
        toast.initial_height()
    } else {
        toast.estimated_height()
    }
}

/// Distance between the anchored edge and the toast, following the swipe.
fn edge_distance(toast: &Toast, edge: YPosition) -> f32 {
    let resting = if toast.is_expanded() {
        toast.offset()
    } else {
        toast.index() as f32 * sizing::COLLAPSED_PEEK
    };
    let moved = match edge {
        YPosition::Top => resting + toast.swipe_amount(),
        YPosition::Bottom => resting - toast.swipe_amount(),
    };
    moved.max(0.0)
}

fn horizontal(x: XPosition) -> alignment::Horizontal {
    match x {
        XPosition::Left => alignment::Horizontal::Left,
        XPosition::Center => alignment::Horizontal::Center,
        XPosition::Right => alignment::Horizontal::Right,
    }
}

fn vertical(y: YPosition) -> alignment::Vertical {
    match y {
        YPosition::Top => alignment::Vertical::Top,
        YPosition::Bottom => alignment::Vertical::Bottom,
    }
}

/// Returns the accent color for a toast type.
#[must_use]
pub fn accent_color(kind: ToastType) -> Color {
    match kind {
        ToastType::Success => palette::SUCCESS_500,
        ToastType::Error => palette::ERROR_500,
        ToastType::Info => palette::INFO_500,
        ToastType::Warning => palette::WARNING_500,
        ToastType::Neutral => palette::GRAY_400,
    }
}

fn rich_background(kind: ToastType) -> Option<Color> {
    match kind {
        ToastType::Success => Some(palette::SUCCESS_50),
        ToastType::Error => Some(palette::ERROR_50),
        ToastType::Info => Some(palette::INFO_50),
        ToastType::Warning => Some(palette::WARNING_50),
        ToastType::Neutral => None,
    }
}

fn severity_glyph(kind: ToastType) -> Option<&'static str> {
    match kind {
        ToastType::Success => Some("\u{2713}"),
        ToastType::Error => Some("\u{2716}"),
        ToastType::Info => Some("\u{2139}"),
        ToastType::Warning => Some("\u{26A0}"),
        ToastType::Neutral => None,
    }
}

/// Style function for the toast container.
fn toast_container_style(
    theme: &Theme,
    kind: ToastType,
    rich_colors: bool,
    dimmed: bool,
) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let background = if rich_colors {
        rich_background(kind).unwrap_or(base)
    } else {
        base
    };
    let (border_color, border_width) = match kind {
        ToastType::Neutral => (palette::GRAY_200, border::WIDTH_SM),
        _ => (accent_color(kind), border::WIDTH_MD),
    };
    let alpha = if dimmed { opacity::STACKED } else { opacity::OPAQUE };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..background
        })),
        border: iced::Border {
            color: border_color,
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GAP, MOUNT_DELAY_MS};
    use std::time::{Duration, Instant};

    fn stacked(count: usize) -> Toaster {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        for i in 0..count {
            toaster.success_at(format!("toast-{i}"), t0);
        }
        toaster.advance(t0 + Duration::from_millis(MOUNT_DELAY_MS));
        toaster
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, ToastType::Success, false, false);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn rich_colors_tint_the_background() {
        let style = toast_container_style(&Theme::Light, ToastType::Error, true, false);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::ERROR_50))
        );
    }

    #[test]
    fn accent_colors_are_distinct() {
        let kinds = [
            ToastType::Success,
            ToastType::Error,
            ToastType::Info,
            ToastType::Warning,
            ToastType::Neutral,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(accent_color(*a), accent_color(*b));
            }
        }
    }

    #[test]
    fn collapsed_toasts_peek_behind_the_front() {
        let toaster = stacked(3);
        let distances: Vec<f32> = toaster
            .toasts()
            .iter()
            .map(|t| edge_distance(t, YPosition::Bottom))
            .collect();
        assert_eq!(
            distances,
            vec![0.0, sizing::COLLAPSED_PEEK, 2.0 * sizing::COLLAPSED_PEEK]
        );
    }

    #[test]
    fn expanded_toasts_use_stack_offsets() {
        let mut toaster = stacked(2);
        toaster.mouse_enter();
        let back = &toaster.toasts()[1];
        assert_eq!(
            edge_distance(back, YPosition::Bottom),
            GAP + toaster.toasts()[0].initial_height()
        );
    }

    #[test]
    fn stack_extent_covers_gaps_between_expanded_toasts() {
        let mut toaster = stacked(2);
        toaster.mouse_enter();
        let visible: Vec<&Toast> = toaster.toasts().iter().collect();
        let front = toaster.toasts()[0].initial_height();
        let back = toaster.toasts()[1].initial_height();

        assert_eq!(
            stack_extent(&visible, YPosition::Bottom),
            front + GAP + back
        );
    }

    #[test]
    fn empty_stack_has_no_extent() {
        assert_eq!(stack_extent(&[], YPosition::Top), 0.0);
    }
}
