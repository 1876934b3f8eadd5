// SPDX-License-Identifier: MPL-2.0
//! Rendering layer for toast and activity overlays.
//!
//! The controller state is turned into a transparent [`Stack`] layer the
//! host application places above its content:
//!
//! - [`body::ToastBody`] draws one toast — background quad, optional image,
//!   title, and message — sizing itself with the arithmetic in
//!   [`crate::layout`].
//! - [`anchored::Anchored`] fills the container and places its child at the
//!   center point resolved by [`crate::position`].
//! - [`spinner::ActivitySpinner`] is the canvas program inside the activity
//!   box.
//!
//! Fades are rendered by multiplying every drawn color's alpha by the
//! lifecycle opacity; nothing here owns state or timers.

mod anchored;
mod body;
mod spinner;

use crate::manager::{Message, RenderedActivity, Toasts};
use anchored::Anchored;
use body::ToastBody;
use spinner::ActivitySpinner;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, Stack};
use iced::{Background, Border, Color, Element, Length, Shadow, Theme};
use std::f32::consts::TAU;
use std::time::Instant;

/// Spinner revolutions per second.
const SPINNER_SPEED: f32 = 0.8;
/// Spinner diameter as a fraction of the activity box's smaller dimension.
const SPINNER_SCALE: f32 = 0.4;

/// Builds the overlay layer for a controller: every live toast plus the
/// activity indicator, each anchored at its resolved position.
pub(crate) fn overlay(toasts: &Toasts) -> Element<'_, Message> {
    let now = Instant::now();
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    for toast in toasts.render_toasts(now) {
        let vertical_padding = toast.style.vertical_padding;
        let position = toast.position;
        let body = ToastBody::new(
            toast.content,
            toast.style,
            toast.opacity,
            toast.tap.map(Message::Tapped),
        );
        layers = layers.push(Anchored::new(body, position, vertical_padding));
    }

    if let Some(activity) = toasts.render_activity(now) {
        let vertical_padding = activity.style.vertical_padding;
        let position = activity.position;
        layers = layers.push(Anchored::new(
            activity_box(activity),
            position,
            vertical_padding,
        ));
    }

    layers.into()
}

/// The activity indicator: a styled box with a centered spinner.
fn activity_box<'a>(activity: RenderedActivity) -> Element<'a, Message> {
    let style = activity.style;
    let opacity = activity.opacity;

    let rotation = activity.elapsed.as_secs_f32() * SPINNER_SPEED * TAU;
    let diameter = (style.activity_size.width.min(style.activity_size.height) * SPINNER_SCALE)
        .max(16.0);
    let spinner =
        ActivitySpinner::new(faded(Color::WHITE, opacity), rotation, diameter).into_element();

    let background = faded(style.background_color, opacity);
    let shadow = if style.display_shadow {
        Shadow {
            color: faded(style.shadow_color, style.shadow_opacity * opacity),
            offset: style.shadow_offset,
            blur_radius: style.shadow_radius,
        }
    } else {
        Shadow::default()
    };
    let radius = style.corner_radius;

    container(spinner)
        .width(Length::Fixed(style.activity_size.width))
        .height(Length::Fixed(style.activity_size.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            shadow,
            ..container::Style::default()
        })
        .into()
}

/// Multiplies a color's alpha by the lifecycle opacity.
pub(crate) fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_existing_alpha() {
        let base = Color {
            a: 0.8,
            ..Color::BLACK
        };
        let result = faded(base, 0.5);
        assert!((result.a - 0.4).abs() < f32::EPSILON);
        assert_eq!(result.r, base.r);
    }

    #[test]
    fn faded_at_full_opacity_is_identity() {
        let base = Color::WHITE;
        assert_eq!(faded(base, 1.0), base);
    }
}
