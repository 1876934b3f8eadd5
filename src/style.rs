// SPDX-License-Identifier: MPL-2.0
//! Visual configuration for toast and activity overlays.
//!
//! A [`ToastStyle`] is a plain value object: it carries colors, fonts,
//! paddings, sizing limits, shadow parameters, and the fade duration, and has
//! no behavior beyond clamping its two percentage fields. Styles are cheap to
//! copy and are resolved once per show request, so mutating a style after a
//! toast is on screen does not affect it.

use iced::alignment::Horizontal;
use iced::{Color, Font, Size, Vector};
use std::time::Duration;

/// A size fraction of the host container.
///
/// This newtype enforces validity at the type level: the wrapped value is
/// always within [0.0, 1.0]. Clamping an already-valid value is a no-op.
///
/// # Example
///
/// ```
/// use iced_toast::Percentage;
///
/// let p = Percentage::new(0.8);
/// assert_eq!(p.value(), 0.8);
///
/// // Values outside range are clamped
/// let too_high = Percentage::new(3.0);
/// assert_eq!(too_high.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(f32);

impl Percentage {
    /// Creates a new percentage, clamping to [0.0, 1.0].
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Percentage {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self(DEFAULT_MAX_SIZE_PERCENTAGE)
    }
}

pub const DEFAULT_MAX_SIZE_PERCENTAGE: f32 = 0.8;
pub const DEFAULT_PADDING: f32 = 10.0;
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const DEFAULT_FADE_MILLIS: u64 = 200;

/// Visual parameters for a toast.
///
/// The defaults produce a dark, slightly translucent pill with white text
/// and a 200 ms fade. All fields are public; construct with
/// `ToastStyle { ..Default::default() }` and override what you need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    /// Background of the toast wrapper and the activity box.
    pub background_color: Color,
    /// Title text color.
    pub title_color: Color,
    /// Message text color.
    pub message_color: Color,
    /// Maximum toast width as a fraction of the container width.
    pub max_width_percentage: Percentage,
    /// Maximum toast height as a fraction of the container height.
    pub max_height_percentage: Percentage,
    /// Spacing from the left/right edges of the wrapper and between the
    /// image box and the text column.
    pub horizontal_padding: f32,
    /// Spacing from the top/bottom edges of the wrapper, between title and
    /// message, and from the container edge for the Top/Bottom anchors.
    pub vertical_padding: f32,
    pub corner_radius: f32,
    pub title_font: Font,
    pub title_size: f32,
    pub message_font: Font,
    pub message_size: f32,
    pub title_alignment: Horizontal,
    pub message_alignment: Horizontal,
    /// Maximum number of title lines; 0 means unbounded.
    pub title_max_lines: usize,
    /// Maximum number of message lines; 0 means unbounded.
    pub message_max_lines: usize,
    pub display_shadow: bool,
    pub shadow_color: Color,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub shadow_offset: Vector,
    /// Size of the image box when the toast carries an image.
    pub image_size: Size,
    /// Size of the activity indicator box.
    pub activity_size: Size,
    /// Duration of the fade-in and fade-out transitions.
    pub fade_duration: Duration,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            background_color: Color {
                a: 0.8,
                ..Color::BLACK
            },
            title_color: Color::WHITE,
            message_color: Color::WHITE,
            max_width_percentage: Percentage::default(),
            max_height_percentage: Percentage::default(),
            horizontal_padding: DEFAULT_PADDING,
            vertical_padding: DEFAULT_PADDING,
            corner_radius: DEFAULT_CORNER_RADIUS,
            title_font: Font {
                weight: iced::font::Weight::Bold,
                ..Font::default()
            },
            title_size: DEFAULT_FONT_SIZE,
            message_font: Font::default(),
            message_size: DEFAULT_FONT_SIZE,
            title_alignment: Horizontal::Left,
            message_alignment: Horizontal::Left,
            title_max_lines: 0,
            message_max_lines: 0,
            display_shadow: false,
            shadow_color: Color::BLACK,
            shadow_opacity: 0.8,
            shadow_radius: 6.0,
            shadow_offset: Vector::new(4.0, 4.0),
            image_size: Size::new(80.0, 80.0),
            activity_size: Size::new(100.0, 100.0),
            fade_duration: Duration::from_millis(DEFAULT_FADE_MILLIS),
        }
    }
}
