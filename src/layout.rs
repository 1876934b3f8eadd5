// SPDX-License-Identifier: MPL-2.0
//! Content layout arithmetic for the toast body.
//!
//! Given the container size, the style, and the measured sizes of the title
//! and message blocks, this module computes the rectangles of the three
//! optional subviews (image, title, message) and the final wrapper size.
//! It is pure arithmetic with no I/O; the [`ToastBody`](crate::widget)
//! widget feeds it real text measurements during its layout pass, and the
//! unit tests feed it synthetic ones.

use crate::style::ToastStyle;
use iced::{Rectangle, Size};

/// Line height factor matching the default relative line height used for
/// text layout (1.3 em).
const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Computed placement of the toast subviews and the enclosing wrapper size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFrame {
    pub image: Rectangle,
    pub title: Rectangle,
    pub message: Rectangle,
    pub size: Size,
}

/// Returns the image box: zero-sized when there is no image, otherwise the
/// style's image size anchored at (horizontal_padding, vertical_padding).
#[must_use]
pub fn image_box(style: &ToastStyle, has_image: bool) -> Rectangle {
    if has_image {
        Rectangle::new(
            iced::Point::new(style.horizontal_padding, style.vertical_padding),
            style.image_size,
        )
    } else {
        Rectangle::with_size(Size::ZERO)
    }
}

/// Returns the constraint box a text block is measured against.
///
/// Width is the container width scaled by the style's width percentage,
/// minus the image box width. Height is the container height scaled by the
/// height percentage, further capped to `max_lines` lines when a line limit
/// is set. Both title and message use this same formula, measured against
/// the same container bounds.
#[must_use]
pub fn text_constraints(
    container: Size,
    style: &ToastStyle,
    image_width: f32,
    font_size: f32,
    max_lines: usize,
) -> Size {
    let width =
        (container.width * style.max_width_percentage.value() - image_width).max(0.0);
    let mut height = container.height * style.max_height_percentage.value();
    if max_lines > 0 {
        height = height.min(max_lines as f32 * font_size * LINE_HEIGHT_FACTOR);
    }
    Size::new(width, height)
}

/// Computes subview rectangles and the wrapper size.
///
/// The title sits to the right of the image box, below the top padding. The
/// message sits at the same horizontal offset, below the title separated by
/// the vertical padding — or at the title's vertical offset when there is
/// no title. The wrapper grows to enclose whichever of the image box or the
/// text column reaches further, plus padding.
#[must_use]
pub fn frame(
    style: &ToastStyle,
    image: Rectangle,
    title: Option<Size>,
    message: Option<Size>,
) -> ContentFrame {
    let text_x = image.x + image.width + style.horizontal_padding;

    let title_rect = match title {
        Some(size) => Rectangle::new(
            iced::Point::new(text_x, style.vertical_padding),
            size,
        ),
        None => Rectangle::with_size(Size::ZERO),
    };

    // The message origin is computed below the title even when the message
    // itself is absent, so a title-only toast is still fully enclosed by the
    // height formula below.
    let message_y = title_rect.y + title_rect.height + style.vertical_padding;
    let message_rect = Rectangle::new(
        iced::Point::new(text_x, message_y),
        message.unwrap_or(Size::ZERO),
    );

    let longer_width = title_rect.width.max(message_rect.width);
    let longer_x = title_rect.x.max(message_rect.x);

    let wrapper_width = (image.width + 2.0 * style.horizontal_padding)
        .max(longer_x + longer_width + style.horizontal_padding);
    let wrapper_height = (message_rect.y + message_rect.height + style.vertical_padding)
        .max(image.height + 2.0 * style.vertical_padding);

    ContentFrame {
        image,
        title: title_rect,
        message: message_rect,
        size: Size::new(wrapper_width, wrapper_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    const CONTAINER: Size = Size::new(400.0, 800.0);

    fn style() -> ToastStyle {
        ToastStyle::default()
    }

    #[test]
    fn image_box_is_zero_without_image() {
        let rect = image_box(&style(), false);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn image_box_is_anchored_at_paddings() {
        let rect = image_box(&style(), true);
        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 10.0);
        assert_eq!(rect.width, 80.0);
        assert_eq!(rect.height, 80.0);
    }

    #[test]
    fn text_constraints_subtract_image_width() {
        let constraints = text_constraints(CONTAINER, &style(), 80.0, 16.0, 0);
        assert_eq!(constraints.width, 400.0 * 0.8 - 80.0);
        assert_eq!(constraints.height, 800.0 * 0.8);
    }

    #[test]
    fn text_constraints_never_go_negative() {
        let constraints = text_constraints(Size::new(50.0, 50.0), &style(), 80.0, 16.0, 0);
        assert_eq!(constraints.width, 0.0);
    }

    #[test]
    fn line_limit_caps_constraint_height() {
        let constraints = text_constraints(CONTAINER, &style(), 0.0, 16.0, 2);
        assert_eq!(constraints.height, 2.0 * 16.0 * 1.3);
    }

    #[test]
    fn message_only_layout_matches_hand_computation() {
        let s = style();
        let frame = frame(&s, image_box(&s, false), None, Some(Size::new(120.0, 40.0)));

        // No image, no title: message starts at the paddings.
        assert_eq!(frame.message.position(), Point::new(10.0, 10.0));
        // Width: message right edge plus trailing padding.
        assert_eq!(frame.size.width, 10.0 + 120.0 + 10.0);
        // Height: message bottom edge plus trailing padding.
        assert_eq!(frame.size.height, 10.0 + 40.0 + 10.0);
    }

    #[test]
    fn title_and_message_stack_vertically() {
        let s = style();
        let frame = frame(
            &s,
            image_box(&s, false),
            Some(Size::new(90.0, 20.0)),
            Some(Size::new(120.0, 40.0)),
        );

        assert_eq!(frame.title.position(), Point::new(10.0, 10.0));
        assert_eq!(frame.message.position(), Point::new(10.0, 10.0 + 20.0 + 10.0));
        assert_eq!(frame.size.width, 10.0 + 120.0 + 10.0);
        assert_eq!(frame.size.height, 40.0 + 40.0 + 10.0);
    }

    #[test]
    fn image_shifts_text_right_and_grows_wrapper() {
        let s = style();
        let image = image_box(&s, true);
        let frame = frame(&s, image, Some(Size::new(90.0, 20.0)), Some(Size::new(60.0, 30.0)));

        let text_x = 10.0 + 80.0 + 10.0;
        assert_eq!(frame.title.x, text_x);
        assert_eq!(frame.message.x, text_x);
        // Wrapper encloses the wider of image box and text column.
        assert_eq!(frame.size.width, text_x + 90.0 + 10.0);
        // Image is taller than the text column here.
        assert_eq!(frame.size.height, 80.0 + 20.0);
    }

    #[test]
    fn image_only_layout_is_padded_on_all_sides() {
        let s = style();
        let frame = frame(&s, image_box(&s, true), None, None);
        assert_eq!(frame.size, Size::new(80.0 + 20.0, 80.0 + 20.0));
    }

    #[test]
    fn title_only_layout_encloses_the_title() {
        let s = style();
        let frame = frame(&s, image_box(&s, false), Some(Size::new(90.0, 20.0)), None);
        assert!(frame.size.height >= frame.title.y + frame.title.height + s.vertical_padding);
        assert!(frame.size.width >= frame.title.x + frame.title.width + s.horizontal_padding);
    }

    #[test]
    fn wrapper_grows_monotonically_with_content() {
        let s = style();
        let image = image_box(&s, false);
        let small = frame(&s, image, None, Some(Size::new(50.0, 20.0)));
        let large = frame(&s, image, None, Some(Size::new(150.0, 80.0)));
        assert!(large.size.width > small.size.width);
        assert!(large.size.height > small.size.height);
    }

    #[test]
    fn wrapper_always_encloses_image_box_plus_padding() {
        let s = style();
        let image = image_box(&s, true);
        for text in [Size::ZERO, Size::new(10.0, 5.0), Size::new(300.0, 200.0)] {
            let frame = frame(&s, image, Some(text), Some(text));
            assert!(frame.size.width >= image.width + 2.0 * s.horizontal_padding);
            assert!(frame.size.height >= image.height + 2.0 * s.vertical_padding);
        }
    }
}
