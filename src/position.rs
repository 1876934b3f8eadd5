// SPDX-License-Identifier: MPL-2.0
//! Toast placement within the host container.
//!
//! A position is either a named anchor (top, center, bottom) resolved
//! against the container bounds and the measured toast size, or an explicit
//! center point that bypasses resolution entirely.

use iced::{Point, Size};

/// Where a toast or activity overlay is placed in its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastPosition {
    /// Horizontally centered, below the top edge.
    Top,
    /// The geometric center of the container.
    Center,
    /// Horizontally centered, above the bottom edge.
    Bottom,
    /// An explicit center point in container coordinates.
    Point(Point),
}

impl Default for ToastPosition {
    fn default() -> Self {
        Self::Bottom
    }
}

impl ToastPosition {
    /// Resolves this position to the center point of a toast of size
    /// `toast` inside a container of size `container`.
    ///
    /// `vertical_padding` is the offset from the relevant edge for the Top
    /// and Bottom anchors. Center ignores the toast size, and an explicit
    /// point is returned unchanged.
    #[must_use]
    pub fn center_in(self, container: Size, toast: Size, vertical_padding: f32) -> Point {
        match self {
            ToastPosition::Top => Point::new(
                container.width / 2.0,
                toast.height / 2.0 + vertical_padding,
            ),
            ToastPosition::Center => {
                Point::new(container.width / 2.0, container.height / 2.0)
            }
            ToastPosition::Bottom => Point::new(
                container.width / 2.0,
                container.height - toast.height / 2.0 - vertical_padding,
            ),
            ToastPosition::Point(point) => point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(400.0, 800.0);
    const TOAST: Size = Size::new(120.0, 60.0);

    #[test]
    fn top_sits_below_the_top_edge() {
        let center = ToastPosition::Top.center_in(CONTAINER, TOAST, 10.0);
        assert_eq!(center, Point::new(200.0, 40.0));
    }

    #[test]
    fn bottom_sits_above_the_bottom_edge() {
        let center = ToastPosition::Bottom.center_in(CONTAINER, TOAST, 10.0);
        assert_eq!(center, Point::new(200.0, 800.0 - 30.0 - 10.0));
    }

    #[test]
    fn center_ignores_toast_size() {
        let small = ToastPosition::Center.center_in(CONTAINER, TOAST, 10.0);
        let large = ToastPosition::Center.center_in(CONTAINER, Size::new(399.0, 799.0), 10.0);
        assert_eq!(small, Point::new(200.0, 400.0));
        assert_eq!(small, large);
    }

    #[test]
    fn explicit_point_bypasses_resolution() {
        let point = Point::new(110.0, 110.0);
        let center = ToastPosition::Point(point).center_in(CONTAINER, TOAST, 10.0);
        assert_eq!(center, point);
    }

    #[test]
    fn default_position_is_bottom() {
        assert_eq!(ToastPosition::default(), ToastPosition::Bottom);
    }
}
