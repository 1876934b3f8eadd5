// SPDX-License-Identifier: MPL-2.0
//! The toast body widget.
//!
//! Lays out its optional image, title, and message children with the
//! arithmetic in [`crate::layout`]: text children are measured against the
//! shared constraint box, rectangles are derived from the measured sizes,
//! and the widget sizes itself to the computed wrapper. Drawing paints the
//! background quad (corner radius, optional shadow) and then the children;
//! a press anywhere inside the body publishes the tap message.

use crate::content::ToastContent;
use crate::layout as toast_layout;
use crate::style::ToastStyle;
use crate::widget::faded;

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::text;
use iced::{
    Background, Border, ContentFit, Element, Event, Length, Rectangle, Renderer, Shadow, Size,
    Theme,
};

/// Child slots, in the order they appear in the children vector.
#[derive(Debug, Clone, Copy, Default)]
struct Slots {
    image: Option<usize>,
    title: Option<usize>,
    message: Option<usize>,
}

pub(crate) struct ToastBody<'a, Message> {
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    slots: Slots,
    style: ToastStyle,
    opacity: f32,
    on_press: Option<Message>,
}

impl<'a, Message> ToastBody<'a, Message> {
    pub fn new(
        content: &'a ToastContent,
        style: ToastStyle,
        opacity: f32,
        on_press: Option<Message>,
    ) -> Self {
        let mut children = Vec::new();
        let mut slots = Slots::default();

        if let Some(handle) = content.image() {
            slots.image = Some(children.len());
            children.push(
                iced::widget::image(handle.clone())
                    .width(Length::Fixed(style.image_size.width))
                    .height(Length::Fixed(style.image_size.height))
                    .content_fit(ContentFit::Contain)
                    .opacity(opacity)
                    .into(),
            );
        }

        if let Some(title) = content.title() {
            let color = faded(style.title_color, opacity);
            slots.title = Some(children.len());
            children.push(
                text(title)
                    .size(style.title_size)
                    .font(style.title_font)
                    .align_x(style.title_alignment)
                    .style(move |_theme: &Theme| text::Style { color: Some(color) })
                    .into(),
            );
        }

        if let Some(message) = content.message() {
            let color = faded(style.message_color, opacity);
            slots.message = Some(children.len());
            children.push(
                text(message)
                    .size(style.message_size)
                    .font(style.message_font)
                    .align_x(style.message_alignment)
                    .style(move |_theme: &Theme| text::Style { color: Some(color) })
                    .into(),
            );
        }

        Self {
            children,
            slots,
            style,
            opacity,
            on_press,
        }
    }
}

impl<Message: Clone> Widget<Message, Theme, Renderer> for ToastBody<'_, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.children.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.children);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let container = limits.max();
        let image = toast_layout::image_box(&self.style, self.slots.image.is_some());

        let mut title_size = None;
        let mut message_size = None;
        let mut measured = Vec::with_capacity(self.children.len());

        for (index, child) in self.children.iter_mut().enumerate() {
            let child_limits = if Some(index) == self.slots.image {
                layout::Limits::new(Size::ZERO, self.style.image_size)
            } else if Some(index) == self.slots.title {
                layout::Limits::new(
                    Size::ZERO,
                    toast_layout::text_constraints(
                        container,
                        &self.style,
                        image.width,
                        self.style.title_size,
                        self.style.title_max_lines,
                    ),
                )
            } else {
                layout::Limits::new(
                    Size::ZERO,
                    toast_layout::text_constraints(
                        container,
                        &self.style,
                        image.width,
                        self.style.message_size,
                        self.style.message_max_lines,
                    ),
                )
            };

            let node =
                child
                    .as_widget_mut()
                    .layout(&mut tree.children[index], renderer, &child_limits);
            if Some(index) == self.slots.title {
                title_size = Some(node.size());
            }
            if Some(index) == self.slots.message {
                message_size = Some(node.size());
            }
            measured.push(node);
        }

        let frame = toast_layout::frame(&self.style, image, title_size, message_size);

        let positioned = measured
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let target = if Some(index) == self.slots.image {
                    frame.image.position()
                } else if Some(index) == self.slots.title {
                    frame.title.position()
                } else {
                    frame.message.position()
                };
                node.move_to(target)
            })
            .collect();

        layout::Node::with_children(frame.size, positioned)
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        let shadow = if self.style.display_shadow {
            Shadow {
                color: faded(
                    self.style.shadow_color,
                    self.style.shadow_opacity * self.opacity,
                ),
                offset: self.style.shadow_offset,
                blur_radius: self.style.shadow_radius,
            }
        } else {
            Shadow::default()
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: self.style.corner_radius.into(),
                    ..Border::default()
                },
                shadow,
                snap: false,
            },
            Background::Color(faded(self.style.background_color, self.opacity)),
        );

        for ((child, state), child_layout) in self
            .children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            child
                .as_widget()
                .draw(state, renderer, theme, style, child_layout, cursor, viewport);
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        for ((child, state), child_layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child.as_widget_mut().update(
                state,
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }

        if let Some(message) = &self.on_press {
            if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
                if cursor.is_over(layout.bounds()) {
                    shell.publish(message.clone());
                    shell.capture_event();
                }
            }
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.on_press.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<ToastBody<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
{
    fn from(body: ToastBody<'a, Message>) -> Self {
        Self::new(body)
    }
}
