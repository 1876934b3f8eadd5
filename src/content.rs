// SPDX-License-Identifier: MPL-2.0
//! Toast content and show requests.
//!
//! [`ToastContent`] is the validated message/title/image triple: building
//! one with all three parts absent fails with
//! [`Error::InsufficientData`](crate::Error), so an empty toast can never
//! reach the screen. [`Toast`] is the request handed to
//! [`Toasts`](crate::Toasts): content plus optional per-call overrides for
//! duration, position, style, and a dismissal callback.

use crate::error::{Error, Result};
use crate::position::ToastPosition;
use crate::style::ToastStyle;
use iced::widget::image::Handle;
use std::fmt;
use std::time::Duration;

/// Callback invoked exactly once when a toast leaves the screen.
///
/// The flag is `true` when dismissal was triggered by a tap, `false` when
/// the display duration elapsed.
pub type DismissFn = Box<dyn FnOnce(bool)>;

/// The displayable parts of a toast. At least one part is always present.
#[derive(Debug, Clone)]
pub struct ToastContent {
    message: Option<String>,
    title: Option<String>,
    image: Option<Handle>,
}

impl ToastContent {
    /// Builds content from its optional parts.
    ///
    /// Fails with [`Error::InsufficientData`] when message, title, and
    /// image are all absent; any one present succeeds.
    pub fn new(
        message: Option<String>,
        title: Option<String>,
        image: Option<Handle>,
    ) -> Result<Self> {
        if message.is_none() && title.is_none() && image.is_none() {
            return Err(Error::InsufficientData);
        }
        Ok(Self {
            message,
            title,
            image,
        })
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A toast show request.
///
/// Omitted fields fall back to the controller's
/// [`ToastDefaults`](crate::ToastDefaults) when the request is shown.
///
/// # Example
///
/// ```
/// use iced_toast::Toast;
/// use std::time::Duration;
///
/// let toast = Toast::new()
///     .message("Saved")
///     .title("Export")
///     .duration(Duration::from_secs(2));
/// ```
#[derive(Default)]
pub struct Toast {
    pub(crate) message: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) image: Option<Handle>,
    pub(crate) duration: Option<Duration>,
    pub(crate) position: Option<ToastPosition>,
    pub(crate) style: Option<ToastStyle>,
    pub(crate) on_dismiss: Option<DismissFn>,
}

impl Toast {
    /// Creates an empty request. Showing it without adding a message,
    /// title, or image fails with [`Error::InsufficientData`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: Handle) -> Self {
        self.image = Some(image);
        self
    }

    /// Overrides the default display duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Overrides the default position.
    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Overrides the default style.
    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Registers a callback fired exactly once when the toast leaves the
    /// screen, with `true` when it was dismissed by a tap.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnOnce(bool) + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

}

impl From<ToastContent> for Toast {
    /// Wraps pre-built content in a request; this path cannot fail.
    fn from(content: ToastContent) -> Self {
        Self {
            message: content.message,
            title: content.title,
            image: content.image,
            ..Self::default()
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("has_image", &self.image.is_some())
            .field("duration", &self.duration)
            .field("position", &self.position)
            .field("has_callback", &self.on_dismiss.is_some())
            .finish()
    }
}
