// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient toast notification overlays for
//! applications built with the Iced GUI framework.
//!
//! A [`Toasts`] controller is embedded in the application state and manages
//! the full toast lifecycle for one host container: queuing, positioning,
//! fade-in/wait/fade-out sequencing, tap-to-dismiss, and an independent
//! activity-indicator overlay. The crate also ships a small demo
//! application (`src/app.rs`) exercising every entry point.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::{Toast, Toasts};
//!
//! // In your application state
//! let mut toasts = Toasts::new();
//!
//! // Anywhere in update()
//! toasts.make_toast(Toast::new().message("Saved"));
//!
//! // In view(), stack the overlay above your content
//! let overlay = toasts.view().map(Message::Toasts);
//!
//! // And forward its subscription and messages
//! let subscription = toasts.subscription().map(Message::Toasts);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod manager;
pub mod position;
pub mod style;
mod widget;

pub use content::{DismissFn, Toast, ToastContent};
pub use error::{Error, Result};
pub use manager::{Message as ToastMessage, ToastDefaults, ToastId, Toasts};
pub use position::ToastPosition;
pub use style::{Percentage, ToastStyle};
