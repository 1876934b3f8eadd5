// SPDX-License-Identifier: MPL-2.0
//! Demo application for the toast overlay.
//!
//! A single screen of buttons, one per public entry point, stacked under
//! the toast overlay layer. This file is intentionally plain glue: all
//! toast behavior lives in [`crate::manager`]; the app only routes
//! messages, persists preference toggles, and renders controls.

use crate::config::{self, AnchorPosition, Config};
use crate::content::Toast;
use crate::manager::{self, ToastDefaults, Toasts};
use crate::position::ToastPosition;
use iced::widget::image::Handle;
use iced::widget::{button, checkbox, container, pick_list, text, Column, Row, Stack};
use iced::{window, Element, Length, Point, Size, Subscription, Task, Theme};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Default display duration in seconds.
    pub duration: Option<f32>,
    /// Default anchor position.
    pub position: Option<AnchorPosition>,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toasts(manager::Message),
    ShowMessage,
    ShowTitled,
    ShowImage,
    ShowAtPoint,
    ShowEmpty,
    PositionSelected(AnchorPosition),
    QueueToggled(bool),
    TapToggled(bool),
    ShowActivity,
    HideActivity,
}

pub struct App {
    toasts: Toasts,
    position: AnchorPosition,
    theme: Theme,
    /// Running counter used to label the demo toasts.
    shown: u32,
    /// Dismissal flags reported by completion callbacks (true = tapped).
    dismissals: Arc<Mutex<Vec<bool>>>,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(420.0, 480.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut defaults = ToastDefaults::default();
        if let Some(secs) = flags.duration.or(config.duration_secs) {
            defaults.duration = Duration::from_secs_f32(secs.max(0.1));
        }
        let position = flags
            .position
            .or(config.position)
            .unwrap_or(AnchorPosition::Bottom);
        defaults.position = position.into();
        if let Some(tap) = config.tap_to_dismiss {
            defaults.tap_to_dismiss = tap;
        }
        if let Some(queue) = config.queue_enabled {
            defaults.queue_enabled = queue;
        }

        let theme = match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Theme::Light,
            _ => Theme::Dark,
        };

        let app = App {
            toasts: Toasts::with_defaults(defaults),
            position,
            theme,
            shown: 0,
            dismissals: Arc::default(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("iced_toast demo")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toasts)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toasts(inner) => self.toasts.handle_message(inner),
            Message::ShowMessage => {
                self.shown += 1;
                let toast = Toast::new()
                    .message(format!("Toast #{}", self.shown))
                    .on_dismiss(self.record_dismissal());
                self.toasts.make_toast(toast);
            }
            Message::ShowTitled => {
                self.shown += 1;
                let toast = Toast::new()
                    .title("Toast Title")
                    .message(format!("Toast #{} with a title line", self.shown))
                    .on_dismiss(self.record_dismissal());
                self.toasts.make_toast(toast);
            }
            Message::ShowImage => {
                self.shown += 1;
                let toast = Toast::new()
                    .title("Image")
                    .message(format!("Toast #{}", self.shown))
                    .image(sample_image())
                    .on_dismiss(self.record_dismissal());
                self.toasts.make_toast(toast);
            }
            Message::ShowAtPoint => {
                self.shown += 1;
                let toast = Toast::new()
                    .message(format!("Toast #{} at (110, 110)", self.shown))
                    .position(ToastPosition::Point(Point::new(110.0, 110.0)))
                    .duration(Duration::from_secs(2))
                    .on_dismiss(self.record_dismissal());
                self.toasts.make_toast(toast);
            }
            Message::ShowEmpty => {
                // No message, title, or image: logged and dropped.
                self.toasts.make_toast(Toast::new());
            }
            Message::PositionSelected(choice) => {
                self.position = choice;
                self.toasts.defaults_mut().position = choice.into();
                self.persist_preferences();
            }
            Message::QueueToggled(enabled) => {
                self.toasts.defaults_mut().queue_enabled = enabled;
                self.persist_preferences();
            }
            Message::TapToggled(enabled) => {
                self.toasts.defaults_mut().tap_to_dismiss = enabled;
                self.persist_preferences();
            }
            Message::ShowActivity => {
                self.toasts.show_activity(Some(ToastPosition::Center));
            }
            Message::HideActivity => {
                self.toasts.hide_activity();
            }
        }
        Task::none()
    }

    /// Builds a completion callback recording the dismissal flag.
    fn record_dismissal(&self) -> impl FnOnce(bool) + 'static {
        let log = Arc::clone(&self.dismissals);
        move |tapped| {
            if let Ok(mut dismissals) = log.lock() {
                dismissals.push(tapped);
            }
        }
    }

    fn persist_preferences(&self) {
        let defaults = self.toasts.defaults();
        let config = Config {
            duration_secs: Some(defaults.duration.as_secs_f32()),
            position: Some(self.position),
            tap_to_dismiss: Some(defaults.tap_to_dismiss),
            queue_enabled: Some(defaults.queue_enabled),
        };
        if let Err(err) = config::save(&config) {
            log::warn!("failed to save settings: {err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let defaults = self.toasts.defaults();

        let (dismissed, tapped) = {
            let dismissals = self.dismissals.lock().expect("dismissal log poisoned");
            let tapped = dismissals.iter().filter(|flag| **flag).count();
            (dismissals.len(), tapped)
        };
        let status = format!(
            "visible: {}   queued: {}   completed: {} ({} by tap)",
            self.toasts.visible_count(),
            self.toasts.queued_count(),
            dismissed,
            tapped,
        );

        let controls = Column::new()
            .spacing(12)
            .padding(16)
            .max_width(460.0)
            .push(text("iced_toast demo").size(24))
            .push(text("Each button exercises one entry point. Tap a toast to dismiss it early.").size(14))
            .push(
                Row::new()
                    .spacing(8)
                    .push(button(text("Message")).on_press(Message::ShowMessage))
                    .push(button(text("Title + message")).on_press(Message::ShowTitled))
                    .push(button(text("Image")).on_press(Message::ShowImage)),
            )
            .push(
                Row::new()
                    .spacing(8)
                    .push(button(text("At a point")).on_press(Message::ShowAtPoint))
                    .push(button(text("Empty (dropped)")).on_press(Message::ShowEmpty)),
            )
            .push(
                Row::new()
                    .spacing(8)
                    .push(button(text("Show activity")).on_press(Message::ShowActivity))
                    .push(button(text("Hide activity")).on_press(Message::HideActivity)),
            )
            .push(pick_list(
                AnchorPosition::ALL,
                Some(self.position),
                Message::PositionSelected,
            ))
            .push(
                checkbox(defaults.queue_enabled)
                    .label("Queue while a toast is active")
                    .on_toggle(Message::QueueToggled),
            )
            .push(checkbox(defaults.tap_to_dismiss).label("Tap to dismiss").on_toggle(Message::TapToggled))
            .push(text(status).size(14));

        let content = container(controls)
            .width(Length::Fill)
            .height(Length::Fill);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(self.toasts.view().map(Message::Toasts))
            .into()
    }
}

/// A small two-tone swatch generated in memory for the image toast.
fn sample_image() -> Handle {
    const SIDE: u32 = 48;
    let mut pixels = Vec::with_capacity((SIDE * SIDE * 4) as usize);
    for y in 0..SIDE {
        for x in 0..SIDE {
            if (x / 8 + y / 8) % 2 == 0 {
                pixels.extend_from_slice(&[0x4d, 0x9e, 0xe6, 0xff]);
            } else {
                pixels.extend_from_slice(&[0xf2, 0xf2, 0xf2, 0xff]);
            }
        }
    }
    Handle::from_rgba(SIDE, SIDE, pixels)
}
