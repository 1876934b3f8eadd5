// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle tests through the public API: show, queue, tap,
//! activity overlay, and the settings round trip the demo relies on.

use iced_toast::config::{self, AnchorPosition, Config};
use iced_toast::{Toast, ToastDefaults, ToastMessage, ToastPosition, Toasts};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Comfortably longer than the default 200 ms fade.
const STEP: Duration = Duration::from_millis(300);

fn dismissal_log() -> (Rc<RefCell<Vec<bool>>>, impl FnOnce(bool) + 'static) {
    let log: Rc<RefCell<Vec<bool>>> = Rc::default();
    let writer = Rc::clone(&log);
    (log, move |tapped| writer.borrow_mut().push(tapped))
}

#[test]
fn toast_runs_to_completion_and_reports_timeout() {
    let (log, on_dismiss) = dismissal_log();
    let mut toasts = Toasts::new();
    let start = Instant::now();

    toasts
        .show(
            Toast::new()
                .message("hello")
                .duration(Duration::from_secs(1))
                .on_dismiss(on_dismiss),
        )
        .expect("content is valid");
    assert!(!toasts.is_idle());

    toasts.tick(start + STEP); // fade-in done, deadline armed
    toasts.tick(start + STEP + Duration::from_secs(1)); // deadline passed
    toasts.tick(start + STEP + Duration::from_secs(1) + STEP); // fade-out done

    assert!(toasts.is_idle());
    assert_eq!(toasts.visible_count(), 0);
    assert_eq!(log.borrow().as_slice(), &[false]);
}

#[test]
fn queued_toast_only_appears_after_the_first_completes() {
    let mut toasts = Toasts::new();
    let start = Instant::now();

    toasts
        .show(
            Toast::new()
                .message("first")
                .duration(Duration::from_secs(1))
                .position(ToastPosition::Top),
        )
        .unwrap();
    toasts
        .show(
            Toast::new()
                .message("second")
                .duration(Duration::from_secs(1))
                .position(ToastPosition::Bottom),
        )
        .unwrap();

    assert_eq!(toasts.visible_count(), 1);
    assert_eq!(toasts.queued_count(), 1);

    // Until the first toast's full lifecycle elapses, the second stays
    // queued.
    toasts.tick(start + STEP);
    toasts.tick(start + STEP + Duration::from_millis(500));
    assert_eq!(toasts.queued_count(), 1);

    toasts.tick(start + STEP + Duration::from_secs(1));
    toasts.tick(start + STEP + Duration::from_secs(1) + STEP);
    assert_eq!(toasts.queued_count(), 0);
    assert_eq!(toasts.visible_count(), 1);
    assert!(!toasts.is_idle());
}

#[test]
fn disabled_queueing_shows_immediately_without_dismissing() {
    let defaults = ToastDefaults {
        queue_enabled: false,
        ..ToastDefaults::default()
    };
    let mut toasts = Toasts::with_defaults(defaults);

    toasts.show(Toast::new().message("first")).unwrap();
    let first = toasts.active_toast();
    toasts.show(Toast::new().message("second")).unwrap();

    // Both are on screen and the slot now names the second toast.
    assert_eq!(toasts.visible_count(), 2);
    assert_eq!(toasts.queued_count(), 0);
    assert_ne!(toasts.active_toast(), first);
}

#[test]
fn tap_dismisses_once_and_wins_the_race_with_the_timer() {
    let (log, on_dismiss) = dismissal_log();
    let mut toasts = Toasts::new();
    let start = Instant::now();

    toasts
        .show(
            Toast::new()
                .message("tap me")
                .duration(Duration::from_secs(5))
                .on_dismiss(on_dismiss),
        )
        .unwrap();
    toasts.tick(start + STEP);

    let id = toasts.active_toast().expect("a toast is active");
    toasts.handle_message(ToastMessage::Tapped(id));
    toasts.tick(start + STEP + STEP);

    assert!(toasts.is_idle());
    assert_eq!(log.borrow().as_slice(), &[true]);

    // The original 5 s deadline firing later must be a no-op.
    toasts.tick(start + Duration::from_secs(30));
    assert_eq!(log.borrow().as_slice(), &[true]);
    assert_eq!(toasts.visible_count(), 0);
}

#[test]
fn tap_is_inert_when_disabled_in_defaults() {
    let defaults = ToastDefaults {
        tap_to_dismiss: false,
        ..ToastDefaults::default()
    };
    let mut toasts = Toasts::with_defaults(defaults);
    let start = Instant::now();

    toasts
        .show(Toast::new().message("no tap").duration(Duration::from_secs(5)))
        .unwrap();
    toasts.tick(start + STEP);

    let id = toasts.active_toast().unwrap();
    toasts.handle_message(ToastMessage::Tapped(id));
    toasts.tick(start + STEP + STEP);

    assert_eq!(toasts.visible_count(), 1);
    assert!(!toasts.is_idle());
}

#[test]
fn empty_request_is_rejected_and_shows_nothing() {
    let mut toasts = Toasts::new();
    assert!(toasts.show(Toast::new()).is_err());
    toasts.make_toast(Toast::new());
    assert!(toasts.is_idle());
    assert_eq!(toasts.visible_count(), 0);
}

#[test]
fn activity_overlay_is_idempotent_and_independent() {
    let mut toasts = Toasts::new();
    let start = Instant::now();

    toasts.show_activity(Some(ToastPosition::Center));
    toasts.show_activity(Some(ToastPosition::Center));
    assert!(toasts.activity_visible());

    // A message toast coexists with the spinner.
    toasts.show(Toast::new().message("busy")).unwrap();
    assert_eq!(toasts.visible_count(), 1);
    assert!(toasts.activity_visible());

    toasts.hide_activity();
    toasts.tick(start + STEP);
    assert!(!toasts.activity_visible());
    assert_eq!(toasts.visible_count(), 1);
}

#[test]
fn settings_round_trip_matches_what_the_demo_persists() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");

    let config = Config {
        duration_secs: Some(2.0),
        position: Some(AnchorPosition::Center),
        tap_to_dismiss: Some(true),
        queue_enabled: Some(false),
    };
    config::save_to_path(&config, &path).expect("failed to save");
    let loaded = config::load_from_path(&path).expect("failed to load");

    assert_eq!(loaded, config);
    assert_eq!(
        ToastPosition::from(loaded.position.unwrap()),
        ToastPosition::Center
    );
}
