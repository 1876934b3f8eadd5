// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! [`Toasts`] is a per-container controller: it owns the record of every
//! live toast, the single *active* registration slot, the FIFO backlog
//! queue, and the independent activity-indicator slot. Each record moves
//! through an explicit state machine — fading in, visible with an armed
//! deadline, fading out — driven by [`Toasts::tick`] from a timed
//! subscription. Dismissal (timeout or tap) tears a toast down exactly once
//! and fires its completion callback exactly once, then promotes the next
//! queued toast.
//!
//! [`ToastDefaults`] is the defaults record consulted whenever a request
//! omits a parameter. It is explicitly constructed and injectable; the demo
//! application owns one per controller and mutates it through
//! [`Toasts::defaults_mut`].

use crate::content::{DismissFn, Toast, ToastContent};
use crate::error::Result;
use crate::position::ToastPosition;
use crate::style::ToastStyle;
use crate::widget;
use iced::{time, Element, Subscription};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Tick cadence while a fade transition is in flight.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Tick cadence while toasts are visible or queued but nothing is fading.
const IDLE_TICK: Duration = Duration::from_millis(100);

pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Unique identifier for a shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick advancing fades and deadlines.
    Tick(Instant),
    /// A toast was tapped.
    Tapped(ToastId),
}

/// Defaults consulted whenever a show request omits a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastDefaults {
    pub style: ToastStyle,
    pub duration: Duration,
    pub position: ToastPosition,
    /// Arm a tap handler on newly shown toasts.
    pub tap_to_dismiss: bool,
    /// Queue requests that arrive while a toast is active. When disabled,
    /// requests are shown immediately regardless of the active toast.
    pub queue_enabled: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            style: ToastStyle::default(),
            duration: DEFAULT_DURATION,
            position: ToastPosition::Bottom,
            tap_to_dismiss: true,
            queue_enabled: true,
        }
    }
}

/// Lifecycle phase of a shown toast.
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Opacity 0 → 1 over the style's fade duration.
    FadingIn { started: Instant },
    /// Fully opaque; fades out when the deadline passes.
    Visible { deadline: Instant },
    /// Opacity 1 → 0; `via_tap` is reported to the completion callback.
    FadingOut { started: Instant, via_tap: bool },
}

/// Everything the controller tracks for one shown toast.
struct ToastRecord {
    id: ToastId,
    content: ToastContent,
    style: ToastStyle,
    duration: Duration,
    position: ToastPosition,
    phase: Phase,
    tap_dismiss: bool,
    on_dismiss: Option<DismissFn>,
}

/// A request parked while another toast holds the active slot.
struct PendingToast {
    content: ToastContent,
    style: ToastStyle,
    duration: Duration,
    position: ToastPosition,
    on_dismiss: Option<DismissFn>,
}

#[derive(Debug, Clone, Copy)]
enum ActivityPhase {
    FadingIn { started: Instant },
    Visible,
    FadingOut { started: Instant },
}

struct ActivityState {
    position: ToastPosition,
    phase: ActivityPhase,
    shown_at: Instant,
}

/// Snapshot of one toast for the render layer.
pub(crate) struct RenderedToast<'a> {
    pub content: &'a ToastContent,
    pub style: ToastStyle,
    pub position: ToastPosition,
    pub opacity: f32,
    /// Present when a tap handler is armed for this toast.
    pub tap: Option<ToastId>,
}

/// Snapshot of the activity overlay for the render layer.
pub(crate) struct RenderedActivity {
    pub style: ToastStyle,
    pub position: ToastPosition,
    pub opacity: f32,
    /// Time since the overlay appeared; drives the spinner rotation.
    pub elapsed: Duration,
}

/// Per-container toast controller.
pub struct Toasts {
    defaults: ToastDefaults,
    /// Live lifecycle records, in show order. Usually holds at most one
    /// entry; more when queueing is disabled and requests overlap.
    records: Vec<ToastRecord>,
    /// The single registered active toast; `None` means the controller is
    /// idle and the next request shows immediately.
    active: Option<ToastId>,
    /// FIFO backlog, populated only while a toast is active and queueing
    /// is enabled.
    queue: VecDeque<PendingToast>,
    /// Activity indicator slot, independent of the active-toast slot.
    activity: Option<ActivityState>,
}

impl fmt::Debug for Toasts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toasts")
            .field("visible", &self.records.len())
            .field("active", &self.active)
            .field("queued", &self.queue.len())
            .field("activity", &self.activity.is_some())
            .finish()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    /// Creates an idle controller with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ToastDefaults::default())
    }

    /// Creates an idle controller with the given defaults.
    #[must_use]
    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        Self {
            defaults,
            records: Vec::new(),
            active: None,
            queue: VecDeque::new(),
            activity: None,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut ToastDefaults {
        &mut self.defaults
    }

    /// Shows a toast, or queues it when another toast is active and
    /// queueing is enabled.
    ///
    /// Fails with [`Error::InsufficientData`](crate::Error) when the
    /// request carries no message, title, or image; nothing is shown in
    /// that case.
    pub fn show(&mut self, toast: Toast) -> Result<()> {
        let Toast {
            message,
            title,
            image,
            duration,
            position,
            style,
            on_dismiss,
        } = toast;
        let content = ToastContent::new(message, title, image)?;

        let pending = PendingToast {
            content,
            style: style.unwrap_or(self.defaults.style),
            duration: duration.unwrap_or(self.defaults.duration),
            position: position.unwrap_or(self.defaults.position),
            on_dismiss,
        };

        if self.active.is_some() && self.defaults.queue_enabled {
            self.queue.push_back(pending);
        } else {
            self.present(pending, Instant::now());
        }
        Ok(())
    }

    /// Convenience wrapper around [`Toasts::show`] that logs and drops an
    /// invalid request instead of returning the error.
    pub fn make_toast(&mut self, toast: Toast) {
        if let Err(err) = self.show(toast) {
            log::warn!("toast dropped: {err}");
        }
    }

    /// Fades in the activity indicator at `position` (the default position
    /// when omitted). A no-op when an activity overlay is already present,
    /// so repeated calls yield a single spinner.
    pub fn show_activity(&mut self, position: Option<ToastPosition>) {
        if self.activity.is_some() {
            return;
        }
        let now = Instant::now();
        self.activity = Some(ActivityState {
            position: position.unwrap_or(self.defaults.position),
            phase: ActivityPhase::FadingIn { started: now },
            shown_at: now,
        });
    }

    /// Fades out the activity indicator. A no-op when none is shown or it
    /// is already fading out.
    pub fn hide_activity(&mut self) {
        let fade = self.defaults.style.fade_duration;
        if let Some(activity) = self.activity.as_mut() {
            if !matches!(activity.phase, ActivityPhase::FadingOut { .. }) {
                let now = Instant::now();
                let opacity = activity_opacity(activity.phase, fade, now);
                activity.phase = ActivityPhase::FadingOut {
                    started: fade_out_start(opacity, fade, now),
                };
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Tapped(id) => self.tap(id, Instant::now()),
        }
    }

    /// Advances every fade and deadline to `now`.
    ///
    /// Teardowns happen here: a record whose fade-out has completed is
    /// removed, its completion callback fires, and the queue head (if any)
    /// is promoted — strictly after the teardown, so the active slot is
    /// never doubly registered.
    pub fn tick(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.records.iter().map(|record| record.id).collect();
        for id in ids {
            let Some(index) = self.records.iter().position(|record| record.id == id) else {
                continue;
            };
            let fade = self.records[index].style.fade_duration;
            match self.records[index].phase {
                Phase::FadingIn { started } => {
                    if now.duration_since(started) >= fade {
                        let duration = self.records[index].duration;
                        self.records[index].phase = Phase::Visible {
                            deadline: now + duration,
                        };
                    }
                }
                Phase::Visible { deadline } => {
                    if now >= deadline {
                        self.records[index].phase = Phase::FadingOut {
                            started: now,
                            via_tap: false,
                        };
                    }
                }
                Phase::FadingOut { started, via_tap } => {
                    if now.duration_since(started) >= fade {
                        self.finish(index, via_tap, now);
                    }
                }
            }
        }

        let fade = self.defaults.style.fade_duration;
        let mut clear_activity = false;
        if let Some(activity) = self.activity.as_mut() {
            match activity.phase {
                ActivityPhase::FadingIn { started } => {
                    if now.duration_since(started) >= fade {
                        activity.phase = ActivityPhase::Visible;
                    }
                }
                ActivityPhase::Visible => {}
                ActivityPhase::FadingOut { started } => {
                    if now.duration_since(started) >= fade {
                        clear_activity = true;
                    }
                }
            }
        }
        if clear_activity {
            self.activity = None;
        }
    }

    /// Tap handler. Starts the fade-out of the tapped toast, reporting
    /// `via_tap` to its completion. Late arrivals — the toast already
    /// fading out or gone — are a no-op, so a tap racing the deadline can
    /// never dismiss twice.
    fn tap(&mut self, id: ToastId, now: Instant) {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return;
        };
        if !record.tap_dismiss {
            return;
        }
        match record.phase {
            Phase::FadingOut { .. } => {}
            Phase::FadingIn { .. } | Phase::Visible { .. } => {
                let opacity = phase_opacity(record.phase, record.style.fade_duration, now);
                record.phase = Phase::FadingOut {
                    started: fade_out_start(opacity, record.style.fade_duration, now),
                    via_tap: true,
                };
            }
        }
    }

    /// Installs a record for `pending` and registers it active.
    ///
    /// When queueing is disabled this happens even while another toast is
    /// on screen: the previous record keeps running unreplaced, and its
    /// eventual teardown clears the active slot it no longer names.
    fn present(&mut self, pending: PendingToast, now: Instant) {
        let record = ToastRecord {
            id: ToastId::new(),
            content: pending.content,
            style: pending.style,
            duration: pending.duration,
            position: pending.position,
            phase: Phase::FadingIn { started: now },
            tap_dismiss: self.defaults.tap_to_dismiss,
            on_dismiss: pending.on_dismiss,
        };
        self.active = Some(record.id);
        self.records.push(record);
    }

    /// Tears down the record at `index` exactly once: removes it from the
    /// render set, clears the active slot, fires the completion callback,
    /// then promotes the queue head.
    fn finish(&mut self, index: usize, via_tap: bool, now: Instant) {
        let record = self.records.remove(index);
        log::debug!(
            "toast {:?} dismissed ({})",
            record.id,
            if via_tap { "tap" } else { "timeout" }
        );
        // Cleared unconditionally: when queueing is disabled a newer toast
        // may hold the slot, and the older toast's teardown still clears it.
        self.active = None;
        if let Some(callback) = record.on_dismiss {
            callback(via_tap);
        }
        if let Some(pending) = self.queue.pop_front() {
            self.present(pending, now);
        }
    }

    /// Number of toasts currently in the render set (including fading ones).
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.records.len()
    }

    /// Number of queued requests awaiting the active slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the active slot is empty and the next request shows
    /// immediately.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// The currently registered active toast, if any.
    #[must_use]
    pub fn active_toast(&self) -> Option<ToastId> {
        self.active
    }

    /// Whether anything is on screen or queued.
    #[must_use]
    pub fn has_work(&self) -> bool {
        !self.records.is_empty() || !self.queue.is_empty() || self.activity.is_some()
    }

    /// Whether the activity indicator is present (in any phase).
    #[must_use]
    pub fn activity_visible(&self) -> bool {
        self.activity.is_some()
    }

    fn is_animating(&self) -> bool {
        let toast_fading = self
            .records
            .iter()
            .any(|record| !matches!(record.phase, Phase::Visible { .. }));
        let activity_fading = matches!(
            self.activity.as_ref().map(|activity| activity.phase),
            Some(ActivityPhase::FadingIn { .. }) | Some(ActivityPhase::FadingOut { .. })
        );
        toast_fading || activity_fading
    }

    /// Renders the overlay layer for this controller. Stack it above the
    /// host content and map the produced [`Message`]s back into it.
    pub fn view(&self) -> Element<'_, Message> {
        widget::overlay(self)
    }

    /// Timed subscription driving the state machine: per-frame while a
    /// fade is in flight, coarse while toasts are merely visible or
    /// queued, and none at all when idle.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(ANIMATION_TICK).map(Message::Tick)
        } else if self.has_work() {
            time::every(IDLE_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub(crate) fn render_toasts(&self, now: Instant) -> Vec<RenderedToast<'_>> {
        self.records
            .iter()
            .map(|record| RenderedToast {
                content: &record.content,
                style: record.style,
                position: record.position,
                opacity: phase_opacity(record.phase, record.style.fade_duration, now),
                tap: record.tap_dismiss.then_some(record.id),
            })
            .collect()
    }

    pub(crate) fn render_activity(&self, now: Instant) -> Option<RenderedActivity> {
        let style = self.defaults.style;
        self.activity.as_ref().map(|activity| RenderedActivity {
            style,
            position: activity.position,
            opacity: activity_opacity(activity.phase, style.fade_duration, now),
            elapsed: now.duration_since(activity.shown_at),
        })
    }
}

/// Start instant for a fade-out that begins at `current_opacity`.
///
/// Backdated when a fade-in is cut short, so the opacity stays continuous
/// instead of jumping to fully opaque before fading.
fn fade_out_start(current_opacity: f32, fade: Duration, now: Instant) -> Instant {
    now - fade.mul_f32((1.0 - current_opacity).clamp(0.0, 1.0))
}

fn fade_progress(started: Instant, fade: Duration, now: Instant) -> f32 {
    if fade.is_zero() {
        return 1.0;
    }
    (now.duration_since(started).as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
}

fn phase_opacity(phase: Phase, fade: Duration, now: Instant) -> f32 {
    match phase {
        Phase::FadingIn { started } => fade_progress(started, fade, now),
        Phase::Visible { .. } => 1.0,
        Phase::FadingOut { started, .. } => 1.0 - fade_progress(started, fade, now),
    }
}

fn activity_opacity(phase: ActivityPhase, fade: Duration, now: Instant) -> f32 {
    match phase {
        ActivityPhase::FadingIn { started } => fade_progress(started, fade, now),
        ActivityPhase::Visible => 1.0,
        ActivityPhase::FadingOut { started } => 1.0 - fade_progress(started, fade, now),
    }
}
