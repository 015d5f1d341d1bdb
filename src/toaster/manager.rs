// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Toaster` owns the ordered toast list and the deferred callbacks that
//! drive it: mounting, auto-dismissal and detachment after removal. All
//! mutation goes through `&mut self`, either from an input event or from
//! [`Toaster::advance`] firing due timers.

use super::id::ToastId;
use super::position::Position;
use super::stack;
use super::swipe::{DragUpdate, PointerKind, PointerTarget, SwipeOutcome};
use super::timer::{TimerEvent, Timers};
use super::toast::{ShowOptions, Toast, ToastType};
use crate::config::{
    GAP, MOUNT_DELAY_MS, TIME_BEFORE_UNMOUNT_MS, TOAST_LIFETIME_MS, VISIBLE_TOASTS,
};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Lifecycle delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// From show to mount.
    pub mount_delay: Duration,
    /// From mount (or pointer leaving the container) to auto-dismissal.
    pub lifetime: Duration,
    /// From removal to detachment.
    pub unmount_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            mount_delay: Duration::from_millis(MOUNT_DELAY_MS),
            lifetime: Duration::from_millis(TOAST_LIFETIME_MS),
            unmount_delay: Duration::from_millis(TIME_BEFORE_UNMOUNT_MS),
        }
    }
}

/// Container-wide settings fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToasterOptions {
    pub close_button: bool,
    pub rich_colors: bool,
    pub position: Position,
    pub timing: Timing,
}

/// Messages for toaster state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a new toast.
    Show {
        message: String,
        options: ShowOptions,
    },
    /// Remove a specific toast by ID.
    Dismiss(ToastId),
    /// The pointer entered the container.
    MouseEnter,
    /// The pointer left the container.
    MouseLeave,
    /// Keyboard shortcut toggling the expanded stack.
    ToggleExpanded,
    PointerDown {
        id: ToastId,
        x: f32,
        y: f32,
        target: PointerTarget,
    },
    PointerMove {
        id: ToastId,
        x: f32,
        y: f32,
        kind: PointerKind,
    },
    PointerUp(ToastId),
    /// The host measured a toast's rendered height.
    Measured { id: ToastId, height: f32 },
    /// Fire due timers.
    Tick,
}

/// The toast container.
#[derive(Debug, Default)]
pub struct Toaster {
    options: ToasterOptions,
    /// Toasts ordered front (newest) to back.
    toasts: Vec<Toast>,
    timers: Timers,
    front_toast_height: f32,
}

impl Toaster {
    /// Creates an empty toaster.
    #[must_use]
    pub fn new(options: ToasterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &ToasterOptions {
        &self.options
    }

    /// Every attached toast, front to back, including removed ones still
    /// waiting to be detached.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Toasts that are not removed, front to back.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|t| !t.removed)
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Height of the most recently mounted toast.
    #[must_use]
    pub fn front_toast_height(&self) -> f32 {
        self.front_toast_height
    }

    /// When the next timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.success_at(message, Instant::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.error_at(message, Instant::now())
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.info_at(message, Instant::now())
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.warning_at(message, Instant::now())
    }

    pub fn show(&mut self, message: impl Into<String>, options: ShowOptions) -> ToastId {
        self.show_at(message, options, Instant::now())
    }

    pub fn remove(&mut self, id: &ToastId) {
        self.remove_at(id, Instant::now());
    }

    pub fn success_at(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.show_at(message, ShowOptions::kind(ToastType::Success), now)
    }

    pub fn error_at(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.show_at(message, ShowOptions::kind(ToastType::Error), now)
    }

    pub fn info_at(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.show_at(message, ShowOptions::kind(ToastType::Info), now)
    }

    pub fn warning_at(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.show_at(message, ShowOptions::kind(ToastType::Warning), now)
    }

    /// Prepends a new toast and schedules its mount.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        options: ShowOptions,
        now: Instant,
    ) -> ToastId {
        let id = ToastId::generate();
        let mut toast = Toast::new(id.clone(), message.into(), options);
        toast.timers.mount = Some(self.timers.schedule(
            now + self.options.timing.mount_delay,
            TimerEvent::Mount(id.clone()),
        ));

        debug!(%id, kind = toast.kind().as_str(), "showing toast");
        self.toasts.insert(0, toast);
        self.refresh();
        id
    }

    /// Marks a toast removed and schedules its detachment.
    ///
    /// Unknown ids are ignored. Removing an already removed toast restarts
    /// its detachment delay.
    pub fn remove_at(&mut self, id: &ToastId, now: Instant) {
        let unmount_delay = self.options.timing.unmount_delay;
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
            debug!(%id, "remove ignored, no such toast");
            return;
        };

        toast.removed = true;
        for handle in [
            toast.timers.mount.take(),
            toast.timers.auto_remove.take(),
            toast.timers.unmount.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.timers.cancel(handle);
        }
        toast.timers.unmount = Some(
            self.timers
                .schedule(now + unmount_delay, TimerEvent::Unmount(id.clone())),
        );

        debug!(%id, swipe_out = toast.swipe_out, "removing toast");
        self.refresh();
    }

    /// Removes every toast that is not already removed.
    pub fn clear_at(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.active().map(|t| t.id().clone()).collect();
        for id in ids {
            self.remove_at(&id, now);
        }
    }

    pub fn clear(&mut self) {
        self.clear_at(Instant::now());
    }

    /// Expands the stack and pauses every auto-dismiss countdown.
    pub fn mouse_enter(&mut self) {
        for toast in &mut self.toasts {
            if toast.expanded {
                continue;
            }
            toast.expanded = true;
            if let Some(handle) = toast.timers.auto_remove.take() {
                self.timers.cancel(handle);
            }
        }
    }

    /// Collapses the stack and restarts the countdown of mounted toasts.
    pub fn mouse_leave_at(&mut self, now: Instant) {
        for index in 0..self.toasts.len() {
            let toast = &mut self.toasts[index];
            if !toast.expanded {
                continue;
            }
            toast.expanded = false;
            if toast.mounted && !toast.removed {
                self.arm_auto_remove(index, now);
            }
        }
    }

    pub fn mouse_leave(&mut self) {
        self.mouse_leave_at(Instant::now());
    }

    /// Flips the expanded state of every toast to the opposite of the front
    /// toast's. Countdowns are left untouched.
    pub fn toggle_expanded(&mut self) {
        let Some(first) = self.toasts.first() else {
            return;
        };
        let expanded = !first.expanded;
        for toast in &mut self.toasts {
            toast.expanded = expanded;
        }
    }

    pub fn pointer_down_at(
        &mut self,
        id: &ToastId,
        x: f32,
        y: f32,
        target: PointerTarget,
        now: Instant,
    ) {
        let Some(toast) = self.swipeable_mut(id) else {
            return;
        };
        if toast.gesture.press(x, y, target, now) {
            toast.swiping = true;
        }
        trace!(%id, x, y, ?target, "pointer down");
    }

    pub fn pointer_move(&mut self, id: &ToastId, x: f32, y: f32, kind: PointerKind) {
        let edge = self.options.position.y;
        let Some(toast) = self.swipeable_mut(id) else {
            return;
        };
        match toast.gesture.drag(x, y, kind, edge) {
            DragUpdate::Swipe(amount) => toast.swipe_amount = amount,
            DragUpdate::Cancelled => trace!(%id, "swipe cancelled, sideways movement"),
            DragUpdate::Idle => {}
        }
    }

    pub fn pointer_up_at(&mut self, id: &ToastId, now: Instant) {
        let Some(toast) = self.swipeable_mut(id) else {
            return;
        };
        match toast.gesture.release(toast.swipe_amount, now) {
            Some(SwipeOutcome::Dismiss) => {
                toast.swipe_out = true;
                self.remove_at(id, now);
            }
            Some(SwipeOutcome::SnapBack) => {
                toast.swipe_amount = 0.0;
                toast.swiping = false;
            }
            None => {}
        }
    }

    /// Records a host-measured height. Before mount it replaces the estimate;
    /// after mount it takes effect immediately.
    pub fn set_height(&mut self, id: &ToastId, height: f32) {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
            return;
        };
        toast.measured_height = Some(height);
        if toast.mounted {
            toast.initial_height = height;
            if toast.front {
                self.front_toast_height = height;
            }
            self.refresh();
        }
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Each callback runs at its own deadline, so callbacks scheduling
    /// further work that is already due are handled in the same call.
    pub fn advance(&mut self, now: Instant) {
        while let Some((handle, deadline, event)) = self.timers.pop_due(now) {
            trace!(?handle, ?event, "timer fired");
            match event {
                TimerEvent::Mount(id) => self.mount(&id, deadline),
                TimerEvent::AutoRemove(id) => {
                    if let Some(toast) = self.toasts.iter_mut().find(|t| *t.id() == id) {
                        toast.timers.auto_remove = None;
                    }
                    self.remove_at(&id, deadline);
                }
                TimerEvent::Unmount(id) => self.detach(&id),
            }
        }
    }

    /// Handles a toaster message.
    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::Show { message, options } => {
                self.show_at(message, options, now);
            }
            Message::Dismiss(id) => self.remove_at(&id, now),
            Message::MouseEnter => self.mouse_enter(),
            Message::MouseLeave => self.mouse_leave_at(now),
            Message::ToggleExpanded => self.toggle_expanded(),
            Message::PointerDown { id, x, y, target } => {
                self.pointer_down_at(&id, x, y, target, now);
            }
            Message::PointerMove { id, x, y, kind } => self.pointer_move(&id, x, y, kind),
            Message::PointerUp(id) => self.pointer_up_at(&id, now),
            Message::Measured { id, height } => self.set_height(&id, height),
            Message::Tick => self.advance(now),
        }
    }

    /// Re-arms an existing container: gestures are reset, the stack is
    /// recomputed and mounted toasts get a fresh countdown replacing any
    /// previous one.
    pub(crate) fn reinitialize(&mut self, now: Instant) {
        for index in 0..self.toasts.len() {
            let toast = &mut self.toasts[index];
            toast.gesture.reset();
            if toast.mounted && !toast.removed && !toast.expanded {
                self.arm_auto_remove(index, now);
            }
        }
        self.refresh();
        debug!(toasts = self.toasts.len(), "toaster reinitialized");
    }

    fn mount(&mut self, id: &ToastId, now: Instant) {
        let Some(index) = self.position_of(id) else {
            return;
        };
        let toast = &mut self.toasts[index];
        toast.timers.mount = None;
        let height = toast.measured_height.unwrap_or_else(|| toast.estimated_height());
        toast.mounted = true;
        toast.initial_height = height;
        if toast.front {
            self.front_toast_height = height;
        }

        debug!(%id, height, "toast mounted");
        self.refresh();
        if !self.toasts[index].expanded {
            self.arm_auto_remove(index, now);
        }
    }

    fn detach(&mut self, id: &ToastId) {
        if let Some(index) = self.position_of(id) {
            let toast = self.toasts.remove(index);
            for handle in [toast.timers.mount, toast.timers.auto_remove]
                .into_iter()
                .flatten()
            {
                self.timers.cancel(handle);
            }
            debug!(%id, "toast detached");
        }
    }

    /// Starts the countdown of the toast at `index`, cancelling any
    /// countdown already running.
    fn arm_auto_remove(&mut self, index: usize, now: Instant) {
        let lifetime = self.options.timing.lifetime;
        let toast = &mut self.toasts[index];
        if let Some(previous) = toast.timers.auto_remove.take() {
            self.timers.cancel(previous);
        }
        toast.timers.auto_remove = Some(
            self.timers
                .schedule(now + lifetime, TimerEvent::AutoRemove(toast.id().clone())),
        );
    }

    fn swipeable_mut(&mut self, id: &ToastId) -> Option<&mut Toast> {
        self.toasts
            .iter_mut()
            .find(|t| t.id() == id)
            .filter(|t| t.mounted && !t.removed && t.dismissible)
    }

    fn position_of(&self, id: &ToastId) -> Option<usize> {
        self.toasts.iter().position(|t| t.id() == id)
    }

    fn refresh(&mut self) {
        stack::refresh(&mut self.toasts, GAP, VISIBLE_TOASTS);
    }
}
