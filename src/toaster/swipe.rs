// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture tracking for swipe-to-dismiss.
//!
//! Toasts only swipe on the vertical axis, toward the edge the toaster is
//! anchored to. A gesture that first moves sideways is abandoned until the
//! next press.

use super::position::YPosition;
use crate::config::{
    POINTER_SWIPE_START, SWIPE_THRESHOLD, SWIPE_VELOCITY_THRESHOLD, TOUCH_SWIPE_START,
};
use std::time::Instant;

/// Input device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Movement required before a drag counts as a swipe.
    #[must_use]
    pub fn swipe_start_threshold(self) -> f32 {
        match self {
            PointerKind::Touch => TOUCH_SWIPE_START,
            PointerKind::Mouse | PointerKind::Pen => POINTER_SWIPE_START,
        }
    }
}

/// Part of the toast a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerTarget {
    #[default]
    Body,
    CloseButton,
}

/// What a release resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome {
    /// Far or fast enough: the toast should be removed.
    Dismiss,
    /// The toast returns to its resting place.
    SnapBack,
}

/// Result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// The toast follows the pointer by this many pixels.
    Swipe(f32),
    /// The pointer went sideways; this interaction no longer swipes.
    Cancelled,
    /// Not enough movement yet, or no gesture in progress.
    Idle,
}

/// Per-toast gesture state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeGesture {
    pressed_at: Option<Instant>,
    origin: Option<(f32, f32)>,
}

impl SwipeGesture {
    /// Records a press. Returns `true` when a swipe may follow, which is the
    /// case unless the press landed on the close control.
    pub fn press(&mut self, x: f32, y: f32, target: PointerTarget, now: Instant) -> bool {
        self.pressed_at = Some(now);
        if target == PointerTarget::CloseButton {
            return false;
        }
        self.origin = Some((x, y));
        true
    }

    pub fn drag(&mut self, x: f32, y: f32, kind: PointerKind, edge: YPosition) -> DragUpdate {
        let Some((start_x, start_y)) = self.origin else {
            return DragUpdate::Idle;
        };
        let dy = y - start_y;
        let dx = x - start_x;

        // Only movement toward the anchored edge counts.
        let clamped = match edge {
            YPosition::Top => dy.min(0.0),
            YPosition::Bottom => dy.max(0.0),
        };
        let threshold = kind.swipe_start_threshold();

        if clamped.abs() > threshold {
            DragUpdate::Swipe(dy)
        } else if dx.abs() > threshold {
            self.origin = None;
            DragUpdate::Cancelled
        } else {
            DragUpdate::Idle
        }
    }

    /// Ends the interaction. Returns `None` if no press was recorded.
    pub fn release(&mut self, swipe_amount: f32, now: Instant) -> Option<SwipeOutcome> {
        self.origin = None;
        let pressed_at = self.pressed_at.take()?;

        let elapsed_ms = now.saturating_duration_since(pressed_at).as_secs_f32() * 1000.0;
        let velocity = if elapsed_ms > 0.0 {
            swipe_amount.abs() / elapsed_ms
        } else {
            0.0
        };

        if swipe_amount.abs() >= SWIPE_THRESHOLD || velocity > SWIPE_VELOCITY_THRESHOLD {
            Some(SwipeOutcome::Dismiss)
        } else {
            Some(SwipeOutcome::SnapBack)
        }
    }

    /// Forgets any interaction in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
