// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record and the `ToastType` severity
//! used throughout the toaster.

use super::id::ToastId;
use super::swipe::SwipeGesture;
use super::timer::TimerHandle;
use crate::config::{ESTIMATED_DESCRIPTION_HEIGHT, ESTIMATED_TITLE_HEIGHT};

/// Severity of a toast. Selects the icon and, with rich colors, the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastType {
    Success,
    Error,
    Info,
    Warning,
    #[default]
    Neutral,
}

impl ToastType {
    /// Name used in the `data-type` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Info => "info",
            ToastType::Warning => "warning",
            ToastType::Neutral => "neutral",
        }
    }
}

/// Optional parts of a toast passed to `show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowOptions {
    pub description: Option<String>,
    pub kind: ToastType,
}

impl ShowOptions {
    #[must_use]
    pub fn kind(kind: ToastType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Cancellation tokens of the callbacks a toast has pending.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ToastTimers {
    pub mount: Option<TimerHandle>,
    pub auto_remove: Option<TimerHandle>,
    pub unmount: Option<TimerHandle>,
}

/// A single notification in the stack.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    description: Option<String>,
    kind: ToastType,

    pub(crate) mounted: bool,
    pub(crate) removed: bool,
    pub(crate) expanded: bool,
    pub(crate) visible: bool,
    pub(crate) front: bool,
    pub(crate) swiping: bool,
    pub(crate) swipe_out: bool,
    pub(crate) dismissible: bool,

    pub(crate) index: usize,
    pub(crate) z_index: usize,
    pub(crate) offset: f32,
    pub(crate) initial_height: f32,
    pub(crate) swipe_amount: f32,
    /// Height reported by the host, preferred over the estimate at mount.
    pub(crate) measured_height: Option<f32>,

    pub(crate) gesture: SwipeGesture,
    pub(crate) timers: ToastTimers,
}

impl Toast {
    pub(crate) fn new(id: ToastId, message: String, options: ShowOptions) -> Self {
        Self {
            id,
            message,
            description: options.description,
            kind: options.kind,
            mounted: false,
            removed: false,
            expanded: false,
            visible: true,
            front: true,
            swiping: false,
            swipe_out: false,
            dismissible: true,
            index: 0,
            z_index: 0,
            offset: 0.0,
            initial_height: 0.0,
            swipe_amount: 0.0,
            measured_height: None,
            gesture: SwipeGesture::default(),
            timers: ToastTimers::default(),
        }
    }

    /// Height the toast is expected to occupy when the host cannot measure it.
    #[must_use]
    pub fn estimated_height(&self) -> f32 {
        if self.description.is_some() {
            ESTIMATED_TITLE_HEIGHT + ESTIMATED_DESCRIPTION_HEIGHT
        } else {
            ESTIMATED_TITLE_HEIGHT
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> ToastType {
        self.kind
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_front(&self) -> bool {
        self.front
    }

    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    #[must_use]
    pub fn is_swipe_out(&self) -> bool {
        self.swipe_out
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Position among the toasts that are not removed, 0 being the front.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn z_index(&self) -> usize {
        self.z_index
    }

    /// Vertical distance from the anchored edge, in pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn initial_height(&self) -> f32 {
        self.initial_height
    }

    #[must_use]
    pub fn swipe_amount(&self) -> f32 {
        self.swipe_amount
    }

    /// Whether the auto-dismiss countdown is running.
    #[must_use]
    pub fn has_auto_remove_timer(&self) -> bool {
        self.timers.auto_remove.is_some()
    }
}
