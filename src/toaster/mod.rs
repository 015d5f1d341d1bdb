// SPDX-License-Identifier: MPL-2.0
//! Headless toast stack.
//!
//! This module holds the state machine behind the notifications: the
//! ordered toast list, its stacking layout, the timers driving each toast's
//! lifecycle and the swipe gesture used to dismiss them. It does not draw
//! anything; see [`crate::markup`] and [`crate::ui`] for front-ends.
//!
//! # Components
//!
//! - [`Viewport`] - per-page context owning at most one toaster
//! - [`Toaster`] - the container and lifecycle manager
//! - [`Toast`] - one notification and its display state
//! - [`Timers`] - deadline queue with cancellable handles
//!
//! # Usage
//!
//! ```
//! use iced_toaster::toaster::{ToasterOptions, Viewport};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut viewport = Viewport::new();
//! let toaster = viewport.init(ToasterOptions::default(), start);
//!
//! let id = toaster.success_at("Image saved", start);
//! toaster.advance(start + Duration::from_millis(16));
//! assert!(toaster.get(&id).unwrap().is_mounted());
//!
//! toaster.remove_at(&id, start + Duration::from_secs(1));
//! assert!(toaster.get(&id).unwrap().is_removed());
//! ```
//!
//! # Lifecycle
//!
//! - show: prepended unmounted, mounted 16ms later
//! - mount: measured, then auto-dismissed after 4s unless hovered
//! - remove: flagged at once, detached 200ms later

pub mod id;
mod manager;
mod position;
mod stack;
mod swipe;
mod timer;
mod toast;
mod viewport;

pub use id::ToastId;
pub use manager::{Message, Timing, Toaster, ToasterOptions};
pub use position::{ParsePositionError, Position, XPosition, YPosition};
pub use swipe::{DragUpdate, PointerKind, PointerTarget, SwipeGesture, SwipeOutcome};
pub use timer::{TimerEvent, TimerHandle, Timers};
pub use toast::{ShowOptions, Toast, ToastType};
pub use viewport::Viewport;
