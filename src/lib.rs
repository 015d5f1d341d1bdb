// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` renders stacked, transient toast notifications.
//!
//! The [`toaster`] module is a headless state machine managing the toast
//! stack, its timers and swipe-to-dismiss gestures. [`markup`] renders that
//! state as attribute-annotated HTML, and [`ui`] draws it as an Iced overlay.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod toaster;
pub mod ui;
