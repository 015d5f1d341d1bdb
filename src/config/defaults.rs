// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all toaster constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Stack size, gaps and container dimensions
//! - **Timing**: Mount, lifetime and unmount delays
//! - **Swipe**: Gesture thresholds

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Number of toasts shown in the stack at once.
pub const VISIBLE_TOASTS: usize = 3;

/// Distance between the toaster and the viewport edge (px).
pub const VIEWPORT_OFFSET: f32 = 32.0;

/// Width of a toast (px).
pub const TOAST_WIDTH: f32 = 356.0;

/// Vertical gap between stacked toasts (px).
pub const GAP: f32 = 14.0;

/// Estimated height of a toast with a title only (px).
pub const ESTIMATED_TITLE_HEIGHT: f32 = 53.0;

/// Extra estimated height when a description is shown (px).
pub const ESTIMATED_DESCRIPTION_HEIGHT: f32 = 19.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay between showing a toast and treating it as mounted (ms).
pub const MOUNT_DELAY_MS: u64 = 16;

/// Auto-dismiss delay after mount (ms).
pub const TOAST_LIFETIME_MS: u64 = 4000;

/// Delay between logical removal and detachment (ms).
pub const TIME_BEFORE_UNMOUNT_MS: u64 = 200;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Swipe distance that dismisses a toast on release (px).
pub const SWIPE_THRESHOLD: f32 = 20.0;

/// Release velocity that dismisses a toast regardless of distance (px/ms).
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 0.11;

/// Movement before a touch drag counts as a swipe (px).
pub const TOUCH_SWIPE_START: f32 = 10.0;

/// Movement before a mouse or pen drag counts as a swipe (px).
pub const POINTER_SWIPE_START: f32 = 2.0;
