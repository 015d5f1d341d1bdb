// SPDX-License-Identifier: MPL-2.0
//! Iced front-end for the toaster.
//!
//! - [`toast`] - overlay rendering the toast stack
//! - [`design_tokens`] - colors, spacing and sizes used by the overlay

pub mod design_tokens;
pub mod toast;
