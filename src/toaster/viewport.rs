// SPDX-License-Identifier: MPL-2.0
//! Per-page toaster context.

use super::manager::{Toaster, ToasterOptions};
use std::time::Instant;
use tracing::debug;

/// Owns the single toaster of a page or window.
///
/// Hosts create one `Viewport` and pass it to whatever needs to show toasts.
#[derive(Debug, Default)]
pub struct Viewport {
    toaster: Option<Toaster>,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the page's toaster, creating it on first call.
    ///
    /// Later calls keep the existing container and its toasts, re-arming
    /// them instead; `options` are only used for creation.
    pub fn init(&mut self, options: ToasterOptions, now: Instant) -> &mut Toaster {
        match &mut self.toaster {
            Some(toaster) => toaster.reinitialize(now),
            None => debug!(position = %options.position, "creating toaster"),
        }
        self.toaster.get_or_insert_with(|| Toaster::new(options))
    }

    #[must_use]
    pub fn toaster(&self) -> Option<&Toaster> {
        self.toaster.as_ref()
    }

    pub fn toaster_mut(&mut self) -> Option<&mut Toaster> {
        self.toaster.as_mut()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.toaster.is_some()
    }
}
