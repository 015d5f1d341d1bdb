// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags for the demo application.

use crate::config::{self, Config};
use crate::error::Result;
use crate::toaster::{self, PointerKind, Position, ToastType, ToasterOptions};
use crate::ui::toast as overlay;
use iced::Point;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Demo button: show a toast of the given type.
    Show(ToastType),
    /// Demo button: show a toast with a description.
    ShowDescribed,
    /// Demo button: remove every toast.
    ClearAll,
    Overlay(overlay::Event),
    Toaster(toaster::Message),
    /// The mouse or a finger moved, in window coordinates.
    PointerMoved { position: Point, kind: PointerKind },
    /// The mouse button or finger was released anywhere in the window.
    PointerReleased,
    Tick(Instant),
}

/// Command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub close_button: bool,
    pub rich_colors: bool,
    pub position: Option<Position>,
    pub config: Option<PathBuf>,
}

impl Flags {
    /// Parses `--close-button`, `--rich-colors`, `--position <y-x>` and
    /// `--config <path>`.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Self {
            close_button: args.contains("--close-button"),
            rich_colors: args.contains("--rich-colors"),
            position: args.opt_value_from_str("--position")?,
            config: args.opt_value_from_str("--config")?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            tracing::warn!(?rest, "ignoring unexpected arguments");
        }
        Ok(flags)
    }

    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    /// Loads the settings file and applies the flags on top of it.
    #[must_use]
    pub fn resolve(&self) -> ToasterOptions {
        let loaded = match &self.config {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load settings, using defaults");
            Config::default()
        });
        self.apply(config.to_options())
    }

    fn apply(&self, mut options: ToasterOptions) -> ToasterOptions {
        options.close_button |= self.close_button;
        options.rich_colors |= self.rich_colors;
        if let Some(position) = self.position {
            options.position = position;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toaster::{XPosition, YPosition};
    use std::ffi::OsString;

    fn args(raw: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(raw.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_all_flags() {
        let flags = Flags::parse(args(&[
            "--close-button",
            "--position",
            "top-left",
            "--config",
            "/tmp/settings.toml",
        ]))
        .expect("valid flags");

        assert!(flags.close_button);
        assert!(!flags.rich_colors);
        assert_eq!(
            flags.position,
            Some(Position::new(YPosition::Top, XPosition::Left))
        );
        assert_eq!(flags.config, Some(PathBuf::from("/tmp/settings.toml")));
    }

    #[test]
    fn invalid_position_is_an_error() {
        assert!(Flags::parse(args(&["--position", "sideways"])).is_err());
    }

    #[test]
    fn flags_override_loaded_options() {
        let flags = Flags {
            rich_colors: true,
            position: Some(Position::new(YPosition::Top, XPosition::Center)),
            ..Flags::default()
        };
        let options = flags.apply(ToasterOptions::default());

        assert!(options.rich_colors);
        assert!(!options.close_button);
        assert_eq!(options.position.x, XPosition::Center);
    }
}
