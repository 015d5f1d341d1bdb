// SPDX-License-Identifier: MPL-2.0
//! Toaster placement within the viewport.

use std::fmt;
use std::str::FromStr;

/// Vertical edge the stack grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YPosition {
    Top,
    #[default]
    Bottom,
}

/// Horizontal alignment of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XPosition {
    Left,
    Center,
    #[default]
    Right,
}

impl YPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            YPosition::Top => "top",
            YPosition::Bottom => "bottom",
        }
    }
}

impl XPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            XPosition::Left => "left",
            XPosition::Center => "center",
            XPosition::Right => "right",
        }
    }
}

/// Corner of the viewport the toaster is anchored to. Defaults to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub y: YPosition,
    pub x: XPosition,
}

impl Position {
    #[must_use]
    pub const fn new(y: YPosition, x: XPosition) -> Self {
        Self { y, x }
    }
}

/// Returned when a position string is not of the `"<y>-<x>"` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toaster position: {:?}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (y, x) = s.trim().split_once('-').ok_or_else(err)?;

        let y = match y {
            "top" => YPosition::Top,
            "bottom" => YPosition::Bottom,
            _ => return Err(err()),
        };
        let x = match x {
            "left" => XPosition::Left,
            "center" => XPosition::Center,
            "right" => XPosition::Right,
            _ => return Err(err()),
        };
        Ok(Self { y, x })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.y.as_str(), self.x.as_str())
    }
}
