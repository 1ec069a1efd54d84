// SPDX-License-Identifier: MPL-2.0
//! Screen anchors a notification stack can be attached to.

use std::fmt;
use std::str::FromStr;

/// One of the nine screen anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    /// Default anchor. Notifications stack from the bottom-right corner.
    #[default]
    BottomRight,
}

/// Returned when a position name is not one of the nine anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl Position {
    /// All anchors, in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::CenterLeft,
        Position::Center,
        Position::CenterRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Stable index into [`Position::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case name, e.g. `"bottom-right"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::CenterLeft => "center-left",
            Position::Center => "center",
            Position::CenterRight => "center-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Parses `name`, returning `fallback` for anything unrecognised.
    #[must_use]
    pub fn parse_or(name: &str, fallback: Position) -> Position {
        name.parse().unwrap_or(fallback)
    }

    /// Whether the stack grows downward from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    /// Whether the stack grows upward from the bottom edge.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Position::ALL
            .into_iter()
            .find(|position| position.name() == normalized)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}
