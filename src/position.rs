// SPDX-License-Identifier: MPL-2.0
//! Screen corners a toast stack can anchor to.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vertical edge a position is anchored to.
///
/// Offsets grow away from the anchor: downward from the top edge,
/// upward from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Bottom,
}

/// One of the six screen corners toasts can be stacked into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    TopCenter,
    BottomCenter,
}

impl Position {
    /// All six positions, in registry order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    /// The kebab-case identifier, e.g. `"top-right"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::TopCenter => "top-center",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Index of this position in [`Position::ALL`], used to address the
    /// manager's stack registry.
    #[must_use]
    pub(crate) fn index(&self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopRight => 1,
            Position::BottomLeft => 2,
            Position::BottomRight => 3,
            Position::TopCenter => 4,
            Position::BottomCenter => 5,
        }
    }

    /// The anchor edge, derived from the identifier's first segment.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        match self.as_str().split('-').next() {
            Some("bottom") => Anchor::Bottom,
            _ => Anchor::Top,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown position: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for position in Position::ALL {
            let parsed: Position = position.as_str().parse().expect("known identifier");
            assert_eq!(parsed, position);
        }
    }

    #[test]
    fn unknown_identifier_is_a_config_error() {
        let err = "middle-left".parse::<Position>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn anchor_follows_first_identifier_segment() {
        assert_eq!(Position::TopLeft.anchor(), Anchor::Top);
        assert_eq!(Position::TopRight.anchor(), Anchor::Top);
        assert_eq!(Position::TopCenter.anchor(), Anchor::Top);
        assert_eq!(Position::BottomLeft.anchor(), Anchor::Bottom);
        assert_eq!(Position::BottomRight.anchor(), Anchor::Bottom);
        assert_eq!(Position::BottomCenter.anchor(), Anchor::Bottom);
    }

    #[test]
    fn registry_indices_are_distinct_and_in_range() {
        for (expected, position) in Position::ALL.iter().enumerate() {
            assert_eq!(position.index(), expected);
        }
    }

    #[test]
    fn default_position_is_top_right() {
        assert_eq!(Position::default(), Position::TopRight);
    }
}
