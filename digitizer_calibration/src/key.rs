// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis names and the fixed key set used by calibration UIs.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// A logical calibration axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// One of the four calibration references: two per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKey {
    /// First X reference.
    X1,
    /// Second X reference.
    X2,
    /// First Y reference.
    Y1,
    /// Second Y reference.
    Y2,
}

impl AxisKey {
    /// Every key, in `x1, x2, y1, y2` order.
    pub const ALL: [Self; 4] = [Self::X1, Self::X2, Self::Y1, Self::Y2];

    /// The axis this key calibrates.
    pub const fn axis(self) -> Axis {
        match self {
            Self::X1 | Self::X2 => Axis::X,
            Self::Y1 | Self::Y2 => Axis::Y,
        }
    }

    /// Whether this is the first reference of its axis.
    pub const fn is_first(self) -> bool {
        matches!(self, Self::X1 | Self::Y1)
    }

    /// Lowercase name, e.g. `"x1"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::Y1 => "y1",
            Self::Y2 => "y2",
        }
    }
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not one of `x1`, `x2`, `y1`, `y2`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown calibration key `{input}`; expected one of x1, x2, y1, y2")]
pub struct ParseAxisKeyError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for AxisKey {
    type Err = ParseAxisKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAxisKeyError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for key in AxisKey::ALL {
            assert_eq!(key.as_str().parse::<AxisKey>(), Ok(key));
        }
        assert_eq!(" Y2 ".parse::<AxisKey>(), Ok(AxisKey::Y2));
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = "z1".parse::<AxisKey>().unwrap_err();
        assert_eq!(err.input, "z1");
        assert_eq!(
            err.to_string(),
            "unknown calibration key `z1`; expected one of x1, x2, y1, y2"
        );
    }

    #[test]
    fn keys_map_to_axes() {
        assert_eq!(AxisKey::X2.axis(), Axis::X);
        assert_eq!(AxisKey::Y1.axis(), Axis::Y);
        assert!(AxisKey::Y1.is_first());
        assert!(!AxisKey::X2.is_first());
    }
}
