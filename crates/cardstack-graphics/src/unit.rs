//! Unit types: Dp, Px, and density-aware dimensions

use std::fmt;
use std::str::FromStr;

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

/// A dimension value as written in an attribute: `"24dp"`, `"48px"` or a
/// bare number (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Dp(Dp),
    Px(Px),
}

impl Dimension {
    /// Resolve to raw pixels for the given screen density.
    pub fn to_px(&self, density: f32) -> f32 {
        match self {
            Dimension::Dp(dp) => dp.to_px(density),
            Dimension::Px(px) => px.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionParseError {
    Empty,
    InvalidNumber { input: String },
    UnknownUnit { input: String, unit: String },
}

impl fmt::Display for DimensionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionParseError::Empty => write!(f, "empty dimension"),
            DimensionParseError::InvalidNumber { input } => {
                write!(f, "invalid number in dimension {input:?}")
            }
            DimensionParseError::UnknownUnit { input, unit } => {
                write!(f, "unknown unit {unit:?} in dimension {input:?}")
            }
        }
    }
}

impl std::error::Error for DimensionParseError {}

impl FromStr for Dimension {
    type Err = DimensionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DimensionParseError::Empty);
        }

        // The unit is the trailing run of letters, so "1e2dp" keeps its exponent.
        let number = trimmed.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let unit = &trimmed[number.len()..];
        let value: f32 = number
            .trim()
            .parse()
            .ok()
            .filter(|value: &f32| value.is_finite())
            .ok_or_else(|| DimensionParseError::InvalidNumber {
                input: input.to_string(),
            })?;

        match unit {
            "" | "px" => Ok(Dimension::Px(Px(value))),
            "dp" | "dip" => Ok(Dimension::Dp(Dp(value))),
            other => Err(DimensionParseError::UnknownUnit {
                input: input.to_string(),
                unit: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dp_and_px() {
        assert_eq!("24dp".parse::<Dimension>(), Ok(Dimension::Dp(Dp(24.0))));
        assert_eq!("12dip".parse::<Dimension>(), Ok(Dimension::Dp(Dp(12.0))));
        assert_eq!("48px".parse::<Dimension>(), Ok(Dimension::Px(Px(48.0))));
        assert_eq!(" 7.5 ".parse::<Dimension>(), Ok(Dimension::Px(Px(7.5))));
    }

    #[test]
    fn dp_resolves_with_density() {
        let dimension: Dimension = "10dp".parse().expect("valid dimension");
        assert_eq!(dimension.to_px(2.5), 25.0);
        let dimension: Dimension = "10px".parse().expect("valid dimension");
        assert_eq!(dimension.to_px(2.5), 10.0);
    }

    #[test]
    fn accepts_exponent_notation() {
        assert_eq!("1e2dp".parse::<Dimension>(), Ok(Dimension::Dp(Dp(100.0))));
        assert_eq!("2.5E1".parse::<Dimension>(), Ok(Dimension::Px(Px(25.0))));
        assert!(matches!(
            "3e".parse::<Dimension>(),
            Err(DimensionParseError::UnknownUnit { ref unit, .. }) if unit == "e"
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Dimension>(), Err(DimensionParseError::Empty));
        assert!(matches!(
            "abc".parse::<Dimension>(),
            Err(DimensionParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "12sp".parse::<Dimension>(),
            Err(DimensionParseError::UnknownUnit { ref unit, .. }) if unit == "sp"
        ));
    }
}
