//! Delay values with unit parsing, normalization and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported time units and their factor to nanoseconds, smallest first.
pub const UNIT_FACTORS: [(&str, f64); 4] = [
    ("ns", 1.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
];

/// Errors produced while parsing or normalizing a [`TimeValue`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// The text does not start with a decimal number followed by unit letters.
    #[error("invalid time value: '{0}'")]
    Malformed(String),

    /// The unit is not one of `ns`, `us`, `ms`, `s`.
    #[error("unknown unit '{0}' (supported units are ns, us, ms, s)")]
    UnsupportedUnit(String),
}

/// A delay as written in a timing report, e.g. `1.25ns` or `3US`.
///
/// The unit text is kept exactly as it appeared in the input. Two values
/// compare equal (`==`) only when both the magnitude and the unit text match,
/// so `1000ns` and `1us` are different values even though they describe the
/// same delay. Use [`to_nanoseconds`](Self::to_nanoseconds) to compare sizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeValue {
    /// The numeric part.
    pub magnitude: f64,
    /// The unit letters, as written.
    pub unit: String,
}

impl TimeValue {
    /// Creates a value without checking the unit.
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// Parses a leading `<number><letters>` pattern, e.g. `"2.5ns"`.
    ///
    /// Anything after the unit letters is ignored, so `"2.5ns,"` parses as
    /// `2.5ns`. The unit is not checked here; an unknown unit surfaces when
    /// the value is normalized.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::Malformed(text.to_string());

        let number_end = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(text.len());
        if number_end == 0 {
            return Err(malformed());
        }

        let rest = &text[number_end..];
        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            return Err(malformed());
        }

        let magnitude: f64 = text[..number_end].parse().map_err(|_| malformed())?;
        Ok(Self::new(magnitude, &rest[..unit_end]))
    }

    /// Returns the factor that converts this value's unit to nanoseconds.
    pub fn unit_factor(&self) -> Result<f64, TimeError> {
        UNIT_FACTORS
            .iter()
            .find(|(name, _)| self.unit.eq_ignore_ascii_case(name))
            .map(|&(_, factor)| factor)
            .ok_or_else(|| TimeError::UnsupportedUnit(self.unit.clone()))
    }

    /// Returns the value in nanoseconds.
    pub fn to_nanoseconds(&self) -> Result<f64, TimeError> {
        Ok(self.magnitude * self.unit_factor()?)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl FromStr for TimeValue {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Selects the item with the largest delay in nanoseconds.
///
/// When several items share the largest delay, the first one wins. Returns
/// `Ok(None)` for an empty input, and fails on the first unsupported unit.
pub fn max_by_magnitude<'a, T, I>(items: I) -> Result<Option<(T, &'a TimeValue)>, TimeError>
where
    I: IntoIterator<Item = (T, &'a TimeValue)>,
{
    let mut best: Option<(T, &'a TimeValue, f64)> = None;
    for (item, value) in items {
        let ns = value.to_nanoseconds()?;
        let larger = match &best {
            Some((_, _, best_ns)) => ns > *best_ns,
            None => true,
        };
        if larger {
            best = Some((item, value, ns));
        }
    }
    Ok(best.map(|(item, value, _)| (item, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(s: &str) -> TimeValue {
        TimeValue::parse(s).unwrap()
    }

    #[test]
    fn parse_integer_ns() {
        let v = tv("5ns");
        assert_eq!(v.magnitude, 5.0);
        assert_eq!(v.unit, "ns");
    }

    #[test]
    fn parse_fractional() {
        let v = tv("0.734us");
        assert_eq!(v.magnitude, 0.734);
        assert_eq!(v.unit, "us");
    }

    #[test]
    fn parse_keeps_unit_case() {
        assert_eq!(tv("3NS").unit, "NS");
    }

    #[test]
    fn parse_ignores_trailing_text() {
        assert_eq!(tv("2.5ns,"), TimeValue::new(2.5, "ns"));
        assert_eq!(tv("7ms(max)"), TimeValue::new(7.0, "ms"));
    }

    #[test]
    fn parse_rejects_space_before_unit() {
        assert!(matches!(
            TimeValue::parse("5 ns"),
            Err(TimeError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_unit_or_number() {
        assert!(TimeValue::parse("5").is_err());
        assert!(TimeValue::parse("ns").is_err());
        assert!(TimeValue::parse("").is_err());
        assert!(TimeValue::parse("-5ns").is_err());
    }

    #[test]
    fn parse_rejects_bad_decimal() {
        assert!(matches!(
            TimeValue::parse("1.2.3ns"),
            Err(TimeError::Malformed(_))
        ));
    }

    #[test]
    fn parse_accepts_unknown_unit() {
        let v = tv("5fs");
        assert_eq!(v.unit, "fs");
        assert_eq!(
            v.to_nanoseconds(),
            Err(TimeError::UnsupportedUnit("fs".to_string()))
        );
    }

    #[test]
    fn factors_strictly_increase() {
        for pair in UNIT_FACTORS.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{} !< {}", pair[0].0, pair[1].0);
        }
        assert_eq!(tv("1us").to_nanoseconds().unwrap(), 1_000.0);
        assert_eq!(tv("1ms").to_nanoseconds().unwrap(), 1_000_000.0);
        assert_eq!(tv("1s").to_nanoseconds().unwrap(), 1_000_000_000.0);
    }

    #[test]
    fn normalization_is_case_insensitive() {
        assert_eq!(tv("2US").to_nanoseconds().unwrap(), 2_000.0);
        assert_eq!(tv("2Ms").to_nanoseconds().unwrap(), 2_000_000.0);
    }

    #[test]
    fn normalization_monotonic_in_magnitude() {
        for (unit, _) in UNIT_FACTORS {
            let small = TimeValue::new(1.5, unit).to_nanoseconds().unwrap();
            let large = TimeValue::new(2.5, unit).to_nanoseconds().unwrap();
            assert!(small < large);
        }
    }

    #[test]
    fn identity_differs_from_magnitude() {
        let a = tv("1000ns");
        let b = tv("1us");
        assert_eq!(a.to_nanoseconds(), b.to_nanoseconds());
        assert_ne!(a, b);
        assert_ne!(tv("1ns"), tv("1NS"));
        assert_eq!(tv("5.0ns"), tv("5ns"));
    }

    #[test]
    fn display_preserves_unit() {
        assert_eq!(tv("5ns").to_string(), "5ns");
        assert_eq!(tv("2.5US").to_string(), "2.5US");
    }

    #[test]
    fn max_picks_largest_normalized() {
        let values: Vec<TimeValue> = ["2ns", "5ns", "5us", "1ms"].iter().map(|s| tv(s)).collect();
        let (idx, max) = max_by_magnitude(values.iter().enumerate())
            .unwrap()
            .unwrap();
        assert_eq!(idx, 3);
        assert_eq!(*max, tv("1ms"));
    }

    #[test]
    fn max_ties_keep_first() {
        let values = [tv("1us"), tv("1000ns"), tv("1us")];
        let (idx, _) = max_by_magnitude(values.iter().enumerate())
            .unwrap()
            .unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn max_of_nothing() {
        let values: Vec<TimeValue> = Vec::new();
        assert!(max_by_magnitude(values.iter().map(|v| ((), v)))
            .unwrap()
            .is_none());
    }

    #[test]
    fn max_propagates_unknown_unit() {
        let values = [tv("1ns"), tv("5fs")];
        let err = max_by_magnitude(values.iter().map(|v| ((), v))).unwrap_err();
        assert_eq!(err, TimeError::UnsupportedUnit("fs".to_string()));
    }

    #[test]
    fn serde_roundtrip() {
        let v = tv("3.5us");
        let json = serde_json::to_string(&v).unwrap();
        let back: TimeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
