use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Percentage on the `0..=100` scale.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Self = Self(0.0);
    pub const HUNDRED: Self = Self(100.0);

    /// Share of `part` in `whole`, or zero when `whole` is zero.
    pub fn of(part: u32, whole: u32) -> Self {
        if whole == 0 { Self::ZERO } else { Self(f64::from(part) / f64::from(whole) * 100.0) }
    }

    /// Round to tenths of a percent.
    #[must_use]
    pub fn round_to_tenths(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }

    /// Smallest whole number of items out of `total` which is not below this percentage.
    ///
    /// Multiplication goes first, so that whole percentages yield exact products.
    pub fn ceil_share_of(self, total: u32) -> u32 {
        let share = (self.0 * f64::from(total) / 100.0).ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let share = share.clamp(0.0, f64::from(u32::MAX)) as u32;
        share
    }

    pub fn is_valid_target(self) -> bool {
        (Self::ZERO..=Self::HUNDRED).contains(&self)
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_of_zero_whole() {
        assert_eq!(Percent::of(15, 0), Percent::ZERO);
    }

    #[test]
    fn test_of() {
        assert_abs_diff_eq!(Percent::of(15, 20).0, 75.0);
        assert_abs_diff_eq!(Percent::of(30, 20).0, 150.0);
    }

    #[test]
    fn test_round_to_tenths() {
        assert_abs_diff_eq!(Percent(66.666_666).round_to_tenths().0, 66.7);
        assert_abs_diff_eq!(Percent(12.34).round_to_tenths().0, 12.3);
    }

    #[test]
    fn test_ceil_share_of() {
        assert_eq!(Percent(75.0).ceil_share_of(33), 25);
        assert_eq!(Percent(75.0).ceil_share_of(20), 15);
        assert_eq!(Percent(70.0).ceil_share_of(10), 7);
        assert_eq!(Percent(57.0).ceil_share_of(100), 57);
        assert_eq!(Percent(75.5).ceil_share_of(10), 8);
        assert_eq!(Percent(75.0).ceil_share_of(0), 0);
    }

    #[test]
    fn test_ceil_share_of_negative() {
        assert_eq!(Percent(-10.0).ceil_share_of(10), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percent(75.0).to_string(), "75.0%");
        assert_eq!(Percent(81.25).round_to_tenths().to_string(), "81.3%");
    }

    #[test]
    fn test_is_valid_target() {
        assert!(Percent(75.0).is_valid_target());
        assert!(Percent(100.0).is_valid_target());
        assert!(!Percent(100.5).is_valid_target());
        assert!(!Percent(-1.0).is_valid_target());
    }
}
