use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use chrono::Weekday;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Weekly class template: number of sessions per weekday, starting from Sunday.
///
/// Counts are signed so that whatever is stored survives a round trip,
/// negative counts are treated as no sessions at all.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct WeeklySchedule(pub [i32; 7]);

impl WeeklySchedule {
    /// Weekdays in the order of the schedule slots.
    pub const WEEKDAYS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Monday to Friday, one session each.
    pub const WORKING_DAYS: Self = Self([0, 1, 1, 1, 1, 1, 0]);

    /// Upper bound accepted from user input.
    pub const MAX_SESSIONS: u32 = 5;

    pub fn sessions_on(self, weekday: Weekday) -> u32 {
        let sessions = self.0[weekday.num_days_from_sunday() as usize];
        if sessions > 0 { sessions.unsigned_abs() } else { 0 }
    }

    pub fn set_sessions(&mut self, weekday: Weekday, sessions: u32) {
        self.0[weekday.num_days_from_sunday() as usize] =
            i32::try_from(sessions).unwrap_or(i32::MAX);
    }

    pub fn sessions_per_week(self) -> u32 {
        Self::WEEKDAYS.into_iter().map(|weekday| self.sessions_on(weekday)).sum()
    }

    /// Bring every slot into `0..=MAX_SESSIONS`.
    #[must_use]
    pub fn clamped(self) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let max = Self::MAX_SESSIONS as i32;
        Self(self.0.map(|sessions| sessions.clamp(0, max)))
    }
}

impl FromStr for WeeklySchedule {
    type Err = Error;

    /// Parse seven comma-separated counts, for example: `0,1,0,1,0,1,0`.
    fn from_str(s: &str) -> Result<Self> {
        let counts: Vec<i32> = s
            .split(',')
            .map(|count| {
                count.trim().parse().with_context(|| format!("invalid session count `{count}`"))
            })
            .collect::<Result<_>>()?;
        let counts: [i32; 7] = counts.try_into().map_err(|counts: Vec<i32>| {
            anyhow::anyhow!("expected 7 weekday counts starting from Sunday, got {}", counts.len())
        })?;
        Ok(Self(counts))
    }
}

impl Display for WeeklySchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

/// Parse a weekday either by its Sunday-based index (`0..=6`) or by its English name.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    if let Ok(index) = s.parse::<usize>() {
        return WeeklySchedule::WEEKDAYS
            .get(index)
            .copied()
            .with_context(|| format!("weekday index `{index}` is out of `0..=6`"));
    }
    s.parse::<Weekday>().map_err(|_| anyhow::anyhow!("unknown weekday `{s}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_on() {
        let schedule = WeeklySchedule([0, 1, 0, 3, 0, 1, 0]);
        assert_eq!(schedule.sessions_on(Weekday::Sun), 0);
        assert_eq!(schedule.sessions_on(Weekday::Mon), 1);
        assert_eq!(schedule.sessions_on(Weekday::Wed), 3);
        assert_eq!(schedule.sessions_per_week(), 5);
    }

    #[test]
    fn test_negative_sessions_count_as_none() {
        let schedule = WeeklySchedule([-2, 1, 0, 0, 0, 0, 0]);
        assert_eq!(schedule.sessions_on(Weekday::Sun), 0);
        assert_eq!(schedule.sessions_per_week(), 1);
    }

    #[test]
    fn test_set_sessions() {
        let mut schedule = WeeklySchedule::default();
        schedule.set_sessions(Weekday::Sat, 2);
        assert_eq!(schedule, WeeklySchedule([0, 0, 0, 0, 0, 0, 2]));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(
            WeeklySchedule([-1, 7, 2, 0, 5, 6, 1]).clamped(),
            WeeklySchedule([0, 5, 2, 0, 5, 5, 1]),
        );
    }

    #[test]
    fn test_parse() -> Result {
        let schedule: WeeklySchedule = "0,1,0,1,0,1,0".parse()?;
        assert_eq!(schedule, WeeklySchedule([0, 1, 0, 1, 0, 1, 0]));
        let schedule: WeeklySchedule = " 1, 2,3,4,5,0,0 ".parse()?;
        assert_eq!(schedule, WeeklySchedule([1, 2, 3, 4, 5, 0, 0]));
        Ok(())
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!("0,1,0".parse::<WeeklySchedule>().is_err());
        assert!("0,1,0,1,0,1,0,1".parse::<WeeklySchedule>().is_err());
        assert!("0,1,x,1,0,1,0".parse::<WeeklySchedule>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(WeeklySchedule::WORKING_DAYS.to_string(), "0,1,1,1,1,1,0");
    }

    #[test]
    fn test_parse_weekday() -> Result {
        assert_eq!(parse_weekday("0")?, Weekday::Sun);
        assert_eq!(parse_weekday("6")?, Weekday::Sat);
        assert_eq!(parse_weekday("mon")?, Weekday::Mon);
        assert_eq!(parse_weekday("Wednesday")?, Weekday::Wed);
        assert!(parse_weekday("7").is_err());
        assert!(parse_weekday("someday").is_err());
        Ok(())
    }
}
