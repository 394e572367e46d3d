use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::{exclusions::ExclusionSet, schedule::WeeklySchedule};

/// Upcoming class sessions that fall on a single day.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ClassDay {
    pub date: NaiveDate,
    pub weekday: Weekday,

    /// Session instances held on the day, never zero.
    pub n_sessions: u32,
}

/// Expand the weekly template into class days in `(after, until]`.
///
/// Excluded days and days without sessions are skipped. An empty window (`until` before
/// the day after `after`) simply yields nothing.
pub fn simulate_future_classes(
    schedule: WeeklySchedule,
    after: NaiveDate,
    until: NaiveDate,
    excluded: &ExclusionSet,
) -> impl Iterator<Item = ClassDay> + '_ {
    after
        .succ_opt()
        .into_iter()
        .flat_map(|start| start.iter_days())
        .take_while(move |date| *date <= until)
        .filter(move |date| !excluded.contains(*date))
        .filter_map(move |date| {
            let weekday = date.weekday();
            let n_sessions = schedule.sessions_on(weekday);
            (n_sessions != 0).then_some(ClassDay { date, weekday, n_sessions })
        })
}

/// Total session instances over the days, saturating at `u32::MAX`.
pub fn count_sessions(days: &[ClassDay]) -> u32 {
    let total: u64 = days.iter().map(|day| u64::from(day.n_sessions)).sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}
