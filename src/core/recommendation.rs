use chrono::NaiveDate;
use itertools::Itertools;

use crate::core::calendar::ClassDay;

/// Pick the soonest class days to attend in order to cover `needed` sessions.
///
/// Attending any session on a day covers the day, while `needed` counts sessions.
/// So, when a day holds several sessions, fewer days than `needed` may come out.
pub fn recommend_dates(future_classes: &[ClassDay], needed: u32) -> Vec<NaiveDate> {
    future_classes
        .iter()
        .map(|day| day.date)
        .sorted_unstable()
        .dedup()
        .take(needed as usize)
        .collect()
}
