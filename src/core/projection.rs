use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    core::{
        calendar::{ClassDay, count_sessions},
        recommendation::recommend_dates,
        subject::Subject,
    },
    quantity::percent::Percent,
};

/// Outlook of a single subject by the end of the semester.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Attended classes plus duty or medical leave.
    pub current_effective: u32,

    /// Current attendance, rounded to tenths for display.
    #[serde(rename = "currentPct")]
    pub current_percentage: Percent,

    /// Sessions left until the end of the semester.
    pub future_classes: u32,

    /// Sessions delivered by the end of the semester.
    pub final_total: u32,

    /// Minimal attended sessions by the end of the semester.
    pub required_total: u32,

    /// Sessions still to attend, negative when there is a surplus.
    pub needed: i64,

    #[serde(flatten)]
    pub status: Status,

    /// Days to attend first, soonest first.
    pub recommended_dates: Vec<NaiveDate>,
}

impl Projection {
    /// Combine the historical counters with the upcoming class days.
    pub fn new(subject: &Subject, target: Percent, future_classes: &[ClassDay]) -> Self {
        let current_effective = subject.effective_attendance();
        let n_future_classes = count_sessions(future_classes);
        let final_total = subject.delivered.saturating_add(n_future_classes);
        let required_total = target.ceil_share_of(final_total);
        let needed = i64::from(required_total) - i64::from(current_effective);
        let status = Status::classify(
            current_effective,
            n_future_classes,
            final_total,
            required_total,
            needed,
        );
        let recommended_dates = match status {
            Status::Warning { .. } => {
                recommend_dates(future_classes, u32::try_from(needed).unwrap_or(u32::MAX))
            }
            Status::Safe { .. } | Status::Impossible { .. } => Vec::new(),
        };
        Self {
            current_effective,
            current_percentage: Percent::of(current_effective, subject.delivered)
                .round_to_tenths(),
            future_classes: n_future_classes,
            final_total,
            required_total,
            needed,
            status,
            recommended_dates,
        }
    }
}

/// Feasibility of the target.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Status {
    /// The target is met even when skipping `skippable` of the remaining sessions.
    Safe { skippable: u32 },

    /// Some of the remaining sessions must be attended, the rest may be skipped.
    Warning { skippable: u32 },

    /// The target cannot be reached even with perfect attendance from now on.
    Impossible {
        #[serde(rename = "maxAchievable")]
        max_achievable: Percent,
    },
}

impl Status {
    fn classify(
        current_effective: u32,
        future_classes: u32,
        final_total: u32,
        required_total: u32,
        needed: i64,
    ) -> Self {
        if needed <= 0 {
            let surplus = i64::from(current_effective) + i64::from(future_classes)
                - i64::from(required_total);
            let skippable = surplus.min(i64::from(future_classes));
            Self::Safe { skippable: u32::try_from(skippable).unwrap_or_default() }
        } else if needed > i64::from(future_classes) {
            let max_achievable =
                Percent::of(current_effective.saturating_add(future_classes), final_total);
            Self::Impossible { max_achievable: max_achievable.round_to_tenths() }
        } else {
            let skippable = i64::from(future_classes) - needed;
            Self::Warning { skippable: u32::try_from(skippable).unwrap_or_default() }
        }
    }

    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe { .. } => "safe",
            Self::Warning { .. } => "warning",
            Self::Impossible { .. } => "impossible",
        }
    }
}
