use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::core::schedule::WeeklySchedule;

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl SubjectId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// A tracked course.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Subject {
    pub id: SubjectId,

    #[serde(default)]
    #[builder(default, into)]
    pub name: String,

    /// Classes held so far.
    #[serde(default)]
    #[builder(default)]
    pub delivered: u32,

    /// Classes physically attended.
    #[serde(default)]
    #[builder(default)]
    pub attended: u32,

    /// Duty or medical leave: classes credited despite the absence.
    #[serde(default)]
    #[builder(default)]
    pub dl: u32,

    #[serde(default)]
    #[builder(default = WeeklySchedule::WORKING_DAYS)]
    pub schedule: WeeklySchedule,
}

impl Subject {
    /// Attendance counted towards the eligibility.
    pub const fn effective_attendance(&self) -> u32 {
        self.attended.saturating_add(self.dl)
    }

    /// Whether the credited attendance fits into the delivered classes.
    pub const fn is_consistent(&self) -> bool {
        self.effective_attendance() <= self.delivered
    }
}
