use std::collections::BTreeSet;

use bon::Builder;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{core::exclusions::ExclusionSet, prelude::*, quantity::percent::Percent};

/// Settings shared by all the subjects.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
pub struct Settings {
    /// Minimal attendance to maintain.
    #[serde(rename = "target_percentage")]
    pub target: Percent,

    /// Last day of classes, inclusive.
    #[serde(rename = "semester_end_date")]
    pub semester_end: NaiveDate,

    /// Days without classes for everyone.
    #[serde(default)]
    #[builder(default)]
    pub holidays: BTreeSet<NaiveDate>,

    /// Personal leave: days the student will not show up.
    #[serde(default)]
    #[builder(default)]
    pub leaves: BTreeSet<NaiveDate>,
}

impl Settings {
    pub const DEFAULT_TARGET: Percent = Percent(75.0);
    pub const DEFAULT_SEMESTER_DAYS: u64 = 45;

    /// Fresh settings: the default target and the semester ending in 45 days from `today`.
    pub fn starting_on(today: NaiveDate) -> Result<Self> {
        let semester_end = today
            .checked_add_days(Days::new(Self::DEFAULT_SEMESTER_DAYS))
            .with_context(|| format!("`{today}` is too far in the future"))?;
        Ok(Self::builder().target(Self::DEFAULT_TARGET).semester_end(semester_end).build())
    }

    /// Union of the holidays and leaves.
    pub fn excluded_dates(&self) -> ExclusionSet {
        self.holidays.union(&self.leaves).copied().collect()
    }

    pub const fn exclusions_mut(&mut self, kind: ExclusionKind) -> &mut BTreeSet<NaiveDate> {
        match kind {
            ExclusionKind::Holiday => &mut self.holidays,
            ExclusionKind::Leave => &mut self.leaves,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum ExclusionKind {
    #[display("holiday")]
    Holiday,

    #[display("leave")]
    Leave,
}
