use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Normalised set of calendar days on which no classes are simulated.
#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq, derive_more::From)]
pub struct ExclusionSet(BTreeSet<NaiveDate>);

impl ExclusionSet {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }
}

impl FromIterator<NaiveDate> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
