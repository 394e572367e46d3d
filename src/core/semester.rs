use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    core::{
        calendar::simulate_future_classes,
        exclusions::ExclusionSet,
        projection::Projection,
        settings::Settings,
        subject::Subject,
    },
    prelude::*,
    quantity::percent::Percent,
};

/// The rest of the semester as seen from `today`: everything the projection needs
/// besides the subject itself.
///
/// The exclusions are normalised once here, so that projecting many subjects
/// does not rebuild them.
#[must_use]
#[derive(Clone, Debug)]
pub struct Semester {
    /// Not counted as a future day.
    today: NaiveDate,

    /// Inclusive.
    end: NaiveDate,

    target: Percent,

    excluded: ExclusionSet,
}

impl Semester {
    pub fn new(settings: &Settings, today: NaiveDate) -> Self {
        Self {
            today,
            end: settings.semester_end,
            target: settings.target,
            excluded: settings.excluded_dates(),
        }
    }

    #[instrument(skip_all, fields(subject = %subject.id))]
    pub fn project(&self, subject: &Subject) -> Projection {
        let future_classes =
            simulate_future_classes(subject.schedule, self.today, self.end, &self.excluded)
                .collect_vec();
        let projection = Projection::new(subject, self.target, &future_classes);
        debug!(
            future_classes = projection.future_classes,
            required_total = projection.required_total,
            needed = projection.needed,
            status = projection.status.label(),
            "projected",
        );
        projection
    }
}

/// Project the subject by the end of the semester, as seen from `today`.
pub fn project(subject: &Subject, settings: &Settings, today: NaiveDate) -> Projection {
    Semester::new(settings, today).project(subject)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Days, Weekday};

    use super::*;
    use crate::core::{projection::Status, schedule::WeeklySchedule, subject::SubjectId};

    fn mathematics() -> Subject {
        Subject::builder()
            .id(SubjectId(1))
            .name("Advanced Mathematics")
            .delivered(20)
            .attended(15)
            .schedule(WeeklySchedule([0, 1, 0, 1, 0, 1, 0]))
            .build()
    }

    fn today() -> NaiveDate {
        // Monday.
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn settings(semester_end: NaiveDate) -> Settings {
        Settings::builder().target(Percent(75.0)).semester_end(semester_end).build()
    }

    #[test]
    fn test_thirty_days_ahead() {
        let end = today() + Days::new(30);
        let n_class_days = today()
            .iter_days()
            .skip(1)
            .take_while(|date| *date <= end)
            .filter(|date| matches!(date.weekday(), Weekday::Mon | Weekday::Wed | Weekday::Fri))
            .count();
        assert_eq!(n_class_days, 13);

        let projection = project(&mathematics(), &settings(end), today());
        assert_eq!(projection.future_classes, 13);
        assert_eq!(projection.final_total, 33);
        assert_eq!(projection.required_total, 25);
        assert_eq!(projection.needed, 10);
        assert_eq!(projection.status, Status::Warning { skippable: 3 });
        assert_eq!(projection.recommended_dates.len(), 10);
        assert_eq!(projection.recommended_dates[0], NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    }

    #[test]
    fn test_deadline_yesterday() {
        let projection = project(&mathematics(), &settings(today().pred_opt().unwrap()), today());
        assert_eq!(projection.future_classes, 0);
        assert_eq!(projection.final_total, 20);
        assert_eq!(projection.required_total, 15);
        assert_eq!(projection.needed, 0);
        assert_eq!(projection.status, Status::Safe { skippable: 0 });
    }

    #[test]
    fn test_deadline_today() {
        let projection = project(&mathematics(), &settings(today()), today());
        assert_eq!(projection.future_classes, 0);
        assert_eq!(projection.final_total, 20);
    }

    #[test]
    fn test_everything_excluded() {
        let end = today() + Days::new(14);
        let mut settings = settings(end);
        settings.holidays = today().iter_days().skip(1).take(10).collect();
        settings.leaves = today().iter_days().skip(11).take(4).collect();
        let projection = project(&mathematics(), &settings, today());
        assert_eq!(projection.future_classes, 0);
    }

    #[test]
    fn test_leaves_reduce_future_classes() {
        let end = today() + Days::new(7);
        let mut settings = settings(end);
        settings.leaves.insert(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        let projection = project(&mathematics(), &settings, today());
        // Friday and the next Monday are left.
        assert_eq!(projection.future_classes, 2);
    }

    #[test]
    fn test_huge_hand_edited_session_count() {
        let mut subject = mathematics();
        subject.schedule = WeeklySchedule([0, i32::MAX, 0, 0, 0, 0, 0]);
        let projection = project(&subject, &settings(today() + Days::new(7)), today());
        assert_eq!(projection.future_classes, 2_147_483_647);
        assert_eq!(projection.final_total, 2_147_483_667);
        assert_eq!(projection.required_total, 1_610_612_751);
        assert_eq!(projection.needed, 1_610_612_736);
        assert_eq!(projection.status, Status::Warning { skippable: 536_870_911 });
        assert_eq!(projection.recommended_dates, [NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()]);
    }

    #[test]
    fn test_idempotent() {
        let mut settings = settings(today() + Days::new(60));
        settings.target = Percent(80.0);
        settings.holidays.insert(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        let semester = Semester::new(&settings, today());
        let subject = mathematics();
        assert_eq!(semester.project(&subject), semester.project(&subject));
    }
}
