use clap::Parser;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    cli::state::StateArgs,
    core::{
        projection::Projection,
        semester::{Semester, project},
        subject::SubjectId,
    },
    prelude::*,
    tables::{build_projections_table, build_recommendations_table},
};

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(long, value_enum, default_value = "table")]
    format: Format,

    /// Only project the subject with the ID.
    #[clap(long)]
    subject: Option<SubjectId>,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Format {
    /// Tables for the terminal.
    Table,

    /// Projections as JSON.
    Json,
}

impl PlanArgs {
    #[instrument(skip_all)]
    pub fn run(self, state_args: &StateArgs) -> Result {
        let today = state_args.today();
        let state = state_args.load()?;
        let settings = &state.settings;
        info!(
            %today,
            target = %settings.target,
            semester_end = %settings.semester_end,
            n_holidays = settings.holidays.len(),
            n_leaves = settings.leaves.len(),
            "planning…",
        );
        if settings.semester_end < today {
            warn!("the semester is already over, no classes are left");
        }
        if state.subjects.is_empty() && self.subject.is_none() {
            info!("no subjects yet, add one with `subject add`");
        }
        for subject in state.subjects.iter().filter(|subject| !subject.is_consistent()) {
            warn!(
                id = %subject.id,
                attended = subject.attended,
                dl = subject.dl,
                delivered = subject.delivered,
                "credited attendance exceeds the delivered classes",
            );
        }

        let projections = if let Some(id) = self.subject {
            let subject = state.subject(id)?;
            vec![(subject, project(subject, settings, today))]
        } else {
            let semester = Semester::new(settings, today);
            state.subjects.iter().map(|subject| (subject, semester.project(subject))).collect_vec()
        };

        match self.format {
            Format::Table => {
                println!("{}", build_projections_table(settings, &projections));
                if projections.iter().any(|(_, projection)| projection.status.is_warning()) {
                    println!("{}", build_recommendations_table(&projections));
                }
            }
            Format::Json => {
                let entries = projections
                    .iter()
                    .map(|(subject, projection)| SubjectProjection {
                        id: subject.id,
                        name: &subject.name,
                        projection,
                    })
                    .collect_vec();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SubjectProjection<'a> {
    id: SubjectId,
    name: &'a str,

    #[serde(flatten)]
    projection: &'a Projection,
}
