use chrono::Weekday;
use clap::{Parser, Subcommand};

use crate::{
    cli::state::StateArgs,
    core::{
        schedule::{WeeklySchedule, parse_weekday},
        subject::{Subject, SubjectId},
    },
    prelude::*,
};

#[derive(Parser)]
pub struct SubjectArgs {
    #[command(subcommand)]
    command: SubjectCommand,
}

impl SubjectArgs {
    #[instrument(skip_all)]
    pub fn run(self, state_args: &StateArgs) -> Result {
        let mut state = state_args.load()?;
        match self.command {
            SubjectCommand::Add(fields) => {
                let mut subject = Subject::builder().id(state.next_subject_id()).build();
                fields.apply_to(&mut subject);
                check_consistency(&subject);
                if subject.schedule.sessions_per_week() == 0 {
                    warn!(id = %subject.id, "the schedule is empty, no classes will be projected");
                }
                info!(id = %subject.id, name = %subject.name, "added");
                state.subjects.push(subject);
            }
            SubjectCommand::Update(args) => {
                let subject = state.subject_mut(args.id)?;
                args.fields.apply_to(subject);
                check_consistency(subject);
                info!(id = %subject.id, "updated");
            }
            SubjectCommand::SetSessions(args) => {
                let sessions = if args.sessions > WeeklySchedule::MAX_SESSIONS {
                    warn!(requested = args.sessions, "too many sessions, limiting to 5");
                    WeeklySchedule::MAX_SESSIONS
                } else {
                    args.sessions
                };
                let subject = state.subject_mut(args.id)?;
                subject.schedule.set_sessions(args.weekday, sessions);
                info!(id = %subject.id, weekday = %args.weekday, sessions, "updated");
            }
            SubjectCommand::Remove(args) => {
                let subject = state.remove_subject(args.id)?;
                info!(id = %subject.id, name = %subject.name, "removed");
            }
        }
        state_args.save(&state)
    }
}

#[derive(Subcommand)]
enum SubjectCommand {
    /// Start tracking a new subject.
    Add(SubjectFields),

    /// Change the counters, name, or schedule.
    Update(UpdateArgs),

    /// Change the number of sessions on a single weekday.
    SetSessions(SetSessionsArgs),

    /// Stop tracking the subject.
    Remove(RemoveArgs),
}

#[derive(Parser)]
struct SubjectFields {
    #[clap(long)]
    name: Option<String>,

    /// Classes held so far.
    #[clap(long)]
    delivered: Option<u32>,

    /// Classes attended so far.
    #[clap(long)]
    attended: Option<u32>,

    /// Classes credited despite the absence: duty or medical leave.
    #[clap(long)]
    dl: Option<u32>,

    /// Sessions per weekday starting from Sunday, for example: `0,1,0,1,0,1,0`.
    #[clap(long)]
    schedule: Option<WeeklySchedule>,
}

impl SubjectFields {
    fn apply_to(self, subject: &mut Subject) {
        if let Some(name) = self.name {
            subject.name = name;
        }
        if let Some(delivered) = self.delivered {
            subject.delivered = delivered;
        }
        if let Some(attended) = self.attended {
            subject.attended = attended;
        }
        if let Some(dl) = self.dl {
            subject.dl = dl;
        }
        if let Some(schedule) = self.schedule {
            let clamped = schedule.clamped();
            if clamped != schedule {
                warn!(%schedule, %clamped, "session counts are limited to 0..=5");
            }
            subject.schedule = clamped;
        }
    }
}

#[derive(Parser)]
struct UpdateArgs {
    id: SubjectId,

    #[clap(flatten)]
    fields: SubjectFields,
}

#[derive(Parser)]
struct SetSessionsArgs {
    id: SubjectId,

    /// Weekday name or its index, `0` being Sunday.
    #[clap(value_parser = parse_weekday)]
    weekday: Weekday,

    sessions: u32,
}

#[derive(Parser)]
struct RemoveArgs {
    id: SubjectId,
}

fn check_consistency(subject: &Subject) {
    if !subject.is_consistent() {
        warn!(
            id = %subject.id,
            effective = subject.effective_attendance(),
            delivered = subject.delivered,
            "credited attendance exceeds the delivered classes",
        );
    }
}
