mod configure;
mod exclusion;
mod plan;
mod reset;
mod state;
mod subject;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        configure::ConfigureArgs,
        exclusion::ExclusionArgs,
        plan::PlanArgs,
        reset::ResetArgs,
        state::StateArgs,
        subject::SubjectArgs,
    },
    core::settings::ExclusionKind,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub state: StateArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Plan(args) => args.run(&self.state),
            Command::Subject(args) => args.run(&self.state),
            Command::Holiday(args) => args.run(&self.state, ExclusionKind::Holiday),
            Command::Leave(args) => args.run(&self.state, ExclusionKind::Leave),
            Command::Configure(args) => args.run(&self.state),
            Command::Reset(args) => args.run(&self.state),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: project every subject by the end of the semester.
    #[clap(name = "plan")]
    Plan(PlanArgs),

    /// Manage the tracked subjects.
    #[clap(name = "subject")]
    Subject(SubjectArgs),

    /// Manage holidays: days without classes for everyone.
    #[clap(name = "holiday")]
    Holiday(ExclusionArgs),

    /// Manage personal leave: days you will not show up.
    #[clap(name = "leave")]
    Leave(ExclusionArgs),

    /// Change the target percentage or the semester end.
    #[clap(name = "configure")]
    Configure(ConfigureArgs),

    /// Start fresh: drop everything and restore the default settings.
    #[clap(name = "reset")]
    Reset(ResetArgs),
}
