use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{prelude::*, state::State};

#[derive(Parser)]
pub struct StateArgs {
    /// File to keep the subjects and settings in.
    #[clap(
        long = "state-file",
        env = "ATTENDANCE_STATE_FILE",
        default_value = "attendance.toml",
        global = true
    )]
    pub path: PathBuf,

    /// Date to plan from, `YYYY-MM-DD`. Defaults to the local date.
    #[clap(long, env = "ATTENDANCE_TODAY", global = true)]
    pub today: Option<NaiveDate>,
}

impl StateArgs {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn load(&self) -> Result<State> {
        State::read_from(&self.path, self.today())
    }

    pub fn save(&self, state: &State) -> Result {
        state.write_to(&self.path)
    }
}
