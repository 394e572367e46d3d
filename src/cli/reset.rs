use clap::Parser;

use crate::{cli::state::StateArgs, prelude::*, state::State};

#[derive(Parser)]
pub struct ResetArgs {
    /// Confirm dropping all the subjects, holidays, and leaves.
    #[clap(long)]
    yes: bool,
}

impl ResetArgs {
    #[instrument(skip_all)]
    pub fn run(self, state_args: &StateArgs) -> Result {
        ensure!(self.yes, "this drops all the subjects and dates, pass `--yes` to confirm");
        state_args.save(&State::starting_on(state_args.today())?)?;
        info!("started fresh");
        Ok(())
    }
}
