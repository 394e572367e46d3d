use chrono::NaiveDate;
use clap::Parser;

use crate::{cli::state::StateArgs, prelude::*, quantity::percent::Percent};

#[derive(Parser)]
pub struct ConfigureArgs {
    /// Minimal attendance percentage to maintain, `0..=100`.
    #[clap(long, value_parser = parse_target)]
    target: Option<Percent>,

    /// Last day of classes, inclusive.
    #[clap(long)]
    semester_end: Option<NaiveDate>,
}

impl ConfigureArgs {
    #[instrument(skip_all)]
    pub fn run(self, state_args: &StateArgs) -> Result {
        let mut state = state_args.load()?;
        let settings = &mut state.settings;
        if let Some(target) = self.target {
            settings.target = target;
        }
        if let Some(semester_end) = self.semester_end {
            if semester_end < state_args.today() {
                warn!(%semester_end, "the semester end is in the past");
            }
            settings.semester_end = semester_end;
        }
        info!(target = %settings.target, semester_end = %settings.semester_end, "configured");
        if self.target.is_some() || self.semester_end.is_some() {
            state_args.save(&state)?;
        }
        Ok(())
    }
}

fn parse_target(s: &str) -> Result<Percent> {
    let target: Percent = s.parse().with_context(|| format!("`{s}` is not a number"))?;
    ensure!(target.is_valid_target(), "target must be within `0..=100`, got `{s}`");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() -> Result {
        assert_eq!(parse_target("75")?, Percent(75.0));
        assert_eq!(parse_target("82.5")?, Percent(82.5));
        assert!(parse_target("101").is_err());
        assert!(parse_target("-5").is_err());
        assert!(parse_target("most").is_err());
        Ok(())
    }
}
