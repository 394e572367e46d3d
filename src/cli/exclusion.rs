use std::collections::BTreeSet;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use itertools::Itertools;

use crate::{cli::state::StateArgs, core::settings::ExclusionKind, prelude::*};

#[derive(Parser)]
pub struct ExclusionArgs {
    #[command(subcommand)]
    command: ExclusionCommand,
}

#[derive(Subcommand)]
enum ExclusionCommand {
    /// Exclude the date from the upcoming classes.
    Add { date: NaiveDate },

    /// Bring the date back.
    Remove { date: NaiveDate },

    /// Print the listed dates.
    List,
}

impl ExclusionArgs {
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn run(self, state_args: &StateArgs, kind: ExclusionKind) -> Result {
        let today = state_args.today();
        let mut state = state_args.load()?;
        let dates = state.settings.exclusions_mut(kind);
        match self.command {
            ExclusionCommand::Add { date } => {
                if date <= today {
                    warn!(%date, %today, "past dates do not affect the projection");
                }
                if !dates.insert(date) {
                    info!(%date, "already listed");
                    return Ok(());
                }
                info!(%date, "added");
            }
            ExclusionCommand::Remove { date } => {
                if !dates.remove(&date) {
                    info!(%date, "not listed");
                    return Ok(());
                }
                info!(%date, "removed");
            }
            ExclusionCommand::List => {
                match format_listing(dates) {
                    Some(listing) => println!("{listing}"),
                    None => info!("nothing listed"),
                }
                return Ok(());
            }
        }
        state_args.save(&state)
    }
}

/// One date per line, soonest first, or `None` when nothing is listed.
fn format_listing(dates: &BTreeSet<NaiveDate>) -> Option<String> {
    (!dates.is_empty()).then(|| dates.iter().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(format_listing(&BTreeSet::new()), None);
    }

    #[test]
    fn test_format_listing() {
        let dates = BTreeSet::from([
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        ]);
        assert_eq!(format_listing(&dates).as_deref(), Some("2025-03-10\n2025-03-14"));
    }
}
