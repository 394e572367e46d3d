use std::{fmt::Debug, fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        settings::Settings,
        subject::{Subject, SubjectId},
    },
    prelude::*,
};

/// Everything preserved between the application runs.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub settings: Settings,

    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl State {
    /// Fresh state without any subjects.
    pub fn starting_on(today: NaiveDate) -> Result<Self> {
        Ok(Self { settings: Settings::starting_on(today)?, subjects: Vec::new() })
    }

    /// Read the state, falling back to the fresh one when the file does not exist.
    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P, today: NaiveDate) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            info!("no saved state, starting fresh…");
            return Self::starting_on(today);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let state: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        debug!(n_subjects = state.subjects.len(), "loaded");
        Ok(state)
    }

    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        let path = path.as_ref();
        fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!(n_subjects = self.subjects.len(), "saved");
        Ok(())
    }

    pub fn next_subject_id(&self) -> SubjectId {
        self.subjects.iter().map(|subject| subject.id).max().map_or(SubjectId(1), SubjectId::next)
    }

    pub fn subject(&self, id: SubjectId) -> Result<&Subject> {
        self.subjects
            .iter()
            .find(|subject| subject.id == id)
            .with_context(|| format!("subject #{id} is not found"))
    }

    pub fn subject_mut(&mut self, id: SubjectId) -> Result<&mut Subject> {
        self.subjects
            .iter_mut()
            .find(|subject| subject.id == id)
            .with_context(|| format!("subject #{id} is not found"))
    }

    pub fn remove_subject(&mut self, id: SubjectId) -> Result<Subject> {
        let index = self
            .subjects
            .iter()
            .position(|subject| subject.id == id)
            .with_context(|| format!("subject #{id} is not found"))?;
        Ok(self.subjects.remove(index))
    }
}
