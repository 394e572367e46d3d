pub mod calendar;
pub mod exclusions;
pub mod projection;
pub mod recommendation;
pub mod schedule;
pub mod semester;
pub mod settings;
pub mod subject;
