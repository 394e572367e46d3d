use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::{
    projection::{Projection, Status},
    settings::Settings,
    subject::Subject,
};

pub fn build_projections_table(
    settings: &Settings,
    projections: &[(&Subject, Projection)],
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "ID",
        "Subject",
        "Schedule",
        "Current",
        "Delivered",
        "Credited",
        "Left",
        "Final",
        "Required",
        "Needed",
        "Verdict",
    ]);
    for (subject, projection) in projections {
        table.add_row(vec![
            Cell::new(subject.id).add_attribute(Attribute::Dim),
            Cell::new(&subject.name),
            Cell::new(subject.schedule).add_attribute(Attribute::Dim),
            Cell::new(projection.current_percentage).set_alignment(CellAlignment::Right).fg(
                if projection.current_percentage >= settings.target {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
            Cell::new(subject.delivered).set_alignment(CellAlignment::Right),
            Cell::new(projection.current_effective).set_alignment(CellAlignment::Right).fg(
                if subject.is_consistent() { Color::Reset } else { Color::Magenta },
            ),
            Cell::new(projection.future_classes).set_alignment(CellAlignment::Right),
            Cell::new(projection.final_total)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(projection.required_total).set_alignment(CellAlignment::Right),
            Cell::new(projection.needed).set_alignment(CellAlignment::Right),
            Cell::new(describe(projection)).fg(status_color(projection.status)),
        ]);
    }
    table
}

pub fn build_recommendations_table(projections: &[(&Subject, Projection)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["ID", "Subject", "Upcoming required dates"]);
    for (subject, projection) in projections {
        if projection.recommended_dates.is_empty() {
            continue;
        }
        table.add_row(vec![
            Cell::new(subject.id).add_attribute(Attribute::Dim),
            Cell::new(&subject.name),
            Cell::new(
                projection.recommended_dates.iter().map(|date| date.format("%a %b %d")).join(", "),
            ),
        ]);
    }
    table
}

/// Human-readable verdict.
pub fn describe(projection: &Projection) -> String {
    match projection.status {
        Status::Safe { skippable } => {
            format!("Safe zone. You can skip {skippable} more classes.")
        }
        Status::Warning { skippable } => format!(
            "Action required. Attend {} of next {}. (Skip limit: {skippable})",
            projection.needed, projection.future_classes,
        ),
        Status::Impossible { max_achievable } => {
            format!("Goal unreachable. Max possible: {max_achievable}")
        }
    }
}

const fn status_color(status: Status) -> Color {
    match status {
        Status::Safe { .. } => Color::Green,
        Status::Warning { .. } => Color::DarkYellow,
        Status::Impossible { .. } => Color::Red,
    }
}
