//! Report generation.
//!
//! [`CareReport::build`] computes every collection-wide view once against the collection's
//! reference date; [`CareReport::render`] turns the result into plain text for the terminal.
//! The `format_*` helpers are pure and shared by the sections.

use super::{
    collection::{Collection, Diagnostic},
    feed::{MergedActivity, RecentFeed, activity_log_merge, recent_feed},
    graveyard::{lifespan_days, recently_died},
    hall_of_fame::{Direction, FameEntry, HallOfFame, Metric, hall_of_fame, ranking},
    plant::Plant,
    schedule::{DueGroup, due_within},
};
use crate::{config::AppConfig, models::GraveyardRecord};
use chrono::NaiveDate;

/// Placeholder for a value that does not exist, such as the size of an unmeasured plant.
pub const NOT_AVAILABLE: &str = "n/a";

/// All views of one run, ready to render.
#[derive(Debug, Clone)]
pub struct CareReport<'a> {
    /// Day the report was computed for
    pub reference: NaiveDate,
    /// Every plant, sorted by name
    pub plants: &'a [Plant],
    /// Upcoming care, grouped by day and action
    pub schedule: Vec<DueGroup<'a>>,
    /// Recent growth and activity
    pub feed: RecentFeed<'a>,
    /// Every activity ever logged, merged across plants, newest first
    pub care_log: Vec<MergedActivity>,
    /// Extremal plants
    pub fame: HallOfFame<'a>,
    /// Oldest plants first, at most `hall_of_fame_size`
    pub oldest: Vec<FameEntry<'a>>,
    /// Plants that died within the graveyard window
    pub recently_died: Vec<&'a GraveyardRecord>,
    /// Data problems found during assembly
    pub diagnostics: &'a [Diagnostic],
    schedule_horizon_days: i64,
    feed_window_days: i64,
    date_format: &'a str,
}

impl<'a> CareReport<'a> {
    /// Computes all views of `collection`.
    #[must_use]
    pub fn build(
        collection: &'a Collection,
        graveyard: &'a [GraveyardRecord],
        config: &'a AppConfig,
    ) -> Self {
        let reference = collection.reference_date();
        let plants = collection.plants();

        let mut oldest = ranking(plants, Metric::Age, Direction::Highest);
        oldest.truncate(config.hall_of_fame_size);

        Self {
            reference,
            plants,
            schedule: due_within(plants, config.schedule_horizon_days, reference),
            feed: recent_feed(plants, config.feed_window_days, reference),
            care_log: activity_log_merge(plants),
            fame: hall_of_fame(plants),
            oldest,
            recently_died: recently_died(graveyard, config.graveyard_window_days, reference),
            diagnostics: collection.diagnostics(),
            schedule_horizon_days: config.schedule_horizon_days,
            feed_window_days: config.feed_window_days,
            date_format: &config.display_date_format,
        }
    }

    /// Renders the report as plain text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut sections = vec![
            format!(
                "Plant report for {}",
                format_date(self.reference, self.date_format)
            ),
            self.render_schedule(),
            self.render_feed(),
            self.render_care_log(),
            self.render_fame(),
            self.render_plants(),
        ];
        if !self.recently_died.is_empty() {
            sections.push(self.render_graveyard());
        }
        if !self.diagnostics.is_empty() {
            sections.push(self.render_diagnostics());
        }
        sections.join("\n\n")
    }

    fn render_schedule(&self) -> String {
        let mut lines = vec![format!(
            "Care schedule (next {} days)",
            self.schedule_horizon_days
        )];
        if self.schedule.is_empty() {
            lines.push("  Nothing due".to_string());
        }

        let mut current_day = None;
        for group in &self.schedule {
            if current_day != Some(group.date) {
                lines.push(format!("  {}", format_day_header(group.date, self.date_format)));
                current_day = Some(group.date);
            }
            lines.push(format!(
                "    {}: {}",
                group.action,
                group.plant_names().join(", ")
            ));
        }
        lines.join("\n")
    }

    fn render_feed(&self) -> String {
        let mut lines = vec![format!(
            "Recent growth (last {} days)",
            self.feed_window_days
        )];
        if self.feed.growth.is_empty() {
            lines.push("  No measurements".to_string());
        }
        for item in &self.feed.growth {
            let mut line = format!(
                "  {}  {}  {} x {}",
                format_date(item.entry.date, self.date_format),
                item.plant.name(),
                format_size(item.entry.height_cm),
                format_size(item.entry.width_cm),
            );
            if !item.entry.note.is_empty() {
                line.push_str(&format!("  ({})", item.entry.note));
            }
            lines.push(line);
        }

        lines.push(String::new());
        lines.push(format!(
            "Recent activity (last {} days)",
            self.feed_window_days
        ));
        if self.feed.activities.is_empty() {
            lines.push("  No activity".to_string());
        }
        for group in &self.feed.activities {
            let mut line = format!(
                "  {}  {}: {}",
                format_date(group.date, self.date_format),
                group.activity,
                group.plants.join(", ")
            );
            if !group.notes.is_empty() {
                line.push_str(&format!("  ({})", group.notes.join("; ")));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render_care_log(&self) -> String {
        let mut lines = vec!["Care log".to_string()];
        if self.care_log.is_empty() {
            lines.push("  No entries".to_string());
        }
        for row in &self.care_log {
            let mut line = format!(
                "  {}  {}: {}",
                format_date(row.date, self.date_format),
                row.activity,
                row.plants.join(", ")
            );
            if !row.note.is_empty() {
                line.push_str(&format!("  ({})", row.note));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render_fame(&self) -> String {
        let fame = &self.fame;
        let mut lines = vec!["Hall of fame".to_string()];
        lines.extend(
            [
                ("Tallest", fame.tallest),
                ("Shortest", fame.shortest),
                ("Widest", fame.widest),
                ("Narrowest", fame.narrowest),
                ("Fastest growing", fame.fastest_growing),
                ("Slowest growing", fame.slowest_growing),
                ("Oldest", fame.oldest),
                ("Youngest", fame.youngest),
            ]
            .into_iter()
            .map(|(label, entry)| format!("  {}", format_fame_entry(label, entry))),
        );

        if !self.oldest.is_empty() {
            lines.push(String::new());
            lines.push("Longest in the collection".to_string());
            for (rank, entry) in self.oldest.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} ({})",
                    rank + 1,
                    entry.plant.name(),
                    format_value(entry.value, entry.unit)
                ));
            }
        }
        lines.join("\n")
    }

    fn render_plants(&self) -> String {
        let mut lines = vec![format!("Plants ({})", self.plants.len())];
        for plant in self.plants {
            lines.push(format_plant_line(plant, self.date_format));
        }
        lines.join("\n")
    }

    fn render_graveyard(&self) -> String {
        let mut lines = vec!["Recently died".to_string()];
        for record in &self.recently_died {
            let mut line = format!(
                "  {}  {} ({}), {} days in the collection",
                format_date(record.died, self.date_format),
                record.plant_name,
                record.species_name,
                lifespan_days(record)
            );
            if !record.reason.is_empty() {
                line.push_str(&format!(": {}", record.reason));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render_diagnostics(&self) -> String {
        let mut lines = vec!["Data problems".to_string()];
        lines.extend(
            self.diagnostics
                .iter()
                .map(|diagnostic| format!("  {diagnostic}")),
        );
        lines.join("\n")
    }
}

/// Formats a date with a chrono format string.
#[must_use]
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

/// Formats a schedule day header like `Wed 12.06.2024`.
#[must_use]
pub fn format_day_header(date: NaiveDate, date_format: &str) -> String {
    format!("{} {}", date.format("%a"), format_date(date, date_format))
}

/// Formats an optional due date, `-` when nothing is scheduled.
#[must_use]
pub fn format_due(date: Option<NaiveDate>, date_format: &str) -> String {
    date.map_or_else(|| "-".to_string(), |date| format_date(date, date_format))
}

/// Formats a value with two decimals and its unit, or [`NOT_AVAILABLE`] for NaN.
#[must_use]
pub fn format_value(value: f64, unit: &str) -> String {
    if value.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{value:.2} {unit}")
    }
}

/// Formats a size in cm, or [`NOT_AVAILABLE`] for an unmeasured plant.
#[must_use]
pub fn format_size(size_cm: f64) -> String {
    format_value(size_cm, "cm")
}

/// Formats one hall-of-fame slot like `Tallest: Monstera (80.00 cm)`.
#[must_use]
pub fn format_fame_entry(label: &str, entry: Option<FameEntry<'_>>) -> String {
    entry.map_or_else(
        || format!("{label}: {NOT_AVAILABLE}"),
        |entry| {
            format!(
                "{label}: {} ({})",
                entry.plant.name(),
                format_value(entry.value, entry.unit)
            )
        },
    )
}

/// Formats the overview line of one plant.
#[must_use]
pub fn format_plant_line(plant: &Plant, date_format: &str) -> String {
    let mut flags = Vec::new();
    if plant.is_dormant() {
        flags.push("dormant");
    }
    if plant.auto_water() {
        flags.push("auto-water");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };

    format!(
        "  {} ({}){flags}: {} x {}, health {}, water {}, fertilize {}",
        plant.name(),
        plant.species_name(),
        format_size(plant.current_height()),
        format_size(plant.current_width()),
        plant.health(),
        format_due(plant.next_watering(), date_format),
        format_due(plant.next_fertilizing(), date_format),
    )
}
