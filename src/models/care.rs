//! Care history records: activity log entries, growth measurements and image references.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// The two activity kinds that drive recurring schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CareKind {
    /// Manual watering
    Watering,
    /// Fertilizer application
    Fertilizing,
}

impl CareKind {
    /// Both recognized kinds, in schedule order.
    pub const ALL: [Self; 2] = [Self::Watering, Self::Fertilizing];

    /// The activity label used in the care log.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Watering => "Watering",
            Self::Fertilizing => "Fertilizing",
        }
    }

    /// Whether a free-text activity label denotes this kind. Comparison is exact after trimming.
    #[must_use]
    pub fn matches(self, activity: &str) -> bool {
        activity.trim() == self.label()
    }
}

impl fmt::Display for CareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One activity performed on one plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Day the activity happened
    pub date: NaiveDate,
    /// Free-text activity label; "Watering" and "Fertilizing" are recognized
    pub activity: String,
    /// Optional remark, empty when absent
    pub note: String,
}

impl LogEntry {
    /// Creates an entry, trimming the activity label and note.
    #[must_use]
    pub fn new(date: NaiveDate, activity: &str, note: &str) -> Self {
        Self {
            date,
            activity: activity.trim().to_string(),
            note: note.trim().to_string(),
        }
    }

    /// Whether this entry records the given care kind.
    #[must_use]
    pub fn is(&self, kind: CareKind) -> bool {
        kind.matches(&self.activity)
    }
}

/// One size measurement of one plant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthEntry {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Height in cm
    pub height_cm: f64,
    /// Width in cm
    pub width_cm: f64,
    /// Optional remark, empty when absent
    pub note: String,
}

impl GrowthEntry {
    /// Creates a measurement with the given note.
    #[must_use]
    pub fn new(date: NaiveDate, height_cm: f64, width_cm: f64, note: &str) -> Self {
        Self {
            date,
            height_cm,
            width_cm,
            note: note.trim().to_string(),
        }
    }
}

/// A photo of a plant, identified by the day it was taken and its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantImage {
    /// Day the photo was taken
    pub date: NaiveDate,
    /// File name relative to the image directory
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_care_kind_matches_trimmed_label() {
        assert!(CareKind::Watering.matches("Watering"));
        assert!(CareKind::Watering.matches("  Watering "));
        assert!(!CareKind::Watering.matches("watering"));
        assert!(!CareKind::Fertilizing.matches("Watering"));
    }

    #[test]
    fn test_log_entry_trims_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let entry = LogEntry::new(date, " Fertilizing ", " half dose  ");
        assert_eq!(entry.activity, "Fertilizing");
        assert_eq!(entry.note, "half dose");
        assert!(entry.is(CareKind::Fertilizing));
        assert!(!entry.is(CareKind::Watering));
    }

    #[test]
    fn test_care_kind_display() {
        assert_eq!(CareKind::Fertilizing.to_string(), "Fertilizing");
    }
}
