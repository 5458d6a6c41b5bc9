//! Activity feeds - recent growth and care activity, and the merged all-time log.

use super::plant::Plant;
use crate::models::{CareKind, GrowthEntry};
use chrono::{NaiveDate, TimeDelta};
use std::{
    cmp::Reverse,
    collections::{BTreeMap, BTreeSet},
};

/// Notes restating these markers are bookkeeping, not news, and are left out of the feed.
const SUPPRESSED_NOTE_MARKERS: [&str; 2] = ["Last Watering", "Last Fertilizing"];

/// A growth measurement together with the plant it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct RecentGrowth<'a> {
    /// Measured plant
    pub plant: &'a Plant,
    /// The measurement
    pub entry: &'a GrowthEntry,
}

/// All plants that received one activity on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGroup<'a> {
    /// Day the activity happened
    pub date: NaiveDate,
    /// Activity label as logged
    pub activity: &'a str,
    /// Plant names without repetition, in collection order
    pub plants: Vec<&'a str>,
    /// Distinct, non-empty notes in order of appearance
    pub notes: Vec<&'a str>,
}

/// What happened in the collection recently.
#[derive(Debug, Clone)]
pub struct RecentFeed<'a> {
    /// Measurements inside the window, newest first
    pub growth: Vec<RecentGrowth<'a>>,
    /// Activities inside the window grouped by day and kind, newest first
    pub activities: Vec<ActivityGroup<'a>>,
}

/// One row of the merged all-time activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedActivity {
    /// Day the activity happened
    pub date: NaiveDate,
    /// Activity label as logged
    pub activity: String,
    /// Note shared by every merged entry, empty when absent
    pub note: String,
    /// All plants sharing this exact date, activity and note, sorted by name
    pub plants: Vec<String>,
}

fn is_suppressed_note(note: &str) -> bool {
    note.trim().is_empty()
        || SUPPRESSED_NOTE_MARKERS
            .iter()
            .any(|marker| note.contains(marker))
}

/// Collects growth and activity entries dated within `[reference - window_days, reference]`.
///
/// A window reaching before the start of the calendar covers all history.
#[must_use]
pub fn recent_feed(plants: &[Plant], window_days: i64, reference: NaiveDate) -> RecentFeed<'_> {
    let window_start = TimeDelta::try_days(window_days)
        .and_then(|window| reference.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN);
    let in_window = move |date: NaiveDate| date >= window_start && date <= reference;

    let mut growth: Vec<RecentGrowth<'_>> = plants
        .iter()
        .flat_map(|plant| {
            plant
                .growth()
                .iter()
                .filter(move |entry| in_window(entry.date))
                .map(move |entry| RecentGrowth { plant, entry })
        })
        .collect();
    growth.sort_by_key(|item| Reverse(item.entry.date));

    let mut grouped: BTreeMap<(Reverse<NaiveDate>, &str), ActivityGroup<'_>> = BTreeMap::new();
    for plant in plants {
        for entry in plant.activities().iter().filter(|entry| in_window(entry.date)) {
            let group = grouped
                .entry((Reverse(entry.date), entry.activity.as_str()))
                .or_insert_with(|| ActivityGroup {
                    date: entry.date,
                    activity: entry.activity.as_str(),
                    plants: vec![],
                    notes: vec![],
                });
            if !group.plants.contains(&plant.name()) {
                group.plants.push(plant.name());
            }
            let note = entry.note.as_str();
            if !is_suppressed_note(note) && !group.notes.contains(&note) {
                group.notes.push(note);
            }
        }
    }

    RecentFeed {
        growth,
        activities: grouped.into_values().collect(),
    }
}

/// Merges every activity entry of the collection into one log.
///
/// Entries sharing the exact `(date, activity, note)` tuple become one row listing every
/// affected plant. The result does not depend on the order of `plants`. Rows are ordered
/// newest first, then by activity and note.
#[must_use]
pub fn activity_log_merge(plants: &[Plant]) -> Vec<MergedActivity> {
    let mut merged: BTreeMap<(Reverse<NaiveDate>, &str, &str), BTreeSet<&str>> = BTreeMap::new();
    for plant in plants {
        for entry in plant.activities() {
            merged
                .entry((Reverse(entry.date), entry.activity.as_str(), entry.note.as_str()))
                .or_default()
                .insert(plant.name());
        }
    }

    merged
        .into_iter()
        .map(|((Reverse(date), activity, note), names)| MergedActivity {
            date,
            activity: activity.to_string(),
            note: note.to_string(),
            plants: names.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

/// Merged log rows of one recognized care kind, e.g. for a watering history table.
#[must_use]
pub fn merged_of_kind(log: &[MergedActivity], kind: CareKind) -> Vec<&MergedActivity> {
    log.iter().filter(|row| kind.matches(&row.activity)).collect()
}
