//! Graveyard view - plants that died recently.

use crate::models::GraveyardRecord;
use chrono::{NaiveDate, TimeDelta};
use std::cmp::Reverse;

/// Graveyard records whose death date lies within `[reference - window_days, reference]`,
/// newest first. Equal dates keep their input order. A window reaching before the start of the
/// calendar covers the whole graveyard.
#[must_use]
pub fn recently_died(
    graveyard: &[GraveyardRecord],
    window_days: i64,
    reference: NaiveDate,
) -> Vec<&GraveyardRecord> {
    let window_start = TimeDelta::try_days(window_days)
        .and_then(|window| reference.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN);
    let mut recent: Vec<&GraveyardRecord> = graveyard
        .iter()
        .filter(|record| record.died >= window_start && record.died <= reference)
        .collect();
    recent.sort_by_key(|record| Reverse(record.died));
    recent
}

/// Days a dead plant spent in the collection.
#[must_use]
pub fn lifespan_days(record: &GraveyardRecord) -> i64 {
    (record.died - record.planted).num_days()
}
