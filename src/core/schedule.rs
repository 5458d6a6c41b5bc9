//! Care schedule - what is due across the collection, and when.
//!
//! Plants already know their own next watering and fertilizing dates; this module collects
//! those within a horizon, adds a growth-measurement reminder for plants that have not been
//! measured in a while, and groups everything by day and action.

use super::plant::Plant;
use crate::models::CareKind;
use chrono::{NaiveDate, TimeDelta};
use std::{collections::BTreeMap, fmt};
use tracing::debug;

/// A non-dormant plant whose last measurement is older than this many days is due for one.
pub const STALENESS_DAYS: i64 = 14;

/// A schedulable action. The declaration order is the display order within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DueAction {
    /// Water the plant
    Watering,
    /// Fertilize the plant
    Fertilizing,
    /// Measure height and width
    Growth,
}

impl DueAction {
    /// Display label of the action
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Watering => "Watering",
            Self::Fertilizing => "Fertilizing",
            Self::Growth => "Growth",
        }
    }
}

impl From<CareKind> for DueAction {
    fn from(kind: CareKind) -> Self {
        match kind {
            CareKind::Watering => Self::Watering,
            CareKind::Fertilizing => Self::Fertilizing,
        }
    }
}

impl fmt::Display for DueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All plants that need one action on one day.
#[derive(Debug, Clone)]
pub struct DueGroup<'a> {
    /// Day the action is due
    pub date: NaiveDate,
    /// What needs doing
    pub action: DueAction,
    /// Affected plants, in collection order
    pub plants: Vec<&'a Plant>,
}

impl DueGroup<'_> {
    /// Names of the affected plants.
    #[must_use]
    pub fn plant_names(&self) -> Vec<&str> {
        self.plants.iter().map(|plant| plant.name()).collect()
    }
}

/// Whether `plant` should get a growth measurement as of `reference`.
///
/// Dormant plants are never stale. A plant that was never measured is stale.
#[must_use]
pub fn is_growth_stale(plant: &Plant, reference: NaiveDate) -> bool {
    if plant.is_dormant() {
        return false;
    }
    let threshold = reference - TimeDelta::days(STALENESS_DAYS);
    plant
        .last_growth_date()
        .is_none_or(|last_update| last_update < threshold)
}

/// Plants whose growth record has gone stale as of `reference`.
#[must_use]
pub fn stale_growth(plants: &[Plant], reference: NaiveDate) -> Vec<&Plant> {
    plants
        .iter()
        .filter(|plant| is_growth_stale(plant, reference))
        .collect()
}

/// Everything due within `[reference, reference + horizon_days]`, grouped by day and action.
///
/// Groups are ordered by date, then watering, fertilizing, growth. Stale growth reminders
/// are anchored at `reference`. Due dates are clamped to `reference` again, so actions that
/// lapsed between a plant's own reference date and a later `reference` stay on the schedule.
/// A horizon past the end of the calendar reaches to the last representable date.
#[must_use]
pub fn due_within(plants: &[Plant], horizon_days: i64, reference: NaiveDate) -> Vec<DueGroup<'_>> {
    let horizon_end = TimeDelta::try_days(horizon_days)
        .and_then(|horizon| reference.checked_add_signed(horizon))
        .unwrap_or(NaiveDate::MAX);
    let in_window = |date: NaiveDate| date >= reference && date <= horizon_end;

    let mut groups: BTreeMap<(NaiveDate, DueAction), Vec<&Plant>> = BTreeMap::new();
    for plant in plants {
        for kind in CareKind::ALL {
            let due = plant.next_due(kind).map(|date| date.max(reference));
            if let Some(due) = due.filter(|date| in_window(*date)) {
                groups.entry((due, kind.into())).or_default().push(plant);
            }
        }

        if is_growth_stale(plant, reference) {
            groups
                .entry((reference, DueAction::Growth))
                .or_default()
                .push(plant);
        }
    }

    debug!(groups = groups.len(), horizon_days, "Schedule computed");

    groups
        .into_iter()
        .map(|((date, action), plants)| DueGroup {
            date,
            action,
            plants,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DORMANT, SpeciesProfile};
    use crate::test_utils::*;

    fn keyed<'a>(groups: &'a [DueGroup<'a>]) -> Vec<(NaiveDate, DueAction, Vec<&'a str>)> {
        groups
            .iter()
            .map(|group| (group.date, group.action, group.plant_names()))
            .collect()
    }

    #[test]
    fn test_groups_by_date_and_action() {
        let cactus = species("Cactus", 14, 30);
        let fern = species("Fern", 3, 10);
        let plants = vec![
            PlantBuilder::new("Alpha", "Cactus")
                .species(&cactus)
                .activity(days_before(10), "Watering", "")
                .activity(days_before(28), "Fertilizing", "")
                .growth(days_before(1), 10.0, 5.0)
                .build(),
            PlantBuilder::new("Beta", "Fern")
                .species(&fern)
                .activity(days_before(6), "Fertilizing", "")
                .activity(days_before(2), "Watering", "")
                .growth(days_before(1), 10.0, 5.0)
                .build(),
        ];

        let groups = due_within(&plants, 7, reference_date());

        assert_eq!(
            keyed(&groups),
            vec![
                (days_after(1), DueAction::Watering, vec!["Beta"]),
                (days_after(2), DueAction::Fertilizing, vec!["Alpha"]),
                (days_after(4), DueAction::Watering, vec!["Alpha"]),
                (days_after(4), DueAction::Fertilizing, vec!["Beta"]),
            ]
        );
    }

    #[test]
    fn test_same_day_same_action_collapses() {
        let cactus = species("Cactus", 14, SpeciesProfile::UNTRACKED);
        let plants = vec![
            PlantBuilder::new("Alpha", "Cactus")
                .species(&cactus)
                .growth(days_before(1), 1.0, 1.0)
                .build(),
            PlantBuilder::new("Beta", "Cactus")
                .species(&cactus)
                .growth(days_before(1), 1.0, 1.0)
                .build(),
        ];

        let groups = due_within(&plants, 7, reference_date());

        assert_eq!(
            keyed(&groups),
            vec![(reference_date(), DueAction::Watering, vec!["Alpha", "Beta"])]
        );
    }

    #[test]
    fn test_horizon_excludes_later_dates() {
        let cactus = species("Cactus", 14, SpeciesProfile::UNTRACKED);
        let plants = vec![PlantBuilder::new("Alpha", "Cactus")
            .species(&cactus)
            .activity(days_before(1), "Watering", "")
            .growth(days_before(1), 1.0, 1.0)
            .build()];

        assert!(due_within(&plants, 7, reference_date()).is_empty());
        assert_eq!(due_within(&plants, 13, reference_date()).len(), 1);
    }

    #[test]
    fn test_stale_growth_anchored_at_reference() {
        let cactus = species("Cactus", 14, SpeciesProfile::UNTRACKED);
        let plants = vec![
            PlantBuilder::new("Old", "Cactus")
                .species(&cactus)
                .auto_water(true)
                .growth(days_before(15), 1.0, 1.0)
                .build(),
            PlantBuilder::new("Fresh", "Cactus")
                .species(&cactus)
                .auto_water(true)
                .growth(days_before(14), 1.0, 1.0)
                .build(),
            PlantBuilder::new("Sleeping", "Cactus")
                .species(&cactus)
                .health(DORMANT)
                .growth(days_before(100), 1.0, 1.0)
                .build(),
            PlantBuilder::new("Unmeasured", "Cactus")
                .species(&cactus)
                .auto_water(true)
                .build(),
        ];

        let groups = due_within(&plants, 7, reference_date());

        assert_eq!(
            keyed(&groups),
            vec![(reference_date(), DueAction::Growth, vec!["Old", "Unmeasured"])]
        );
        let stale: Vec<&str> = stale_growth(&plants, reference_date())
            .iter()
            .map(|plant| plant.name())
            .collect();
        assert_eq!(stale, vec!["Old", "Unmeasured"]);
    }

    #[test]
    fn test_lapsed_action_follows_later_reference() {
        let fern = species("Fern", 3, SpeciesProfile::UNTRACKED);
        let plants = vec![PlantBuilder::new("Fernanda", "Fern")
            .species(&fern)
            .activity(days_before(20), "Watering", "")
            .growth(days_before(1), 1.0, 1.0)
            .build()];
        assert_eq!(plants[0].next_watering(), Some(reference_date()));

        let groups = due_within(&plants, 7, days_after(3));

        assert_eq!(
            keyed(&groups),
            vec![(days_after(3), DueAction::Watering, vec!["Fernanda"])]
        );
    }

    #[test]
    fn test_horizon_beyond_calendar_does_not_overflow() {
        let cactus = species("Cactus", 14, SpeciesProfile::UNTRACKED);
        let plants = vec![PlantBuilder::new("Alpha", "Cactus")
            .species(&cactus)
            .activity(days_before(1), "Watering", "")
            .growth(days_before(1), 1.0, 1.0)
            .build()];

        for horizon in [1_000_000_000, i64::MAX] {
            let groups = due_within(&plants, horizon, reference_date());
            assert_eq!(
                keyed(&groups),
                vec![(days_after(13), DueAction::Watering, vec!["Alpha"])]
            );
        }
    }

    #[test]
    fn test_action_order_within_a_day() {
        let daily = species("Cress", 0, 0);
        let plants = vec![PlantBuilder::new("Kresse", "Cress").species(&daily).build()];

        let groups = due_within(&plants, 0, reference_date());
        let actions: Vec<DueAction> = groups.iter().map(|group| group.action).collect();

        assert_eq!(
            actions,
            vec![DueAction::Watering, DueAction::Fertilizing, DueAction::Growth]
        );
    }
}
