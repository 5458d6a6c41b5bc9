//! Hall of fame - the extremal plants of the collection.
//!
//! Plants are ranked per [`Metric`]. Equal values are ordered alphabetically by plant name, for
//! the highest and the lowest end alike, so the winner never depends on load order.

use super::plant::Plant;
use std::cmp::Ordering;

/// Plants with fewer growth measurements are left out of growth-rate rankings.
pub const MIN_GROWTH_ENTRIES: usize = 3;

/// A quantity plants can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Current height in cm
    Height,
    /// Current width in cm
    Width,
    /// Combined height and width change per day
    GrowthRate,
    /// Days since acquisition
    Age,
}

impl Metric {
    /// Unit the metric is expressed in.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Height | Self::Width => "cm",
            Self::GrowthRate => "cm/day",
            Self::Age => "days",
        }
    }

    /// The plant's value for this metric, `None` if it has no meaningful one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, plant: &Plant) -> Option<f64> {
        let value = match self {
            Self::Height => plant.current_height(),
            Self::Width => plant.current_width(),
            Self::GrowthRate => {
                if plant.growth().len() < MIN_GROWTH_ENTRIES {
                    return None;
                }
                plant.growth_rate()?
            }
            Self::Age => plant.age_days(plant.reference_date()) as f64,
        };
        (!value.is_nan()).then_some(value)
    }
}

/// Which end of a ranking comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Largest value first
    Highest,
    /// Smallest value first
    Lowest,
}

/// A plant and its value for one metric.
#[derive(Debug, Clone, Copy)]
pub struct FameEntry<'a> {
    /// The plant
    pub plant: &'a Plant,
    /// Its value for the metric
    pub value: f64,
    /// Unit of `value`
    pub unit: &'static str,
}

/// The extremal plants of the collection. A slot is `None` when no plant qualifies.
#[derive(Debug, Clone, Default)]
pub struct HallOfFame<'a> {
    /// Greatest current height
    pub tallest: Option<FameEntry<'a>>,
    /// Smallest current height
    pub shortest: Option<FameEntry<'a>>,
    /// Greatest current width
    pub widest: Option<FameEntry<'a>>,
    /// Smallest current width
    pub narrowest: Option<FameEntry<'a>>,
    /// Highest growth rate among plants with enough measurements
    pub fastest_growing: Option<FameEntry<'a>>,
    /// Lowest growth rate among plants with enough measurements
    pub slowest_growing: Option<FameEntry<'a>>,
    /// Longest in the collection
    pub oldest: Option<FameEntry<'a>>,
    /// Most recently acquired
    pub youngest: Option<FameEntry<'a>>,
}

/// Ranks every plant with a value for `metric`. Ties are broken alphabetically by name.
#[must_use]
pub fn ranking(plants: &[Plant], metric: Metric, direction: Direction) -> Vec<FameEntry<'_>> {
    let mut entries: Vec<FameEntry<'_>> = plants
        .iter()
        .filter_map(|plant| {
            metric.value(plant).map(|value| FameEntry {
                plant,
                value,
                unit: metric.unit(),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        let by_value = match direction {
            Direction::Highest => b.value.total_cmp(&a.value),
            Direction::Lowest => a.value.total_cmp(&b.value),
        };
        match by_value {
            Ordering::Equal => a.plant.name().cmp(b.plant.name()),
            unequal => unequal,
        }
    });
    entries
}

fn top(plants: &[Plant], metric: Metric, direction: Direction) -> Option<FameEntry<'_>> {
    ranking(plants, metric, direction).into_iter().next()
}

/// Finds the extremal plants of the collection.
#[must_use]
pub fn hall_of_fame(plants: &[Plant]) -> HallOfFame<'_> {
    HallOfFame {
        tallest: top(plants, Metric::Height, Direction::Highest),
        shortest: top(plants, Metric::Height, Direction::Lowest),
        widest: top(plants, Metric::Width, Direction::Highest),
        narrowest: top(plants, Metric::Width, Direction::Lowest),
        fastest_growing: top(plants, Metric::GrowthRate, Direction::Highest),
        slowest_growing: top(plants, Metric::GrowthRate, Direction::Lowest),
        oldest: top(plants, Metric::Age, Direction::Highest),
        youngest: top(plants, Metric::Age, Direction::Lowest),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn name(entry: Option<FameEntry<'_>>) -> &str {
        entry.unwrap().plant.name()
    }

    #[test]
    fn test_size_extremes() {
        let plants = vec![
            PlantBuilder::new("Medium", "Fern")
                .growth(days_before(1), 20.0, 20.0)
                .build(),
            PlantBuilder::new("Tall", "Fern")
                .growth(days_before(1), 80.0, 10.0)
                .build(),
            PlantBuilder::new("Wide", "Fern")
                .growth(days_before(1), 5.0, 60.0)
                .build(),
            PlantBuilder::new("Unmeasured", "Fern").build(),
        ];

        let fame = hall_of_fame(&plants);

        assert_eq!(name(fame.tallest), "Tall");
        assert_eq!(fame.tallest.unwrap().value, 80.0);
        assert_eq!(fame.tallest.unwrap().unit, "cm");
        assert_eq!(name(fame.shortest), "Wide");
        assert_eq!(name(fame.widest), "Wide");
        assert_eq!(name(fame.narrowest), "Tall");
    }

    #[test]
    fn test_growth_rate_needs_three_entries() {
        let plants = vec![
            // Fast but only two measurements
            PlantBuilder::new("Sprinter", "Fern")
                .growth(days_before(10), 1.0, 1.0)
                .growth(days_before(0), 50.0, 50.0)
                .build(),
            PlantBuilder::new("Steady", "Fern")
                .growth(days_before(20), 10.0, 5.0)
                .growth(days_before(10), 12.0, 7.0)
                .growth(days_before(0), 15.0, 9.0)
                .build(),
            PlantBuilder::new("Slow", "Fern")
                .growth(days_before(20), 10.0, 10.0)
                .growth(days_before(10), 10.0, 10.5)
                .growth(days_before(0), 11.0, 10.0)
                .build(),
        ];

        let fame = hall_of_fame(&plants);

        assert_eq!(name(fame.fastest_growing), "Steady");
        assert!((fame.fastest_growing.unwrap().value - 0.45).abs() < 1e-9);
        assert_eq!(name(fame.slowest_growing), "Slow");
        assert_eq!(fame.slowest_growing.unwrap().unit, "cm/day");
    }

    #[test]
    fn test_no_growth_candidates_leaves_slots_empty() {
        let plants = vec![PlantBuilder::new("Lonely", "Fern")
            .growth(days_before(1), 3.0, 3.0)
            .build()];

        let fame = hall_of_fame(&plants);

        assert!(fame.fastest_growing.is_none());
        assert!(fame.slowest_growing.is_none());
        assert_eq!(name(fame.tallest), "Lonely");
        assert_eq!(name(fame.shortest), "Lonely");
    }

    #[test]
    fn test_ties_break_alphabetically_at_both_ends() {
        let plants = vec![
            PlantBuilder::new("Zinnia", "Flower")
                .growth(days_before(1), 30.0, 30.0)
                .build(),
            PlantBuilder::new("Aster", "Flower")
                .growth(days_before(1), 30.0, 30.0)
                .build(),
        ];

        let fame = hall_of_fame(&plants);

        assert_eq!(name(fame.tallest), "Aster");
        assert_eq!(name(fame.shortest), "Aster");
        assert_eq!(name(fame.widest), "Aster");
        assert_eq!(name(fame.narrowest), "Aster");
    }

    #[test]
    fn test_age_extremes_and_ranking() {
        let plants = vec![
            PlantBuilder::new("Baby", "Fern").obtained(days_before(10)).build(),
            PlantBuilder::new("Elder", "Fern").obtained(days_before(1000)).build(),
            PlantBuilder::new("Teen", "Fern").obtained(days_before(300)).build(),
        ];

        let fame = hall_of_fame(&plants);
        assert_eq!(name(fame.oldest), "Elder");
        assert_eq!(fame.oldest.unwrap().value, 1000.0);
        assert_eq!(name(fame.youngest), "Baby");

        let by_age: Vec<&str> = ranking(&plants, Metric::Age, Direction::Lowest)
            .iter()
            .map(|entry| entry.plant.name())
            .collect();
        assert_eq!(by_age, vec!["Baby", "Teen", "Elder"]);
    }

    #[test]
    fn test_empty_collection() {
        let fame = hall_of_fame(&[]);
        assert!(fame.tallest.is_none());
        assert!(fame.oldest.is_none());
    }
}
