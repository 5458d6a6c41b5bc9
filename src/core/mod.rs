//! Care scheduling and aggregation.
//!
//! Everything in here is synchronous and infallible. The [`collection`] assembles
//! [`plant::Plant`] entities, each of which computes its own due dates and statistics, and the
//! remaining modules derive collection-wide views from the assembled plants.

/// Collection assembly and lookups
pub mod collection;
/// Recent activity feed and merged activity log
pub mod feed;
/// Recently died plants
pub mod graveyard;
/// Extremal plants
pub mod hall_of_fame;
/// The plant entity and its derived state
pub mod plant;
/// Plain-text report
pub mod report;
/// Upcoming care
pub mod schedule;
