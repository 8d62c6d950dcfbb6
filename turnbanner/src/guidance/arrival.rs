//! Waypoint arrival handling.

use crate::route::RouteProgress;

/// Title shown when a waypoint has no name.
pub const DEFAULT_ARRIVAL_TITLE: &str = "You have arrived";

/// What arriving at a waypoint means for the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrivalOutcome {
    /// Arrived at the final destination; the trip is over.
    TripComplete,

    /// Arrived at an intermediate stop. Confirming it should call
    /// [`RouteProgress::advance_leg`] and redraw the route.
    Waypoint { title: String },
}

/// Decide how to present an arrival at the end of the current leg.
pub fn arrival_outcome(progress: &RouteProgress, waypoint_name: Option<&str>) -> ArrivalOutcome {
    if progress.is_final_leg() {
        tracing::info!(leg_index = progress.leg_index, "Arrived at final destination");
        return ArrivalOutcome::TripComplete;
    }

    let title = waypoint_name.unwrap_or(DEFAULT_ARRIVAL_TITLE).to_string();
    tracing::info!(leg_index = progress.leg_index, waypoint = %title, "Arrived at waypoint");
    ArrivalOutcome::Waypoint { title }
}
