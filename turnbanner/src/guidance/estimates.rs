//! Trip and maneuver estimate updates.
//!
//! Emitted on every location update, between projections, so the surface
//! can refresh remaining distance and time without rebuilding banners.

use serde::Serialize;

use crate::format::DistanceFormatter;
use crate::projector::TravelEstimates;
use crate::route::{CongestionLevel, RouteProgress};

/// Colour of the trip time-remaining readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRemainingColor {
    #[default]
    Default,
    Green,
    Orange,
    Red,
}

impl From<CongestionLevel> for TimeRemainingColor {
    fn from(level: CongestionLevel) -> Self {
        match level {
            CongestionLevel::Unknown => TimeRemainingColor::Default,
            CongestionLevel::Low => TimeRemainingColor::Green,
            CongestionLevel::Moderate => TimeRemainingColor::Orange,
            CongestionLevel::Heavy | CongestionLevel::Severe => TimeRemainingColor::Red,
        }
    }
}

/// Estimates for the trip (current leg) and the displayed maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripEstimateUpdate {
    /// Remaining distance and time on the current leg.
    pub trip: TravelEstimates,

    pub trip_color: TimeRemainingColor,

    /// Remaining distance and time on the current step.
    pub maneuver: TravelEstimates,
}

impl TripEstimateUpdate {
    /// Compute the update for a progress snapshot.
    pub fn from_progress(progress: &RouteProgress, formatter: &dyn DistanceFormatter) -> Self {
        let leg = &progress.current_leg;
        let step = &leg.current_step_progress;
        Self {
            trip: TravelEstimates::new(formatter, leg.distance_remaining, leg.duration_remaining),
            trip_color: progress.average_congestion.unwrap_or_default().into(),
            maneuver: TravelEstimates::new(formatter, step.distance_remaining, step.duration_remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ApproximateDistanceFormatter;
    use crate::route::{LegProgress, RouteStep, StepProgress};
    use std::time::Duration;

    #[test]
    fn test_congestion_colors() {
        assert_eq!(TimeRemainingColor::from(CongestionLevel::Unknown), TimeRemainingColor::Default);
        assert_eq!(TimeRemainingColor::from(CongestionLevel::Low), TimeRemainingColor::Green);
        assert_eq!(TimeRemainingColor::from(CongestionLevel::Moderate), TimeRemainingColor::Orange);
        assert_eq!(TimeRemainingColor::from(CongestionLevel::Heavy), TimeRemainingColor::Red);
        assert_eq!(TimeRemainingColor::from(CongestionLevel::Severe), TimeRemainingColor::Red);
    }

    #[test]
    fn test_update_splits_leg_and_step() {
        let mut progress = RouteProgress::new(LegProgress {
            current_step: RouteStep::new("Continue", 1_000.0, 60.0),
            distance_remaining: 15_300.0,
            duration_remaining: 960.0,
            current_step_progress: StepProgress {
                distance_remaining: 640.0,
                duration_remaining: 38.0,
                current_visual_instruction: None,
            },
            ..Default::default()
        });
        progress.average_congestion = Some(CongestionLevel::Moderate);

        let update = TripEstimateUpdate::from_progress(&progress, &ApproximateDistanceFormatter::default());
        assert_eq!(update.trip.distance_remaining.to_string(), "15 km");
        assert_eq!(update.trip.time_remaining, Duration::from_secs(960));
        assert_eq!(update.trip_color, TimeRemainingColor::Orange);
        assert_eq!(update.maneuver.distance_remaining.to_string(), "650 m");
        assert_eq!(update.maneuver.time_remaining, Duration::from_secs(38));
    }

    #[test]
    fn test_missing_congestion_is_default_color() {
        let progress = RouteProgress::new(LegProgress::default());
        let update = TripEstimateUpdate::from_progress(&progress, &ApproximateDistanceFormatter::default());
        assert_eq!(update.trip_color, TimeRemainingColor::Default);
    }
}
