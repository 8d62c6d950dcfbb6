//! Route, leg and step progress snapshots.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use super::instruction::VisualInstructionBanner;

/// Traffic congestion averaged over the remainder of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    #[default]
    Unknown,
    Low,
    Moderate,
    Heavy,
    Severe,
}

/// A single routed step, typically ending in one maneuver.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteStep {
    /// Generic instruction text for the step.
    #[serde(default)]
    pub instructions: String,

    /// Step length in meters.
    pub distance: f64,

    /// Expected travel time in seconds.
    pub expected_travel_time: f64,
}

impl RouteStep {
    /// Create a step.
    pub fn new(instructions: impl Into<String>, distance: f64, expected_travel_time: f64) -> Self {
        Self {
            instructions: instructions.into(),
            distance,
            expected_travel_time,
        }
    }
}

/// Progress along the current step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepProgress {
    /// Meters remaining on the step.
    pub distance_remaining: f64,

    /// Seconds remaining on the step.
    pub duration_remaining: f64,

    /// Instruction currently shown for the step, if one has been passed.
    #[serde(default)]
    pub current_visual_instruction: Option<VisualInstructionBanner>,
}

/// Progress along the current leg.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegProgress {
    #[serde(default)]
    pub step_index: usize,

    pub current_step: RouteStep,

    #[serde(default)]
    pub upcoming_step: Option<RouteStep>,

    /// Meters remaining on the leg.
    pub distance_remaining: f64,

    /// Seconds remaining on the leg.
    pub duration_remaining: f64,

    pub current_step_progress: StepProgress,
}

/// Snapshot of progress along a route, as published by the route tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProgress {
    #[serde(default)]
    pub leg_index: usize,

    /// Number of legs in the route (one per pair of consecutive waypoints).
    #[serde(default = "default_leg_count")]
    pub leg_count: usize,

    pub current_leg: LegProgress,

    #[serde(default)]
    pub average_congestion: Option<CongestionLevel>,
}

fn default_leg_count() -> usize {
    1
}

impl RouteProgress {
    /// Create a single-leg snapshot.
    pub fn new(current_leg: LegProgress) -> Self {
        Self {
            leg_index: 0,
            leg_count: 1,
            current_leg,
            average_congestion: None,
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the current leg ends at the final destination.
    pub fn is_final_leg(&self) -> bool {
        self.leg_index + 1 >= self.leg_count
    }

    /// Move on to the next leg after confirming a waypoint stop.
    ///
    /// Returns `false` (and leaves the index unchanged) on the final leg.
    /// Leg and step progress stay as they are until the route tracker
    /// publishes the next snapshot.
    pub fn advance_leg(&mut self) -> bool {
        if self.is_final_leg() {
            return false;
        }
        self.leg_index += 1;
        tracing::debug!(leg_index = self.leg_index, "Advanced to next leg");
        true
    }

    /// Visual instruction currently shown for the step, if any.
    pub fn current_visual_instruction(&self) -> Option<&VisualInstructionBanner> {
        self.current_leg
            .current_step_progress
            .current_visual_instruction
            .as_ref()
    }
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<RouteProgress, SnapshotError> {
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RouteProgress::from_json(&json)
}
