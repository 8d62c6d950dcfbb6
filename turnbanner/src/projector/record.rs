//! Maneuver display records.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::format::{DistanceFormatter, Measurement, RenderedInstruction};
use crate::icon::ManeuverIcon;

/// Remaining distance and time for a maneuver, valid when created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelEstimates {
    pub distance_remaining: Measurement,

    #[serde(serialize_with = "serialize_secs")]
    pub time_remaining: Duration,
}

impl TravelEstimates {
    /// Build estimates from raw meters and seconds.
    ///
    /// Negative or non-finite durations clamp to zero.
    pub fn new(formatter: &dyn DistanceFormatter, meters: f64, seconds: f64) -> Self {
        let time_remaining = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        Self {
            distance_remaining: formatter.measurement(meters),
            time_remaining,
        }
    }
}

impl std::fmt::Display for TravelEstimates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.time_remaining.as_secs();
        if secs >= 3600 {
            write!(
                f,
                "{}, {}h {:02}m",
                self.distance_remaining,
                secs / 3600,
                (secs % 3600) / 60
            )
        } else {
            write!(f, "{}, {} min", self.distance_remaining, secs.div_ceil(60))
        }
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Which banner slot a record occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManeuverRole {
    /// The immediate maneuver.
    Primary,
    /// Preview of the maneuver after the immediate one.
    Tertiary,
}

/// One maneuver as shown on a head-unit banner.
///
/// Records are immutable once projected; a new list is produced for every
/// instruction or route change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManeuverDisplayRecord {
    pub role: ManeuverRole,

    /// Plain instruction text; primary and secondary lines joined by `\n`.
    pub instruction: Option<String>,

    /// Rich rendering with canonicalized attachments, when available.
    pub rendered: Option<RenderedInstruction>,

    pub icon: Option<ManeuverIcon>,

    pub estimates: Option<TravelEstimates>,
}

impl ManeuverDisplayRecord {
    /// Text to show: the rich rendering flattened if present, else plain text.
    pub fn display_text(&self) -> Option<String> {
        match &self.rendered {
            Some(rendered) => Some(rendered.plain_text()),
            None => self.instruction.clone(),
        }
    }
}
