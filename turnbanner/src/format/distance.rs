//! Distance formatting.
//!
//! Banner distances are shown rounded the way a driver reads them: "300 m"
//! rather than "317 m". The formatter picks the display unit from the
//! unit system and the magnitude, then rounds to a magnitude-dependent
//! increment.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Meters per international foot.
const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// Below this many miles, imperial distances are shown in feet.
const FEET_THRESHOLD_MILES: f64 = 0.1;

/// Unit system used for displayed distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(format!("unknown unit system '{}'", other)),
        }
    }
}

/// Unit of a formatted distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl LengthUnit {
    /// Unit symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::Feet => "ft",
            LengthUnit::Miles => "mi",
        }
    }

    /// Whether values in this unit are shown with a decimal place below 10.
    fn is_large(&self) -> bool {
        matches!(self, LengthUnit::Kilometers | LengthUnit::Miles)
    }
}

/// A distance quantity ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unit.is_large() && self.value < 10.0 {
            write!(f, "{:.1} {}", self.value, self.unit.symbol())
        } else {
            write!(f, "{:.0} {}", self.value, self.unit.symbol())
        }
    }
}

/// Converts a distance in meters into a displayable measurement.
///
/// Implementations must be pure: the same input always yields the same
/// measurement, so projections stay idempotent.
pub trait DistanceFormatter: Send + Sync {
    /// Format a distance given in meters.
    fn measurement(&self, meters: f64) -> Measurement;
}

/// Unit-system-aware formatter with optional approximate rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateDistanceFormatter {
    units: UnitSystem,
    approximate: bool,
}

impl Default for ApproximateDistanceFormatter {
    fn default() -> Self {
        Self::new(UnitSystem::Metric, true)
    }
}

impl ApproximateDistanceFormatter {
    /// Create a formatter for the given unit system.
    pub fn new(units: UnitSystem, approximate: bool) -> Self {
        Self { units, approximate }
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    fn metric(&self, meters: f64) -> Measurement {
        if meters < 1000.0 {
            let rounded = if self.approximate {
                let increment = if meters < 100.0 { 10.0 } else { 50.0 };
                round_nonzero(meters, increment)
            } else {
                meters.round()
            };
            // 990 m rounds up into the kilometre range
            if rounded < 1000.0 {
                return Measurement::new(rounded, LengthUnit::Meters);
            }
        }
        Measurement::new(round_large(meters / 1000.0), LengthUnit::Kilometers)
    }

    fn imperial(&self, meters: f64) -> Measurement {
        let miles = meters / METERS_PER_MILE;
        if miles < FEET_THRESHOLD_MILES {
            let feet = meters / METERS_PER_FOOT;
            let rounded = if self.approximate {
                round_nonzero(feet, 50.0)
            } else {
                feet.round()
            };
            return Measurement::new(rounded, LengthUnit::Feet);
        }
        Measurement::new(round_large(miles), LengthUnit::Miles)
    }
}

impl DistanceFormatter for ApproximateDistanceFormatter {
    fn measurement(&self, meters: f64) -> Measurement {
        let meters = if meters.is_finite() && meters > 0.0 {
            meters
        } else {
            0.0
        };
        match self.units {
            UnitSystem::Metric => self.metric(meters),
            UnitSystem::Imperial => self.imperial(meters),
        }
    }
}

fn round_to(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}

/// Round to `increment`, never down to zero for a non-zero value.
fn round_nonzero(value: f64, increment: f64) -> f64 {
    if value > 0.0 {
        round_to(value, increment).max(increment)
    } else {
        0.0
    }
}

/// One decimal below 10, whole units above.
fn round_large(value: f64) -> f64 {
    if value < 10.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}
