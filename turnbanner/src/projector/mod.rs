//! Maneuver projection.
//!
//! Converts a route progress snapshot into the ordered list of banner
//! records a head-unit navigation surface displays.
//!
//! # Projection rules
//!
//! ```text
//! no current visual instruction      -> []
//! primary (+ secondary)              -> [primary]
//! + tertiary without lane guidance   -> [primary, tertiary]
//! + tertiary with lane guidance      -> [primary]
//! ```
//!
//! The primary record's estimates cover what is left of the current step;
//! the tertiary record previews the step after it, so its estimates come
//! from the upcoming step.
//!
//! # Example
//!
//! ```ignore
//! use turnbanner::projector::ManeuverProjector;
//!
//! let projector = ManeuverProjector::with_defaults();
//! let records = projector.project(&progress);
//! if !records.is_empty() {
//!     surface.set_maneuvers(records);
//! }
//! ```

mod config;
mod projection;
mod record;

pub use config::{ProjectorConfig, DEFAULT_DISPLAY_SCALE, DEFAULT_LABEL_WIDTH, DEFAULT_SHIELD_HEIGHT};
pub use projection::ManeuverProjector;
pub use record::{ManeuverDisplayRecord, ManeuverRole, TravelEstimates};
