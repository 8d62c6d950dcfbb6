//! Route progress model.
//!
//! Read-only snapshot types delivered by an external route tracker. The
//! projector and guidance presenter only ever observe these values; route
//! calculation and map matching happen elsewhere.
//!
//! # Structure
//!
//! ```text
//! RouteProgress
//! └── LegProgress (current leg)
//!     ├── RouteStep (current step)
//!     ├── RouteStep (upcoming step, optional)
//!     └── StepProgress
//!         └── VisualInstructionBanner (optional)
//!             ├── primary:   VisualInstruction
//!             ├── secondary: VisualInstruction (optional)
//!             └── tertiary:  VisualInstruction (optional)
//! ```
//!
//! Distances are in meters and durations in seconds, matching the units
//! used by routing engines on the wire. Snapshots deserialize from JSON
//! via [`RouteProgress::from_json`] or [`load_snapshot`].

mod error;
mod instruction;
mod progress;

pub use error::SnapshotError;
pub use instruction::{
    DrivingSide, InstructionComponent, LaneIndication, ManeuverDirection, ManeuverType,
    VisualInstruction, VisualInstructionBanner,
};
pub use progress::{
    load_snapshot, CongestionLevel, LegProgress, RouteProgress, RouteStep, StepProgress,
};
