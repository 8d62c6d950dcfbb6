//! Guidance event handling.
//!
//! An explicit, synchronous replacement for notification observers: the
//! integration forwards each route tracker event to
//! [`GuidancePresenter::handle`], which decides whether to re-project
//! banners or only refresh estimates.
//!
//! ```text
//! VisualInstructionChanged ─┐
//! Rerouted ─────────────────┴──► project ──► ManeuverConsumer::set_maneuvers
//! ProgressChanged ─────────────► estimates ─► ManeuverConsumer::update_estimates
//! ```
//!
//! The presenter is driven from a single event thread; it holds the
//! consumer by value and needs no synchronization of its own.

mod arrival;
mod estimates;
mod presenter;

pub use arrival::{arrival_outcome, ArrivalOutcome, DEFAULT_ARRIVAL_TITLE};
pub use estimates::{TimeRemainingColor, TripEstimateUpdate};
pub use presenter::{GuidanceEvent, GuidancePresenter, ManeuverConsumer, PresenterAction};
