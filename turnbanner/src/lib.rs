//! TurnBanner - Maneuver banners for head-unit navigation
//!
//! This library turns route progress snapshots from a route tracker into
//! the maneuver banner records an in-car navigation surface displays:
//! instruction text, rich labels with road shields, arrow icons and
//! distance/time estimates.
//!
//! # Architecture
//!
//! ```text
//! route tracker ──► GuidanceEvent ──► GuidancePresenter ──► ManeuverConsumer
//!                                          │
//!                                          ▼
//!                                  ManeuverProjector
//!                                  ├── DistanceFormatter
//!                                  ├── InstructionFormatter
//!                                  └── IconResolver
//! ```
//!
//! The projector is pure; everything stateful (which banners are on
//! screen) belongs to the consumer.

pub mod config;
pub mod format;
pub mod guidance;
pub mod icon;
pub mod logging;
pub mod projector;
pub mod route;
