//! Event-driven banner presenter.

use crate::format::{DistanceFormatter, InstructionFormatter};
use crate::icon::IconResolver;
use crate::projector::{ManeuverDisplayRecord, ManeuverProjector};
use crate::route::RouteProgress;

use super::estimates::TripEstimateUpdate;

/// Events published by the route tracker.
#[derive(Debug, Clone)]
pub enum GuidanceEvent {
    /// The user passed a point where a new visual instruction applies.
    VisualInstructionChanged(RouteProgress),

    /// Location update along the current route.
    ProgressChanged(RouteProgress),

    /// A new route replaced the previous one.
    Rerouted(RouteProgress),
}

impl GuidanceEvent {
    pub fn progress(&self) -> &RouteProgress {
        match self {
            GuidanceEvent::VisualInstructionChanged(progress)
            | GuidanceEvent::ProgressChanged(progress)
            | GuidanceEvent::Rerouted(progress) => progress,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GuidanceEvent::VisualInstructionChanged(_) => "visual_instruction_changed",
            GuidanceEvent::ProgressChanged(_) => "progress_changed",
            GuidanceEvent::Rerouted(_) => "rerouted",
        }
    }
}

/// Head-unit surface that displays maneuver banners.
pub trait ManeuverConsumer {
    /// Replace the displayed maneuvers.
    fn set_maneuvers(&mut self, maneuvers: Vec<ManeuverDisplayRecord>);

    /// Whether a maneuver is currently displayed.
    fn has_maneuver(&self) -> bool;

    /// Refresh trip estimates and those of the first displayed maneuver.
    fn update_estimates(&mut self, update: TripEstimateUpdate);
}

/// What the presenter did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterAction {
    /// New maneuvers were pushed to the consumer.
    Projected { records: usize },
    /// Estimates were refreshed.
    EstimatesUpdated,
    /// Nothing changed on the surface.
    Ignored,
}

/// Routes guidance events to a maneuver consumer.
///
/// Instruction changes and reroutes re-run projection; location updates
/// only refresh estimates of what is already displayed.
pub struct GuidancePresenter<C, D, F, I> {
    projector: ManeuverProjector<D, F, I>,
    consumer: C,
}

impl<C, D, F, I> GuidancePresenter<C, D, F, I>
where
    C: ManeuverConsumer,
    D: DistanceFormatter,
    F: InstructionFormatter,
    I: IconResolver,
{
    pub fn new(projector: ManeuverProjector<D, F, I>, consumer: C) -> Self {
        Self {
            projector,
            consumer,
        }
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Handle one event from the route tracker.
    pub fn handle(&mut self, event: &GuidanceEvent) -> PresenterAction {
        let action = match event {
            GuidanceEvent::VisualInstructionChanged(progress) | GuidanceEvent::Rerouted(progress) => {
                self.refresh_maneuvers(progress)
            }
            GuidanceEvent::ProgressChanged(progress) => self.refresh_estimates(progress),
        };
        tracing::trace!(event = event.name(), ?action, "Guidance event handled");
        action
    }

    fn refresh_maneuvers(&mut self, progress: &RouteProgress) -> PresenterAction {
        let records = self.projector.project(progress);
        if records.is_empty() {
            return PresenterAction::Ignored;
        }
        let count = records.len();
        self.consumer.set_maneuvers(records);
        PresenterAction::Projected { records: count }
    }

    fn refresh_estimates(&mut self, progress: &RouteProgress) -> PresenterAction {
        if !self.consumer.has_maneuver() {
            return PresenterAction::Ignored;
        }
        let update = TripEstimateUpdate::from_progress(progress, self.projector.distance_formatter());
        self.consumer.update_estimates(update);
        PresenterAction::EstimatesUpdated
    }
}
