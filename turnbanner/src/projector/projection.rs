//! Route progress to maneuver record projection.

use crate::format::{
    ApproximateDistanceFormatter, ComponentLabelFormatter, DistanceFormatter,
    InstructionFormatter, RenderedInstruction,
};
use crate::icon::{IconResolver, ManeuverIcon, ManeuverIconResolver};
use crate::route::{DrivingSide, RouteProgress, VisualInstruction};

use super::config::ProjectorConfig;
use super::record::{ManeuverDisplayRecord, ManeuverRole, TravelEstimates};

/// Projects route progress snapshots into maneuver display records.
///
/// Stateless apart from its immutable collaborators: `project` can be
/// called repeatedly, and from several threads, with identical results
/// for identical input.
#[derive(Debug, Clone)]
pub struct ManeuverProjector<
    D = ApproximateDistanceFormatter,
    F = ComponentLabelFormatter,
    I = ManeuverIconResolver,
> {
    config: ProjectorConfig,
    distance_formatter: D,
    instruction_formatter: F,
    icon_resolver: I,
}

impl ManeuverProjector {
    /// Create a projector with the default collaborators.
    pub fn new(config: ProjectorConfig, distance_formatter: ApproximateDistanceFormatter) -> Self {
        Self::with_collaborators(
            config,
            distance_formatter,
            ComponentLabelFormatter::new(),
            ManeuverIconResolver::new(),
        )
    }

    /// Create with default configuration (metric, approximate).
    pub fn with_defaults() -> Self {
        Self::new(ProjectorConfig::default(), ApproximateDistanceFormatter::default())
    }
}

impl<D, F, I> ManeuverProjector<D, F, I>
where
    D: DistanceFormatter,
    F: InstructionFormatter,
    I: IconResolver,
{
    /// Create a projector with explicit collaborators.
    pub fn with_collaborators(
        config: ProjectorConfig,
        distance_formatter: D,
        instruction_formatter: F,
        icon_resolver: I,
    ) -> Self {
        Self {
            config,
            distance_formatter,
            instruction_formatter,
            icon_resolver,
        }
    }

    /// Layout settings used for every projection.
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Formatter shared with estimate updates between projections.
    pub fn distance_formatter(&self) -> &D {
        &self.distance_formatter
    }

    /// Project a snapshot into banner records.
    ///
    /// Returns an empty vector when the current step has no visual
    /// instruction; callers should keep whatever they displayed before.
    /// Otherwise the result is `[primary]` or `[primary, tertiary]`.
    pub fn project(&self, progress: &RouteProgress) -> Vec<ManeuverDisplayRecord> {
        let Some(banner) = progress.current_visual_instruction() else {
            tracing::trace!("No visual instruction for current step, nothing to project");
            return Vec::new();
        };

        let leg = &progress.current_leg;
        let step_progress = &leg.current_step_progress;
        let side = banner.driving_side;

        let mut instruction = banner
            .primary
            .text
            .clone()
            .unwrap_or_else(|| leg.current_step.instructions.clone());
        if let Some(secondary_text) = banner.secondary.as_ref().and_then(|s| s.text.as_deref()) {
            instruction.push('\n');
            instruction.push_str(secondary_text);
        }

        let mut rendered = self.render(&banner.primary);
        if let (Some(primary), Some(secondary)) = (rendered.as_mut(), banner.secondary.as_ref()) {
            if let Some(secondary) = self.render(secondary) {
                primary.append_line(secondary);
            }
        }

        let primary = ManeuverDisplayRecord {
            role: ManeuverRole::Primary,
            instruction: Some(instruction),
            rendered: rendered.map(|r| self.canonical(r)),
            icon: self.icon(&banner.primary, side),
            estimates: Some(TravelEstimates::new(
                &self.distance_formatter,
                step_progress.distance_remaining,
                step_progress.duration_remaining,
            )),
        };

        let mut records = vec![primary];

        match banner.tertiary.as_ref() {
            Some(tertiary) if tertiary.contains_lane_indications() => {
                // Lane guidance is not supported on the banner
                tracing::debug!("Dropping tertiary instruction with lane indications");
            }
            Some(tertiary) => {
                let estimates = leg.upcoming_step.as_ref().map(|step| {
                    TravelEstimates::new(
                        &self.distance_formatter,
                        step.distance,
                        step.expected_travel_time,
                    )
                });
                records.push(ManeuverDisplayRecord {
                    role: ManeuverRole::Tertiary,
                    instruction: tertiary.text.clone(),
                    rendered: self.render(tertiary).map(|r| self.canonical(r)),
                    icon: self.icon(tertiary, side),
                    estimates,
                });
            }
            None => {}
        }

        tracing::debug!(
            leg_index = progress.leg_index,
            step_index = leg.step_index,
            records = records.len(),
            "Projected maneuvers"
        );

        records
    }

    fn render(&self, instruction: &VisualInstruction) -> Option<RenderedInstruction> {
        self.instruction_formatter.rendered_instruction(
            instruction,
            self.config.label_bounds,
            self.config.shield_height,
        )
    }

    fn canonical(&self, mut rendered: RenderedInstruction) -> RenderedInstruction {
        rendered.canonicalize(self.config.display_scale);
        rendered
    }

    fn icon(&self, instruction: &VisualInstruction, side: DrivingSide) -> Option<ManeuverIcon> {
        self.icon_resolver
            .icon(instruction.maneuver_type, instruction.maneuver_direction, side)
    }
}
