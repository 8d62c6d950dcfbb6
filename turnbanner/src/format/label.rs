//! Instruction label formatting.
//!
//! Turns the structured components of a visual instruction into a
//! [`RenderedInstruction`] sized for the banner's label area. Road names
//! that carry an abbreviation are shortened, lowest abbreviation priority
//! first, until the estimated label width fits the bounds.

use std::collections::HashSet;

use crate::route::{InstructionComponent, VisualInstruction};

use super::rendered::{Attachment, RenderedInstruction, RenderedSpan};

/// Average glyph advance as a fraction of the label height.
const GLYPH_WIDTH_RATIO: f64 = 0.3;

/// Shield artwork width as a multiple of its height.
const SHIELD_ASPECT_RATIO: f64 = 2.0;

/// Horizontal padding inside a badge, as a fraction of shield height.
const BADGE_PADDING_RATIO: f64 = 0.5;

/// Height of the maneuver label area in points.
pub const DEFAULT_LABEL_HEIGHT: f64 = 30.0;

/// Layout rectangle available to an instruction label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBounds {
    pub width: f64,
    pub height: f64,
}

impl LabelBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounds of the maneuver label on a surface with the given safe-area
    /// insets. The label spans the surface minus the wider of the two
    /// horizontal insets.
    pub fn for_surface(surface_width: f64, left_inset: f64, right_inset: f64) -> Self {
        let width = (surface_width - left_inset).min(surface_width - right_inset);
        Self {
            width: width.max(0.0),
            height: DEFAULT_LABEL_HEIGHT,
        }
    }
}

/// Produces rich renderings of instruction blocks.
///
/// Returning `None` tells the caller to fall back to the block's plain
/// text. Implementations must be pure.
pub trait InstructionFormatter: Send + Sync {
    fn rendered_instruction(
        &self,
        instruction: &VisualInstruction,
        bounds: LabelBounds,
        shield_height: f64,
    ) -> Option<RenderedInstruction>;
}

/// Component-based label formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentLabelFormatter;

impl ComponentLabelFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render(
        components: &[InstructionComponent],
        abbreviated: &HashSet<usize>,
        shield_height: f64,
    ) -> RenderedInstruction {
        let mut label = RenderedInstruction::new();
        let mut first = true;

        for (index, component) in components.iter().enumerate() {
            if component.is_lane() {
                continue;
            }
            if !first {
                label.push_text(" ");
            }
            first = false;

            match component {
                InstructionComponent::Text {
                    text, abbreviation, ..
                } => match abbreviation {
                    Some(short) if abbreviated.contains(&index) => label.push_text(short),
                    _ => label.push_text(text),
                },
                InstructionComponent::Delimiter { text } | InstructionComponent::Exit { text } => {
                    label.push_text(text)
                }
                InstructionComponent::Image {
                    text,
                    image_base_url,
                } => label.push_attachment(Attachment::ShieldRef {
                    base_url: image_base_url.clone(),
                    text: text.clone(),
                    height: shield_height,
                }),
                InstructionComponent::ExitCode { text } => label.push_attachment(Attachment::Badge {
                    text: text.clone(),
                    height: shield_height,
                }),
                InstructionComponent::Lane { .. } => {}
            }
        }

        label
    }

    fn estimated_width(label: &RenderedInstruction, bounds: LabelBounds, shield_height: f64) -> f64 {
        let glyph = bounds.height * GLYPH_WIDTH_RATIO;
        let text_chars = label
            .spans()
            .iter()
            .map(|span| match span {
                RenderedSpan::Text { text } => text.chars().count(),
                RenderedSpan::Attachment { .. } => 0,
            })
            .sum::<usize>();

        let attachments: f64 = label
            .attachments()
            .map(|attachment| match attachment {
                Attachment::ShieldRef { .. } | Attachment::Image { .. } => {
                    shield_height * SHIELD_ASPECT_RATIO
                }
                Attachment::Badge { text, .. } => {
                    text.chars().count() as f64 * glyph + shield_height * BADGE_PADDING_RATIO
                }
            })
            .sum();

        text_chars as f64 * glyph + attachments
    }
}

impl InstructionFormatter for ComponentLabelFormatter {
    fn rendered_instruction(
        &self,
        instruction: &VisualInstruction,
        bounds: LabelBounds,
        shield_height: f64,
    ) -> Option<RenderedInstruction> {
        let components = &instruction.components;
        if components.iter().all(InstructionComponent::is_lane) {
            return None;
        }

        let mut candidates: Vec<(i32, usize)> = components
            .iter()
            .enumerate()
            .filter_map(|(index, component)| match component {
                InstructionComponent::Text {
                    abbreviation: Some(_),
                    abbreviation_priority,
                    ..
                } => Some((abbreviation_priority.unwrap_or(i32::MAX), index)),
                _ => None,
            })
            .collect();
        candidates.sort_unstable();

        let mut abbreviated = HashSet::new();
        let mut label = Self::render(components, &abbreviated, shield_height);

        for (_, index) in candidates {
            if Self::estimated_width(&label, bounds, shield_height) <= bounds.width {
                break;
            }
            abbreviated.insert(index);
            label = Self::render(components, &abbreviated, shield_height);
        }

        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::LaneIndication;

    fn wide() -> LabelBounds {
        LabelBounds::new(1000.0, DEFAULT_LABEL_HEIGHT)
    }

    #[test]
    fn test_no_components_returns_none() {
        let formatter = ComponentLabelFormatter::new();
        let instruction = VisualInstruction::new("Turn right");
        assert!(formatter.rendered_instruction(&instruction, wide(), 16.0).is_none());
    }

    #[test]
    fn test_lane_only_returns_none() {
        let formatter = ComponentLabelFormatter::new();
        let instruction = VisualInstruction::default().with_component(InstructionComponent::Lane {
            indications: vec![LaneIndication::Left],
            active: true,
        });
        assert!(formatter.rendered_instruction(&instruction, wide(), 16.0).is_none());
    }

    #[test]
    fn test_components_joined_with_spaces() {
        let formatter = ComponentLabelFormatter::new();
        let instruction = VisualInstruction::default()
            .with_component(InstructionComponent::Image {
                text: "I-280".to_string(),
                image_base_url: None,
            })
            .with_component(InstructionComponent::Delimiter {
                text: "/".to_string(),
            })
            .with_component(InstructionComponent::text("Main Street"));

        let rendered = formatter.rendered_instruction(&instruction, wide(), 16.0).unwrap();
        assert_eq!(rendered.plain_text(), "I-280 / Main Street");
        assert_eq!(rendered.attachments().count(), 1);
    }

    #[test]
    fn test_exit_code_becomes_badge() {
        let formatter = ComponentLabelFormatter::new();
        let instruction = VisualInstruction::default()
            .with_component(InstructionComponent::Exit {
                text: "Exit".to_string(),
            })
            .with_component(InstructionComponent::ExitCode {
                text: "12B".to_string(),
            });

        let rendered = formatter.rendered_instruction(&instruction, wide(), 16.0).unwrap();
        assert!(matches!(
            rendered.attachments().next(),
            Some(Attachment::Badge { text, .. }) if text == "12B"
        ));
    }

    #[test]
    fn test_abbreviates_by_priority_until_fit() {
        let formatter = ComponentLabelFormatter::new();
        let instruction = VisualInstruction::default()
            .with_component(InstructionComponent::abbreviated(
                "North Main Street",
                "N Main St",
                1,
            ))
            .with_component(InstructionComponent::Delimiter {
                text: "/".to_string(),
            })
            .with_component(InstructionComponent::abbreviated(
                "Martin Luther King Junior Boulevard",
                "MLK Jr Blvd",
                0,
            ));

        // Full label is 55 chars (495 pt); abbreviating priority 0 gives 31 chars (279 pt).
        let bounds = LabelBounds::new(300.0, DEFAULT_LABEL_HEIGHT);
        let rendered = formatter.rendered_instruction(&instruction, bounds, 16.0).unwrap();
        assert_eq!(rendered.plain_text(), "North Main Street / MLK Jr Blvd");

        // Narrower still: both abbreviated.
        let narrow = LabelBounds::new(100.0, DEFAULT_LABEL_HEIGHT);
        let rendered = formatter.rendered_instruction(&instruction, narrow, 16.0).unwrap();
        assert_eq!(rendered.plain_text(), "N Main St / MLK Jr Blvd");
    }

    #[test]
    fn test_fitting_label_is_not_abbreviated() {
        let formatter = ComponentLabelFormatter::new();
        let instruction = VisualInstruction::default()
            .with_component(InstructionComponent::abbreviated("Main Street", "Main St", 0));
        let rendered = formatter.rendered_instruction(&instruction, wide(), 16.0).unwrap();
        assert_eq!(rendered.plain_text(), "Main Street");
    }

    #[test]
    fn test_surface_bounds_use_wider_inset() {
        let bounds = LabelBounds::for_surface(800.0, 40.0, 120.0);
        assert_eq!(bounds.width, 680.0);
        assert_eq!(bounds.height, DEFAULT_LABEL_HEIGHT);
    }
}
