//! Visual instruction types.
//!
//! A visual instruction banner describes one upcoming maneuver as up to
//! three instruction blocks. The primary block names the maneuver, the
//! secondary block adds detail (e.g. destination side), and the tertiary
//! block either previews the following maneuver or carries lane guidance.

use serde::{Deserialize, Serialize};

/// Side of the road that traffic drives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivingSide {
    Left,
    #[default]
    Right,
}

impl DrivingSide {
    /// Human-readable name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrivingSide::Left => "left",
            DrivingSide::Right => "right",
        }
    }
}

impl std::fmt::Display for DrivingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of maneuver performed at the end of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManeuverType {
    #[serde(rename = "depart")]
    Depart,
    #[serde(rename = "arrive")]
    Arrive,
    #[serde(rename = "turn")]
    Turn,
    #[serde(rename = "continue")]
    Continue,
    #[serde(rename = "new name")]
    NewName,
    #[serde(rename = "merge")]
    Merge,
    #[serde(rename = "on ramp")]
    OnRamp,
    #[serde(rename = "off ramp")]
    OffRamp,
    #[serde(rename = "fork")]
    Fork,
    #[serde(rename = "end of road")]
    EndOfRoad,
    #[serde(rename = "use lane")]
    UseLane,
    #[serde(rename = "roundabout")]
    Roundabout,
    #[serde(rename = "rotary")]
    Rotary,
    #[serde(rename = "roundabout turn")]
    RoundaboutTurn,
    #[serde(rename = "exit roundabout")]
    ExitRoundabout,
    #[serde(rename = "exit rotary")]
    ExitRotary,
    #[serde(rename = "notification")]
    Notification,
}

impl ManeuverType {
    /// Whether the maneuver circulates through a roundabout or rotary.
    pub fn is_circular(&self) -> bool {
        matches!(
            self,
            ManeuverType::Roundabout
                | ManeuverType::Rotary
                | ManeuverType::RoundaboutTurn
                | ManeuverType::ExitRoundabout
                | ManeuverType::ExitRotary
        )
    }
}

/// Direction modifier of a maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManeuverDirection {
    #[serde(rename = "uturn")]
    UTurn,
    #[serde(rename = "sharp right")]
    SharpRight,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "slight right")]
    SlightRight,
    #[serde(rename = "straight")]
    Straight,
    #[serde(rename = "slight left")]
    SlightLeft,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "sharp left")]
    SharpLeft,
}

impl ManeuverDirection {
    /// Whether the direction bends to the left.
    pub fn is_left(&self) -> bool {
        matches!(
            self,
            ManeuverDirection::SlightLeft | ManeuverDirection::Left | ManeuverDirection::SharpLeft
        )
    }

    /// The same bend on the opposite side (straight and U-turn map to themselves).
    pub fn mirrored(&self) -> Self {
        match self {
            ManeuverDirection::SharpRight => ManeuverDirection::SharpLeft,
            ManeuverDirection::Right => ManeuverDirection::Left,
            ManeuverDirection::SlightRight => ManeuverDirection::SlightLeft,
            ManeuverDirection::SlightLeft => ManeuverDirection::SlightRight,
            ManeuverDirection::Left => ManeuverDirection::Right,
            ManeuverDirection::SharpLeft => ManeuverDirection::SharpRight,
            other => *other,
        }
    }
}

/// Direction a single lane permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneIndication {
    #[serde(rename = "sharp left")]
    SharpLeft,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "slight left")]
    SlightLeft,
    #[serde(rename = "straight")]
    Straight,
    #[serde(rename = "slight right")]
    SlightRight,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "sharp right")]
    SharpRight,
    #[serde(rename = "uturn")]
    UTurn,
}

/// One piece of a structured instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InstructionComponent {
    /// Plain road name or phrase.
    Text {
        text: String,
        #[serde(default)]
        abbreviation: Option<String>,
        /// Lower values are abbreviated first.
        #[serde(default)]
        abbreviation_priority: Option<i32>,
    },

    /// Separator between road names (e.g. "/").
    Delimiter { text: String },

    /// Road shield. `text` is shown when no artwork is available.
    Image {
        text: String,
        #[serde(default)]
        image_base_url: Option<String>,
    },

    /// The word introducing an exit number.
    Exit { text: String },

    /// Exit number badge.
    ExitCode { text: String },

    /// Lane guidance.
    Lane {
        indications: Vec<LaneIndication>,
        #[serde(default)]
        active: bool,
    },
}

impl InstructionComponent {
    /// Build a plain text component.
    pub fn text(text: impl Into<String>) -> Self {
        InstructionComponent::Text {
            text: text.into(),
            abbreviation: None,
            abbreviation_priority: None,
        }
    }

    /// Build a text component that may be abbreviated.
    pub fn abbreviated(text: impl Into<String>, abbreviation: impl Into<String>, priority: i32) -> Self {
        InstructionComponent::Text {
            text: text.into(),
            abbreviation: Some(abbreviation.into()),
            abbreviation_priority: Some(priority),
        }
    }

    /// Whether this component is lane guidance.
    pub fn is_lane(&self) -> bool {
        matches!(self, InstructionComponent::Lane { .. })
    }
}

/// One block of a visual instruction banner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualInstruction {
    /// Plain text of the whole block.
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, rename = "type")]
    pub maneuver_type: Option<ManeuverType>,

    #[serde(default, rename = "modifier")]
    pub maneuver_direction: Option<ManeuverDirection>,

    #[serde(default)]
    pub components: Vec<InstructionComponent>,
}

impl VisualInstruction {
    /// Create a block with the given plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Set the maneuver type and direction.
    pub fn with_maneuver(mut self, maneuver_type: ManeuverType, direction: Option<ManeuverDirection>) -> Self {
        self.maneuver_type = Some(maneuver_type);
        self.maneuver_direction = direction;
        self
    }

    /// Append a component.
    pub fn with_component(mut self, component: InstructionComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Whether any component carries lane guidance.
    pub fn contains_lane_indications(&self) -> bool {
        self.components.iter().any(InstructionComponent::is_lane)
    }
}

/// Visual instruction for the current step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualInstructionBanner {
    #[serde(default)]
    pub driving_side: DrivingSide,

    pub primary: VisualInstruction,

    #[serde(default)]
    pub secondary: Option<VisualInstruction>,

    #[serde(default)]
    pub tertiary: Option<VisualInstruction>,
}

impl VisualInstructionBanner {
    /// Create a banner with only a primary instruction.
    pub fn new(primary: VisualInstruction) -> Self {
        Self {
            driving_side: DrivingSide::default(),
            primary,
            secondary: None,
            tertiary: None,
        }
    }

    /// Set the secondary instruction.
    pub fn with_secondary(mut self, secondary: VisualInstruction) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Set the tertiary instruction.
    pub fn with_tertiary(mut self, tertiary: VisualInstruction) -> Self {
        self.tertiary = Some(tertiary);
        self
    }

    /// Set the driving side.
    pub fn with_driving_side(mut self, side: DrivingSide) -> Self {
        self.driving_side = side;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_component_detected() {
        let instruction = VisualInstruction::default().with_component(InstructionComponent::Lane {
            indications: vec![LaneIndication::Straight, LaneIndication::Right],
            active: true,
        });
        assert!(instruction.contains_lane_indications());
    }

    #[test]
    fn test_text_only_has_no_lanes() {
        let instruction =
            VisualInstruction::new("Main St").with_component(InstructionComponent::text("Main St"));
        assert!(!instruction.contains_lane_indications());
    }

    #[test]
    fn test_direction_mirroring() {
        assert_eq!(ManeuverDirection::Right.mirrored(), ManeuverDirection::Left);
        assert_eq!(ManeuverDirection::SharpLeft.mirrored(), ManeuverDirection::SharpRight);
        assert_eq!(ManeuverDirection::UTurn.mirrored(), ManeuverDirection::UTurn);
        assert_eq!(ManeuverDirection::Straight.mirrored(), ManeuverDirection::Straight);
    }

    #[test]
    fn test_deserialize_instruction_with_components() {
        let json = r#"{
            "text": "I-280 North / Main St",
            "type": "off ramp",
            "modifier": "slight right",
            "components": [
                {"type": "image", "text": "I-280", "image_base_url": "https://shields.example/i280"},
                {"type": "delimiter", "text": "/"},
                {"type": "text", "text": "Main Street", "abbreviation": "Main St", "abbreviation_priority": 0},
                {"type": "exit-code", "text": "12B"}
            ]
        }"#;
        let instruction: VisualInstruction = serde_json::from_str(json).unwrap();
        assert_eq!(instruction.maneuver_type, Some(ManeuverType::OffRamp));
        assert_eq!(instruction.maneuver_direction, Some(ManeuverDirection::SlightRight));
        assert_eq!(instruction.components.len(), 4);
        assert!(!instruction.contains_lane_indications());
    }

    #[test]
    fn test_banner_defaults_to_right_hand_traffic() {
        let json = r#"{"primary": {"text": "Turn left"}}"#;
        let banner: VisualInstructionBanner = serde_json::from_str(json).unwrap();
        assert_eq!(banner.driving_side, DrivingSide::Right);
        assert!(banner.secondary.is_none());
        assert!(banner.tertiary.is_none());
    }

    #[test]
    fn test_circular_maneuvers() {
        assert!(ManeuverType::Roundabout.is_circular());
        assert!(ManeuverType::ExitRotary.is_circular());
        assert!(!ManeuverType::Turn.is_circular());
    }
}
