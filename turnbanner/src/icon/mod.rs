//! Maneuver icon resolution.
//!
//! Maps a maneuver's type and direction onto one of a small set of arrow
//! assets. Left-hand variants reuse the right-hand artwork mirrored, and
//! circular maneuvers are mirrored in left-hand traffic where roundabouts
//! run clockwise.
//!
//! # Example
//!
//! ```ignore
//! use turnbanner::icon::{IconResolver, ManeuverIconResolver, Appearance};
//!
//! let resolver = ManeuverIconResolver::new();
//! let icon = resolver.icon(Some(ManeuverType::Turn), Some(ManeuverDirection::Left), DrivingSide::Right);
//! // turn-right artwork, mirrored
//! println!("{}", icon.unwrap().asset_path(Appearance::Dark));
//! ```

use serde::Serialize;

use crate::route::{DrivingSide, ManeuverDirection, ManeuverType};

/// Arrow artwork available to banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManeuverAsset {
    Depart,
    Arrive,
    Straight,
    SlightRight,
    Right,
    SharpRight,
    UTurn,
    Merge,
    Fork,
    OffRamp,
    Roundabout,
}

impl ManeuverAsset {
    /// Asset file stem.
    pub fn name(&self) -> &'static str {
        match self {
            ManeuverAsset::Depart => "depart",
            ManeuverAsset::Arrive => "arrive",
            ManeuverAsset::Straight => "straight",
            ManeuverAsset::SlightRight => "slight-right",
            ManeuverAsset::Right => "right",
            ManeuverAsset::SharpRight => "sharp-right",
            ManeuverAsset::UTurn => "uturn",
            ManeuverAsset::Merge => "merge",
            ManeuverAsset::Fork => "fork",
            ManeuverAsset::OffRamp => "off-ramp",
            ManeuverAsset::Roundabout => "roundabout",
        }
    }
}

/// Light or dark variant of an icon, for day and night styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Reference to a directional icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ManeuverIcon {
    pub asset: ManeuverAsset,
    /// Draw the asset flipped horizontally.
    pub mirrored: bool,
}

impl ManeuverIcon {
    pub fn new(asset: ManeuverAsset, mirrored: bool) -> Self {
        Self { asset, mirrored }
    }

    /// Bundle-relative asset path for the given appearance.
    pub fn asset_path(&self, appearance: Appearance) -> String {
        format!("maneuvers/{}/{}.png", appearance.as_str(), self.asset.name())
    }
}

impl std::fmt::Display for ManeuverIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mirrored {
            write!(f, "{} (mirrored)", self.asset.name())
        } else {
            write!(f, "{}", self.asset.name())
        }
    }
}

/// Maps maneuver attributes to an icon.
pub trait IconResolver: Send + Sync {
    /// Resolve an icon, or `None` when the maneuver has no type and no
    /// direction to draw.
    fn icon(
        &self,
        maneuver_type: Option<ManeuverType>,
        direction: Option<ManeuverDirection>,
        side: DrivingSide,
    ) -> Option<ManeuverIcon>;
}

/// Default arrow-set resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManeuverIconResolver;

impl ManeuverIconResolver {
    pub fn new() -> Self {
        Self
    }

    /// Icon for a bare direction.
    fn directional(direction: ManeuverDirection, side: DrivingSide) -> ManeuverIcon {
        match direction {
            ManeuverDirection::Straight => ManeuverIcon::new(ManeuverAsset::Straight, false),
            // Artwork turns across traffic for right-hand driving
            ManeuverDirection::UTurn => ManeuverIcon::new(ManeuverAsset::UTurn, side == DrivingSide::Left),
            bend => {
                let right = if bend.is_left() { bend.mirrored() } else { bend };
                let asset = match right {
                    ManeuverDirection::SlightRight => ManeuverAsset::SlightRight,
                    ManeuverDirection::SharpRight => ManeuverAsset::SharpRight,
                    _ => ManeuverAsset::Right,
                };
                ManeuverIcon::new(asset, bend.is_left())
            }
        }
    }

    fn sided(asset: ManeuverAsset, direction: Option<ManeuverDirection>) -> ManeuverIcon {
        ManeuverIcon::new(asset, direction.is_some_and(|d| d.is_left()))
    }
}

impl IconResolver for ManeuverIconResolver {
    fn icon(
        &self,
        maneuver_type: Option<ManeuverType>,
        direction: Option<ManeuverDirection>,
        side: DrivingSide,
    ) -> Option<ManeuverIcon> {
        let icon = match (maneuver_type, direction) {
            (None, None) => return None,
            (Some(kind), _) if kind.is_circular() => {
                ManeuverIcon::new(ManeuverAsset::Roundabout, side == DrivingSide::Left)
            }
            (Some(ManeuverType::Arrive), direction) => Self::sided(ManeuverAsset::Arrive, direction),
            (Some(ManeuverType::Depart), _) => ManeuverIcon::new(ManeuverAsset::Depart, false),
            (Some(ManeuverType::Merge), direction) => Self::sided(ManeuverAsset::Merge, direction),
            (Some(ManeuverType::Fork), direction) => Self::sided(ManeuverAsset::Fork, direction),
            (Some(ManeuverType::OffRamp), direction) => Self::sided(ManeuverAsset::OffRamp, direction),
            (_, Some(direction)) => Self::directional(direction, side),
            (Some(_), None) => ManeuverIcon::new(ManeuverAsset::Straight, false),
        };
        Some(icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(
        kind: Option<ManeuverType>,
        direction: Option<ManeuverDirection>,
        side: DrivingSide,
    ) -> Option<ManeuverIcon> {
        ManeuverIconResolver::new().icon(kind, direction, side)
    }

    #[test]
    fn test_nothing_to_draw() {
        assert_eq!(resolve(None, None, DrivingSide::Right), None);
    }

    #[test]
    fn test_left_turn_mirrors_right_artwork() {
        let icon = resolve(
            Some(ManeuverType::Turn),
            Some(ManeuverDirection::Left),
            DrivingSide::Right,
        )
        .unwrap();
        assert_eq!(icon, ManeuverIcon::new(ManeuverAsset::Right, true));

        let sharp = resolve(
            Some(ManeuverType::Turn),
            Some(ManeuverDirection::SharpLeft),
            DrivingSide::Right,
        )
        .unwrap();
        assert_eq!(sharp, ManeuverIcon::new(ManeuverAsset::SharpRight, true));
    }

    #[test]
    fn test_right_turn_not_mirrored() {
        let icon = resolve(
            Some(ManeuverType::Turn),
            Some(ManeuverDirection::SlightRight),
            DrivingSide::Right,
        )
        .unwrap();
        assert_eq!(icon, ManeuverIcon::new(ManeuverAsset::SlightRight, false));
    }

    #[test]
    fn test_roundabout_mirrored_for_left_hand_traffic() {
        let right_hand = resolve(
            Some(ManeuverType::Roundabout),
            Some(ManeuverDirection::Right),
            DrivingSide::Right,
        )
        .unwrap();
        let left_hand = resolve(
            Some(ManeuverType::Roundabout),
            Some(ManeuverDirection::Right),
            DrivingSide::Left,
        )
        .unwrap();
        assert!(!right_hand.mirrored);
        assert!(left_hand.mirrored);
        assert_eq!(left_hand.asset, ManeuverAsset::Roundabout);
    }

    #[test]
    fn test_uturn_follows_driving_side() {
        let right_hand = resolve(None, Some(ManeuverDirection::UTurn), DrivingSide::Right).unwrap();
        let left_hand = resolve(None, Some(ManeuverDirection::UTurn), DrivingSide::Left).unwrap();
        assert_eq!(right_hand.asset, ManeuverAsset::UTurn);
        assert!(!right_hand.mirrored);
        assert!(left_hand.mirrored);
    }

    #[test]
    fn test_type_without_direction_goes_straight() {
        let icon = resolve(Some(ManeuverType::NewName), None, DrivingSide::Right).unwrap();
        assert_eq!(icon.asset, ManeuverAsset::Straight);
    }

    #[test]
    fn test_arrive_on_left() {
        let icon = resolve(
            Some(ManeuverType::Arrive),
            Some(ManeuverDirection::Left),
            DrivingSide::Right,
        )
        .unwrap();
        assert_eq!(icon, ManeuverIcon::new(ManeuverAsset::Arrive, true));
    }

    #[test]
    fn test_asset_path() {
        let icon = ManeuverIcon::new(ManeuverAsset::OffRamp, false);
        assert_eq!(icon.asset_path(Appearance::Dark), "maneuvers/dark/off-ramp.png");
        assert_eq!(icon.asset_path(Appearance::Light), "maneuvers/light/off-ramp.png");
    }
}
