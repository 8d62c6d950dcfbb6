//! Formatting collaborators for maneuver banners.
//!
//! The projector decides *what* goes on a banner; this module decides how
//! distances and instruction blocks look. Both concerns sit behind traits
//! so a head-unit integration can supply its platform's own formatters:
//!
//! - [`DistanceFormatter`] turns meters into a displayable [`Measurement`]
//! - [`InstructionFormatter`] turns an instruction block into a
//!   [`RenderedInstruction`] sized for [`LabelBounds`]
//!
//! Default implementations ([`ApproximateDistanceFormatter`],
//! [`ComponentLabelFormatter`]) cover the common case.

mod distance;
mod label;
mod rendered;

pub use distance::{
    ApproximateDistanceFormatter, DistanceFormatter, LengthUnit, Measurement, UnitSystem,
};
pub use label::{ComponentLabelFormatter, InstructionFormatter, LabelBounds, DEFAULT_LABEL_HEIGHT};
pub use rendered::{Attachment, RenderedInstruction, RenderedSpan};
