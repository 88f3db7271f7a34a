//! # Standoffkit Transform
//!
//! Rigid-body transform math for TCP point conversion:
//!
//! - **Rotation math**: Euler/matrix conversion in the vendor's W-P-R
//!   convention, 3x3 and homogeneous 4x4 matrix value types
//! - **Pipeline**: moving a point between user-frame, world, and tool
//!   coordinate systems, plus Universal Gun Orientation normalization
//! - **Standoff**: projecting a signed distance along the tool's
//!   approach axis
//!
//! Everything here is pure computation; nothing touches the filesystem.

pub mod pipeline;
pub mod rotation;
pub mod standoff;

pub use pipeline::{
    frame_to_world, from_ugo, to_ugo, utool_to_world, world_to_frame, world_to_utool,
};
pub use rotation::{RotationMatrix, Transform4x4};
pub use standoff::change_standoff;
