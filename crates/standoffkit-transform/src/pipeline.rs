//! Coordinate system conversion pipeline.
//!
//! Moves a TCP point between user-frame, world, and tool coordinate
//! systems, and normalizes orientations against a booth's Universal Gun
//! Orientation reference. Each operation takes a point and a descriptor
//! and returns a new point; inputs are never mutated. The pairs
//! `frame_to_world`/`world_to_frame`, `utool_to_world`/`world_to_utool`,
//! and `to_ugo`/`from_ugo` are mutual inverses up to floating-point
//! tolerance.

use standoffkit_core::{EulerAngles, RigidOffset, TcpPoint};

use crate::rotation::{RotationMatrix, Transform4x4};

/// Convert a UFrame point to a world frame point.
///
/// Position is rotated and translated by the frame's transform; orientation
/// composes the frame rotation outside the point rotation.
pub fn frame_to_world(point: &TcpPoint, frame: &RigidOffset) -> TcpPoint {
    let frame_rot = RotationMatrix::from_euler(frame.orientation());
    let to_world = Transform4x4::from_parts(&frame_rot, frame.translation());
    let position = to_world.apply(point.position());

    let point_rot = RotationMatrix::from_euler(point.orientation());
    let orientation = frame_rot.compose(&point_rot).to_euler();

    point.with_position(position).with_orientation(orientation)
}

/// Convert a world frame point to a UFrame point. Inverse of
/// [`frame_to_world`]: translate by the negated frame offset, then rotate
/// by the inverted frame rotation.
pub fn world_to_frame(point: &TcpPoint, frame: &RigidOffset) -> TcpPoint {
    let frame_inv = RotationMatrix::from_euler(frame.orientation()).inverse();
    let [tx, ty, tz] = frame.translation();
    let to_frame =
        Transform4x4::from_rotation(&frame_inv).multiply(&Transform4x4::translation([-tx, -ty, -tz]));
    let position = to_frame.apply(point.position());

    let point_rot = RotationMatrix::from_euler(point.orientation());
    let orientation = frame_inv.compose(&point_rot).to_euler();

    point.with_position(position).with_orientation(orientation)
}

/// Convert a world frame point to a UTool point.
///
/// The tool offset is carried into the point's local frame (rotated by the
/// point's own orientation and translated to its position), and the
/// orientations compose forward.
pub fn world_to_utool(point: &TcpPoint, tool: &RigidOffset) -> TcpPoint {
    let point_rot = RotationMatrix::from_euler(point.orientation());
    let local = Transform4x4::from_parts(&point_rot, point.position());
    let position = local.apply(tool.translation());

    let tool_rot = RotationMatrix::from_euler(tool.orientation());
    let orientation = point_rot.compose(&tool_rot).to_euler();

    point.with_position(position).with_orientation(orientation)
}

/// Convert a UTool point back to a world coordinate point. Inverse of
/// [`world_to_utool`].
///
/// Orientation is corrected first by composing with the inverse of the
/// tool's rotation; the corrected rotation then carries the negated tool
/// offset back out, recovering the world pose of the tool's mounting
/// point.
pub fn utool_to_world(point: &TcpPoint, tool: &RigidOffset) -> TcpPoint {
    let point_rot = RotationMatrix::from_euler(point.orientation());
    let tool_inv = RotationMatrix::from_euler(tool.orientation()).inverse();
    let corrected = point_rot.compose(&tool_inv);
    let orientation = corrected.to_euler();

    let [tx, ty, tz] = tool.translation();
    let unwind = Transform4x4::from_parts(
        &RotationMatrix::from_euler(orientation),
        point.position(),
    );
    let position = unwind.apply([-tx, -ty, -tz]);

    point.with_position(position).with_orientation(orientation)
}

/// Normalize a point's orientation to Universal Gun Orientation angles by
/// composing the booth's reference rotation inside the point's rotation.
/// In UGO angles the standoff axis is a fixed local axis regardless of
/// which physical tool produced the point.
pub fn to_ugo(point: &TcpPoint, reference: &EulerAngles) -> TcpPoint {
    let rot = RotationMatrix::from_euler(point.orientation())
        .compose(&RotationMatrix::from_euler(*reference));
    point.with_orientation(rot.to_euler())
}

/// Convert UGO angles back to faceplate angles. Inverse of [`to_ugo`].
pub fn from_ugo(point: &TcpPoint, reference: &EulerAngles) -> TcpPoint {
    let rot = RotationMatrix::from_euler(point.orientation())
        .compose(&RotationMatrix::from_euler(*reference).inverse());
    point.with_orientation(rot.to_euler())
}
