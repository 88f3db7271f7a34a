//! TCP point records and rigid offset descriptors.
//!
//! A point's orientation is expressed in the vendor's W-P-R convention:
//! W is roll about X, P is pitch about Y, R is yaw about Z, all in degrees.
//! Positions and offsets are in millimeters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An orientation triple in the W-P-R convention (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Roll about X (degrees)
    pub w: f64,
    /// Pitch about Y (degrees)
    pub p: f64,
    /// Yaw about Z (degrees)
    pub r: f64,
}

impl EulerAngles {
    /// Create an orientation from its W/P/R components.
    pub fn new(w: f64, p: f64, r: f64) -> Self {
        Self { w, p, r }
    }
}

/// A rigid transform describing a UFrame or UTool setpoint relative to
/// its parent: world for frames, the frame of reference for tools.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RigidOffset {
    /// X offset (mm)
    pub x: f64,
    /// Y offset (mm)
    pub y: f64,
    /// Z offset (mm)
    pub z: f64,
    /// Roll about X (degrees)
    pub w: f64,
    /// Pitch about Y (degrees)
    pub p: f64,
    /// Yaw about Z (degrees)
    pub r: f64,
}

impl RigidOffset {
    /// Create an offset from its six components.
    pub fn new(x: f64, y: f64, z: f64, w: f64, p: f64, r: f64) -> Self {
        Self { x, y, z, w, p, r }
    }

    /// The translational part of the offset.
    pub fn translation(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The rotational part of the offset.
    pub fn orientation(&self) -> EulerAngles {
        EulerAngles::new(self.w, self.p, self.r)
    }
}

/// A single TCP point record from a motion program.
///
/// Operations on points follow value semantics: a transform returns a new
/// point and never mutates its input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TcpPoint {
    /// X position (mm)
    pub x: f64,
    /// Y position (mm)
    pub y: f64,
    /// Z position (mm)
    pub z: f64,
    /// Roll about X (degrees)
    pub w: f64,
    /// Pitch about Y (degrees)
    pub p: f64,
    /// Yaw about Z (degrees)
    pub r: f64,
    /// UTool index in use
    pub ut: u8,
    /// UFrame index in use
    pub uf: u8,
    /// Auxiliary rotary axis (degrees), present only on booths with one
    pub e1: Option<f64>,
}

impl TcpPoint {
    /// The point's position as a 3-vector.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The point's orientation triple.
    pub fn orientation(&self) -> EulerAngles {
        EulerAngles::new(self.w, self.p, self.r)
    }

    /// Copy of this point with a new position.
    pub fn with_position(mut self, position: [f64; 3]) -> Self {
        self.x = position[0];
        self.y = position[1];
        self.z = position[2];
        self
    }

    /// Copy of this point with a new orientation.
    pub fn with_orientation(mut self, orientation: EulerAngles) -> Self {
        self.w = orientation.w;
        self.p = orientation.p;
        self.r = orientation.r;
        self
    }
}

/// All point records of a program, keyed by point number.
///
/// Point numbers are unique within a program; the parser enforces this.
pub type PointTable = BTreeMap<u32, TcpPoint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_position_leaves_other_fields() {
        let point = TcpPoint {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            w: 10.0,
            p: 20.0,
            r: 30.0,
            ut: 2,
            uf: 1,
            e1: Some(5.0),
        };

        let moved = point.with_position([7.0, 8.0, 9.0]);
        assert_eq!(moved.position(), [7.0, 8.0, 9.0]);
        assert_eq!(moved.orientation(), point.orientation());
        assert_eq!(moved.ut, 2);
        assert_eq!(moved.uf, 1);
        assert_eq!(moved.e1, Some(5.0));
        // original untouched
        assert_eq!(point.position(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rigid_offset_parts() {
        let offset = RigidOffset::new(10.0, -20.0, 30.0, 0.0, 90.0, 180.0);
        assert_eq!(offset.translation(), [10.0, -20.0, 30.0]);
        assert_eq!(offset.orientation(), EulerAngles::new(0.0, 90.0, 180.0));
    }
}
