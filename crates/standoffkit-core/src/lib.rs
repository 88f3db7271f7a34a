//! # Standoffkit Core
//!
//! Core data model and utilities shared by the Standoffkit crates:
//! TCP point records, rigid tool/frame offsets, Euler angle triples,
//! and metric/imperial unit conversion.

pub mod pose;
pub mod units;

pub use pose::{EulerAngles, PointTable, RigidOffset, TcpPoint};
pub use units::{inches_to_mm, mm_to_inches, MM_PER_INCH};
