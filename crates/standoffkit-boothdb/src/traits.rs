//! The provider seam between the conversion core and booth configuration.

use standoffkit_core::RigidOffset;

use crate::error::BoothResult;
use crate::model::{BoothId, BoothSetup};

/// Pure lookup of booth-specific configuration.
///
/// The conversion core never reads booth data directly; it resolves tools
/// and frames through this trait so the backing store stays swappable.
/// No caching or retry behavior is required of implementations.
pub trait BoothConfigProvider {
    /// The booth's nozzle tool, UGO reference, config tag, and aux-axis
    /// capability.
    fn setup(&self, booth: &BoothId) -> BoothResult<BoothSetup>;

    /// The booth's UTool setpoint at `index`.
    fn utool(&self, booth: &BoothId, index: u8) -> BoothResult<RigidOffset>;

    /// The booth's UFrame setpoint at `index`.
    fn uframe(&self, booth: &BoothId, index: u8) -> BoothResult<RigidOffset>;
}
