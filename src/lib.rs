//! # Standoffkit
//!
//! Standoff distance adjustment for FANUC-style LS robot motion programs.
//! Point records are re-expressed through a chain of coordinate-frame
//! transforms so the adjustment is applied along the tool's working axis
//! rather than along raw machine axes, then written back with the
//! surrounding program text preserved verbatim.
//!
//! ## Architecture
//!
//! Standoffkit is organized as a workspace with multiple crates:
//!
//! 1. **standoffkit-core** - Shared data model and unit conversion
//! 2. **standoffkit-transform** - Rotation math, the tool/frame conversion
//!    pipeline, and the standoff adjuster
//! 3. **standoffkit-boothdb** - Booth tool/frame configuration tables
//! 4. **standoffkit-lsprogram** - LS program point record parsing and
//!    rewriting
//! 5. **standoffkit** - Conversion orchestrator and the CLI binary

pub mod convert;

pub use convert::{convert_points, run, ConversionRequest};

pub use standoffkit_boothdb as boothdb;
pub use standoffkit_lsprogram as lsprogram;
pub use standoffkit_transform as transform;

pub use standoffkit_core::{EulerAngles, PointTable, RigidOffset, TcpPoint};

/// Initialize the logging system with tracing.
///
/// Honors `RUST_LOG`-style filtering; defaults to INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
