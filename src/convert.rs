//! Conversion orchestrator.
//!
//! Sequences the parser, the transform pipeline, the standoff adjuster,
//! and the writer for a caller-selected subset of points. Each converted
//! point makes a closed round trip through world space (original frame
//! and tool out, nozzle tool in, standoff change in UGO angles, and back)
//! so downstream consumers of the program see no representational change
//! other than position/orientation values.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use standoffkit_boothdb::{BoothConfigProvider, BoothId, BoothSetup};
use standoffkit_core::PointTable;
use standoffkit_lsprogram::{parse_program, render_program, ProgramError, WriteOptions};
use standoffkit_transform::{
    change_standoff, frame_to_world, from_ugo, to_ugo, utool_to_world, world_to_frame,
    world_to_utool,
};

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Source LS program file.
    pub input: PathBuf,
    /// Destination LS program file; also names the output program.
    pub output: PathBuf,
    /// Booth whose tool/frame tables apply.
    pub booth: BoothId,
    /// Point numbers to adjust.
    pub points: Vec<u32>,
    /// Standoff change in inches; positive moves the gun away from the
    /// part, negative moves it closer.
    pub standoff_delta_in: f64,
}

/// Apply the standoff change to the requested points of a table.
///
/// Untouched point numbers pass through unchanged. The complete output
/// table is built before returning; any failure propagates with nothing
/// partially applied downstream.
pub fn convert_points(
    table: &PointTable,
    point_numbers: &[u32],
    setup: &BoothSetup,
    provider: &dyn BoothConfigProvider,
    booth: &BoothId,
    delta_inches: f64,
) -> Result<PointTable> {
    let mut converted = table.clone();
    for &number in point_numbers {
        let point = table
            .get(&number)
            .ok_or(ProgramError::PointNotFound(number))?;
        let utool = provider.utool(booth, point.ut)?;
        let uframe = provider.uframe(booth, point.uf)?;
        debug!(point = number, ut = point.ut, uf = point.uf, "converting point");

        // Original frame and tool out to world space, then into the
        // nozzle tool and UGO angles where the standoff axis is local Z.
        let world = utool_to_world(&frame_to_world(point, &uframe), &utool);
        let nozzle = world_to_utool(&world, &setup.nozzle_utool);
        let adjusted = change_standoff(&to_ugo(&nozzle, &setup.ugo_reference), delta_inches);

        // And back: faceplate angles, original tool, original frame.
        let back = utool_to_world(&from_ugo(&adjusted, &setup.ugo_reference), &setup.nozzle_utool);
        let restored = world_to_frame(&world_to_utool(&back, &utool), &uframe);
        converted.insert(number, restored);
    }
    Ok(converted)
}

/// Run a full conversion: read, convert, write.
pub fn run(request: &ConversionRequest, provider: &dyn BoothConfigProvider) -> Result<()> {
    let setup = provider.setup(&request.booth)?;
    info!(
        booth = %request.booth,
        config = %setup.config_tag,
        points = ?request.points,
        delta_in = request.standoff_delta_in,
        "adjusting standoff"
    );

    let source = fs::read_to_string(&request.input)
        .with_context(|| format!("failed to read {}", request.input.display()))?;
    let table = parse_program(&source)?;
    let converted = convert_points(
        &table,
        &request.points,
        &setup,
        provider,
        &request.booth,
        request.standoff_delta_in,
    )?;

    let options = WriteOptions::for_output_path(&request.output, setup.has_aux_axis)?;
    let rendered = render_program(&source, &converted, &options)?;
    fs::write(&request.output, rendered)
        .with_context(|| format!("failed to write {}", request.output.display()))?;
    Ok(())
}
