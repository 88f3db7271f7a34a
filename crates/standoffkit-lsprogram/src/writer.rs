//! LS program rewriting.
//!
//! The writer runs the same line-oriented state machine as the parser over
//! the original source text: point position and orientation lines are
//! replaced with freshly formatted ones from the point table, the program
//! declaration is renamed after the output file, and every other line is
//! reproduced verbatim.

use standoffkit_core::{PointTable, TcpPoint};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ProgramError, ProgramResult};
use crate::format::format_coord;
use crate::parser::{aux_regex, header_regex, parse_point_number, TERMINATOR};

/// Token introducing the program-name declaration line.
const PROGRAM_DECLARATION: &str = "/PROG";

/// Output naming and formatting choices for a rewrite pass.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Program name for the `/PROG` declaration line.
    pub program_name: String,
    /// Whether orientation lines carry an `E1` auxiliary-axis field.
    pub with_aux_axis: bool,
}

impl WriteOptions {
    /// Derive options from the output file path: the program is named
    /// after the file's base name minus its extension.
    pub fn for_output_path(path: &Path, with_aux_axis: bool) -> ProgramResult<Self> {
        let program_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ProgramError::IoError(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("output path has no file name: {}", path.display()),
                ))
            })?;
        Ok(Self {
            program_name,
            with_aux_axis,
        })
    }
}

enum WriteState {
    Outside,
    InPoint { number: u32, line_index: u8 },
}

fn format_position_line(point: &TcpPoint) -> String {
    format!(
        "\tX = {:>9}  mm,\tY = {:>9}  mm,\tZ = {:>9}  mm,\n",
        format_coord(point.x),
        format_coord(point.y),
        format_coord(point.z)
    )
}

fn format_orientation_line(
    point: &TcpPoint,
    number: u32,
    with_aux_axis: bool,
) -> ProgramResult<String> {
    let mut line = format!(
        "\tW = {:>9} deg,\tP = {:>9} deg,\tR = {:>9} deg",
        format_coord(point.w),
        format_coord(point.p),
        format_coord(point.r)
    );
    if with_aux_axis {
        let e1 = point.e1.ok_or(ProgramError::MissingAuxAxis(number))?;
        line.push_str(&format!(",\n\tE1= {:>9} deg\n", format_coord(e1)));
    } else {
        line.push('\n');
    }
    Ok(line)
}

/// Rewrite LS program text against a point table.
///
/// Every point block present in the source is reformatted from the table;
/// a header whose point number is absent from the table is an error. Lines
/// outside point blocks pass through untouched except the `/PROG`
/// declaration.
pub fn render_program(
    source: &str,
    points: &PointTable,
    options: &WriteOptions,
) -> ProgramResult<String> {
    let mut output = String::with_capacity(source.len());
    let mut state = WriteState::Outside;
    let mut line_number = 0;

    for (index, raw_line) in source.split_inclusive('\n').enumerate() {
        line_number = index + 1;
        let content = raw_line.trim_end_matches(['\r', '\n']);

        state = match state {
            WriteState::Outside => match header_regex().captures(content) {
                Some(caps) => {
                    let number = parse_point_number(&caps[1], line_number)?;
                    if !points.contains_key(&number) {
                        return Err(ProgramError::PointNotFound(number));
                    }
                    output.push_str(raw_line);
                    WriteState::InPoint {
                        number,
                        line_index: 0,
                    }
                }
                None => {
                    if content.starts_with(PROGRAM_DECLARATION) {
                        output.push_str(PROGRAM_DECLARATION);
                        output.push_str("  ");
                        output.push_str(&options.program_name);
                        output.push('\n');
                    } else {
                        output.push_str(raw_line);
                    }
                    WriteState::Outside
                }
            },
            WriteState::InPoint { number, line_index } => {
                if content.trim() == TERMINATOR {
                    output.push_str(raw_line);
                    WriteState::Outside
                } else {
                    let point = &points[&number];
                    let next = line_index.saturating_add(1);
                    match next {
                        // group header and UF/UT metadata pass through
                        1 | 2 => output.push_str(raw_line),
                        3 => output.push_str(&format_position_line(point)),
                        4 => output.push_str(&format_orientation_line(
                            point,
                            number,
                            options.with_aux_axis,
                        )?),
                        // the original E1 line was consumed by the
                        // orientation rewrite; anything else is malformed
                        _ => {
                            if !aux_regex().is_match(content) {
                                return Err(ProgramError::MalformedRecord {
                                    line: line_number,
                                    reason: "unexpected line inside point block".to_string(),
                                });
                            }
                        }
                    }
                    WriteState::InPoint {
                        number,
                        line_index: next,
                    }
                }
            }
        };
    }

    if let WriteState::InPoint { number, .. } = state {
        return Err(ProgramError::MalformedRecord {
            line: line_number,
            reason: format!("point block P[{}] is never terminated", number),
        });
    }

    Ok(output)
}

/// Copy an LS program from `input` to `output`, reformatting point records
/// from `points` and renaming the program after the output file.
pub fn write_program(
    input: &Path,
    output: &Path,
    points: &PointTable,
    with_aux_axis: bool,
) -> ProgramResult<()> {
    let source = fs::read_to_string(input)?;
    let options = WriteOptions::for_output_path(output, with_aux_axis)?;
    let rendered = render_program(&source, points, &options)?;
    fs::write(output, rendered)?;
    tracing::debug!(program = %options.program_name, "wrote program");
    Ok(())
}
