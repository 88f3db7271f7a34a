//! Point record extraction from LS program text.
//!
//! A point block spans five logical lines: the `P[n] {` header (line 0),
//! the motion group header (line 1), the `UF`/`UT`/`CONFIG` metadata line
//! (line 2), the position line (line 3), and the orientation line (line
//! 4, optionally continued by a physical `E1` line on aux-axis booths),
//! followed by the `};` terminator. The scan threads an explicit state
//! value so the block structure is a verified invariant rather than an
//! incidentally-correct counter.

use regex::Regex;
use standoffkit_core::{PointTable, TcpPoint};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{ProgramError, ProgramResult};

/// Matches a point block header and captures the point number; the quoted
/// comment is optional.
pub(crate) fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r#"P\[(\d+)(\s?:\s?".*")?\]\s?\{"#).expect("invalid regex pattern")
    })
}

fn refs_regex() -> &'static Regex {
    static REFS: OnceLock<Regex> = OnceLock::new();
    REFS.get_or_init(|| {
        Regex::new(r"UF\s*:\s*(\d+)\s*,\s*UT\s*:\s*(\d+)").expect("invalid regex pattern")
    })
}

fn position_regex() -> &'static Regex {
    static POSITION: OnceLock<Regex> = OnceLock::new();
    POSITION.get_or_init(|| {
        Regex::new(
            r"X\s*=\s*([^\s,]+)\s+mm\s*,\s*Y\s*=\s*([^\s,]+)\s+mm\s*,\s*Z\s*=\s*([^\s,]+)\s+mm",
        )
        .expect("invalid regex pattern")
    })
}

fn orientation_regex() -> &'static Regex {
    static ORIENTATION: OnceLock<Regex> = OnceLock::new();
    ORIENTATION.get_or_init(|| {
        Regex::new(
            r"W\s*=\s*([^\s,]+)\s+deg\s*,\s*P\s*=\s*([^\s,]+)\s+deg\s*,\s*R\s*=\s*([^\s,]+)\s+deg",
        )
        .expect("invalid regex pattern")
    })
}

pub(crate) fn aux_regex() -> &'static Regex {
    static AUX: OnceLock<Regex> = OnceLock::new();
    AUX.get_or_init(|| Regex::new(r"E1\s*=\s*([^\s,]+)\s+deg").expect("invalid regex pattern"))
}

/// The block terminator statement.
pub(crate) const TERMINATOR: &str = "};";

/// Scanner state: outside any point block, or a given number of lines
/// into one.
enum ScanState {
    Outside,
    InPoint(Block),
}

struct Block {
    number: u32,
    line_index: u8,
    refs: Option<(u8, u8)>,
    position: Option<[f64; 3]>,
    orientation: Option<[f64; 3]>,
    e1: Option<f64>,
}

impl Block {
    fn new(number: u32) -> Self {
        Self {
            number,
            line_index: 0,
            refs: None,
            position: None,
            orientation: None,
            e1: None,
        }
    }

    fn finish(self, line: usize) -> ProgramResult<TcpPoint> {
        let (uf, ut) = self.refs.ok_or_else(|| malformed(line, "point block ended before its UF/UT line"))?;
        let [x, y, z] = self
            .position
            .ok_or_else(|| malformed(line, "point block ended before its position line"))?;
        let [w, p, r] = self
            .orientation
            .ok_or_else(|| malformed(line, "point block ended before its orientation line"))?;
        Ok(TcpPoint {
            x,
            y,
            z,
            w,
            p,
            r,
            ut,
            uf,
            e1: self.e1,
        })
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> ProgramError {
    ProgramError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}

fn parse_value(field: &str, text: &str, line: usize) -> ProgramResult<f64> {
    text.parse()
        .map_err(|_| malformed(line, format!("unreadable {} value '{}'", field, text)))
}

fn parse_index(field: &str, text: &str, line: usize) -> ProgramResult<u8> {
    text.parse()
        .map_err(|_| malformed(line, format!("{} index '{}' out of range", field, text)))
}

/// Parse the point number captured by [`header_regex`].
pub(crate) fn parse_point_number(text: &str, line: usize) -> ProgramResult<u32> {
    text.parse()
        .map_err(|_| malformed(line, format!("point number '{}' out of range", text)))
}

/// Scan LS program text and collect every point record, keyed by point
/// number.
pub fn parse_program(source: &str) -> ProgramResult<PointTable> {
    let mut table = PointTable::new();
    let mut state = ScanState::Outside;
    let mut line_number = 0;

    for (index, raw_line) in source.lines().enumerate() {
        line_number = index + 1;
        let line = raw_line.trim_end_matches('\r');

        state = match state {
            ScanState::Outside => match header_regex().captures(line) {
                Some(caps) => {
                    let number = parse_point_number(&caps[1], line_number)?;
                    if table.contains_key(&number) {
                        return Err(ProgramError::DuplicatePoint(number));
                    }
                    ScanState::InPoint(Block::new(number))
                }
                None => ScanState::Outside,
            },
            ScanState::InPoint(mut block) => {
                if line.trim() == TERMINATOR {
                    let number = block.number;
                    let point = block.finish(line_number)?;
                    table.insert(number, point);
                    ScanState::Outside
                } else {
                    block.line_index += 1;
                    match block.line_index {
                        // motion group header, not touched by this tool
                        1 => {}
                        2 => {
                            let caps = refs_regex().captures(line).ok_or_else(|| {
                                malformed(line_number, "expected UF/UT metadata line")
                            })?;
                            let uf = parse_index("UF", &caps[1], line_number)?;
                            let ut = parse_index("UT", &caps[2], line_number)?;
                            block.refs = Some((uf, ut));
                        }
                        3 => {
                            let caps = position_regex().captures(line).ok_or_else(|| {
                                malformed(line_number, "expected X/Y/Z position line")
                            })?;
                            block.position = Some([
                                parse_value("X", &caps[1], line_number)?,
                                parse_value("Y", &caps[2], line_number)?,
                                parse_value("Z", &caps[3], line_number)?,
                            ]);
                        }
                        4 => {
                            let caps = orientation_regex().captures(line).ok_or_else(|| {
                                malformed(line_number, "expected W/P/R orientation line")
                            })?;
                            block.orientation = Some([
                                parse_value("W", &caps[1], line_number)?,
                                parse_value("P", &caps[2], line_number)?,
                                parse_value("R", &caps[3], line_number)?,
                            ]);
                        }
                        _ => match aux_regex().captures(line) {
                            Some(caps) if block.e1.is_none() => {
                                block.e1 = Some(parse_value("E1", &caps[1], line_number)?);
                            }
                            _ => {
                                return Err(malformed(
                                    line_number,
                                    "unexpected line inside point block",
                                ));
                            }
                        },
                    }
                    ScanState::InPoint(block)
                }
            }
        };
    }

    if let ScanState::InPoint(block) = state {
        return Err(malformed(
            line_number,
            format!("point block P[{}] is never terminated", block.number),
        ));
    }

    tracing::debug!(points = table.len(), "parsed program");
    Ok(table)
}

/// Read and parse an LS program file.
pub fn read_program(path: &Path) -> ProgramResult<PointTable> {
    let source = fs::read_to_string(path)?;
    parse_program(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = "\
/PROG  INTEST
/ATTR
OWNER\t\t= MNEDITOR;
/MN
   1:J P[1] 100% FINE    ;
   2:L P[2] 2000mm/sec CONT100    ;
/POS
P[1:\"approach\"]{
   GP1:
\tUF : 1, UT : 2,\tCONFIG : 'N U T, 0, 0, 0',
\tX =   100.000  mm,\tY =   200.000  mm,\tZ =   300.000  mm,
\tW =     0.000 deg,\tP =     0.000 deg,\tR =     0.000 deg
};
P[2]{
   GP1:
\tUF : 1, UT : 2,\tCONFIG : 'N U T, 0, 0, 0',
\tX =  1500.250  mm,\tY =  -200.000  mm,\tZ =      .500  mm,
\tW =   180.000 deg,\tP =     -.250 deg,\tR =    90.000 deg,
\tE1=    10.000 deg
};
/END
";

    #[test]
    fn test_parse_program() {
        let table = parse_program(PROGRAM).unwrap();
        assert_eq!(table.len(), 2);

        let p1 = &table[&1];
        assert_eq!(p1.position(), [100.0, 200.0, 300.0]);
        assert_eq!(p1.uf, 1);
        assert_eq!(p1.ut, 2);
        assert_eq!(p1.e1, None);

        let p2 = &table[&2];
        assert_eq!(p2.position(), [1500.25, -200.0, 0.5]);
        assert_eq!(p2.w, 180.0);
        assert_eq!(p2.p, -0.25);
        assert_eq!(p2.r, 90.0);
        assert_eq!(p2.e1, Some(10.0));
    }

    #[test]
    fn test_motion_lines_are_not_headers() {
        // `P[1]` references in /MN motion statements carry no opening
        // brace and must not start a block.
        let table = parse_program(PROGRAM).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_point_number_rejected() {
        let doubled = PROGRAM.replace("P[2]{", "P[1]{");
        assert!(matches!(
            parse_program(&doubled),
            Err(ProgramError::DuplicatePoint(1))
        ));
    }

    #[test]
    fn test_missing_position_line_rejected() {
        let broken = PROGRAM.replace("\tX =   100.000  mm,\tY =   200.000  mm,\tZ =   300.000  mm,\n", "");
        let err = parse_program(&broken).unwrap_err();
        assert!(matches!(err, ProgramError::MalformedRecord { .. }));
    }

    #[test]
    fn test_unexpected_line_inside_block_rejected() {
        let broken = PROGRAM.replace(
            "\tE1=    10.000 deg\n",
            "\tE1=    10.000 deg\n\tE2=     1.000 deg\n",
        );
        let err = parse_program(&broken).unwrap_err();
        assert!(matches!(err, ProgramError::MalformedRecord { .. }));
    }

    #[test]
    fn test_unterminated_block_rejected() {
        let truncated = &PROGRAM[..PROGRAM.find("};").unwrap()];
        let err = parse_program(truncated).unwrap_err();
        assert!(matches!(err, ProgramError::MalformedRecord { .. }));
    }

    #[test]
    fn test_header_without_comment() {
        let table = parse_program(PROGRAM).unwrap();
        assert!(table.contains_key(&2));
    }
}
