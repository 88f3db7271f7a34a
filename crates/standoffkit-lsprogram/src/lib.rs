//! # Standoffkit LS Program
//!
//! Line-oriented parsing and rewriting of LS motion program text. Point
//! position records are located with a small state machine, their numeric
//! fields extracted or replaced in place, and every other line reproduced
//! verbatim. The writer emits exactly the numeric formatting the parser
//! accepts, so a parse-then-write pass over a canonically formatted
//! program is byte-identical apart from the program-name declaration.

pub mod error;
pub mod format;
pub mod parser;
pub mod writer;

pub use error::{ProgramError, ProgramResult};
pub use format::format_coord;
pub use parser::{parse_program, read_program};
pub use writer::{render_program, write_program, WriteOptions};
