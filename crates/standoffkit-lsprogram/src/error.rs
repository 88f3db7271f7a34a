//! Error types for LS program parsing and rewriting.

use std::io;
use thiserror::Error;

/// Errors that can occur while scanning or rewriting an LS program.
#[derive(Error, Debug)]
pub enum ProgramError {
    /// A point block does not have the expected 5-logical-line structure.
    #[error("Malformed point record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Two point blocks carry the same point number.
    #[error("Duplicate point number P[{0}]")]
    DuplicatePoint(u32),

    /// A point number referenced for rewriting is absent from the table.
    #[error("Point P[{0}] not present in the program")]
    PointNotFound(u32),

    /// The target booth requires an auxiliary axis but the point record
    /// carries no E1 value.
    #[error("Point P[{0}] has no E1 value but the target booth requires an auxiliary axis")]
    MissingAuxAxis(u32),

    /// I/O error reading or writing program files.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for LS program operations.
pub type ProgramResult<T> = Result<T, ProgramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_error_display() {
        let err = ProgramError::MalformedRecord {
            line: 14,
            reason: "missing position line".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed point record at line 14: missing position line"
        );

        let err = ProgramError::DuplicatePoint(3);
        assert_eq!(err.to_string(), "Duplicate point number P[3]");

        let err = ProgramError::PointNotFound(12);
        assert_eq!(err.to_string(), "Point P[12] not present in the program");
    }
}
