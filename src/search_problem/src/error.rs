use thiserror::Error;

/// Contract violations detected by a problem formulation.
///
/// None of these describe a legitimate runtime condition: they are raised as
/// close to the violation as possible and handed straight back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("Invalid state: {detail}")]
    InvalidState { detail: String },
    #[error("Invalid action: {symbol:?}")]
    InvalidAction { symbol: String },
    #[error("Moving {action} from ({row}, {column}) leaves the board")]
    OutOfBounds {
        action: String,
        row: usize,
        column: usize,
    },
    #[error("{name} out of range, expected a value between 1 and 8 but got {value}")]
    RangeError { name: &'static str, value: u8 },
    #[error("Invalid state length, expected {expected} but got {actual}")]
    LengthError { expected: usize, actual: usize },
}
