use thiserror::Error;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Raised when a token can't be turned into one of the studio's fixed values.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("{0}: invalid studio location!")]
    UnknownLocation(String),
    #[error("{0} - class name does not exist.")]
    UnknownOffer(String),
    #[error("{0} - instructor does not exist.")]
    UnknownInstructor(String),
    #[error("{0} - time slot does not exist.")]
    UnknownTimeSlot(String),
    #[error("Invalid membership type. Expected B, F or P but got: {0}")]
    UnknownPlanCode(String),
    #[error("{0}: malformed date, expected mm/dd/yyyy.")]
    MalformedDate(String),
}
