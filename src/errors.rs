// errors.rs
use std::fmt;

/// Errors the decision engine can raise on its own.
///
/// The core is pure, so there is almost nothing here: persistence and
/// network failures belong to the excluded data layer. The one genuine
/// failure mode is a reaction kind outside the closed enumeration, which is
/// a contract violation and fails fast rather than silently scoring as zero.
#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidReactionKind(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidReactionKind(kind) => {
                write!(f, "Invalid reaction kind: {kind}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
