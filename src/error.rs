//! Error types for town sessions.

use thiserror::Error;

/// Errors raised by misuse of the town API.
///
/// Both variants are programmer errors: they are reported straight back to the
/// caller and the session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TownError {
    /// A value handed to a constructor was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An operation was invoked while the session was in the wrong state.
    #[error("cannot {operation}: town is {actual}, expected {expected}")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the operation requires.
        expected: VisitState,
        /// The state the session was actually in.
        actual: VisitState,
    },
}

/// Coarse visit state, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// No hunter is in town.
    Empty,
    /// A hunter is in town.
    Occupied,
}

impl std::fmt::Display for VisitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitState::Empty => write!(f, "empty"),
            VisitState::Occupied => write!(f, "occupied"),
        }
    }
}

/// Result type for town operations.
pub type TownResult<T> = Result<T, TownError>;
