//! Error types for rust-minimax.
//!
//! Every failure here is a usage error surfaced straight to the caller.
//! Searches never retry and never return partial results.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A search was started from a position with no legal moves.
    #[error("cannot search a terminal position: {state}")]
    TerminalPosition { state: String },

    /// A move outside the legal set, or text that does not name a move.
    #[error("invalid move '{mv}' in position {state}")]
    InvalidMove { mv: String, state: String },

    /// Game construction parameters out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Build an [`Error::InvalidMove`] from anything debug-printable.
    pub fn invalid_move(mv: impl std::fmt::Debug, state: impl std::fmt::Debug) -> Self {
        Error::InvalidMove {
            mv: format!("{mv:?}"),
            state: format!("{state:?}"),
        }
    }

    /// Build an [`Error::TerminalPosition`] for a state.
    pub fn terminal(state: impl std::fmt::Debug) -> Self {
        Error::TerminalPosition {
            state: format!("{state:?}"),
        }
    }
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_move("zz", 7u32);
        assert_eq!(err.to_string(), "invalid move '\"zz\"' in position 7");

        let err = Error::InvalidConfig {
            message: "side length must be 1-5".into(),
        };
        assert_eq!(err.to_string(), "invalid configuration: side length must be 1-5");
    }

    #[test]
    fn test_terminal_error() {
        let err = Error::terminal(0u32);
        assert!(matches!(err, Error::TerminalPosition { ref state } if state == "0"));
    }
}
