//! Error types for the game session.

use thiserror::Error;

use koen_core::CoreError;
use koen_mechanics::MechError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session input.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input did not match any option of the current menu.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Too many invalid inputs in a row.
    #[error("too many invalid inputs in a row ({0})")]
    TooManyInvalidInputs(u32),

    /// The session has ended and accepts no more input.
    #[error("the session is over")]
    SessionOver,

    /// Entity operation error (e.g. not enough gold).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Combat resolution error.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}

impl SessionError {
    /// Returns true if the player can simply try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidChoice(_) | Self::Core(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_errors() {
        assert!(SessionError::InvalidChoice("9".to_string()).is_recoverable());
        assert!(
            SessionError::from(CoreError::InsufficientGold {
                needed: 50,
                available: 0
            })
            .is_recoverable()
        );
        assert!(!SessionError::SessionOver.is_recoverable());
        assert!(!SessionError::TooManyInvalidInputs(5).is_recoverable());
    }

    #[test]
    fn core_error_message_passes_through() {
        let err = SessionError::from(CoreError::InsufficientGold {
            needed: 70,
            available: 12,
        });
        assert_eq!(err.to_string(), "not enough koen: need 70, have 12");
    }
}
