//! Error types for core entity operations.

/// Errors that can occur when mutating a player or enemy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The player cannot afford a purchase.
    #[error("not enough koen: need {needed}, have {available}")]
    InsufficientGold {
        /// Price of the purchase.
        needed: u32,
        /// Gold the player currently holds.
        available: u32,
    },
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
