//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A round was requested for a player who is already down.
    #[error("{0} has no health left to fight with")]
    PlayerDown(String),

    /// A round was requested against an enemy that is already defeated.
    #[error("the {0} is already defeated")]
    EnemyDefeated(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
