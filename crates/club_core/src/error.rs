use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by the service and API plumbing around the pure core.
///
/// Catalog misses, dangling roster references and empty OCR results are
/// ordinary values in the core and never show up here.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Formation not found: {0}")]
    FormationNotFound(String),

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Position {position} does not exist in formation {formation}")]
    UnknownPosition { formation: String, position: String },

    #[error("Invalid formation {formation}: {reason}")]
    InvalidFormation { formation: String, reason: String },

    #[error("Member {member} is assigned to both {first} and {second}")]
    DuplicateAssignment { member: String, first: String, second: String },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// True when the caller can show a "not available" state instead of failing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::FormationNotFound(_)
                | CoreError::MatchNotFound(_)
                | CoreError::PlayerNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
