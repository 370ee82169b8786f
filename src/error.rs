use crate::domain::{CardId, ListId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("List name must not be empty")]
    EmptyListName,

    #[error("Card text must not be empty")]
    EmptyCardText,

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Invalid list ID format: {0}")]
    InvalidListId(String),

    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("Invalid sort: {0}")]
    InvalidSort(String),

    #[error("Board session is closed")]
    SessionClosed,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BoardError {
    /// True for input that was rejected before touching the board
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyListName | Self::EmptyCardText)
    }

    /// True when an operation referenced a list or card that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::CardNotFound(_))
    }
}
