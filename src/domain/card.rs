use crate::domain::list::ListId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a card (e.g., card_1, card_2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    const PREFIX: &'static str = "card_";

    /// Creates a new CardId from a counter
    pub fn new(counter: u32) -> Self {
        Self(counter)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::BoardError;

    /// Accepts both the element form (`card_3`) and a bare number (`3`),
    /// which is what a drag payload carries
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .strip_prefix(Self::PREFIX)
            .unwrap_or(normalized.as_str());

        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(crate::error::BoardError::InvalidCardId(s.to_string())),
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// A card on the board
///
/// `position` is an ordering hint relative to the owning list. Several cards
/// may share a position and moves never renumber siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub list_id: ListId,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(id: CardId, text: String, list_id: ListId, position: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            text,
            list_id,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassigns the owning list
    pub fn set_list(&mut self, list_id: ListId) {
        self.list_id = list_id;
        self.updated_at = Utc::now();
    }

    /// Overwrites the position hint
    pub fn set_position(&mut self, position: u32) {
        self.position = position;
        self.updated_at = Utc::now();
    }
}
