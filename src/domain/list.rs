use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a list (e.g., list_1, list_2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u32);

impl ListId {
    const PREFIX: &'static str = "list_";

    /// Creates a new ListId from a counter
    pub fn new(counter: u32) -> Self {
        Self(counter)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for ListId {
    type Err = crate::error::BoardError;

    /// Accepts both the element form (`list_3`) and a bare number (`3`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .strip_prefix(Self::PREFIX)
            .unwrap_or(normalized.as_str());

        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(crate::error::BoardError::InvalidListId(s.to_string())),
        }
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// A named column on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub card_count: usize,
    pub created_at: DateTime<Utc>,
}

impl List {
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            card_count: 0,
            created_at: Utc::now(),
        }
    }
}
