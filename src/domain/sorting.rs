use crate::{domain::card::Card, error::BoardError};
use std::str::FromStr;

/// Fields available for sorting cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Text,
    Position,
    Created,
    Updated,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "text" => Ok(Self::Text),
            "position" | "pos" => Ok(Self::Position),
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            _ => Err(BoardError::InvalidSort(format!(
                "unknown field '{}' (id, text, position, created, updated)",
                s
            ))),
        }
    }
}

impl FromStr for SortOrder {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(BoardError::InvalidSort(format!(
                "unknown order '{}' (asc, desc)",
                s
            ))),
        }
    }
}

/// Sorts cards in-place by the given field and order
///
/// Positions are hints and may repeat, so every field falls back to the card
/// id to keep the result deterministic.
///
/// # Examples
/// ```
/// use tinyboard_core::domain::card::{Card, CardId};
/// use tinyboard_core::domain::list::ListId;
/// use tinyboard_core::domain::sorting::{sort_cards, SortField, SortOrder};
///
/// let mut cards = vec![
///     Card::new(CardId::new(2), "B".to_string(), ListId::new(1), 1),
///     Card::new(CardId::new(1), "A".to_string(), ListId::new(1), 1),
/// ];
///
/// sort_cards(&mut cards, SortField::Position, SortOrder::Ascending);
/// assert_eq!(cards[0].id, CardId::new(1));
/// ```
pub fn sort_cards(cards: &mut [Card], field: SortField, order: SortOrder) {
    cards.sort_by(|a, b| {
        let cmp = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Text => a.text.to_lowercase().cmp(&b.text.to_lowercase()),
            SortField::Position => a.position.cmp(&b.position),
            SortField::Created => a.created_at.cmp(&b.created_at),
            SortField::Updated => a.updated_at.cmp(&b.updated_at),
        }
        .then_with(|| a.id.cmp(&b.id));

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardId;
    use crate::domain::list::ListId;

    fn card(id: u32, text: &str, position: u32) -> Card {
        Card::new(CardId::new(id), text.to_string(), ListId::new(1), position)
    }

    #[test]
    fn test_sort_cards_by_id_descending() {
        let mut cards = vec![card(1, "A", 1), card(3, "C", 3), card(2, "B", 2)];

        sort_cards(&mut cards, SortField::Id, SortOrder::Descending);

        let ids: Vec<u32> = cards.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_cards_by_text_case_insensitive() {
        let mut cards = vec![card(1, "zebra", 1), card(2, "Apple", 2), card(3, "BANANA", 3)];

        sort_cards(&mut cards, SortField::Text, SortOrder::Ascending);

        assert_eq!(cards[0].text, "Apple");
        assert_eq!(cards[1].text, "BANANA");
        assert_eq!(cards[2].text, "zebra");
    }

    #[test]
    fn test_sort_by_position_with_shared_positions() {
        // Card 3 was inserted at position 2 while Card 2 already held it
        let mut cards = vec![
            card(4, "Card 4", 4),
            card(3, "Card 3", 2),
            card(2, "Card 2", 2),
            card(1, "Card 1", 1),
        ];

        sort_cards(&mut cards, SortField::Position, SortOrder::Ascending);

        let ids: Vec<u32> = cards.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("Position".parse::<SortField>().unwrap(), SortField::Position);
        assert_eq!("pos".parse::<SortField>().unwrap(), SortField::Position);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!(" Ascending ".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert!(matches!("title".parse::<SortField>(), Err(BoardError::InvalidSort(_))));
        assert!("up".parse::<SortOrder>().is_err());
    }
}
