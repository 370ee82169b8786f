use crate::{
    domain::{
        card::{Card, CardId},
        list::{List, ListId},
        sorting::{sort_cards, SortField, SortOrder},
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A card created when the board is built from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCard {
    pub text: String,
    /// 1-based list number
    pub list: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl SeedCard {
    pub fn new(text: impl Into<String>, list: u32) -> Self {
        Self {
            text: text.into(),
            list,
            position: None,
        }
    }

    pub fn at_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }
}

/// A move replayed after the seed cards are in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMove {
    /// 1-based card number, in seed order
    pub card: u32,
    pub list: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub lists: Vec<String>,
    /// Target of the "add card" form when no list is given
    #[serde(default = "BoardConfig::default_list_id")]
    pub default_list: ListId,
    #[serde(default)]
    pub seed_cards: Vec<SeedCard>,
    #[serde(default)]
    pub seed_moves: Vec<SeedMove>,
}

impl BoardConfig {
    fn default_list_id() -> ListId {
        ListId::new(1)
    }

    /// The demo board: three lists with four cards in the first one,
    /// then Card 2 re-positioned to 3 within its list
    pub fn demo() -> Self {
        Self {
            seed_cards: vec![
                SeedCard::new("Card 1", 1),
                SeedCard::new("Card 2", 1),
                SeedCard::new("Card 3", 1).at_position(2),
                SeedCard::new("Card 4", 1),
            ],
            seed_moves: vec![SeedMove {
                card: 2,
                list: 1,
                position: Some(3),
            }],
            ..Self::default()
        }
    }

    /// Parses and validates a JSON board configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks list names and list references
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.lists.iter().position(|n| n.trim().is_empty()) {
            return Err(BoardError::ConfigError(format!(
                "list {} has an empty name",
                index + 1
            )));
        }

        let list_count = self.lists.len() as u32;
        if self.default_list.value() == 0 || self.default_list.value() > list_count {
            return Err(BoardError::ConfigError(format!(
                "default list {} does not exist",
                self.default_list
            )));
        }

        for seed in &self.seed_cards {
            if seed.list == 0 || seed.list > list_count {
                return Err(BoardError::ConfigError(format!(
                    "seed card '{}' references missing list {}",
                    seed.text, seed.list
                )));
            }
            if seed.text.trim().is_empty() {
                return Err(BoardError::ConfigError(
                    "seed card has empty text".to_string(),
                ));
            }
        }

        let card_count = self.seed_cards.len() as u32;
        for mv in &self.seed_moves {
            if mv.card == 0 || mv.card > card_count {
                return Err(BoardError::ConfigError(format!(
                    "seed move references missing card {}",
                    mv.card
                )));
            }
            if mv.list == 0 || mv.list > list_count {
                return Err(BoardError::ConfigError(format!(
                    "seed move for card {} references missing list {}",
                    mv.card, mv.list
                )));
            }
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            lists: vec![
                "Todo".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
            default_list: Self::default_list_id(),
            seed_cards: Vec::new(),
            seed_moves: Vec::new(),
        }
    }
}

/// Counter values last pushed to the display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayedCounts {
    pub total: usize,
    pub lists: BTreeMap<ListId, usize>,
}

impl DisplayedCounts {
    pub fn for_list(&self, id: ListId) -> Option<usize> {
        self.lists.get(&id).copied()
    }
}

/// Result of a successful move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub card: CardId,
    pub from: ListId,
    pub to: ListId,
}

impl MoveOutcome {
    pub fn list_changed(&self) -> bool {
        self.from != self.to
    }
}

/// Render-facing view of one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub id: ListId,
    pub name: String,
    pub card_count: usize,
}

/// Render-facing view of one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub text: String,
    pub list_id: ListId,
    pub position: u32,
}

/// Everything the presentation layer needs to draw the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub name: String,
    pub lists: Vec<ListView>,
    pub cards: Vec<CardView>,
    pub total_cards: usize,
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn list(&self, id: ListId) -> Option<&ListView> {
        self.lists.iter().find(|l| l.id == id)
    }
}

/// Kanban board state
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    lists: Vec<List>,
    cards: Vec<Card>,
    next_list_number: u32,
    next_card_number: u32,
    displayed: DisplayedCounts,
}

impl Board {
    /// Builds a board from configuration
    ///
    /// Invalid list names, seed cards or seed moves are skipped with a
    /// warning rather than failing the whole board. Use
    /// [`BoardConfig::validate`] to reject them up front.
    pub fn new(config: BoardConfig) -> Self {
        let mut board = Self {
            config: config.clone(),
            lists: Vec::new(),
            cards: Vec::new(),
            next_list_number: 1,
            next_card_number: 1,
            displayed: DisplayedCounts::default(),
        };

        for name in &config.lists {
            if let Err(err) = board.create_list(name) {
                warn!(name = %name, error = %err, "Skipping configured list");
            }
        }

        for seed in &config.seed_cards {
            if let Err(err) = board.create_card(&seed.text, ListId::new(seed.list), seed.position) {
                warn!(text = %seed.text, error = %err, "Skipping seed card");
            }
        }

        for mv in &config.seed_moves {
            let card = CardId::new(mv.card);
            if let Err(err) = board.move_card(card, ListId::new(mv.list), mv.position) {
                warn!(card = %card, error = %err, "Skipping seed move");
            }
        }

        board.refresh_counters();
        board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Creates a list from a trimmed, non-empty name
    pub fn create_list(&mut self, name: &str) -> Result<&List> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::EmptyListName);
        }

        let id = ListId::new(self.next_list_number);
        self.next_list_number += 1;

        debug!(list = %id, name, "Created list");
        self.lists.push(List::new(id, name.to_string()));
        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Creates a card in an existing list
    ///
    /// Without a position the card is appended after the list's current
    /// cards. Displayed counters are left alone; call
    /// [`Board::refresh_counters`] once a batch of cards is in.
    pub fn create_card(
        &mut self,
        text: &str,
        list_id: ListId,
        position: Option<u32>,
    ) -> Result<&Card> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyCardText);
        }

        let list = self
            .lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or(BoardError::ListNotFound(list_id))?;

        let position = position.unwrap_or(list.card_count as u32 + 1);
        list.card_count += 1;

        let id = CardId::new(self.next_card_number);
        self.next_card_number += 1;

        debug!(card = %id, list = %list_id, position, "Created card");
        self.cards.push(Card::new(id, text.to_string(), list_id, position));
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Form entry point for new cards
    ///
    /// Falls back to the configured default list and refreshes the displayed
    /// counters unless `refresh` is false.
    pub fn add_card(
        &mut self,
        text: &str,
        list_id: Option<ListId>,
        position: Option<u32>,
        refresh: bool,
    ) -> Result<CardId> {
        let list_id = list_id.unwrap_or(self.config.default_list);
        let id = self.create_card(text, list_id, position)?.id;
        if refresh {
            self.refresh_counters();
        }
        Ok(id)
    }

    pub fn find_list(&self, id: ListId) -> Option<&List> {
        self.find_list_by(|l| l.id == id)
    }

    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.find_card_by(|c| c.id == id)
    }

    pub fn find_list_by<P>(&self, predicate: P) -> Option<&List>
    where
        P: Fn(&List) -> bool,
    {
        self.lists.iter().find(|l| predicate(l))
    }

    pub fn find_card_by<P>(&self, predicate: P) -> Option<&Card>
    where
        P: Fn(&Card) -> bool,
    {
        self.cards.iter().find(|c| predicate(c))
    }

    /// Moves a card to another list, or updates its position within the same list
    ///
    /// Both ids are checked before anything changes. A given position
    /// overwrites the card's hint as is; siblings are never renumbered.
    pub fn move_card(
        &mut self,
        card_id: CardId,
        new_list_id: ListId,
        position: Option<u32>,
    ) -> Result<MoveOutcome> {
        let card_index = self
            .cards
            .iter()
            .position(|c| c.id == card_id)
            .ok_or(BoardError::CardNotFound(card_id))?;
        let new_list_index = self
            .lists
            .iter()
            .position(|l| l.id == new_list_id)
            .ok_or(BoardError::ListNotFound(new_list_id))?;

        let old_list_id = self.cards[card_index].list_id;

        if old_list_id != new_list_id {
            if let Some(old_list) = self.lists.iter_mut().find(|l| l.id == old_list_id) {
                old_list.card_count = old_list.card_count.saturating_sub(1);
            }
            self.cards[card_index].set_list(new_list_id);
            self.lists[new_list_index].card_count += 1;
            self.refresh_counters();
        }

        if let Some(position) = position {
            self.cards[card_index].set_position(position);
        }

        debug!(card = %card_id, from = %old_list_id, to = %new_list_id, "Moved card");
        Ok(MoveOutcome {
            card: card_id,
            from: old_list_id,
            to: new_list_id,
        })
    }

    /// Recomputes the displayed total and per-list counts from the cards
    pub fn refresh_counters(&mut self) {
        let mut counts: BTreeMap<ListId, usize> =
            self.lists.iter().map(|l| (l.id, 0)).collect();
        for card in &self.cards {
            if let Some(count) = counts.get_mut(&card.list_id) {
                *count += 1;
            }
        }

        self.displayed = DisplayedCounts {
            total: self.cards.len(),
            lists: counts,
        };
    }

    pub fn displayed_counts(&self) -> &DisplayedCounts {
        &self.displayed
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards belonging to a list, sorted
    pub fn cards_in_list(&self, list_id: ListId, field: SortField, order: SortOrder) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| c.list_id == list_id)
            .cloned()
            .collect();
        sort_cards(&mut cards, field, order);
        cards
    }

    /// Same as [`Board::cards_in_list`] with the field and order given as
    /// text, e.g. `("position", "desc")`
    pub fn cards_in_list_by(&self, list_id: ListId, field: &str, order: &str) -> Result<Vec<Card>> {
        let field: SortField = field.parse()?;
        let order: SortOrder = order.parse()?;
        Ok(self.cards_in_list(list_id, field, order))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            name: self.config.name.clone(),
            lists: self
                .lists
                .iter()
                .map(|l| ListView {
                    id: l.id,
                    name: l.name.clone(),
                    card_count: l.card_count,
                })
                .collect(),
            cards: self
                .cards
                .iter()
                .map(|c| CardView {
                    id: c.id,
                    text: c.text.clone(),
                    list_id: c.list_id,
                    position: c.position,
                })
                .collect(),
            total_cards: self.cards.len(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
