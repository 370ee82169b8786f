pub mod board;
pub mod card;
pub mod list;
pub mod sorting;

pub use board::{
    Board, BoardConfig, BoardSnapshot, CardView, DisplayedCounts, ListView, MoveOutcome, SeedCard,
    SeedMove,
};
pub use card::{Card, CardId};
pub use list::{List, ListId};
pub use sorting::{sort_cards, SortField, SortOrder};
