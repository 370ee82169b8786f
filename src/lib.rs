//! # Tinyboard Core
//!
//! In-memory kanban board: ordered lists of cards, moved around with
//! pointer-drag gestures.
//!
//! The [`Board`] owns lists and cards and keeps per-list and total counts in
//! step with every change. The [`DragController`] interprets gesture phases
//! and applies them to the board, and [`BoardApp`] routes typed UI events to
//! both. Nothing is persisted.

pub mod app;
pub mod domain;
pub mod drag;
pub mod error;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use app::BoardApp;
pub use domain::{
    board::{Board, BoardConfig, BoardSnapshot, DisplayedCounts, MoveOutcome},
    card::{Card, CardId},
    list::{List, ListId},
};
pub use drag::{DragController, DragState, DropOutcome, DropTarget, HoverTarget, InsertionMarker};
pub use error::{BoardError, Result};
pub use events::{EventOutcome, Region, UiEvent};
pub use session::SessionHandle;
