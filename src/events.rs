//! Typed UI events and per-region gesture handlers
//!
//! Each logical region of the board (a list body, a card, the insertion
//! marker) registers a [`RegionHandler`]. A phase a region does not handle is
//! simply ignored, so a drop on a card or a drag start on a list does nothing.

use crate::{
    domain::{Board, CardId, ListId},
    drag::{DragController, DropOutcome, DropTarget, HoverTarget, InsertionMarker},
    error::BoardError,
};
use std::collections::HashMap;
use tracing::warn;

/// Board element an event was fired on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    List(ListId),
    Card(CardId),
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    List,
    Card,
    Marker,
}

impl Region {
    pub fn kind(&self) -> RegionKind {
        match self {
            Self::List(_) => RegionKind::List,
            Self::Card(_) => RegionKind::Card,
            Self::Marker => RegionKind::Marker,
        }
    }
}

/// Input coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DragStart { region: Region },
    DragOver { region: Region },
    Drop { region: Region },
    /// Gesture finished or was cancelled
    DragEnd,
    /// "Add card" form; without a list the board's default list is used
    SubmitCard { text: String, list: Option<ListId> },
    /// "Add list" form
    SubmitList { name: String },
}

/// What handling an event did
#[derive(Debug)]
pub enum EventOutcome {
    Ignored,
    DragStarted(CardId),
    MarkerPlaced(InsertionMarker),
    Dropped(DropOutcome),
    DragEnded,
    CardCreated(CardId),
    ListCreated(ListId),
    Rejected(BoardError),
}

/// Mutable state a region handler works on
pub struct GestureContext<'a> {
    pub board: &'a mut Board,
    pub drag: &'a mut DragController,
}

/// Gesture callbacks for one kind of region
///
/// Returning `None` means the region does not take part in that phase.
pub trait RegionHandler: Send + Sync {
    fn on_drag_start(&self, _region: Region, _ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        None
    }

    fn on_drag_over(&self, _region: Region, _ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        None
    }

    fn on_drop(&self, _region: Region, _ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        None
    }
}

fn hover(target: HoverTarget, ctx: &mut GestureContext<'_>) -> EventOutcome {
    match ctx.drag.hover(target, ctx.board) {
        Some(marker) => EventOutcome::MarkerPlaced(*marker),
        None => EventOutcome::Ignored,
    }
}

fn drop_on(target: DropTarget, ctx: &mut GestureContext<'_>) -> EventOutcome {
    match ctx.drag.drop(target, ctx.board) {
        DropOutcome::Ignored => EventOutcome::Ignored,
        outcome => EventOutcome::Dropped(outcome),
    }
}

/// Cards can be picked up and hovered over
pub struct CardRegion;

impl RegionHandler for CardRegion {
    fn on_drag_start(&self, region: Region, ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        let Region::Card(card) = region else {
            return None;
        };
        Some(match ctx.drag.start(card, ctx.board) {
            Ok(()) => EventOutcome::DragStarted(card),
            Err(err) => {
                warn!(card = %card, error = %err, "Drag start rejected");
                EventOutcome::Rejected(err)
            }
        })
    }

    fn on_drag_over(&self, region: Region, ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        let Region::Card(card) = region else {
            return None;
        };
        Some(hover(HoverTarget::Card(card), ctx))
    }
}

/// List bodies accept hovers and drops
pub struct ListRegion;

impl RegionHandler for ListRegion {
    fn on_drag_over(&self, region: Region, ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        let Region::List(list) = region else {
            return None;
        };
        Some(hover(HoverTarget::ListBody(list), ctx))
    }

    fn on_drop(&self, region: Region, ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        let Region::List(list) = region else {
            return None;
        };
        Some(drop_on(DropTarget::List(list), ctx))
    }
}

/// The insertion marker accepts hovers and drops
pub struct MarkerRegion;

impl RegionHandler for MarkerRegion {
    fn on_drag_over(&self, _region: Region, ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        Some(hover(HoverTarget::Marker, ctx))
    }

    fn on_drop(&self, _region: Region, ctx: &mut GestureContext<'_>) -> Option<EventOutcome> {
        Some(drop_on(DropTarget::Marker, ctx))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Start,
    Over,
    Drop,
}

/// Handler lookup by region kind
pub struct EventTable {
    handlers: HashMap<RegionKind, Box<dyn RegionHandler>>,
}

impl EventTable {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Table with the card, list and marker handlers registered
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register(RegionKind::Card, CardRegion);
        table.register(RegionKind::List, ListRegion);
        table.register(RegionKind::Marker, MarkerRegion);
        table
    }

    /// Registers a handler, replacing any previous one for the kind
    pub fn register(&mut self, kind: RegionKind, handler: impl RegionHandler + 'static) {
        self.handlers.insert(kind, Box::new(handler));
    }

    pub(crate) fn dispatch(
        &self,
        region: Region,
        phase: Phase,
        ctx: &mut GestureContext<'_>,
    ) -> EventOutcome {
        let Some(handler) = self.handlers.get(&region.kind()) else {
            return EventOutcome::Ignored;
        };

        let outcome = match phase {
            Phase::Start => handler.on_drag_start(region, ctx),
            Phase::Over => handler.on_drag_over(region, ctx),
            Phase::Drop => handler.on_drop(region, ctx),
        };
        outcome.unwrap_or(EventOutcome::Ignored)
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::standard()
    }
}
