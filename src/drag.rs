//! Drag-and-drop controller
//!
//! Turns gesture phases (start, hover, drop, end) into board moves. A single
//! insertion marker is shared across hovers and gestures; `end` always
//! removes it, whether or not a drop happened.

use crate::{
    domain::{Board, CardId, ListId, MoveOutcome},
    error::{BoardError, Result},
};
use tracing::{debug, warn};

/// Where the insertion marker currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionMarker {
    pub list: ListId,
    /// Card the marker is placed in front of; `None` means end of list
    pub before: Option<CardId>,
}

/// Element under the pointer during a hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    ListBody(ListId),
    Card(CardId),
    Marker,
}

/// Element a card is dropped on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    List(ListId),
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        card: CardId,
    },
    HoveringTarget {
        card: CardId,
        list: ListId,
        marker: InsertionMarker,
    },
}

#[derive(Debug)]
pub enum DropOutcome {
    /// No gesture in progress, or nothing to drop onto
    Ignored,
    /// The card moved; `placed` is where it lands among the list's cards
    Moved {
        moved: MoveOutcome,
        placed: InsertionMarker,
    },
    /// The move was rejected; the card stays where it was
    Failed(BoardError),
}

#[derive(Debug)]
pub struct DragController {
    state: DragState,
    /// Card flagged as "being dragged" for rendering. Cleared only by `end`.
    dragged: Option<CardId>,
    /// Reusable placeholder slot
    placeholder: Option<InsertionMarker>,
    marker_visible: bool,
    markers_allocated: usize,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            dragged: None,
            placeholder: None,
            marker_visible: false,
            markers_allocated: 0,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Card currently flagged as being dragged
    pub fn dragged_card(&self) -> Option<CardId> {
        self.dragged
    }

    pub fn marker(&self) -> Option<&InsertionMarker> {
        if self.marker_visible {
            self.placeholder.as_ref()
        } else {
            None
        }
    }

    pub fn marker_count(&self) -> usize {
        usize::from(self.marker().is_some())
    }

    /// How many times a placeholder had to be created
    pub fn markers_allocated(&self) -> usize {
        self.markers_allocated
    }

    /// Begins dragging a card
    ///
    /// Starting while another gesture is active cleans that gesture up first.
    pub fn start(&mut self, card: CardId, board: &Board) -> Result<()> {
        if self.is_dragging() {
            debug!(card = %card, "Drag started before previous gesture ended");
            self.end();
        }

        if board.find_card(card).is_none() {
            return Err(BoardError::CardNotFound(card));
        }

        debug!(card = %card, "Drag started");
        self.dragged = Some(card);
        self.state = DragState::Dragging { card };
        Ok(())
    }

    /// Moves the insertion marker to follow the pointer
    ///
    /// Returns the marker position, or `None` when the hover was ignored.
    pub fn hover(&mut self, target: HoverTarget, board: &Board) -> Option<&InsertionMarker> {
        let card = match self.state {
            DragState::Idle => return None,
            DragState::Dragging { card } | DragState::HoveringTarget { card, .. } => card,
        };

        let placement = match target {
            HoverTarget::ListBody(list) => match board.find_list(list) {
                Some(_) => InsertionMarker { list, before: None },
                None => {
                    warn!(list = %list, "Hover over unknown list ignored");
                    return None;
                }
            },
            HoverTarget::Card(over) => match board.find_card(over) {
                Some(c) => InsertionMarker {
                    list: c.list_id,
                    before: Some(over),
                },
                None => {
                    warn!(card = %over, "Hover over unknown card ignored");
                    return None;
                }
            },
            // Hovering the marker itself keeps it where it is
            HoverTarget::Marker => *self.marker()?,
        };

        let marker = self.place_marker(placement);
        self.state = DragState::HoveringTarget {
            card,
            list: marker.list,
            marker,
        };
        self.marker()
    }

    /// Completes a gesture by moving the dragged card onto the target list
    ///
    /// A drop on a list body appends; a drop on the marker lands where the
    /// marker stood. The placement is reported in the outcome because the
    /// board only keeps a position hint and never renumbers siblings. Board
    /// errors are logged and reported, never propagated.
    pub fn drop(&mut self, target: DropTarget, board: &mut Board) -> DropOutcome {
        let card = match self.state {
            DragState::Idle => {
                debug!("Drop without an active drag ignored");
                return DropOutcome::Ignored;
            }
            DragState::Dragging { card } | DragState::HoveringTarget { card, .. } => card,
        };

        let placement = match target {
            DropTarget::List(list) => Some(InsertionMarker { list, before: None }),
            DropTarget::Marker => self.marker().copied(),
        };

        let outcome = match placement {
            Some(placed) => match board.move_card(card, placed.list, None) {
                Ok(moved) => DropOutcome::Moved { moved, placed },
                Err(err) => {
                    warn!(card = %card, list = %placed.list, error = %err, "Drop rejected");
                    DropOutcome::Failed(err)
                }
            },
            None => {
                debug!(card = %card, "Drop on marker with no marker placed");
                DropOutcome::Ignored
            }
        };

        self.marker_visible = false;
        self.state = DragState::Idle;
        outcome
    }

    /// Ends the gesture, successful or not
    ///
    /// Safe to call in any state and any number of times.
    pub fn end(&mut self) {
        if self.is_dragging() || self.dragged.is_some() {
            debug!(card = ?self.dragged, "Drag ended");
        }
        self.dragged = None;
        self.marker_visible = false;
        self.state = DragState::Idle;
    }

    fn place_marker(&mut self, placement: InsertionMarker) -> InsertionMarker {
        if self.placeholder.is_none() {
            self.markers_allocated += 1;
        }
        self.placeholder = Some(placement);
        self.marker_visible = true;
        placement
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
