use crate::{
    domain::{Board, BoardConfig, BoardSnapshot},
    drag::DragController,
    events::{EventOutcome, EventTable, GestureContext, Phase, Region, UiEvent},
};
use tracing::debug;

/// Application root: owns the board, the drag controller and the handler table
pub struct BoardApp {
    board: Board,
    drag: DragController,
    handlers: EventTable,
}

impl BoardApp {
    pub fn new(board: Board) -> Self {
        Self::with_handlers(board, EventTable::standard())
    }

    pub fn with_handlers(board: Board, handlers: EventTable) -> Self {
        Self {
            board,
            drag: DragController::new(),
            handlers,
        }
    }

    pub fn from_config(config: BoardConfig) -> Self {
        Self::new(Board::new(config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Applies one UI event
    ///
    /// Never fails: rejected input and stray events come back as
    /// [`EventOutcome::Rejected`] or [`EventOutcome::Ignored`].
    pub fn handle(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::DragStart { region } => self.dispatch(region, Phase::Start),
            UiEvent::DragOver { region } => self.dispatch(region, Phase::Over),
            UiEvent::Drop { region } => self.dispatch(region, Phase::Drop),
            UiEvent::DragEnd => {
                self.drag.end();
                EventOutcome::DragEnded
            }
            UiEvent::SubmitCard { text, list } => {
                match self.board.add_card(&text, list, None, true) {
                    Ok(id) => EventOutcome::CardCreated(id),
                    Err(err) => {
                        debug!(error = %err, "Card not created");
                        EventOutcome::Rejected(err)
                    }
                }
            }
            UiEvent::SubmitList { name } => match self.board.create_list(&name) {
                Ok(list) => {
                    let id = list.id;
                    self.board.refresh_counters();
                    EventOutcome::ListCreated(id)
                }
                Err(err) => {
                    debug!(error = %err, "List not created");
                    EventOutcome::Rejected(err)
                }
            },
        }
    }

    fn dispatch(&mut self, region: Region, phase: Phase) -> EventOutcome {
        let mut ctx = GestureContext {
            board: &mut self.board,
            drag: &mut self.drag,
        };
        self.handlers.dispatch(region, phase, &mut ctx)
    }
}

impl Default for BoardApp {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{CardId, ListId},
        drag::DropOutcome,
        error::BoardError,
    };

    fn counts(app: &BoardApp) -> Vec<usize> {
        app.board().lists().iter().map(|l| l.card_count).collect()
    }

    fn drag_card(app: &mut BoardApp, card: u32, over: Region, onto: Region) -> EventOutcome {
        app.handle(UiEvent::DragStart {
            region: Region::Card(CardId::new(card)),
        });
        app.handle(UiEvent::DragOver { region: over });
        let outcome = app.handle(UiEvent::Drop { region: onto });
        app.handle(UiEvent::DragEnd);
        outcome
    }

    #[test]
    fn test_full_gesture_onto_list() {
        let mut app = BoardApp::from_config(BoardConfig::demo());

        let outcome = drag_card(
            &mut app,
            2,
            Region::List(ListId::new(2)),
            Region::List(ListId::new(2)),
        );

        assert!(matches!(outcome, EventOutcome::Dropped(DropOutcome::Moved { .. })));
        assert_eq!(counts(&app), vec![3, 1, 0]);
        assert_eq!(app.board().displayed_counts().total, 4);
        assert_eq!(app.drag().marker_count(), 0);
        assert!(app.drag().dragged_card().is_none());
    }

    #[test]
    fn test_full_gesture_onto_marker() {
        let mut app = BoardApp::from_config(BoardConfig::demo());

        // Hover card 1 in list 1, then drop on the marker in front of it
        let outcome = drag_card(&mut app, 4, Region::Card(CardId::new(1)), Region::Marker);

        assert!(matches!(
            outcome,
            EventOutcome::Dropped(DropOutcome::Moved { placed, .. })
                if placed.list == ListId::new(1) && placed.before == Some(CardId::new(1))
        ));
        assert_eq!(counts(&app), vec![4, 0, 0]);

        drag_card(&mut app, 4, Region::List(ListId::new(3)), Region::Marker);
        assert_eq!(counts(&app), vec![3, 0, 1]);
    }

    #[test]
    fn test_cancelled_gesture_leaves_board_untouched() {
        let mut app = BoardApp::from_config(BoardConfig::demo());
        let before = app.snapshot();

        app.handle(UiEvent::DragStart {
            region: Region::Card(CardId::new(3)),
        });
        app.handle(UiEvent::DragOver {
            region: Region::List(ListId::new(3)),
        });
        let outcome = app.handle(UiEvent::DragEnd);

        assert!(matches!(outcome, EventOutcome::DragEnded));
        assert!(!app.drag().is_dragging());
        assert_eq!(app.drag().marker_count(), 0);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_stray_drop_is_ignored() {
        let mut app = BoardApp::from_config(BoardConfig::demo());

        let outcome = app.handle(UiEvent::Drop {
            region: Region::List(ListId::new(2)),
        });

        assert!(matches!(outcome, EventOutcome::Ignored));
        assert_eq!(counts(&app), vec![4, 0, 0]);
    }

    #[test]
    fn test_drag_start_on_unknown_card_is_rejected() {
        let mut app = BoardApp::default();

        let outcome = app.handle(UiEvent::DragStart {
            region: Region::Card(CardId::new(5)),
        });

        assert!(matches!(outcome, EventOutcome::Rejected(BoardError::CardNotFound(_))));
        assert!(!app.drag().is_dragging());
    }

    #[test]
    fn test_submit_forms() {
        let mut app = BoardApp::default();

        let outcome = app.handle(UiEvent::SubmitList {
            name: "  Blocked ".to_string(),
        });
        assert!(matches!(outcome, EventOutcome::ListCreated(id) if id == ListId::new(4)));
        assert_eq!(app.board().displayed_counts().for_list(ListId::new(4)), Some(0));

        let outcome = app.handle(UiEvent::SubmitCard {
            text: "Ship it".to_string(),
            list: None,
        });
        assert!(matches!(outcome, EventOutcome::CardCreated(id) if id == CardId::new(1)));
        assert_eq!(counts(&app), vec![1, 0, 0, 0]);
        assert_eq!(app.board().displayed_counts().total, 1);
    }

    #[test]
    fn test_blank_submissions_are_rejected() {
        let mut app = BoardApp::default();

        let outcome = app.handle(UiEvent::SubmitList {
            name: "   ".to_string(),
        });
        assert!(matches!(outcome, EventOutcome::Rejected(ref e) if e.is_validation()));

        let outcome = app.handle(UiEvent::SubmitCard {
            text: String::new(),
            list: None,
        });
        assert!(matches!(outcome, EventOutcome::Rejected(BoardError::EmptyCardText)));

        let outcome = app.handle(UiEvent::SubmitCard {
            text: "Lost".to_string(),
            list: Some(ListId::new(11)),
        });
        assert!(matches!(outcome, EventOutcome::Rejected(BoardError::ListNotFound(_))));

        assert_eq!(app.board().lists().len(), 3);
        assert_eq!(app.board().total_cards(), 0);
    }
}
