//! Event loop that owns a [`BoardApp`] on a tokio task
//!
//! Events are applied one at a time in the order they were sent. After every
//! event the current [`BoardSnapshot`] is published for rendering.

use crate::{
    app::BoardApp,
    domain::BoardSnapshot,
    error::{BoardError, Result},
    events::UiEvent,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::debug;

/// Client side of a running board session
pub struct SessionHandle {
    events: mpsc::UnboundedSender<UiEvent>,
    snapshots: watch::Receiver<BoardSnapshot>,
    task: JoinHandle<BoardApp>,
}

/// Starts a session on the current tokio runtime
pub fn spawn(app: BoardApp) -> SessionHandle {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (snapshots_tx, snapshots_rx) = watch::channel(app.snapshot());

    let task = tokio::spawn(run(app, events_rx, snapshots_tx));

    SessionHandle {
        events: events_tx,
        snapshots: snapshots_rx,
        task,
    }
}

async fn run(
    mut app: BoardApp,
    mut events: mpsc::UnboundedReceiver<UiEvent>,
    snapshots: watch::Sender<BoardSnapshot>,
) -> BoardApp {
    while let Some(event) = events.recv().await {
        let outcome = app.handle(event);
        debug!(?outcome, "Handled UI event");
        snapshots.send_replace(app.snapshot());
    }
    app
}

impl SessionHandle {
    /// Queues an event for the session
    pub fn send(&self, event: UiEvent) -> Result<()> {
        self.events.send(event).map_err(|_| BoardError::SessionClosed)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> BoardSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Waits for the next snapshot after the last one seen
    pub async fn changed(&mut self) -> Result<BoardSnapshot> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| BoardError::SessionClosed)?;
        Ok(self.snapshots.borrow_and_update().clone())
    }

    /// Stops accepting events, drains the queue and returns the app
    pub async fn shutdown(self) -> Result<BoardApp> {
        drop(self.events);
        self.task.await.map_err(|_| BoardError::SessionClosed)
    }
}
