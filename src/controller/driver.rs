//! Controller task
//!
//! One task owns the [`ControllerState`]. Clicks reach it through a queue
//! fed by [`ControllerHandle`]s; each lookup runs on its own spawned task and
//! reports back through a second queue owned by the controller. Accepted
//! transitions are published on a watch channel, so the state has a single
//! writer and needs no lock.

use crate::controller::{ControllerState, Event, Generation, Transition};
use crate::coord::{CoordinateSource, Coordinates};
use crate::predict::{Outcome, PredictionBackend};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Entry point for starting the controller task
pub struct Controller;

impl Controller {
    /// Start the controller on the current tokio runtime
    ///
    /// The task stops once every handle has been dropped.
    pub fn spawn<B>(backend: Arc<B>) -> ControllerHandle
    where
        B: PredictionBackend + 'static,
    {
        let (clicks_tx, clicks_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ControllerState::default());

        tokio::spawn(run(backend, clicks_rx, state_tx));

        ControllerHandle {
            clicks: clicks_tx,
            state: state_rx,
        }
    }
}

/// Cheap, cloneable access to a running controller
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    clicks: mpsc::UnboundedSender<Coordinates>,
    state: watch::Receiver<ControllerState>,
}

impl ControllerHandle {
    /// Report a click; never blocks
    pub fn click(&self, coordinate: Coordinates) {
        if self.clicks.send(coordinate).is_err() {
            warn!(%coordinate, "controller stopped, click dropped");
        }
    }

    /// Forward every click from `source` to this controller
    pub fn attach(&self, source: &mut CoordinateSource) {
        let handle = self.clone();
        source.subscribe(move |coordinate| handle.click(coordinate));
    }

    /// Latest published state
    pub fn snapshot(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every published transition
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.clone()
    }

    /// Wait until the controller has taken a click newer than `after`
    ///
    /// Returns the generation it was given, or `None` if the controller
    /// stops first.
    pub async fn accepted_after(&self, after: Generation) -> Option<Generation> {
        let mut rx = self.state.clone();
        let accepted = rx.wait_for(|s| s.generation > after).await;
        accepted.ok().map(|s| s.generation)
    }

    /// Wait until the current click has a resolved outcome
    ///
    /// Returns `None` if the controller stops first. A lookup that never
    /// completes keeps this pending.
    pub async fn resolved(&self) -> Option<ControllerState> {
        let mut rx = self.state.clone();
        let resolved = rx
            .wait_for(|s| s.generation > Generation::default() && s.outcome.is_resolved())
            .await;
        resolved.ok().map(|s| (*s).clone())
    }
}

async fn run<B>(
    backend: Arc<B>,
    mut clicks: mpsc::UnboundedReceiver<Coordinates>,
    state_tx: watch::Sender<ControllerState>,
) where
    B: PredictionBackend + 'static,
{
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Event>();
    let mut state = ControllerState::default();

    loop {
        let event = tokio::select! {
            click = clicks.recv() => match click {
                Some(coordinate) => Event::Clicked(coordinate),
                None => break,
            },
            Some(done) = done_rx.recv() => done,
        };

        match state.apply(event) {
            Transition::Lookup {
                generation,
                coordinate,
            } => {
                debug!(%generation, %coordinate, "starting lookup");
                state_tx.send_replace(state.clone());

                let backend = Arc::clone(&backend);
                let done_tx = done_tx.clone();
                tokio::spawn(async move {
                    let outcome = backend.lookup(coordinate).await;
                    // Receiver is gone only when the controller has stopped
                    let _ = done_tx.send(Event::Completed {
                        generation,
                        outcome,
                    });
                });
            }
            Transition::Accepted => {
                match &state.outcome {
                    Outcome::Failed { reason } => {
                        warn!(generation = %state.generation, %reason, "lookup failed");
                    }
                    outcome => {
                        info!(generation = %state.generation, ?outcome, "lookup resolved");
                    }
                }
                state_tx.send_replace(state.clone());
            }
            Transition::Discarded => {
                debug!(current = %state.generation, "discarding stale lookup result");
            }
        }
    }

    debug!("controller stopped");
}
