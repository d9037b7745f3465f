// SPDX-License-Identifier: MPL-2.0
//! Async runner for the control surface.
//!
//! The loop owns a [`ControlSurface`] and feeds it from one unbounded
//! channel. Engine notifications are posted onto the same channel, so the
//! surface sees pointer input, button presses and engine state changes in a
//! single order. Between events the loop sleeps until the surface's next
//! deadline and then sends it a [`ControlEvent::Tick`].
//!
//! The loop ends after [`ControlEvent::Close`], or once every sender handed
//! out by [`ControlLoop::sender`] has been dropped (teardown runs first).

use super::{Collaborators, ControlEvent, ControlSurface, UiSignal};
use crate::application::port::NotificationRouter;
use crate::config::Config;
use crate::domain::gesture::Viewport;
use std::time::Instant;
use tokio::sync::mpsc;

/// Event loop driving one [`ControlSurface`].
#[derive(Debug)]
pub struct ControlLoop {
    surface: ControlSurface,
    events_tx: mpsc::UnboundedSender<ControlEvent>,
    events_rx: mpsc::UnboundedReceiver<ControlEvent>,
}

impl ControlLoop {
    /// Creates the loop and its surface.
    pub fn new(config: &Config, collaborators: Collaborators, viewport: Viewport) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        // Engine notifications must not keep the channel open on their own.
        let engine_tx = events_tx.downgrade();
        let router = NotificationRouter::new(move |message| {
            if let Some(tx) = engine_tx.upgrade() {
                let _ = tx.send(ControlEvent::Engine(message));
            }
        });

        Self {
            surface: ControlSurface::new(config, collaborators, router, viewport),
            events_tx,
            events_rx,
        }
    }

    /// Returns a handle for posting events to the loop.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<ControlEvent> {
        self.events_tx.clone()
    }

    /// Runs until the surface is closed, passing every signal to `on_signal`.
    ///
    /// Returns the closed surface for inspection.
    pub async fn run(self, mut on_signal: impl FnMut(UiSignal)) -> ControlSurface {
        let Self {
            mut surface,
            events_tx,
            mut events_rx,
        } = self;
        drop(events_tx);

        while !surface.is_closed() {
            let deadline = surface.next_deadline();
            let event = tokio::select! {
                biased;
                received = events_rx.recv() => received.unwrap_or(ControlEvent::Close),
                () = sleep_until(deadline) => ControlEvent::Tick,
            };

            let now = tokio::time::Instant::now().into_std();
            for signal in surface.handle(event, now) {
                on_signal(signal);
            }
        }

        tracing::debug!("control loop finished");
        surface
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        }
        None => std::future::pending::<()>().await,
    }
}
