//! Last-update clock ticker

use super::core::EventSender;
use crate::consts::cli_consts::activity;
use crate::events::Event;
use chrono::Utc;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

/// Feed worker that emits the wall-clock time once per second. The first
/// tick fires immediately so the display fills on startup.
pub struct ClockTicker {
    event_sender: EventSender,
}

impl ClockTicker {
    pub fn new(event_sender: EventSender) -> Self {
        Self { event_sender }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut interval = time::interval(activity::clock_tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = interval.tick() => {
                    self.event_sender.send_event(Event::clock_tick(Utc::now())).await;
                }
            }
        }
    }
}
