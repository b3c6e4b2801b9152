//! Periodic net-flow sampling and transfer synthesis

use super::core::{EventSender, FeedConfig};
use super::generator::TransferGenerator;
use crate::consts::cli_consts::activity;
use crate::events::Event;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{self, MissedTickBehavior};

/// Feed worker that drives the 30-second activity cadence: one net-flow
/// sample and one synthesized transfer per tick.
pub struct ActivitySampler {
    generator: TransferGenerator,
    event_sender: EventSender,
    config: FeedConfig,
}

impl ActivitySampler {
    pub fn new(event_sender: EventSender, config: &FeedConfig) -> Self {
        Self {
            generator: TransferGenerator::new(config.seed),
            event_sender,
            config: config.clone(),
        }
    }

    /// Runs until shutdown. A refresh request (sent when the terminal regains
    /// focus) emits one extra net-flow sample immediately, without a transfer
    /// and without resetting the interval.
    pub async fn run(
        mut self,
        mut shutdown: broadcast::Receiver<()>,
        mut refresh_requests: mpsc::Receiver<()>,
    ) {
        // Announce the configured connection flag before the first sample
        self.event_sender
            .send_event(Event::connection(
                self.config.connected,
                self.config.environment.network_name(),
            ))
            .await;

        // The first activity tick lands one full period after startup
        let first_tick = time::Instant::now() + activity::refresh_interval();
        let mut interval = time::interval_at(first_tick, activity::refresh_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = interval.tick() => {
                    self.sample_net_flow().await;
                    self.append_transfer().await;
                }
                Some(()) = refresh_requests.recv() => {
                    self.sample_net_flow().await;
                }
            }
        }
    }

    async fn sample_net_flow(&mut self) {
        let delta = self.generator.next_net_flow_delta();
        self.event_sender
            .send_event(Event::net_flow_sample(delta))
            .await;
    }

    async fn append_transfer(&mut self) {
        let transfer = self.generator.next_transfer();
        self.event_sender.send_event(Event::transfer(transfer)).await;
    }
}
