//! Core feed utilities shared by the feed workers

use crate::environment::Environment;
use crate::events::Event;
use tokio::sync::mpsc;

/// Common event sending utility for feed workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event to the UI. A closed channel means the UI is gone and
    /// the worker is about to be shut down, so send failures are ignored.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}

/// Configuration shared across the feed workers
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub environment: Environment,
    /// Connection flag announced at startup. Injected, never probed.
    pub connected: bool,
    /// Seed for the transfer generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl FeedConfig {
    pub fn new(environment: Environment, connected: bool) -> Self {
        Self {
            environment,
            connected,
            seed: None,
        }
    }
}
