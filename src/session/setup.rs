//! Session setup and initialization

use crate::config::Config;
use crate::environment::Environment;
use crate::events::Event;
use crate::feed::core::FeedConfig;
use crate::runtime::start_feed_workers;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for feed events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Requests an immediate net-flow sample from the sampler
    pub refresh_sender: mpsc::Sender<()>,
    /// Join handles for feed worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all feed workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// The network environment the dashboard points at
    pub environment: Environment,
    /// Connection flag (injected, never probed)
    pub connected: bool,
    /// Starting value of the net-flow metric, in POL
    pub initial_net_flow_pol: f64,
}

/// Sets up a dashboard session
///
/// This function handles the common setup required for both TUI and headless
/// modes: it creates the shutdown channel, starts the feed workers, and
/// returns the session data for mode-specific handling.
///
/// # Arguments
/// * `config` - Resolved configuration (connection flag, initial net flow)
/// * `env` - The network environment to display
/// * `seed` - Optional generator seed for a reproducible feed
pub fn setup_session(config: Config, env: Environment, seed: Option<u64>) -> SessionData {
    let mut feed_config = FeedConfig::new(env, config.connected);
    feed_config.seed = seed;

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, refresh_sender, join_handles) =
        start_feed_workers(feed_config, &shutdown_sender);

    SessionData {
        event_receiver,
        refresh_sender,
        join_handles,
        shutdown_sender,
        environment: env,
        connected: config.connected,
        initial_net_flow_pol: config.initial_net_flow_pol,
    }
}
