//! Runtime wiring for the feed workers

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, REFRESH_REQUEST_QUEUE_SIZE};
use crate::events::Event;
use crate::feed::clock::ClockTicker;
use crate::feed::core::{EventSender, FeedConfig};
use crate::feed::sampler::ActivitySampler;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the activity sampler and the clock ticker.
///
/// Returns the event stream for the UI, the refresh-request handle used to
/// catch the net-flow metric up when the terminal regains focus, and the
/// worker join handles.
pub fn start_feed_workers(
    config: FeedConfig,
    shutdown: &broadcast::Sender<()>,
) -> (mpsc::Receiver<Event>, mpsc::Sender<()>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<()>(REFRESH_REQUEST_QUEUE_SIZE);

    let sender = EventSender::new(event_sender);
    let sampler = ActivitySampler::new(sender.clone(), &config);
    let clock = ClockTicker::new(sender);

    let join_handles = vec![
        tokio::spawn(sampler.run(shutdown.subscribe(), refresh_receiver)),
        tokio::spawn(clock.run(shutdown.subscribe())),
    ];

    (event_receiver, refresh_sender, join_handles)
}
