//! Dashboard state management
//!
//! Contains the authoritative dashboard state struct

use crate::consts::cli_consts::MAX_TRANSFER_ROWS;
use crate::environment::Environment;
use crate::events::{Event as FeedEvent, TokenTransfer};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Authoritative dashboard state. Rendering is a pure projection of this
/// struct; displayed text is never parsed back into state.
#[derive(Debug)]
pub struct DashboardState {
    /// The network environment the dashboard points at.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Connection flag. Injected at startup; the indicator derives its
    /// label and dot color from this alone.
    pub connected: bool,
    /// Running net-flow metric, in POL.
    pub net_flow_pol: f64,
    /// Transfer rows, newest first, capped at `MAX_TRANSFER_ROWS`.
    pub transfers: VecDeque<TokenTransfer>,
    /// Formatted last-update clock display.
    pub last_update: String,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<FeedEvent>,
    /// Transfers seen since startup, including evicted rows.
    pub transfers_seen: u64,
    /// Sum of all transfer amounts seen, in POL.
    pub total_volume_pol: f64,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            connected: ui_config.connected,
            net_flow_pol: ui_config.initial_net_flow_pol,
            transfers: VecDeque::new(),
            last_update: String::new(),
            pending_events: VecDeque::new(),
            transfers_seen: 0,
            total_volume_pol: 0.0,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: FeedEvent) {
        self.pending_events.push_back(event);
    }

    /// Insert a transfer at the head of the list, evicting the single
    /// oldest entry once the cap is exceeded.
    pub fn push_transfer(&mut self, transfer: TokenTransfer) {
        self.transfers.push_front(transfer);
        if self.transfers.len() > MAX_TRANSFER_ROWS {
            self.transfers.pop_back();
        }
    }
}
