//! Event System
//!
//! Types and implementations for feed events delivered to the dashboard

use crate::logging::{LogLevel, should_log_with_env};
use chrono::{DateTime, Utc};
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Feed {
    /// Worker that samples the net-flow metric and synthesizes transfers.
    ActivitySampler,
    /// Worker that ticks the last-update clock.
    Clock,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Sample,
    Transfer,
    Tick,
    StateChange,
}

/// A single simulated POL transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTransfer {
    /// Full transaction hash (0x + 64 hex chars).
    pub transaction_hash: String,
    /// Full source address (0x + 40 hex chars).
    pub from_address: String,
    /// Full destination address, drawn from the exchange allow-list.
    pub to_address: String,
    /// Transfer amount in whole POL.
    pub amount_pol: f64,
    /// Relative-age label shown next to the row.
    pub age_label: String,
}

/// State mutation carried by an event. The dashboard applies these to its
/// own authoritative state; rendered text is never read back.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    /// Add a delta (POL) to the net-flow metric.
    NetFlowDelta(f64),
    /// Insert a transfer at the head of the list.
    Transfer(TokenTransfer),
    /// Refresh the last-update clock display.
    Clock(DateTime<Utc>),
    /// Announce the connection flag.
    Connection(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub feed: Feed,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    pub update: DashboardUpdate,
}

impl Event {
    fn new(
        feed: Feed,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        update: DashboardUpdate,
    ) -> Self {
        Self {
            feed,
            msg,
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            update,
        }
    }

    pub fn net_flow_sample(delta_pol: f64) -> Self {
        Self::new(
            Feed::ActivitySampler,
            format!("Net-flow delta of {delta_pol:+.0} POL"),
            EventType::Sample,
            LogLevel::Info,
            DashboardUpdate::NetFlowDelta(delta_pol),
        )
    }

    pub fn transfer(transfer: TokenTransfer) -> Self {
        let msg = format!(
            "Transfer of {:.0} POL to {}",
            transfer.amount_pol, transfer.to_address
        );
        Self::new(
            Feed::ActivitySampler,
            msg,
            EventType::Transfer,
            LogLevel::Info,
            DashboardUpdate::Transfer(transfer),
        )
    }

    pub fn clock_tick(now: DateTime<Utc>) -> Self {
        Self::new(
            Feed::Clock,
            "Clock tick".to_string(),
            EventType::Tick,
            LogLevel::Debug,
            DashboardUpdate::Clock(now),
        )
    }

    pub fn connection(connected: bool, network_name: &str) -> Self {
        let msg = if connected {
            format!("Connected to {network_name}")
        } else {
            "Disconnected".to_string()
        };
        Self::new(
            Feed::ActivitySampler,
            msg,
            EventType::StateChange,
            LogLevel::Info,
            DashboardUpdate::Connection(connected),
        )
    }

    pub fn should_display(&self) -> bool {
        // Activity and state changes always show; clock ticks obey RUST_LOG
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] [{}] {}",
            self.event_type, self.timestamp, self.feed, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_flow_sample_carries_delta() {
        let event = Event::net_flow_sample(-1234.5);
        assert_eq!(event.feed, Feed::ActivitySampler);
        assert_eq!(event.event_type, EventType::Sample);
        assert_eq!(event.update, DashboardUpdate::NetFlowDelta(-1234.5));
    }

    #[test]
    fn clock_ticks_are_debug_level() {
        let event = Event::clock_tick(Utc::now());
        assert_eq!(event.event_type, EventType::Tick);
        assert_eq!(event.log_level, LogLevel::Debug);
    }

    #[test]
    fn connection_event_message_reflects_flag() {
        let up = Event::connection(true, "Polygon");
        assert_eq!(up.msg, "Connected to Polygon");
        let down = Event::connection(false, "Polygon");
        assert_eq!(down.msg, "Disconnected");
    }

    #[test]
    fn display_includes_type_feed_and_message() {
        let event = Event::net_flow_sample(100.0);
        let line = event.to_string();
        assert!(line.starts_with("Sample ["));
        assert!(line.contains("[ActivitySampler]"));
        assert!(line.ends_with("Net-flow delta of +100 POL"));
    }
}
