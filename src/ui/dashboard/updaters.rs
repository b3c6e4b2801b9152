//! Dashboard state update logic
//!
//! Applies queued feed events to the authoritative state

use super::state::DashboardState;
use super::utils::format_clock_timestamp;
use crate::events::DashboardUpdate;

impl DashboardState {
    /// Update the dashboard state with a new tick, draining queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.apply_update(event.update);
        }
    }

    fn apply_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::NetFlowDelta(delta_pol) => {
                self.net_flow_pol += delta_pol;
            }
            DashboardUpdate::Transfer(transfer) => {
                self.transfers_seen += 1;
                self.total_volume_pol += transfer.amount_pol;
                self.push_transfer(transfer);
            }
            DashboardUpdate::Clock(now) => {
                self.last_update = format_clock_timestamp(now);
            }
            DashboardUpdate::Connection(connected) => {
                self.connected = connected;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::MAX_TRANSFER_ROWS;
    use crate::environment::Environment;
    use crate::events::{Event, TokenTransfer};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::utils::format_token_amount;
    use chrono::{TimeZone, Utc};
    use std::time::Instant;

    fn test_state(initial_net_flow_pol: f64) -> DashboardState {
        let ui_config = UIConfig::new(false, true, initial_net_flow_pol);
        DashboardState::new(Environment::Mainnet, Instant::now(), ui_config)
    }

    fn test_transfer(index: usize) -> TokenTransfer {
        TokenTransfer {
            transaction_hash: format!("0x{index:064x}"),
            from_address: format!("0x{index:040x}"),
            to_address: "0xF977814e90dA44bFA03b6295A0616a897441aceC".to_string(),
            amount_pol: 1_000.0,
            age_label: "just now".to_string(),
        }
    }

    #[test]
    // The transfer list never exceeds the cap and evicts in insertion order.
    fn transfer_list_cap_and_eviction_order() {
        let mut state = test_state(0.0);
        for index in 0..25 {
            state.add_event(Event::transfer(test_transfer(index)));
            state.update();
            assert!(state.transfers.len() <= MAX_TRANSFER_ROWS);
        }

        assert_eq!(state.transfers.len(), MAX_TRANSFER_ROWS);
        assert_eq!(state.transfers_seen, 25);

        // Newest at the head of the list, oldest survivor at the tail;
        // the five entries inserted first are gone.
        assert_eq!(state.transfers.front().unwrap().transaction_hash, format!("0x{:064x}", 24));
        assert_eq!(state.transfers.back().unwrap().transaction_hash, format!("0x{:064x}", 5));
    }

    #[test]
    // Injected delta of +50,000 on an initial 1,000,000 renders "+1.05M POL".
    fn net_flow_delta_scenario() {
        let mut state = test_state(1_000_000.0);
        state.add_event(Event::net_flow_sample(50_000.0));
        state.update();

        assert_eq!(state.net_flow_pol, 1_050_000.0);
        assert_eq!(format_token_amount(state.net_flow_pol), "+1.05M POL");
    }

    #[test]
    fn net_flow_accumulates_across_updates() {
        let mut state = test_state(0.0);
        state.add_event(Event::net_flow_sample(-20_000.0));
        state.add_event(Event::net_flow_sample(5_000.0));
        state.update();
        assert_eq!(state.net_flow_pol, -15_000.0);
    }

    #[test]
    fn clock_event_sets_last_update_display() {
        let mut state = test_state(0.0);
        let t = Utc.with_ymd_and_hms(2025, 8, 7, 14, 3, 22).unwrap();
        state.add_event(Event::clock_tick(t));
        state.update();
        assert_eq!(state.last_update, "Aug 07, 2025, 02:03:22 PM UTC");
    }

    #[test]
    fn connection_event_overrides_flag() {
        let mut state = test_state(0.0);
        assert!(state.connected);
        state.add_event(Event::connection(false, "Polygon"));
        state.update();
        assert!(!state.connected);
    }

    #[test]
    fn volume_counts_evicted_rows() {
        let mut state = test_state(0.0);
        for index in 0..22 {
            state.add_event(Event::transfer(test_transfer(index)));
        }
        state.update();
        assert_eq!(state.transfers.len(), MAX_TRANSFER_ROWS);
        assert_eq!(state.total_volume_pol, 22_000.0);
    }
}
