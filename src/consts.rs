pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of transfer rows to keep in the dashboard list.
    /// Once exceeded, the single oldest entry is evicted.
    pub const MAX_TRANSFER_ROWS: usize = 20;

    /// Maximum event buffer size between the feed workers and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size for metric refresh requests sent back to the sampler.
    pub const REFRESH_REQUEST_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // REFRESH CADENCE
    // =============================================================================

    /// Refresh cadence for the activity feed and the clock
    pub mod activity {
        use std::time::Duration;

        /// Interval between activity ticks (milliseconds)
        pub const REFRESH_INTERVAL_MS: u64 = 30_000;

        /// Interval between clock ticks (milliseconds)
        pub const CLOCK_TICK_INTERVAL_MS: u64 = 1_000;

        /// Helper function to get the activity refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }

        /// Helper function to get the clock tick interval
        pub const fn clock_tick_interval() -> Duration {
            Duration::from_millis(CLOCK_TICK_INTERVAL_MS)
        }
    }

    // =============================================================================
    // SIMULATION CONFIGURATION
    // =============================================================================

    /// Ranges and shapes for the synthesized transfer activity
    pub mod simulation {
        /// Half-width of the uniform net-flow delta range, in POL.
        /// Each sample is drawn from [-NET_FLOW_DELTA_POL, +NET_FLOW_DELTA_POL).
        pub const NET_FLOW_DELTA_POL: f64 = 50_000.0;

        /// Smallest synthesized transfer amount, in whole POL (inclusive).
        pub const MIN_TRANSFER_AMOUNT_POL: u64 = 1_000;

        /// Largest synthesized transfer amount, in whole POL (exclusive).
        pub const MAX_TRANSFER_AMOUNT_POL: u64 = 101_000;

        /// Number of hex characters in a synthesized source address (sans 0x).
        pub const ADDRESS_HEX_CHARS: usize = 40;

        /// Number of hex characters in a synthesized transaction hash (sans 0x).
        pub const TX_HASH_HEX_CHARS: usize = 64;

        /// Destination addresses for synthesized transfers. Every fabricated
        /// transfer lands on one of these known exchange hot wallets.
        pub const EXCHANGE_ADDRESSES: [&str; 3] = [
            "0xF977814e90dA44bFA03b6295A0616a897441aceC",
            "0xe7804c37c13166fF0b37F5aE0BB07A3aEbb6e245",
            "0x505e71695E9bc45943c58adEC1650577BcA68fD9",
        ];
    }
}
