//! Synthesis of pseudo-random transfer activity
//!
//! All randomness flows through a seedable generator so tests can assert
//! exact outputs.

use crate::consts::cli_consts::simulation;
use crate::events::TokenTransfer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

pub struct TransferGenerator {
    rng: StdRng,
}

impl TransferGenerator {
    /// Seeded for reproducible output, or from OS entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draws a net-flow delta uniformly from [-50 000, +50 000) POL.
    pub fn next_net_flow_delta(&mut self) -> f64 {
        self.rng
            .gen_range(-simulation::NET_FLOW_DELTA_POL..simulation::NET_FLOW_DELTA_POL)
    }

    /// Synthesizes one transfer: a fresh 40-hex source address, a destination
    /// from the exchange allow-list, a fresh 64-hex transaction hash, and a
    /// whole-POL amount in [1 000, 101 000).
    pub fn next_transfer(&mut self) -> TokenTransfer {
        let from_address = self.random_hex_string(simulation::ADDRESS_HEX_CHARS);
        let to_index = self.rng.gen_range(0..simulation::EXCHANGE_ADDRESSES.len());
        let transaction_hash = self.random_hex_string(simulation::TX_HASH_HEX_CHARS);
        let amount = self.rng.gen_range(
            simulation::MIN_TRANSFER_AMOUNT_POL..simulation::MAX_TRANSFER_AMOUNT_POL,
        );

        TokenTransfer {
            transaction_hash,
            from_address,
            to_address: simulation::EXCHANGE_ADDRESSES[to_index].to_string(),
            amount_pol: amount as f64,
            age_label: "just now".to_string(),
        }
    }

    fn random_hex_string(&mut self, hex_chars: usize) -> String {
        let mut out = String::with_capacity(2 + hex_chars);
        out.push_str("0x");
        for _ in 0..hex_chars {
            out.push(HEX_CHARS[self.rng.gen_range(0..HEX_CHARS.len())] as char);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_string(s: &str, expected_chars: usize) -> bool {
        s.len() == 2 + expected_chars
            && s.starts_with("0x")
            && s[2..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn destination_is_always_on_the_allow_list() {
        let mut generator = TransferGenerator::new(Some(7));
        for _ in 0..100 {
            let transfer = generator.next_transfer();
            assert!(
                simulation::EXCHANGE_ADDRESSES
                    .contains(&transfer.to_address.as_str()),
                "unexpected destination {}",
                transfer.to_address
            );
        }
    }

    #[test]
    fn source_address_and_hash_have_expected_shape() {
        let mut generator = TransferGenerator::new(Some(7));
        let transfer = generator.next_transfer();
        assert!(is_hex_string(&transfer.from_address, 40));
        assert!(is_hex_string(&transfer.transaction_hash, 64));
        assert_eq!(transfer.transaction_hash.len(), 66);
    }

    #[test]
    fn amounts_stay_in_range() {
        let mut generator = TransferGenerator::new(Some(42));
        for _ in 0..100 {
            let transfer = generator.next_transfer();
            assert!(transfer.amount_pol >= 1_000.0);
            assert!(transfer.amount_pol < 101_000.0);
            assert_eq!(transfer.amount_pol.fract(), 0.0);
        }
    }

    #[test]
    fn deltas_stay_in_range() {
        let mut generator = TransferGenerator::new(Some(42));
        for _ in 0..100 {
            let delta = generator.next_net_flow_delta();
            assert!(delta >= -50_000.0);
            assert!(delta < 50_000.0);
        }
    }

    #[test]
    fn same_seed_produces_same_sequence() {
        let mut a = TransferGenerator::new(Some(99));
        let mut b = TransferGenerator::new(Some(99));
        assert_eq!(a.next_net_flow_delta(), b.next_net_flow_delta());
        let ta = a.next_transfer();
        let tb = b.next_transfer();
        assert_eq!(ta.transaction_hash, tb.transaction_hash);
        assert_eq!(ta.from_address, tb.from_address);
        assert_eq!(ta.to_address, tb.to_address);
        assert_eq!(ta.amount_pol, tb.amount_pol);
    }

    #[test]
    fn fresh_source_addresses_per_transfer() {
        let mut generator = TransferGenerator::new(Some(3));
        let first = generator.next_transfer();
        let second = generator.next_transfer();
        assert_ne!(first.from_address, second.from_address);
    }
}
