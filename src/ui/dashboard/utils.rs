//! Dashboard utility functions
//!
//! Contains display formatting helpers used across dashboard components

use chrono::{DateTime, Utc};

/// Format a POL amount with a sign prefix and K/M/B scaling.
/// Scaled digits truncate toward zero, so 999,999 renders as "+999.9K POL".
pub fn format_token_amount(amount_pol: f64) -> String {
    let sign = if amount_pol >= 0.0 { '+' } else { '-' };
    let value = amount_pol.abs();

    if value < 1_000.0 {
        format!("{sign}{:.0} POL", truncate(value, 0))
    } else if value < 1_000_000.0 {
        format!("{sign}{:.1}K POL", truncate(value / 1_000.0, 1))
    } else if value < 1_000_000_000.0 {
        format!("{sign}{:.2}M POL", truncate(value / 1_000_000.0, 2))
    } else {
        format!("{sign}{:.2}B POL", truncate(value / 1_000_000_000.0, 2))
    }
}

fn truncate(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).floor() / scale
}

/// Shorten an address to its first 6 and last 4 characters.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Shorten a transaction hash to its first 10 and last 8 characters.
pub fn shorten_hash(hash: &str) -> String {
    if hash.len() <= 18 {
        return hash.to_string();
    }
    format!("{}...{}", &hash[..10], &hash[hash.len() - 8..])
}

/// Format the last-update clock the way the dashboard displays it,
/// e.g. "Aug 07, 2025, 02:03:22 PM UTC".
pub fn format_clock_timestamp(now: DateTime<Utc>) -> String {
    now.format("%b %d, %Y, %I:%M:%S %p UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn amount_formatting_boundaries() {
        assert_eq!(format_token_amount(999.0), "+999 POL");
        assert_eq!(format_token_amount(1_000.0), "+1.0K POL");
        assert_eq!(format_token_amount(999_999.0), "+999.9K POL");
        assert_eq!(format_token_amount(1_000_000.0), "+1.00M POL");
        assert_eq!(format_token_amount(-1_000_000.0), "-1.00M POL");
        assert_eq!(format_token_amount(1_000_000_000.0), "+1.00B POL");
    }

    #[test]
    fn amount_formatting_sign_follows_value() {
        assert_eq!(format_token_amount(0.0), "+0 POL");
        assert_eq!(format_token_amount(-999.0), "-999 POL");
        assert_eq!(format_token_amount(-45_200.0), "-45.2K POL");
    }

    #[test]
    fn shortens_known_exchange_address() {
        assert_eq!(
            shorten_address("0xF977814e90dA44bFA03b6295A0616a897441aceC"),
            "0xF977...aceC"
        );
    }

    #[test]
    fn shortened_hash_is_21_chars() {
        let hash = format!("0x{}", "ab".repeat(32));
        assert_eq!(hash.len(), 66);
        let short = shorten_hash(&hash);
        assert_eq!(short.len(), 21);
        assert_eq!(&short[..10], &hash[..10]);
        assert_eq!(&short[short.len() - 8..], &hash[hash.len() - 8..]);
    }

    #[test]
    fn short_inputs_pass_through_unshortened() {
        assert_eq!(shorten_address("0xabc"), "0xabc");
        assert_eq!(shorten_hash("0xabc"), "0xabc");
    }

    #[test]
    fn clock_format_matches_display_contract() {
        let t = Utc.with_ymd_and_hms(2025, 8, 7, 14, 3, 22).unwrap();
        assert_eq!(format_clock_timestamp(t), "Aug 07, 2025, 02:03:22 PM UTC");
    }

    #[test]
    fn clock_format_is_stable_within_a_second() {
        let t = Utc.with_ymd_and_hms(2025, 8, 7, 0, 0, 5).unwrap();
        let with_millis = t + chrono::Duration::milliseconds(750);
        assert_eq!(format_clock_timestamp(t), format_clock_timestamp(with_millis));
        assert_eq!(format_clock_timestamp(t), "Aug 07, 2025, 12:00:05 AM UTC");
    }
}
