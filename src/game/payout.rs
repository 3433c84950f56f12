//! Jackpot pricing and the payout table.

use std::collections::HashSet;

pub const JACKPOT_BASE_PRICE_CENTS: i64 = 500;
pub const NUMBERS_PER_TICKET: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 49;

/// `(matches, base payout in cents)` for a 1x ticket. Anything not listed pays 0.
pub const JACKPOT_PAYOUT_TABLE: [(u8, i64); 5] = [
    (6, 5_000_000),
    (5, 100_000),
    (4, 5_000),
    (3, 1_000),
    (2, 500),
];

pub fn base_payout_cents(matches: u8) -> i64 {
    JACKPOT_PAYOUT_TABLE
        .iter()
        .find(|(m, _)| *m == matches)
        .map(|(_, payout)| *payout)
        .unwrap_or(0)
}

pub fn jackpot_payout_cents(matches: u8, multiplier: u32) -> i64 {
    base_payout_cents(matches) * i64::from(multiplier)
}

pub fn ticket_price_cents(multiplier: u32) -> i64 {
    JACKPOT_BASE_PRICE_CENTS * i64::from(multiplier)
}

/// Size of the intersection of the two number sets.
pub fn count_matches(chosen: &[u8], winning: &[u8]) -> u8 {
    let winning: HashSet<u8> = winning.iter().copied().collect();
    let chosen: HashSet<u8> = chosen.iter().copied().collect();
    chosen.intersection(&winning).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_table() {
        assert_eq!(jackpot_payout_cents(6, 1), 5_000_000);
        assert_eq!(jackpot_payout_cents(5, 1), 100_000);
        assert_eq!(jackpot_payout_cents(4, 1), 5_000);
        assert_eq!(jackpot_payout_cents(3, 1), 1_000);
        assert_eq!(jackpot_payout_cents(2, 1), 500);
        assert_eq!(jackpot_payout_cents(1, 1), 0);
        assert_eq!(jackpot_payout_cents(0, 10), 0);
    }

    #[test]
    fn test_multiplier_scales_price_and_payout() {
        assert_eq!(ticket_price_cents(1), 500);
        assert_eq!(ticket_price_cents(5), 2_500);
        assert_eq!(jackpot_payout_cents(3, 5), 5_000);
    }

    #[test]
    fn test_count_matches() {
        assert_eq!(count_matches(&[1, 2, 3, 4, 5, 6], &[1, 2, 3, 7, 8, 9]), 3);
        assert_eq!(count_matches(&[1, 2, 3, 4, 5, 6], &[6, 5, 4, 3, 2, 1]), 6);
        assert_eq!(count_matches(&[10, 20, 30, 40, 45, 49], &[1, 2, 3, 4, 5, 6]), 0);
    }
}
