use std::collections::BTreeSet;

use super::catalog::{LUCKY_DRAW_ITEMS, LuckyItem};
use super::payout::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use crate::utils::RandomSource;

/// Draws 6 distinct numbers in 1..=49 by rejection sampling, ascending.
pub fn generate_winning_numbers(rng: &mut dyn RandomSource) -> Vec<u8> {
    let mut numbers = BTreeSet::new();
    while numbers.len() < NUMBERS_PER_TICKET {
        let n = rng.next_in_range(u32::from(MIN_NUMBER), u32::from(MAX_NUMBER));
        numbers.insert(n as u8);
    }
    numbers.into_iter().collect()
}

/// Cumulative-distribution pick. `unit` is uniform in `[0, 1)` and is scaled
/// by the total weight, so weights need not sum to 1. Returns the first item
/// whose running weight exceeds the target; rounding at the very top falls
/// back to the last item with positive weight.
pub fn weighted_pick<T>(items: &[(T, f64)], unit: f64) -> Option<&T> {
    let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return None;
    }

    let target = unit.clamp(0.0, 1.0) * total;
    let mut cumulative = 0.0;
    for (item, weight) in items {
        if *weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        if target < cumulative {
            return Some(item);
        }
    }

    items
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map(|(item, _)| item)
}

/// Weighted draw over the fixed catalog.
pub fn draw_lucky_item(rng: &mut dyn RandomSource) -> &'static LuckyItem {
    let weighted: Vec<(&'static LuckyItem, f64)> =
        LUCKY_DRAW_ITEMS.iter().map(|item| (item, item.weight)).collect();
    weighted_pick(&weighted, rng.next_unit())
        .copied()
        .unwrap_or(&LUCKY_DRAW_ITEMS[0])
}
