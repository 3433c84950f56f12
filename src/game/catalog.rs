/// Fixed item of the lucky-draw catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckyItem {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Probability weight of being drawn
    pub weight: f64,
    /// Display label of the payout ratio
    pub multiplier: &'static str,
    pub payout_cents: i64,
}

/// Price of one lucky-draw entry. Not scaled by any multiplier.
pub const LUCKY_DRAW_ENTRY_PRICE_CENTS: i64 = 200;

pub static LUCKY_DRAW_ITEMS: [LuckyItem; 8] = [
    LuckyItem {
        symbol: "🍎",
        name: "Apple",
        weight: 0.25,
        multiplier: "4x",
        payout_cents: 800,
    },
    LuckyItem {
        symbol: "🍌",
        name: "Banana",
        weight: 0.20,
        multiplier: "5x",
        payout_cents: 1000,
    },
    LuckyItem {
        symbol: "🍇",
        name: "Grapes",
        weight: 0.15,
        multiplier: "6x",
        payout_cents: 1200,
    },
    LuckyItem {
        symbol: "🍒",
        name: "Cherry",
        weight: 0.12,
        multiplier: "8x",
        payout_cents: 1600,
    },
    LuckyItem {
        symbol: "🥝",
        name: "Kiwi",
        weight: 0.10,
        multiplier: "10x",
        payout_cents: 2000,
    },
    LuckyItem {
        symbol: "🍊",
        name: "Orange",
        weight: 0.08,
        multiplier: "12x",
        payout_cents: 2400,
    },
    LuckyItem {
        symbol: "🥭",
        name: "Mango",
        weight: 0.06,
        multiplier: "15x",
        payout_cents: 3000,
    },
    LuckyItem {
        symbol: "🍓",
        name: "Strawberry",
        weight: 0.04,
        multiplier: "20x",
        payout_cents: 4000,
    },
];

pub fn find_item(symbol: &str) -> Option<&'static LuckyItem> {
    LUCKY_DRAW_ITEMS.iter().find(|item| item.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = LUCKY_DRAW_ITEMS.iter().map(|i| i.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_item() {
        let apple = find_item("🍎").unwrap();
        assert_eq!(apple.payout_cents, 800);
        assert_eq!(apple.multiplier, "4x");
        assert!(find_item("🍍").is_none());
        assert!(find_item("").is_none());
    }
}
