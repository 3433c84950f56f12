use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::catalog::{LUCKY_DRAW_ENTRY_PRICE_CENTS, find_item};
use super::payout::{count_matches, jackpot_payout_cents, ticket_price_cents};
use crate::models::{
    JackpotTicket, LuckyDrawEntry, Outcome, Transaction, TransactionStatus, TransactionType,
};

/// Balance, histories and ledger of the demo session.
///
/// Every transition is a plain method taking the already-drawn result and the
/// current time, so the async container only adds waiting, randomness and
/// persistence around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub balance_cents: i64,
    pub jackpot_tickets: Vec<JackpotTicket>,
    pub lucky_draw_entries: Vec<LuckyDrawEntry>,
    pub transactions: Vec<Transaction>,
    /// Set while a play waits on its simulated draw
    pub processing: bool,
}

impl GameState {
    pub fn new(starting_balance_cents: i64) -> Self {
        Self {
            balance_cents: starting_balance_cents.max(0),
            jackpot_tickets: Vec::new(),
            lucky_draw_entries: Vec::new(),
            transactions: Vec::new(),
            processing: false,
        }
    }

    /// `balance := max(0, balance + delta)`. Overdrafts are clamped, not rejected.
    pub fn update_balance(&mut self, delta_cents: i64) -> i64 {
        self.balance_cents = self.balance_cents.saturating_add(delta_cents).max(0);
        self.balance_cents
    }

    /// Appends a completed ledger row. The amount sign is not checked against the kind.
    pub fn add_transaction(
        &mut self,
        kind: TransactionType,
        amount_cents: i64,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Transaction {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            description: description.into(),
            date: now,
            status: TransactionStatus::Completed,
        };
        self.transactions.push(transaction.clone());
        transaction
    }

    /// Records a jackpot ticket against `winning` and books its stake and payout.
    pub fn settle_jackpot(
        &mut self,
        chosen: &[u8],
        winning: Vec<u8>,
        multiplier: u32,
        now: DateTime<Utc>,
    ) -> JackpotTicket {
        let mut numbers = chosen.to_vec();
        numbers.sort_unstable();
        let mut winning_numbers = winning;
        winning_numbers.sort_unstable();

        let match_count = count_matches(&numbers, &winning_numbers);
        let payout_cents = jackpot_payout_cents(match_count, multiplier);
        let price_cents = ticket_price_cents(multiplier);
        let is_winner = payout_cents > 0;

        let ticket = JackpotTicket {
            id: Uuid::new_v4(),
            numbers,
            winning_numbers,
            draw_date: now.date_naive(),
            price_cents,
            status: Outcome::from_win(is_winner),
            match_count,
            payout_cents,
            purchased_at: now,
            multiplier,
        };
        self.jackpot_tickets.push(ticket.clone());

        self.update_balance(-price_cents);
        self.add_transaction(
            TransactionType::Bet,
            price_cents,
            format!("Jackpot Ticket Purchase ({multiplier}x)"),
            now,
        );

        if is_winner {
            self.update_balance(payout_cents);
            self.add_transaction(
                TransactionType::Win,
                payout_cents,
                format!("Jackpot Win - {match_count} matches ({multiplier}x)"),
                now,
            );
        }

        ticket
    }

    /// Records a lucky-draw entry. Wins iff `selected` equals `winning`.
    pub fn settle_lucky_draw(
        &mut self,
        selected: &str,
        winning: &str,
        now: DateTime<Utc>,
    ) -> LuckyDrawEntry {
        let item = find_item(selected);
        let is_winner = selected == winning;
        let payout_cents = match item {
            Some(item) if is_winner => item.payout_cents,
            _ => 0,
        };

        let entry = LuckyDrawEntry {
            id: Uuid::new_v4(),
            selected_item: selected.to_string(),
            winning_item: winning.to_string(),
            drawn_at: now,
            price_cents: LUCKY_DRAW_ENTRY_PRICE_CENTS,
            result: Outcome::from_win(is_winner),
            payout_cents,
            multiplier: item.map(|i| i.multiplier).unwrap_or("0x").to_string(),
        };
        self.lucky_draw_entries.push(entry.clone());

        self.update_balance(-LUCKY_DRAW_ENTRY_PRICE_CENTS);
        self.add_transaction(
            TransactionType::Bet,
            LUCKY_DRAW_ENTRY_PRICE_CENTS,
            "Lucky Draw Entry",
            now,
        );

        if is_winner {
            self.update_balance(payout_cents);
            self.add_transaction(
                TransactionType::Win,
                payout_cents,
                format!("Lucky Draw Win - {selected}"),
                now,
            );
        }

        entry
    }

    pub fn total_by_kind(&self, kind: TransactionType) -> i64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount_cents)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_balance_clamps_at_zero() {
        let mut state = GameState::new(1_000);
        let deltas = [-300, 500, -5_000, 250, -100, -100_000, 40];
        let mut expected = 1_000i64;
        for delta in deltas {
            expected = (expected + delta).max(0);
            assert_eq!(state.update_balance(delta), expected);
            assert!(state.balance_cents >= 0);
        }
        assert_eq!(state.balance_cents, 40);
    }

    #[test]
    fn test_negative_starting_balance_is_clamped() {
        assert_eq!(GameState::new(-5).balance_cents, 0);
    }

    #[test]
    fn test_settle_jackpot_three_matches() {
        let mut state = GameState::new(100_000);
        let ticket = state.settle_jackpot(&[6, 5, 4, 3, 2, 1], vec![9, 8, 7, 3, 2, 1], 1, Utc::now());

        assert_eq!(ticket.numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ticket.winning_numbers, vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(ticket.match_count, 3);
        assert_eq!(ticket.payout_cents, 1_000);
        assert_eq!(ticket.price_cents, 500);
        assert_eq!(ticket.status, Outcome::Won);
        assert_eq!(state.balance_cents, 100_500);
        assert_eq!(state.jackpot_tickets.len(), 1);
        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.transactions[0].kind, TransactionType::Bet);
        assert_eq!(state.transactions[0].description, "Jackpot Ticket Purchase (1x)");
        assert_eq!(state.transactions[1].kind, TransactionType::Win);
        assert_eq!(state.transactions[1].description, "Jackpot Win - 3 matches (1x)");
    }

    #[test]
    fn test_settle_jackpot_loss_books_only_bet() {
        let mut state = GameState::new(100_000);
        let ticket = state.settle_jackpot(&[1, 2, 3, 4, 5, 6], vec![1, 20, 30, 40, 45, 49], 3, Utc::now());

        assert_eq!(ticket.match_count, 1);
        assert_eq!(ticket.payout_cents, 0);
        assert_eq!(ticket.status, Outcome::Lost);
        assert_eq!(ticket.price_cents, 1_500);
        assert_eq!(state.balance_cents, 98_500);
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn test_ledger_grows_by_bet_plus_optional_win() {
        let mut state = GameState::new(100_000);
        let draws = [
            vec![1, 2, 3, 4, 5, 6],
            vec![40, 41, 42, 43, 44, 45],
            vec![1, 2, 10, 11, 12, 13],
            vec![7, 8, 9, 10, 11, 12],
        ];
        let mut previous = 0;
        for (i, winning) in draws.into_iter().enumerate() {
            let ticket = state.settle_jackpot(&[1, 2, 3, 4, 5, 6], winning, (i as u32) + 1, Utc::now());
            let added = state.transactions.len() - previous;
            let expected = if ticket.payout_cents > 0 { 2 } else { 1 };
            assert_eq!(added, expected);
            let bets = state.transactions[previous..]
                .iter()
                .filter(|t| t.kind == TransactionType::Bet)
                .count();
            assert_eq!(bets, 1);
            previous = state.transactions.len();
        }
    }

    #[test]
    fn test_jackpot_payout_scales_with_multiplier() {
        let mut state = GameState::new(0);
        let ticket = state.settle_jackpot(&[1, 2, 3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6], 2, Utc::now());
        assert_eq!(ticket.payout_cents, 10_000_000);
        // Stake was clamped against an empty wallet, then the win credited.
        assert_eq!(state.balance_cents, 10_000_000);
    }

    #[test]
    fn test_settle_lucky_draw_win() {
        let mut state = GameState::new(100_000);
        let entry = state.settle_lucky_draw("🍎", "🍎", Utc::now());

        assert_eq!(entry.result, Outcome::Won);
        assert_eq!(entry.payout_cents, 800);
        assert_eq!(entry.price_cents, 200);
        assert_eq!(entry.multiplier, "4x");
        assert_eq!(state.balance_cents, 100_600);
        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.transactions[1].description, "Lucky Draw Win - 🍎");
    }

    #[test]
    fn test_settle_lucky_draw_loss_and_unknown_item() {
        let mut state = GameState::new(100_000);
        let entry = state.settle_lucky_draw("🍓", "🍌", Utc::now());
        assert_eq!(entry.result, Outcome::Lost);
        assert_eq!(entry.payout_cents, 0);
        assert_eq!(entry.multiplier, "20x");

        let unknown = state.settle_lucky_draw("🍍", "🍎", Utc::now());
        assert_eq!(unknown.multiplier, "0x");
        assert_eq!(state.balance_cents, 99_600);
        assert_eq!(state.transactions.len(), 2);
    }

    #[test]
    fn test_total_by_kind() {
        let mut state = GameState::new(0);
        state.add_transaction(TransactionType::Deposit, 1_000, "a", Utc::now());
        state.add_transaction(TransactionType::Deposit, 500, "b", Utc::now());
        state.add_transaction(TransactionType::Withdraw, 200, "c", Utc::now());
        assert_eq!(state.total_by_kind(TransactionType::Deposit), 1_500);
        assert_eq!(state.total_by_kind(TransactionType::Bet), 0);
    }
}
