use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::GameConfig;
use crate::error::{AppError, AppResult};
use crate::game::{GameState, draw_lucky_item, generate_winning_numbers};
use crate::models::{JackpotTicket, LuckyDrawEntry, Transaction, TransactionType};
use crate::storage::{StateStorage, load_state, save_state};
use crate::utils::{Delay, RandomSource};

/// Result of a play together with its win flag.
#[derive(Debug, Clone)]
pub struct PlayOutcome<T> {
    pub record: T,
    pub is_winner: bool,
}

/// The demo game state container.
///
/// One instance is shared by every request. The two play operations never
/// fail and do not exclude each other: callers that want the "button
/// disabled while drawing" behaviour reserve the slot first with
/// [`GameStore::try_begin_play`]. A play that is dropped before it settles
/// still clears the processing flag. Every state change is written to
/// storage; a failed write is logged and otherwise ignored.
#[derive(Clone)]
pub struct GameStore {
    state: Arc<Mutex<GameState>>,
    rng: Arc<Mutex<Box<dyn RandomSource>>>,
    storage: Arc<dyn StateStorage>,
    delay: Arc<dyn Delay>,
    jackpot_delay: Duration,
    lucky_draw_delay: Duration,
}

impl GameStore {
    pub fn new(
        storage: Arc<dyn StateStorage>,
        rng: Box<dyn RandomSource>,
        delay: Arc<dyn Delay>,
        settings: &GameConfig,
    ) -> Self {
        let state = load_state(storage.as_ref(), settings.starting_balance_cents);
        log::info!(
            "Loaded game state: balance={} tickets={} entries={} transactions={}",
            state.balance_cents,
            state.jackpot_tickets.len(),
            state.lucky_draw_entries.len(),
            state.transactions.len()
        );

        Self {
            state: Arc::new(Mutex::new(state)),
            rng: Arc::new(Mutex::new(rng)),
            storage,
            delay,
            jackpot_delay: settings.jackpot_delay(),
            lucky_draw_delay: settings.lucky_draw_delay(),
        }
    }

    pub async fn snapshot(&self) -> GameState {
        self.state.lock().await.clone()
    }

    /// Runs `f` against the current state without cloning it.
    pub async fn read<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    pub async fn balance(&self) -> i64 {
        self.state.lock().await.balance_cents
    }

    pub async fn is_processing(&self) -> bool {
        self.state.lock().await.processing
    }

    /// Reserves the play slot for a play costing `price_cents`: checks the
    /// balance and sets the processing flag under one lock.
    pub async fn try_begin_play(&self, price_cents: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if state.balance_cents < price_cents {
            return Err(AppError::InsufficientBalance(
                "Please add funds to your wallet".to_string(),
            ));
        }
        if state.processing {
            return Err(AppError::DrawInProgress);
        }
        state.processing = true;
        Ok(())
    }

    pub async fn end_processing(&self) {
        self.state.lock().await.processing = false;
    }

    /// Buys a ticket, waits the jackpot delay, draws and settles it.
    pub async fn purchase_jackpot_ticket(
        &self,
        numbers: &[u8],
        multiplier: u32,
    ) -> PlayOutcome<JackpotTicket> {
        let guard = ProcessingGuard::new(self);
        self.state.lock().await.processing = true;

        self.delay.wait(self.jackpot_delay).await;

        let winning = {
            let mut rng = self.rng.lock().await;
            generate_winning_numbers(rng.as_mut())
        };

        let mut state = self.state.lock().await;
        let ticket = state.settle_jackpot(numbers, winning, multiplier, Utc::now());
        state.processing = false;
        guard.disarm();
        self.persist(&state);

        log::info!(
            "Jackpot ticket {} settled: matches={} payout={} balance={}",
            ticket.id,
            ticket.match_count,
            ticket.payout_cents,
            state.balance_cents
        );

        let is_winner = ticket.payout_cents > 0;
        PlayOutcome {
            record: ticket,
            is_winner,
        }
    }

    /// Enters the lucky draw on `item`, waits the draw delay and settles it.
    pub async fn place_lucky_draw_bet(&self, item: &str) -> PlayOutcome<LuckyDrawEntry> {
        let guard = ProcessingGuard::new(self);
        self.state.lock().await.processing = true;

        self.delay.wait(self.lucky_draw_delay).await;

        let winning = {
            let mut rng = self.rng.lock().await;
            draw_lucky_item(rng.as_mut())
        };

        let mut state = self.state.lock().await;
        let entry = state.settle_lucky_draw(item, winning.symbol, Utc::now());
        state.processing = false;
        guard.disarm();
        self.persist(&state);

        log::info!(
            "Lucky draw {} settled: picked={} drawn={} payout={} balance={}",
            entry.id,
            entry.selected_item,
            entry.winning_item,
            entry.payout_cents,
            state.balance_cents
        );

        let is_winner = entry.selected_item == entry.winning_item;
        PlayOutcome {
            record: entry,
            is_winner,
        }
    }

    pub async fn add_transaction(
        &self,
        kind: TransactionType,
        amount_cents: i64,
        description: impl Into<String>,
    ) -> Transaction {
        let mut state = self.state.lock().await;
        let transaction = state.add_transaction(kind, amount_cents, description, Utc::now());
        self.persist(&state);
        transaction
    }

    pub async fn update_balance(&self, delta_cents: i64) -> i64 {
        let mut state = self.state.lock().await;
        let balance = state.update_balance(delta_cents);
        self.persist(&state);
        balance
    }

    /// Balance change plus its ledger row under one lock. A debit larger
    /// than the balance is refused and leaves the state untouched.
    pub async fn record_wallet_movement(
        &self,
        kind: TransactionType,
        delta_cents: i64,
        description: impl Into<String>,
    ) -> AppResult<(Transaction, i64)> {
        let mut state = self.state.lock().await;
        if delta_cents < 0 && -delta_cents > state.balance_cents {
            return Err(AppError::InsufficientBalance(
                "Withdrawal exceeds your balance".to_string(),
            ));
        }
        let balance = state.update_balance(delta_cents);
        let transaction =
            state.add_transaction(kind, delta_cents.abs(), description, Utc::now());
        self.persist(&state);
        Ok((transaction, balance))
    }

    fn persist(&self, state: &GameState) {
        if let Err(e) = save_state(self.storage.as_ref(), state) {
            log::error!("Failed to persist game state: {e}");
        }
    }
}

/// Clears the processing flag if a play is dropped before it settles,
/// e.g. when the client disconnects during the draw delay.
struct ProcessingGuard {
    store: Option<GameStore>,
}

impl ProcessingGuard {
    fn new(store: &GameStore) -> Self {
        Self {
            store: Some(store.clone()),
        }
    }

    fn disarm(mut self) {
        self.store = None;
    }
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        let Some(store) = self.store.take() else {
            return;
        };
        log::warn!("Play dropped before settling, clearing processing flag");

        if let Ok(mut state) = store.state.try_lock() {
            state.processing = false;
            return;
        }
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { store.end_processing().await });
            }
            Err(_) => log::error!("No runtime available to clear processing flag"),
        }
    }
}
