//! Persisted session layout: four independent JSON slices, no versioning.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::AppResult;
use crate::game::GameState;

pub const JACKPOT_TICKETS_KEY: &str = "betbliss_jackpot_tickets";
pub const LUCKY_DRAW_ENTRIES_KEY: &str = "betbliss_lucky_draw_entries";
pub const TRANSACTIONS_KEY: &str = "betbliss_transactions";
pub const BALANCE_KEY: &str = "betbliss_balance";

/// Key/value store for the JSON-encoded slices.
pub trait StateStorage: Send + Sync {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
}

/// File storage when a data directory is configured, memory otherwise.
pub fn create_storage(config: &StorageConfig) -> AppResult<Arc<dyn StateStorage>> {
    match config.data_dir.as_deref() {
        Some(dir) => {
            log::info!("Persisting game state under {dir}");
            Ok(Arc::new(FileStorage::new(dir)?))
        }
        None => {
            log::info!("No data directory configured, game state is kept in memory");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}

/// Missing or unreadable slices fall back to their defaults.
pub fn load_state(storage: &dyn StateStorage, starting_balance_cents: i64) -> GameState {
    let mut state = GameState::new(starting_balance_cents);
    state.jackpot_tickets = load_slice(storage, JACKPOT_TICKETS_KEY, Vec::new());
    state.lucky_draw_entries = load_slice(storage, LUCKY_DRAW_ENTRIES_KEY, Vec::new());
    state.transactions = load_slice(storage, TRANSACTIONS_KEY, Vec::new());
    state.balance_cents = load_slice(storage, BALANCE_KEY, starting_balance_cents).max(0);
    state
}

pub fn save_state(storage: &dyn StateStorage, state: &GameState) -> AppResult<()> {
    save_slice(storage, JACKPOT_TICKETS_KEY, &state.jackpot_tickets)?;
    save_slice(storage, LUCKY_DRAW_ENTRIES_KEY, &state.lucky_draw_entries)?;
    save_slice(storage, TRANSACTIONS_KEY, &state.transactions)?;
    save_slice(storage, BALANCE_KEY, &state.balance_cents)?;
    Ok(())
}

fn load_slice<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str, default: T) -> T {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            log::warn!("Failed to read {key}, using default: {e}");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Malformed {key}, using default: {e}");
            default
        }
    }
}

fn save_slice<T: Serialize + ?Sized>(
    storage: &dyn StateStorage,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.write(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn played_state() -> GameState {
        let mut state = GameState::new(100_000);
        state.settle_jackpot(&[1, 2, 3, 4, 5, 6], vec![1, 2, 3, 7, 8, 9], 1, Utc::now());
        state.settle_jackpot(&[10, 11, 12, 13, 14, 15], vec![1, 2, 3, 7, 8, 9], 2, Utc::now());
        state.settle_lucky_draw("🍎", "🍎", Utc::now());
        state.settle_lucky_draw("🍌", "🍇", Utc::now());
        state
    }

    #[test]
    fn test_round_trip_restores_every_slice() {
        let storage = MemoryStorage::new();
        let state = played_state();
        save_state(&storage, &state).unwrap();

        let restored = load_state(&storage, 100_000);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_missing_slices_use_defaults() {
        let storage = MemoryStorage::new();
        let state = load_state(&storage, 100_000);
        assert_eq!(state, GameState::new(100_000));
    }

    #[test]
    fn test_malformed_slices_use_defaults() {
        let storage = MemoryStorage::new();
        storage.write(JACKPOT_TICKETS_KEY, "{not json").unwrap();
        storage.write(TRANSACTIONS_KEY, "42").unwrap();
        storage.write(BALANCE_KEY, "\"lots\"").unwrap();
        storage.write(LUCKY_DRAW_ENTRIES_KEY, "[]").unwrap();

        let state = load_state(&storage, 100_000);
        assert!(state.jackpot_tickets.is_empty());
        assert!(state.transactions.is_empty());
        assert_eq!(state.balance_cents, 100_000);
    }

    #[test]
    fn test_slices_are_independent() {
        let storage = MemoryStorage::new();
        storage.write(BALANCE_KEY, "2500").unwrap();
        let state = load_state(&storage, 100_000);
        assert_eq!(state.balance_cents, 2_500);
        assert!(state.transactions.is_empty());
    }
}
