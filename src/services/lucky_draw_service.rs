use crate::error::{AppError, AppResult};
use crate::game::{LUCKY_DRAW_ENTRY_PRICE_CENTS, LUCKY_DRAW_ITEMS, find_item};
use crate::models::{
    LuckyDrawEntry, LuckyDrawEntryQuery, LuckyDrawHistoryResponse, LuckyDrawSummary,
    LuckyItemResponse, NotificationKind, Outcome, PaginatedResponse, PaginationParams,
    PlaceBetRequest, PlaceBetResponse,
};
use crate::services::{GameStore, NotificationService};

#[derive(Clone)]
pub struct LuckyDrawService {
    store: GameStore,
    notifications: NotificationService,
}

impl LuckyDrawService {
    pub fn new(store: GameStore, notifications: NotificationService) -> Self {
        Self {
            store,
            notifications,
        }
    }

    pub fn list_items(&self) -> Vec<LuckyItemResponse> {
        LUCKY_DRAW_ITEMS.iter().map(Into::into).collect()
    }

    /// Enter one draw:
    /// 1. the item must be picked and exist in the catalog
    /// 2. the wallet must cover the entry price
    /// 3. no other play may be waiting on its draw
    pub async fn place_bet(&self, request: PlaceBetRequest) -> AppResult<PlaceBetResponse> {
        let symbol = request.item.trim();
        if symbol.is_empty() {
            return Err(AppError::ValidationError(
                "Please select an item to join the draw".to_string(),
            ));
        }
        let item = find_item(symbol)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown item: {symbol}")))?;

        self.store.try_begin_play(LUCKY_DRAW_ENTRY_PRICE_CENTS).await?;
        let outcome = self.store.place_lucky_draw_bet(item.symbol).await;

        if outcome.is_winner {
            self.notifications
                .push(
                    NotificationKind::Win,
                    "Lucky Draw Winner! 🎉",
                    format!(
                        "{} came up! ₵{:.2} has been credited to your wallet.",
                        item.symbol,
                        outcome.record.payout_cents as f64 / 100.0
                    ),
                )
                .await;
        }

        Ok(PlaceBetResponse {
            entry: outcome.record,
            is_winner: outcome.is_winner,
            balance_cents: self.store.balance().await,
        })
    }

    /// Newest first, with win statistics over the whole history.
    pub async fn list_entries(&self, query: &LuckyDrawEntryQuery) -> LuckyDrawHistoryResponse {
        let params = PaginationParams::new(query.page, query.per_page);
        let (entries, summary) = self
            .store
            .read(|state| {
                let entries: Vec<LuckyDrawEntry> = state
                    .lucky_draw_entries
                    .iter()
                    .rev()
                    .filter(|e| query.result.is_none_or(|r| e.result == r))
                    .cloned()
                    .collect();
                (entries, summarize(&state.lucky_draw_entries))
            })
            .await;

        LuckyDrawHistoryResponse {
            entries: PaginatedResponse::paginate(entries, &params),
            summary,
        }
    }
}

fn summarize(entries: &[LuckyDrawEntry]) -> LuckyDrawSummary {
    let wins = entries.iter().filter(|e| e.result == Outcome::Won).count();
    let win_rate = if entries.is_empty() {
        0
    } else {
        ((wins as f64 / entries.len() as f64) * 100.0).round() as u32
    };
    LuckyDrawSummary {
        total_entries: entries.len(),
        wins,
        win_rate,
        total_payout_cents: entries.iter().map(|e| e.payout_cents).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::game_store::tests::store_with;
    use crate::utils::ScriptedRandom;

    fn service(units: Vec<f64>) -> LuckyDrawService {
        LuckyDrawService::new(
            store_with(ScriptedRandom::units(units)),
            NotificationService::new(),
        )
    }

    fn bet(item: &str) -> PlaceBetRequest {
        PlaceBetRequest {
            item: item.to_string(),
        }
    }

    #[test]
    fn test_catalog_listing() {
        let items = service(vec![0.0]).list_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].symbol, "🍎");
        assert_eq!(items[7].payout_cents, 4_000);
    }

    #[tokio::test]
    async fn test_bet_on_apple_wins() {
        let service = service(vec![0.0]);
        let response = service.place_bet(bet("🍎")).await.unwrap();
        assert!(response.is_winner);
        assert_eq!(response.entry.payout_cents, 800);
        assert_eq!(response.balance_cents, 100_600);
        assert_eq!(service.notifications.list().await.unread_count, 2);
    }

    #[tokio::test]
    async fn test_bet_validation() {
        let service = service(vec![0.0]);
        assert!(matches!(
            service.place_bet(bet("  ")).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.place_bet(bet("🍍")).await,
            Err(AppError::ValidationError(_))
        ));

        service.store.update_balance(-99_900).await;
        assert!(matches!(
            service.place_bet(bet("🍎")).await,
            Err(AppError::InsufficientBalance(_))
        ));
        assert!(service.store.snapshot().await.lucky_draw_entries.is_empty());
    }

    #[tokio::test]
    async fn test_history_summary() {
        // Apple, then strawberry, then apple again.
        let service = service(vec![0.0, 0.99, 0.0]);
        service.place_bet(bet("🍎")).await.unwrap();
        service.place_bet(bet("🍎")).await.unwrap();
        service.place_bet(bet("🍌")).await.unwrap();

        let history = service
            .list_entries(&LuckyDrawEntryQuery {
                page: None,
                per_page: None,
                result: None,
            })
            .await;
        assert_eq!(history.summary.total_entries, 3);
        assert_eq!(history.summary.wins, 1);
        assert_eq!(history.summary.win_rate, 33);
        assert_eq!(history.summary.total_payout_cents, 800);
        assert_eq!(history.entries.data[0].selected_item, "🍌");

        let won = service
            .list_entries(&LuckyDrawEntryQuery {
                page: None,
                per_page: None,
                result: Some(Outcome::Won),
            })
            .await;
        assert_eq!(won.entries.total, 1);
    }
}
